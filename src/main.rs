// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use autosuggest::{is_sorted_by_term, read_any, LoadOptions, Suggestions, TermStore};

mod cli;
use cli::display::{self, format_weight, themed, BOLD, CYAN, GRAY, GREEN, RED};
use cli::{Cli, Commands, LoadArgs};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            load,
            prefix,
            limit,
            json,
        } => run_query(&load, &prefix, limit, json),
        Commands::Interactive { load, limit } => run_interactive(&load, limit),
        Commands::Inspect { load } => run_inspect(&load),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn load_store(args: &LoadArgs) -> Result<TermStore> {
    let options = LoadOptions {
        strict: args.strict,
        header: !args.no_header,
    };
    let store = read_any(&args.file, &options)
        .with_context(|| format!("failed to load terms from {}", args.file))?;
    debug!("{}: {} entries", args.file, store.len());
    Ok(store)
}

fn suggest(store: &TermStore, prefix: &str) -> Result<Suggestions> {
    store
        .suggest(prefix)
        .with_context(|| format!("query '{}' failed", prefix))
}

/// `limit == 0` means no limit.
fn shown(suggestions: &Suggestions, limit: usize) -> &[autosuggest::TermEntry] {
    if limit == 0 {
        suggestions.as_slice()
    } else {
        suggestions.top(limit)
    }
}

fn run_query(args: &LoadArgs, prefix: &str, limit: usize, json: bool) -> Result<()> {
    let store = load_store(args)?;
    let suggestions = suggest(&store, prefix)?;

    if json {
        let out = serde_json::to_string_pretty(shown(&suggestions, limit))
            .context("failed to serialize suggestions")?;
        println!("{}", out);
    } else {
        display::print_suggestions(prefix, shown(&suggestions, limit), suggestions.count());
    }
    Ok(())
}

fn run_interactive(args: &LoadArgs, limit: usize) -> Result<()> {
    let store = load_store(args)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    eprintln!(
        "{} {} terms loaded; type a prefix, EOF to quit",
        themed(GREEN, &[BOLD], "ready:"),
        store.len()
    );

    loop {
        print!("{} ", themed(CYAN, &[BOLD], ">"));
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read prefix")?
            == 0
        {
            println!();
            break;
        }

        let prefix = line.trim_end_matches(['\n', '\r']);
        if prefix.is_empty() {
            continue;
        }

        let suggestions = suggest(&store, prefix)?;
        display::print_suggestions(prefix, shown(&suggestions, limit), suggestions.count());
    }

    Ok(())
}

fn run_inspect(args: &LoadArgs) -> Result<()> {
    let store = load_store(args)?;

    display::section_top("TERM STORE");
    display::row(&format!(" file      {}", args.file));
    display::row(&format!(" entries   {}", store.len()));
    display::row(&format!(
        " sorted    {}",
        if is_sorted_by_term(store.entries()) {
            themed(GREEN, &[], "yes")
        } else {
            themed(RED, &[BOLD], "NO")
        }
    ));

    if let (Some(first), Some(last)) = (store.get(0), store.get(store.len().saturating_sub(1))) {
        let (min, max) = store.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), e| {
            (lo.min(e.weight), hi.max(e.weight))
        });
        display::row(&format!(
            " weights   {} .. {}",
            format_weight(min),
            format_weight(max)
        ));
        display::row(&format!(" first     {}", first.term));
        display::row(&format!(" last      {}", last.term));
    } else {
        display::row(&themed(GRAY, &[], " (empty)"));
    }
    display::section_bot();

    Ok(())
}
