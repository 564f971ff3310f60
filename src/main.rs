// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use acmatch::report::{edge_list, to_dot, DotOptions};
use acmatch::{
    generate, source, Automaton, AutomatonStats, BuildOptions, ExactAlgorithm, StoreKind,
};

mod cli;
use cli::display::{
    dim, format_size, pad_left, pad_right, row, section_bot, section_mid, section_top, slowdown,
    timing_ms, title_box, verdict,
};
use cli::{Cli, Commands, GenerateKind, SizingArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `ACMATCH_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env("ACMATCH_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Count {
            dict,
            text,
            verbose,
            json,
            sizing,
        } => run_count(&dict, &text, verbose, json, &sizing),
        Commands::Matches {
            dict,
            text,
            limit,
            sizing,
        } => run_matches(&dict, &text, limit, &sizing),
        Commands::Dot {
            dict,
            no_failure,
            root_failure,
        } => {
            let ac = load_automaton(&dict, None)?.1;
            let options = DotOptions {
                failure_links: !no_failure,
                root_failure_links: root_failure,
            };
            print!("{}", to_dot(&ac, options));
            Ok(())
        }
        Commands::Generate { kind } => run_generate(kind),
        Commands::Bench {
            dict,
            text,
            words,
            min_len,
            max_len,
            text_len,
            alphabet,
            seed,
            runs,
            sizing,
        } => {
            let (words, text) = match (dict, text) {
                (Some(dict), Some(text)) => (
                    source::read_dictionary(&dict).context("loading dictionary")?,
                    source::read_text(&text).context("loading text")?,
                ),
                _ => {
                    let mut rng = SmallRng::seed_from_u64(seed);
                    (
                        generate::generate_words(&mut rng, words, min_len, max_len, alphabet)?,
                        generate::generate_text(&mut rng, text_len, alphabet)?,
                    )
                }
            };
            run_bench(&words, &text, runs, &sizing)
        }
    }
}

// ============================================================================
// SCAN COMMANDS
// ============================================================================

fn load_automaton(dict: &Path, sizing: Option<&SizingArgs>) -> Result<(Vec<Vec<u8>>, Automaton)> {
    let words = source::read_dictionary(dict).context("loading dictionary")?;
    let total_len = words.iter().map(Vec::len).sum();
    let options = match sizing {
        Some(sizing) => sizing.options(total_len),
        None => BuildOptions::for_total_len(total_len),
    };
    let ac = Automaton::with_options(&words, &options)
        .with_context(|| format!("building automaton for {}", dict.display()))?;
    info!(
        words = words.len(),
        nodes = ac.node_count(),
        "automaton ready"
    );
    Ok((words, ac))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountReport {
    count: usize,
    words: usize,
    text_len: usize,
    scan_ms: f64,
    options: BuildOptions,
    stats: AutomatonStats,
}

fn run_count(
    dict: &Path,
    text: &Path,
    verbose: bool,
    json: bool,
    sizing: &SizingArgs,
) -> Result<()> {
    let (words, ac) = load_automaton(dict, Some(sizing))?;
    let text = source::read_text(text).context("loading text")?;

    let start = Instant::now();
    let count = ac.count_occurrences(&text);
    let scan_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(count, scan_ms, "text scanned");

    let mut out = BufWriter::new(io::stdout().lock());
    if json {
        let total_len = words.iter().map(Vec::len).sum();
        let report = CountReport {
            count,
            words: words.len(),
            text_len: text.len(),
            scan_ms,
            options: sizing.options(total_len),
            stats: ac.stats(),
        };
        serde_json::to_writer_pretty(&mut out, &report).context("writing report")?;
        writeln!(out)?;
    } else {
        if verbose {
            write!(out, "{}", edge_list(ac.trie()))?;
        }
        writeln!(out, "{}", count)?;
    }
    out.flush()?;
    Ok(())
}

fn run_matches(dict: &Path, text: &Path, limit: Option<usize>, sizing: &SizingArgs) -> Result<()> {
    let (_, ac) = load_automaton(dict, Some(sizing))?;
    let text = source::read_text(text).context("loading text")?;

    let mut out = BufWriter::new(io::stdout().lock());
    for m in ac.find_iter(&text).take(limit.unwrap_or(usize::MAX)) {
        writeln!(
            out,
            "{}\t{}\t{}",
            m.start,
            m.end - 1,
            String::from_utf8_lossy(&text[m.start..m.end])
        )?;
    }
    out.flush()?;
    Ok(())
}

fn run_generate(kind: GenerateKind) -> Result<()> {
    let seeded = |seed: Option<u64>| match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut out = BufWriter::new(io::stdout().lock());
    match kind {
        GenerateKind::Words {
            count,
            min_len,
            max_len,
            alphabet,
            seed,
        } => {
            let words =
                generate::generate_words(&mut seeded(seed), count, min_len, max_len, alphabet)?;
            out.write_all(&source::format_dictionary(&words))?;
        }
        GenerateKind::Text {
            len,
            alphabet,
            seed,
        } => {
            let text = generate::generate_text(&mut seeded(seed), len, alphabet)?;
            out.write_all(&text)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

// ============================================================================
// BENCHMARK
// ============================================================================

/// Runs `f` `runs` times (at least once) and keeps the fastest wall time,
/// in milliseconds.
fn best_of<T>(runs: usize, mut f: impl FnMut() -> T) -> (T, f64) {
    let elapsed_ms = |start: Instant| start.elapsed().as_secs_f64() * 1000.0;
    let start = Instant::now();
    let mut value = f();
    let mut best = elapsed_ms(start);
    for _ in 1..runs {
        let start = Instant::now();
        value = f();
        best = best.min(elapsed_ms(start));
    }
    (value, best)
}

struct LayoutRun {
    store: StoreKind,
    nodes: usize,
    buckets: usize,
    build_ms: f64,
    count: usize,
    scan_ms: f64,
}

fn run_bench(words: &[Vec<u8>], text: &[u8], runs: usize, sizing: &SizingArgs) -> Result<()> {
    if runs == 0 {
        bail!("--runs must be at least 1");
    }
    let total_len = words.iter().map(Vec::len).sum();
    let options = sizing.options(total_len);

    // The selected layout comes first and is the reference for the rest.
    let stores = std::iter::once(options.store)
        .chain(StoreKind::ALL.into_iter().filter(|&s| s != options.store));
    let mut layouts = Vec::new();
    for store in stores {
        let options = options.with_store(store);
        let (ac, build_ms) = best_of(runs, || Automaton::with_options(words, &options));
        let ac = ac.with_context(|| format!("building {} automaton", store))?;
        let (count, scan_ms) = best_of(runs, || ac.count_occurrences(text));
        info!(%store, build_ms, scan_ms, "layout timed");
        layouts.push(LayoutRun {
            store,
            nodes: ac.node_count(),
            buckets: ac.stats().trie.buckets,
            build_ms,
            count,
            scan_ms,
        });
    }
    let (expected, scan_ms) = (layouts[0].count, layouts[0].scan_ms);
    let ratio_to = |ms: f64| if scan_ms > 0.0 { ms / scan_ms } else { 0.0 };

    let distinct: BTreeSet<&[u8]> = words
        .iter()
        .map(Vec::as_slice)
        .filter(|w| !w.is_empty())
        .collect();

    title_box("acmatch bench");
    section_top("DATA");
    row(&format!(
        "  dictionary  {} words, {} distinct, {} nodes",
        words.len(),
        distinct.len(),
        layouts[0].nodes
    ));
    row(&format!("  text        {}", format_size(text.len())));
    for layout in &layouts {
        let shape = match layout.store {
            StoreKind::Hash => format!("({} buckets)", layout.buckets),
            StoreKind::Matrix => format!("({} x 256 matrix)", layout.nodes),
        };
        row(&format!(
            "  build {}  {} ms  {}",
            pad_right(layout.store.name(), 6),
            timing_ms(layout.build_ms).trim_start(),
            dim(&shape)
        ));
    }

    section_mid("SCAN (best of runs)");
    row(&format!(
        "  {}{}{}{}",
        pad_right("algorithm", 22),
        pad_left("ms", 10),
        pad_left("ratio", 10),
        pad_left("count", 14)
    ));

    let mut mismatches = Vec::new();
    for layout in &layouts {
        let agrees = layout.count == expected;
        let name = format!("aho-corasick/{}", layout.store);
        row(&format!(
            "  {}{}{}{}  {}",
            pad_right(&name, 22),
            timing_ms(layout.scan_ms),
            slowdown(ratio_to(layout.scan_ms)),
            pad_left(&layout.count.to_string(), 14),
            verdict(agrees)
        ));
        if !agrees {
            mismatches.push(name);
        }
    }
    for algorithm in ExactAlgorithm::ALL {
        let (count, ms) = best_of(runs, || {
            distinct
                .iter()
                .map(|w| algorithm.count(text, w))
                .sum::<usize>()
        });
        let agrees = count == expected;
        if !agrees {
            mismatches.push(algorithm.name().to_string());
        }
        row(&format!(
            "  {}{}{}{}  {}",
            pad_right(algorithm.name(), 22),
            timing_ms(ms),
            slowdown(ratio_to(ms)),
            pad_left(&count.to_string(), 14),
            verdict(agrees)
        ));
    }
    section_bot();

    if !mismatches.is_empty() {
        bail!(
            "counts disagree with the automaton ({}): {}",
            expected,
            mismatches.join(", ")
        );
    }
    Ok(())
}
