use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sfx::index::{stats, SuffixTree, SuffixTreeBuilder, SuffixTreeConfig};
use sfx::output::{self, OccurrenceReport};
use sfx::utils;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use termcolor::{ColorChoice, StandardStream};

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Find every occurrence of a pattern in a text using a suffix tree")]
struct Cli {
    /// TEXT PATTERN, or just PATTERN with --text-file (read both from stdin when omitted)
    #[arg(num_args = 0..=2, value_name = "ARGS")]
    args: Vec<String>,

    /// Read the text to index from a file
    #[arg(short = 'f', long, value_name = "PATH")]
    text_file: Option<PathBuf>,

    /// Print zero-based offsets instead of one-based
    #[arg(short = 'z', long)]
    zero_based: bool,

    /// Print only the number of occurrences
    #[arg(short, long)]
    count: bool,

    /// Print results as JSON (zero-based offsets)
    #[arg(long)]
    json: bool,

    /// Show each match with N bytes of surrounding text
    #[arg(short = 'C', long, value_name = "N")]
    context: Option<usize>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,

    /// Match ASCII letters case-insensitively
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Sentinel byte appended to the text (0-255, 0xNN or one ASCII char)
    #[arg(long, value_parser = parse_sentinel, default_value = "0")]
    sentinel: u8,

    /// Print the tree structure
    #[arg(long)]
    dump: bool,

    /// Print tree statistics
    #[arg(long)]
    stats: bool,

    /// Show a progress bar while building
    #[arg(long)]
    progress: bool,

    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

fn parse_sentinel(s: &str) -> Result<u8, String> {
    utils::parse_byte(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (text, pattern) = resolve_inputs(&cli)?;

    let config = SuffixTreeConfig {
        sentinel: cli.sentinel,
        case_insensitive: cli.ignore_case,
        progress: cli.progress,
    };

    let start = Instant::now();
    let tree = SuffixTreeBuilder::new(config)
        .build(&text)
        .context("Failed to build suffix tree")?;
    let build_time = start.elapsed();

    if cli.verbose {
        eprintln!(
            "sfx: built tree over {} bytes in {:.2?} ({} nodes, {} edges)",
            tree.len(),
            build_time,
            tree.node_count(),
            tree.edge_count()
        );
    }

    if cli.stats {
        stats::show_stats(&tree, Some(build_time))?;
    }

    if cli.dump {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        tree.write_dump(&mut out)?;
        out.flush()?;
    }

    if let Some(pattern) = pattern {
        search(&cli, &tree, &text, &pattern)?;
    }

    Ok(())
}

/// Work out the text and the optional pattern from the arguments
fn resolve_inputs(cli: &Cli) -> Result<(Vec<u8>, Option<Vec<u8>>)> {
    let (text, pattern) = match (&cli.text_file, cli.args.as_slice()) {
        (Some(path), [pattern]) => (utils::read_text_file(path)?, Some(pattern.clone())),
        (Some(path), []) => (utils::read_text_file(path)?, None),
        (Some(_), _) => anyhow::bail!("With --text-file, give only the PATTERN argument"),
        (None, [text, pattern]) => (text.clone().into_bytes(), Some(pattern.clone())),
        (None, [text]) => (text.clone().into_bytes(), None),
        (None, _) => {
            let (text, pattern) = utils::read_stdin_pair()?;
            return Ok((text, Some(pattern)));
        }
    };

    let pattern = pattern.map(String::into_bytes);
    if pattern.is_none() && !cli.dump && !cli.stats {
        anyhow::bail!("Missing PATTERN argument");
    }
    Ok((text, pattern))
}

/// Run one query and print the result in the requested format
fn search(cli: &Cli, tree: &SuffixTree, text: &[u8], pattern: &[u8]) -> Result<()> {
    let start = Instant::now();
    let offsets = tree.find_occurrences_sorted(pattern);

    if cli.verbose {
        eprintln!(
            "sfx: {} occurrence(s) of {:?} in {:.2?}",
            offsets.len(),
            String::from_utf8_lossy(pattern),
            start.elapsed()
        );
    }

    let stdout = io::stdout();
    if cli.json {
        output::print_json(&mut stdout.lock(), &OccurrenceReport::new(pattern, offsets))?;
    } else if cli.count {
        writeln!(stdout.lock(), "{}", offsets.len())?;
    } else if let Some(context) = cli.context {
        let mut out = StandardStream::stdout(cli.color.into());
        output::print_context_matches(
            &mut out,
            text,
            &offsets,
            pattern.len(),
            context,
            !cli.zero_based,
        )?;
    } else {
        output::print_offsets(&mut stdout.lock(), &offsets, !cli.zero_based)?;
    }

    Ok(())
}
