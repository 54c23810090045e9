use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zzz::util::{io as zio, string};
use zzz::{enumerate, filter, iota_by, take, Generator, TimerConfig, TimerThread};

#[derive(Parser, Debug)]
#[command(name = "zzz", about = "Drive lazy generator pipelines from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print an integer range, optionally filtered and trimmed.
    Range {
        /// First value.
        #[arg(allow_negative_numbers = true)]
        start: i64,
        /// Exclusive bound.
        #[arg(allow_negative_numbers = true)]
        stop: i64,
        /// Increment between values (may be negative).
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        step: i64,
        /// Keep only even values.
        #[arg(long)]
        evens: bool,
        /// Skip this many values (after filtering).
        #[arg(long, default_value_t = 0)]
        skip: usize,
        /// Stop after this many values.
        #[arg(long)]
        limit: Option<usize>,
        /// Print as `{ a, b, c }` on one line instead of one value per line.
        #[arg(long)]
        braces: bool,
    },
    /// Split text on a delimiter and print `index<TAB>segment` lines.
    Split {
        /// Text to split.
        text: String,
        /// Delimiter string (must not be empty).
        #[arg(long, default_value = " ")]
        delimiter: String,
    },
    /// Print lines of a file, optionally filtered and trimmed.
    Lines {
        /// Input file, or `-` for stdin.
        file: PathBuf,
        /// Keep only lines containing this text.
        #[arg(long)]
        contains: Option<String>,
        /// Skip this many lines (after filtering).
        #[arg(long, default_value_t = 0)]
        skip: usize,
        /// Stop after this many lines.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Run a periodic timer and print each tick.
    Tick {
        /// Milliseconds between ticks.
        #[arg(long, default_value_t = 250)]
        period_ms: u64,
        /// Number of ticks to wait for before stopping.
        #[arg(long, default_value_t = 4)]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Range {
            start,
            stop,
            step,
            evens,
            skip,
            limit,
            braces,
        } => run_range(start, stop, step, evens, skip, limit, braces)?,
        Commands::Split { text, delimiter } => run_split(&text, &delimiter)?,
        Commands::Lines {
            file,
            contains,
            skip,
            limit,
        } => run_lines(file, contains, skip, limit)?,
        Commands::Tick { period_ms, count } => run_tick(period_ms, count)?,
    }

    Ok(())
}

fn run_range(
    start: i64,
    stop: i64,
    step: i64,
    evens: bool,
    skip: usize,
    limit: Option<usize>,
    braces: bool,
) -> Result<()> {
    if step == 0 {
        tracing::warn!("step is zero; the range is empty");
    }

    let mut seq = iota_by(start, stop, step);
    if evens {
        seq = filter(seq, |n| n % 2 == 0);
    }
    let seq = trim(seq, skip, limit);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if braces {
        let values = seq.collect::<Result<Vec<_>, _>>()?;
        zio::print(&mut out, values)?;
        writeln!(out)?;
        Ok(())
    } else {
        emit(seq, &mut out)
    }
}

fn run_split(text: &str, delimiter: &str) -> Result<()> {
    let segments = string::split_lazy(text, delimiter)
        .with_context(|| format!("cannot split on {delimiter:?}"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in enumerate(segments) {
        let (index, segment) = entry?;
        writeln!(out, "{index}\t{segment}")?;
    }
    Ok(())
}

fn run_lines(
    path: PathBuf,
    contains: Option<String>,
    skip: usize,
    limit: Option<usize>,
) -> Result<()> {
    let reader: Box<dyn BufRead> = if path.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut seq = zio::lines(reader);
    if let Some(needle) = contains {
        seq = filter(seq, move |line| string::contains(line, &needle));
    }
    let seq = trim(seq, skip, limit);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(seq, &mut out).with_context(|| format!("while reading {}", path.display()))
}

fn run_tick(period_ms: u64, count: usize) -> Result<()> {
    let config = TimerConfig::every(Duration::from_millis(period_ms));
    let (sender, receiver) = mpsc::channel();

    let timer = TimerThread::spawn(config, move || {
        // The receiver is gone once enough ticks were seen.
        let _ = sender.send(());
    })
    .context("failed to start timer")?;

    for tick in 1..=count {
        receiver.recv().context("timer stopped unexpectedly")?;
        println!("tick {tick}");
    }

    let fired = timer.stop()?;
    tracing::info!(fired, requested = count, "timer finished");
    Ok(())
}

/// Apply the shared `--skip` and `--limit` options.
fn trim<'a, T: 'a>(seq: Generator<'a, T>, skip: usize, limit: Option<usize>) -> Generator<'a, T> {
    let seq = zzz::drop(seq, skip);
    match limit {
        Some(limit) => take(seq, limit),
        None => seq,
    }
}

fn emit<T: Display>(seq: Generator<'_, T>, out: &mut impl Write) -> Result<()> {
    for item in seq {
        writeln!(out, "{}", item?)?;
    }
    Ok(())
}
