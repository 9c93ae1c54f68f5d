//! Reads a market data log from stdin and prints one line per cost
//! change: `timestamp side total`, with `NA` for a cost that became
//! unreachable.
//!
//! Usage: `bookdepth <target-size>`
//!
//! Malformed lines and events the book rejects (duplicate adds, reduces
//! of unknown orders) are logged at `warn` and skipped; the stream keeps
//! going. Logging goes to stderr and is controlled by `RUST_LOG`.

use bookdepth_rs::prelude::*;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Instrument label carried by the original analyzer's feed.
const INSTRUMENT: &str = "ZING";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("usage: bookdepth <target-size>");
        return ExitCode::from(2);
    };
    let target_size: u64 = match arg.parse() {
        Ok(size) => size,
        Err(_) => {
            eprintln!("invalid target size: {arg:?}");
            return ExitCode::from(2);
        }
    };

    let book = match DepthBook::new(INSTRUMENT, target_size) {
        Ok(book) => book,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    match run(book) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut book: DepthBook) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(record) => {
                if let Some(update) = apply(&mut book, record, line) {
                    writeln!(out, "{update}")?;
                }
            }
            Err(err) => warn!(%err, line, "skipping malformed line"),
        }
    }
    out.flush()?;

    info!(
        symbol = book.symbol(),
        orders = book.order_count(),
        bid_levels = book.level_count(Side::Buy),
        ask_levels = book.level_count(Side::Sell),
        "stream ended"
    );
    Ok(())
}

fn apply(book: &mut DepthBook, record: FeedRecord, line: &str) -> Option<CostUpdate> {
    let outcome = match record {
        FeedRecord::Add {
            timestamp,
            id,
            side,
            price,
            size,
        } => book.apply_add(timestamp, id, side, price, size),
        FeedRecord::Reduce {
            timestamp,
            id,
            size,
        } => book.apply_reduce(timestamp, &id, size),
    };
    match outcome {
        Ok(update) => update,
        Err(err) => {
            warn!(%err, line, "skipping rejected event");
            None
        }
    }
}
