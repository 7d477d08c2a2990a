mod cli;

use anyhow::Context;
use colored::Colorize;
use log::info;
use std::io;
use structopt::StructOpt;

use cli::Cli;
use unisim::{score_breakdown, similarity_by_method, unified_similarity, ScoreRow, UNIFIED};

///
/// Main loop
///

fn main() {
    env_logger::init();
    let cli = Cli::from_args();

    if let Err(e) = execute(&cli) {
        eprintln!("{}: {:#}", "error".red(), e);
        std::process::exit(1);
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    if let Some(n) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .with_context(|| format!("configuring a pool of {} threads", n))?;
        info!("using {} worker threads", n);
    }

    let source = cli.source.as_str();
    let target = cli.target.as_str();

    let rows = match (cli.metric, cli.breakdown) {
        (Some(metric), _) => vec![ScoreRow::new(
            metric.name(),
            similarity_by_method(source, target, Some(&metric)),
        )],
        (None, true) => score_breakdown(source, target)
            .map(|breakdown| breakdown.to_rows())
            .unwrap_or_else(|| vec![ScoreRow::new(UNIFIED, 0.0)]),
        (None, false) => vec![ScoreRow::new(UNIFIED, unified_similarity(source, target))],
    };

    write_rows(&rows)
}

fn write_rows(rows: &[ScoreRow]) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(io::stdout());

    for row in rows {
        wtr.serialize(row).context("writing scores to stdout")?;
    }
    wtr.flush().context("flushing scores to stdout")?;

    Ok(())
}
