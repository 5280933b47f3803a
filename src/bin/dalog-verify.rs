use clap::Parser;
use dalog::check::{LengthVerdict, check_length};
use dalog::report::parse_report;
use log::LevelFilter;
use std::path::PathBuf;

/// Verbose mode: recompute the expected length of every record from its
/// payload and compare it to the length reported by the dump's header.
#[derive(Debug, Parser)]
struct Options {
    /// Path to the DA log dump
    input: PathBuf,

    /// Log skipped records and other diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    init_logger(options.verbose)?;

    let data = std::fs::read(&options.input)?;
    let records = parse_report(&data)?;

    let mut verified = 0;
    for record in &records {
        match check_length(&data, record)? {
            LengthVerdict::Checked { expected, passed } => {
                verified += 1;
                println!(
                    "{} {} {} {}",
                    record.offset, record.length, record.template, passed
                );
                if !passed {
                    log::debug!(
                        "template {} at offset {}: expected {} bytes, header reports {}",
                        record.template,
                        record.offset,
                        expected,
                        record.length
                    );
                }
            }
            LengthVerdict::Observed { expected } => {
                verified += 1;
                println!(
                    "{} {} {} {} {}",
                    record.offset, record.length, record.template, record.length, expected
                );
            }
            LengthVerdict::NoRule => {
                log::debug!(
                    "no length rule for template {} at offset {}",
                    record.template,
                    record.offset
                );
            }
        }
    }

    log::info!("verified {} of {} records", verified, records.len());

    Ok(())
}

fn init_logger(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
