use clap::Parser;
use dalog::check::{PageCodeOutcome, check_page_code};
use dalog::report::parse_report;
use log::LevelFilter;
use std::path::PathBuf;

/// Self-check mode: validate the page code byte of every error-counter
/// record listed in the dump's text header.
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

    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;

    for record in &records {
        match check_page_code(&data, record) {
            PageCodeOutcome::Passed => {
                passed += 1;
                println!(
                    "Successful offset={}, length={}, template={}",
                    record.offset, record.length, record.template
                );
            }
            PageCodeOutcome::Failed { expected, found } => {
                failed += 1;
                println!("Fail {} {} {}", record.offset, record.length, record.template);
                log::debug!(
                    "template {} at offset {}: page code {:#04x}, expected {:#04x}",
                    record.template,
                    record.offset,
                    found,
                    expected
                );
            }
            PageCodeOutcome::NoRule => {
                skipped += 1;
                log::debug!(
                    "no checker for template {} at offset {}",
                    record.template,
                    record.offset
                );
            }
            PageCodeOutcome::OutOfBounds => {
                skipped += 1;
                log::debug!(
                    "record at offset {} lies outside the {} byte dump",
                    record.offset,
                    data.len()
                );
            }
        }
    }

    log::info!(
        "{} records: {} passed, {} failed, {} skipped",
        records.len(),
        passed,
        failed,
        skipped
    );

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
