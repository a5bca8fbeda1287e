//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstat::cli::Args;
use chatstat::config::OutputConfig;
use chatstat::format::{OutputFormat, write_to_format};
use chatstat::{ChatstatError, Preprocessor};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "chatstat=debug" } else { "chatstat=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    println!("📊 chatstat v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output_path.display());
    println!("📄 Format:  {}", format);
    println!();

    let text = fs::read_to_string(&args.input)?;

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let preprocessor = Preprocessor::with_config(args.preprocess_config());
    let out = preprocessor.preprocess_with_report(&text)?;
    println!(
        "   {} clock, {} segments -> {} rows ({:.2}s)",
        out.report.format,
        out.report.segments,
        out.table.len(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing {}...", format);
    write_to_format(&out.table, &output_path, format, &OutputConfig::new())?;

    println!();
    println!("✅ Done! Output saved to {}", output_path.display());

    println!();
    println!("📋 Summary:");
    println!("   Segments:       {}", out.report.segments);
    println!("   Rows:           {}", out.table.len());
    println!("   Users:          {}", out.table.users().len());
    println!("   Media skipped:  {}", out.report.media_skipped());
    println!("   Invalid:        {}", out.report.invalid_skipped());
    if args.show_skipped {
        for skipped in &out.report.skipped {
            println!("     - {}", skipped);
        }
    }
    println!("   Total time:     {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
