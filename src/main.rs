use anyhow::Context;
use clap::Parser;
use mbox_log_export::LogExporter;
use mbox_log_export::cli::{self, Args};
use std::process;

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    if let Err(error) = run(&args) {
        // Error occurred - print to stderr and exit with error code
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.to_config();

    if args.dump_config {
        let json =
            serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{}", json);
        return Ok(());
    }

    let exporter = LogExporter::new(config).context("Invalid export configuration")?;
    let stats = exporter.run().with_context(|| {
        format!(
            "Export from {} failed",
            exporter.config().import_directory.display()
        )
    })?;

    if args.json {
        println!(
            "{}",
            cli::summary_json(&stats).context("Failed to serialize run summary")?
        );
    } else if !args.quiet {
        cli::print_summary(&stats);
    }

    Ok(())
}
