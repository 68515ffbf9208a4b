//! # qbank CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Question bank toolchain.
///
/// Validates the exam-question JSON bank, writes the validation report
/// and consolidated dataset, and runs content-quality audits.
#[derive(Parser, Debug)]
#[command(name = "qbank", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate the bank, write the report and consolidated dataset.
    Validate(qbank_cli::validate::ValidateArgs),
    /// Run content-quality lints over the bank.
    Audit(qbank_cli::audit::AuditArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => qbank_cli::validate::run(&args)?,
        Commands::Audit(args) => qbank_cli::audit::run(&args)?,
    }

    Ok(())
}
