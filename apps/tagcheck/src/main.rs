//! tagcheck CLI binary entry point.
//! Resolves settings, runs the lint, and prints the report.
//!
//! Exit codes: 0 when every check passes, 1 when any check reports an
//! error, 2 when the run cannot start (unreadable template, bad flags).

use clap::Parser;
use tagcheck::cli::Cli;
use tagcheck::config::ConfigSource;
use tagcheck::output::OutputMode;
use tagcheck::utils::{error_prefix, info_prefix, note_prefix};
use tagcheck::{config, lint, output};

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.root.as_deref(),
        cli.template.as_deref(),
        cli.assets.as_deref(),
        cli.output.as_deref(),
    );

    let mode: OutputMode = match eff.output.parse() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(2);
        }
    };

    match &eff.source {
        ConfigSource::Invalid(path) => eprintln!(
            "{} Could not parse {}; using defaults.",
            note_prefix(),
            path.display()
        ),
        ConfigSource::File(path) if mode == OutputMode::Human => {
            eprintln!("{} Using config {}", info_prefix(), path.display());
        }
        _ => {}
    }

    let report = match lint::run_lint(&eff.root, &eff.template, &eff.assets) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            std::process::exit(2);
        }
    };
    output::print_report(&report, mode);
    if !report.passed() {
        std::process::exit(1);
    }
}
