//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "tagcheck",
    version,
    about = "Lint a template's static-asset tags",
    long_about = "tagcheck — checks that a template declares {% load static %} before using {% static '...' %}, that stylesheets go through the static tag, and that every referenced asset exists.\n\nConfiguration precedence: CLI > tagcheck.toml > defaults.",
    after_help = "Examples:\n  tagcheck\n  tagcheck --template templates/base.html --assets static\n  tagcheck --output json"
)]
/// Top-level CLI options. Every flag is optional.
pub struct Cli {
    #[arg(long, help = "Base directory (default: current dir)")]
    pub root: Option<String>,
    #[arg(long, help = "Template path relative to root (default: index.html)")]
    pub template: Option<String>,
    #[arg(long, help = "Assets directory relative to root (default: assets)")]
    pub assets: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
