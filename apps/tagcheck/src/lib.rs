//! tagcheck core library.
//!
//! Lints a template that uses the `{% load static %}` / `{% static '...' %}`
//! convention: the load declaration must precede every static use, stylesheet
//! links must go through the static tag, and every referenced asset must exist.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Optional config file and effective settings resolution.
//! - `markup`: Parse step turning markup into typed tag records.
//! - `lint`: The ordered checks producing a `Report`.
//! - `models`: Result, report, and tag record types.
//! - `output`: Human/JSON printers.
//! - `error`: Fatal errors.
//! - `utils`: Diagnostic prefixes.
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod markup;
pub mod models;
pub mod output;
pub mod utils;
