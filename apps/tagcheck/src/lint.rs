//! Template asset lint.
//!
//! Runs five checks against one template, in order, appending to a single
//! result list:
//! 1. `{% load static %}` is present.
//! 2. Stylesheet links wrap their `href` in `{% static '...' %}`.
//! 3. Script sources using the wrapper are well-formed (others are external).
//! 4. The load declaration comes before the first `{% static` use.
//! 5. Every referenced asset exists under the assets directory.
//!
//! Findings never abort the run; only an unreadable template does.

use crate::error::TagCheckError;
use crate::markup::parse_tags;
use crate::models::markup::{AssetKind, AssetRef, TagKind, TagRecord};
use crate::models::{CheckId, CheckResult, Report, Status, Summary};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const LOAD_STATIC: &str = "{% load static %}";
const STATIC_USE: &str = "{% static";
const STATIC_OPEN: &str = "{% static '";
const STATIC_CLOSE: &str = "' %}";

fn static_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{% static '(.*?)' %\}").expect("static tag regex"))
}

/// How an attribute value relates to the static-tag wrapper.
#[derive(Debug, PartialEq, Eq)]
pub enum StaticRef<'a> {
    /// `{% static '<name>' %}` with the captured name.
    Asset(&'a str),
    /// The wrapper is opened but does not close into a filename.
    Malformed,
    /// No wrapper at all.
    Plain,
}

/// Classify a stylesheet `href`: any value that opens the wrapper without
/// capturing a filename is malformed, closed or not.
pub fn classify_href(value: &str) -> StaticRef<'_> {
    match capture_name(value) {
        Some(name) => StaticRef::Asset(name),
        None if value.contains(STATIC_OPEN) => StaticRef::Malformed,
        None => StaticRef::Plain,
    }
}

/// Classify a script `src`: malformed only when both the opening and the
/// closing of the wrapper appear; an unclosed opening counts as external.
pub fn classify_src(value: &str) -> StaticRef<'_> {
    match capture_name(value) {
        Some(name) => StaticRef::Asset(name),
        None if value.contains(STATIC_OPEN) && value.contains(STATIC_CLOSE) => {
            StaticRef::Malformed
        }
        None => StaticRef::Plain,
    }
}

fn capture_name(value: &str) -> Option<&str> {
    static_name_re()
        .captures(value)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Paths and labels used by one lint run.
pub struct Target<'a> {
    /// Template name used in messages.
    pub template: &'a str,
    /// Directory that asset filenames are joined onto.
    pub assets_dir: &'a Path,
    /// Assets directory as written in messages, e.g. `./assets/`.
    pub assets_label: &'a str,
}

/// Read `template` under `root` and lint it against `root/assets`.
///
/// Returns an error only when the template cannot be read.
pub fn run_lint(root: &Path, template: &str, assets: &str) -> Result<Report, TagCheckError> {
    let path = root.join(template);
    let content = fs::read_to_string(&path).map_err(|source| TagCheckError::ReadTemplate {
        path: path.clone(),
        source,
    })?;
    let assets_dir = root.join(assets);
    let assets_label = assets_label(assets);
    Ok(lint_document(
        &content,
        &Target {
            template,
            assets_dir: &assets_dir,
            assets_label: &assets_label,
        },
    ))
}

/// Assets directory as shown in messages: relative paths get a `./` prefix.
pub fn assets_label(assets: &str) -> String {
    let trimmed = assets.trim_end_matches('/');
    if Path::new(assets).is_absolute() {
        format!("{}/", trimmed)
    } else {
        format!("./{}/", trimmed)
    }
}

/// Lint already-loaded template text.
pub fn lint_document(content: &str, target: &Target<'_>) -> Report {
    let mut linter = Linter::default();

    let load_pos = linter.check_load_static(content, target.template);
    let tags = parse_tags(content);
    let css = linter.collect_stylesheets(&tags);
    let js = linter.collect_scripts(&tags);
    linter.check_load_order(content, load_pos, target.template);

    let assets: Vec<AssetRef> = css.into_iter().chain(js).collect();
    linter.check_assets(&assets, target);

    linter.finish(target.template, assets.len())
}

#[derive(Default)]
struct Linter {
    results: Vec<CheckResult>,
}

impl Linter {
    fn info(&mut self, check: CheckId, message: String) {
        self.results.push(CheckResult {
            check,
            status: Status::Info,
            message,
        });
    }

    fn error(&mut self, check: CheckId, message: String) {
        self.results.push(CheckResult {
            check,
            status: Status::Error,
            message,
        });
    }

    fn check_load_static(&mut self, content: &str, template: &str) -> Option<usize> {
        let pos = content.find(LOAD_STATIC);
        match pos {
            Some(_) => self.info(
                CheckId::LoadStatic,
                format!("'{}' tag is included in {}.", LOAD_STATIC, template),
            ),
            None => self.error(
                CheckId::LoadStatic,
                format!("'{}' tag not found in {}.", LOAD_STATIC, template),
            ),
        }
        pos
    }

    fn collect_stylesheets(&mut self, tags: &[TagRecord]) -> Vec<AssetRef> {
        let mut out = Vec::new();
        for tag in tags.iter().filter(|t| t.is_stylesheet()) {
            let Some(href) = tag.non_empty_attr("href") else {
                continue;
            };
            match classify_href(href) {
                StaticRef::Asset(name) => out.push(AssetRef {
                    kind: AssetKind::Css,
                    filename: name.to_string(),
                    raw: href.to_string(),
                }),
                StaticRef::Malformed => self.error(
                    CheckId::Stylesheet,
                    format!(
                        "Link tag with href '{}' has incorrect static tag format.",
                        href
                    ),
                ),
                StaticRef::Plain => self.error(
                    CheckId::Stylesheet,
                    format!("Link tag with href '{}' does not use static tag properly.", href),
                ),
            }
        }
        out
    }

    fn collect_scripts(&mut self, tags: &[TagRecord]) -> Vec<AssetRef> {
        let mut out = Vec::new();
        for tag in tags.iter().filter(|t| t.kind == TagKind::Script) {
            let Some(src) = tag.non_empty_attr("src") else {
                continue;
            };
            match classify_src(src) {
                StaticRef::Asset(name) => out.push(AssetRef {
                    kind: AssetKind::Js,
                    filename: name.to_string(),
                    raw: src.to_string(),
                }),
                StaticRef::Malformed => self.error(
                    CheckId::Script,
                    format!(
                        "Script tag with src '{}' has incorrect static tag format.",
                        src
                    ),
                ),
                // External scripts (CDN, absolute URLs) are accepted as-is.
                StaticRef::Plain => {}
            }
        }
        out
    }

    fn check_load_order(&mut self, content: &str, load_pos: Option<usize>, template: &str) {
        // `find` yields the leftmost match, i.e. the minimum offset.
        let Some(first_static) = content.find(STATIC_USE) else {
            self.error(
                CheckId::LoadOrder,
                format!("No static files found in {}.", template),
            );
            return;
        };
        match load_pos {
            Some(load) if load < first_static => self.info(
                CheckId::LoadOrder,
                format!(
                    "'{}' tag is included before loading static css and js files.",
                    LOAD_STATIC
                ),
            ),
            _ => self.error(
                CheckId::LoadOrder,
                format!(
                    "'{}' tag is not included before loading static css and js files.",
                    LOAD_STATIC
                ),
            ),
        }
    }

    fn check_assets(&mut self, assets: &[AssetRef], target: &Target<'_>) {
        for asset in assets {
            if target.assets_dir.join(&asset.filename).is_file() {
                self.info(
                    CheckId::AssetExists,
                    format!(
                        "File '{}' exists in '{}' folder.",
                        asset.filename, target.assets_label
                    ),
                );
            } else {
                self.error(
                    CheckId::AssetExists,
                    format!(
                        "File '{}' does not exist in '{}' folder.",
                        asset.filename, target.assets_label
                    ),
                );
            }
        }
    }

    fn finish(self, template: &str, assets: usize) -> Report {
        let errors = self
            .results
            .iter()
            .filter(|r| r.status == Status::Error)
            .count();
        let infos = self.results.len() - errors;
        Report {
            template: template.to_string(),
            results: self.results,
            summary: Summary {
                errors,
                infos,
                assets,
            },
        }
    }
}
