//! Typed records produced by the markup parse step.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Element types the linter cares about.
pub enum TagKind {
    Link,
    Script,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One `<link>` or `<script>` element with its attributes.
pub struct TagRecord {
    pub kind: TagKind,
    pub attrs: BTreeMap<String, String>,
}

impl TagRecord {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Non-empty attribute value, or `None` when missing or empty.
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|v| !v.is_empty())
    }

    /// True for `<link>` elements whose `rel` token list contains `stylesheet`.
    pub fn is_stylesheet(&self) -> bool {
        self.kind == TagKind::Link
            && self
                .attr("rel")
                .map(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|tok| tok.eq_ignore_ascii_case("stylesheet"))
                })
                .unwrap_or(false)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Css,
    Js,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Asset filename extracted from a static-tag wrapper, with the raw attribute value.
pub struct AssetRef {
    pub kind: AssetKind,
    pub filename: String,
    pub raw: String,
}
