//! Markup parse step.
//!
//! The template is parsed once with an HTML5 parser and reduced to a typed
//! sequence of `link`/`script` records in document order. Later checks only
//! look at these records; they never re-scan the raw markup for elements.

use crate::models::markup::{TagKind, TagRecord};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use scraper::{ElementRef, Html};

/// Parse `content` and collect every `<link>` and `<script>` element.
///
/// Template directives such as `{% load static %}` end up as text nodes and
/// are ignored here. Attribute names come back lower-cased from the parser.
/// Scripting is off so `<noscript>` children are parsed as elements.
pub fn parse_tags(content: &str) -> Vec<TagRecord> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let doc: Html = html5ever::parse_document(Html::new_document(), opts).one(content);
    doc.tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter_map(|el| {
            let kind = match el.value().name() {
                "link" => TagKind::Link,
                "script" => TagKind::Script,
                _ => return None,
            };
            let attrs = el
                .value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Some(TagRecord { kind, attrs })
        })
        .collect()
}
