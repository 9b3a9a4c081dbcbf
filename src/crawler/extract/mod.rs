//! HTML extraction rules, one submodule per source
//!
//! Every rule is a pure function from page markup to typed facts: album links,
//! media URLs, or a next-page pointer. Markup is parsed leniently and a page
//! without qualifying elements yields an empty result, never an error.

pub mod bunkr;
pub mod erome;
pub mod fapello;
pub mod jpg5;

use scraper::{Html, Selector};

/// Parses a selector, logging instead of failing on an invalid one
fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::error!("Invalid selector {:?}: {:?}", css, e);
            None
        }
    }
}

/// Collects `attr` from every element matching `css`, in document order
pub(crate) fn select_attr<'a>(document: &'a Html, css: &str, attr: &str) -> Vec<&'a str> {
    let Some(selector) = selector(css) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr(attr))
        .collect()
}

/// Collects the trimmed text of every element matching `css`
pub(crate) fn select_text(document: &Html, css: &str) -> Vec<String> {
    let Some(selector) = selector(css) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}
