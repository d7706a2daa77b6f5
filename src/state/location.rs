// src/state/location.rs
use super::StateError;
use std::cell::{Cell, RefCell};
use url::Url;

/// The current page address plus in-place history replacement.
pub trait Location {
    fn href(&self) -> String;

    /// Replaces the current history entry with `path_query_hash` without
    /// navigating.
    fn replace(&self, path_query_hash: &str) -> Result<(), StateError>;
}

fn parse(href: &str) -> Result<Url, StateError> {
    Url::parse(href).map_err(|e| StateError::Url(format!("{}: {}", href, e)))
}

pub fn query_param(href: &str, name: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    let value = url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned());
    value
}

pub fn pathname(href: &str) -> String {
    Url::parse(href)
        .map(|url| url.path().to_string())
        .unwrap_or_default()
}

/// `path?query#hash` of `href` with `name` set to `value`. An existing
/// parameter keeps its position; duplicates are dropped.
pub fn with_query_param(href: &str, name: &str, value: &str) -> Result<String, StateError> {
    let mut url = parse(href)?;

    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, existing) in url.query_pairs() {
        if key == name {
            if !replaced {
                pairs.push((key.into_owned(), value.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), existing.into_owned()));
        }
    }
    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);

    let mut out = url.path().to_string();
    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    Ok(out)
}

#[derive(Debug)]
pub struct MemoryLocation {
    href: RefCell<String>,
    replacements: Cell<usize>,
}

impl MemoryLocation {
    pub fn new(href: &str) -> Self {
        Self {
            href: RefCell::new(href.to_string()),
            replacements: Cell::new(0),
        }
    }

    /// How many times the history entry was replaced.
    pub fn replacements(&self) -> usize {
        self.replacements.get()
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> String {
        self.href.borrow().clone()
    }

    fn replace(&self, path_query_hash: &str) -> Result<(), StateError> {
        let next = parse(&self.href())?
            .join(path_query_hash)
            .map_err(|e| StateError::Url(e.to_string()))?;
        *self.href.borrow_mut() = next.to_string();
        self.replacements.set(self.replacements.get() + 1);
        Ok(())
    }
}
