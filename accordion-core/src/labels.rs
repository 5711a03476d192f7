use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;

/// Reserved identifier of the categories group. Never drawn from the
/// filter list and always rendered first.
pub const CATEGORIES_TITLE: &str = "store/search.filter.title.categories";

/// Key of the primary breadcrumb label
pub const BREADCRUMB_PRIMARY: &str = "store/search-result.filter-breadcrumbs.primary";

/// Resolves identifiers (group titles, the open item) to display text
pub trait LabelResolver {
    fn resolve(&self, id: &str) -> String;
}

impl<F> LabelResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, id: &str) -> String {
        self(id)
    }
}

/// Key to text table with a humanized fallback for unknown keys
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            messages: HashMap::from([
                (CATEGORIES_TITLE.to_string(), "Categories".to_string()),
                (BREADCRUMB_PRIMARY.to_string(), "Filters".to_string()),
            ]),
        }
    }
}

impl MessageCatalog {
    /// Catalog holding only the reserved keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserved keys overlaid with `messages`
    pub fn with_messages(messages: HashMap<String, String>) -> Self {
        let mut catalog = Self::default();
        catalog.messages.extend(messages);
        catalog
    }

    /// Parse a flat JSON object of `key: text` pairs
    pub fn from_json(json: &str) -> Result<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::with_messages(messages))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }
}

impl LabelResolver for MessageCatalog {
    fn resolve(&self, id: &str) -> String {
        match self.get(id) {
            Some(text) => text.to_string(),
            None => humanize_key(id),
        }
    }
}

fn last_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^./]+$").expect("valid regex"))
}

fn separator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-_\s]+").expect("valid regex"))
}

/// Readable text from a message key: last `.`/`/` segment, separators
/// turned into spaces, first letter upper-cased
pub fn humanize_key(key: &str) -> String {
    let segment = last_segment_re()
        .find(key.trim())
        .map(|m| m.as_str())
        .unwrap_or(key);
    let spaced = separator_re().replace_all(segment, " ");
    let spaced = spaced.trim();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => key.to_string(),
    }
}
