use std::collections::BTreeSet;
use std::path::PathBuf;

use accordion_core::*;

/// Application state management - Domain state only
/// Holds the loaded filter data and the caller-side selection model that
/// the accordion queries and reports to.
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently loaded filter document
    pub document: Option<FilterDocument>,
    /// Path to current document file
    pub current_file: Option<PathBuf>,
    /// Names of selected facets
    pub selected_facets: BTreeSet<String>,
    /// Ids of selected categories
    pub selected_categories: BTreeSet<String>,
    /// Whether selections changed since load
    pub dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a filter document and reset selections
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<()> {
        let document = load_document(&path)?;

        self.document = Some(document);
        self.current_file = Some(path);
        self.selected_facets.clear();
        self.selected_categories.clear();
        self.dirty = false;

        Ok(())
    }

    pub fn filters(&self) -> Vec<FilterGroup> {
        self.document
            .as_ref()
            .map(|d| d.filters.clone())
            .unwrap_or_default()
    }

    pub fn tree(&self) -> CategoryTree {
        self.document
            .as_ref()
            .map(|d| d.tree.clone())
            .unwrap_or_default()
    }

    pub fn is_facet_selected(&self, facet: &Facet) -> bool {
        self.selected_facets.contains(&facet.name)
    }

    /// Flip a facet in the selection model
    pub fn toggle_facet(&mut self, facet: &Facet) -> bool {
        let selected = if self.selected_facets.remove(&facet.name) {
            false
        } else {
            self.selected_facets.insert(facet.name.clone());
            true
        };
        self.mark_dirty();
        selected
    }

    /// Flip a category in the selection model
    pub fn toggle_category(&mut self, category: &Category) -> bool {
        let selected = if self.selected_categories.remove(&category.id) {
            false
        } else {
            self.selected_categories.insert(category.id.clone());
            true
        };
        self.mark_dirty();
        selected
    }

    pub fn clear_selections(&mut self) {
        if !self.selected_facets.is_empty() || !self.selected_categories.is_empty() {
            self.selected_facets.clear();
            self.selected_categories.clear();
            self.mark_dirty();
        }
    }

    /// Mark state as modified
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Title line with file name and dirty indicator
    pub fn get_title(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        let dirty_marker = if self.dirty { "*" } else { "" };

        format!("Facet Accordion - {}{}", file_name, dirty_marker)
    }

    /// One-line summary of the current selections
    pub fn selection_summary(&self) -> String {
        if self.selected_facets.is_empty() && self.selected_categories.is_empty() {
            return "No selections".to_string();
        }

        let mut parts = Vec::new();
        if !self.selected_categories.is_empty() {
            let ids: Vec<_> = self.selected_categories.iter().map(String::as_str).collect();
            parts.push(format!("Categories: {}", ids.join(", ")));
        }
        if !self.selected_facets.is_empty() {
            let names: Vec<_> = self.selected_facets.iter().map(String::as_str).collect();
            parts.push(format!("Facets: {}", names.join(", ")));
        }
        parts.join("; ")
    }
}
