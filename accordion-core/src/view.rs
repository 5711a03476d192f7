//! Render tree produced by the composer. Plain data, compared by value.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Emphasis {
    Normal,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Glyph {
    CaretRight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbLabel {
    pub text: String,
    pub emphasis: Emphasis,
}

/// Separator glyph plus the open group's label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbTrail {
    pub separator: Glyph,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub primary: BreadcrumbLabel,
    pub trail: Option<BreadcrumbTrail>,
}

/// Checkbox line for a facet, keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetRow {
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub label: String,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPanel {
    pub is_visible: bool,
    pub hide_border: bool,
    pub rows: Vec<CategoryRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SectionBody {
    Categories(CategoryPanel),
    Facets(Vec<FacetRow>),
}

/// One collapsible group. Hidden groups are absent from the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub expanded: bool,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    pub header: Breadcrumb,
    pub sections: Vec<Section>,
}

impl RenderTree {
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    /// Facet rows of a section, empty for the categories section
    pub fn facet_rows(&self, id: &str) -> &[FacetRow] {
        match self.section(id).map(|s| &s.body) {
            Some(SectionBody::Facets(rows)) => rows.as_slice(),
            _ => &[],
        }
    }
}
