// Public modules
pub mod accordion;
pub mod accordion_filter;
pub mod category;
pub mod compose;
pub mod error;
pub mod io;
pub mod labels;
pub mod models;
pub mod normalize;
pub mod schema_validation;
pub mod selection;
pub mod validation;
pub mod view;

// Re-export commonly used types for convenience
pub use accordion::{Accordion, AccordionEvent, OpenState, UiEvent, UiEventKind, DISMISS_KEY};
pub use accordion_filter::{FilterAccordion, FilterAccordionBuilder};
pub use category::{
    forward_category_select, render_categories, CategoryCallback, CategoryTreeProps,
    CategoryTreeRenderer, FlatTreeRenderer,
};
pub use compose::{compose, compose_group, compose_header, ComposeContext};
pub use error::{AccordionError, Result};
pub use io::{load_document, parse_document, save_document};
pub use labels::{humanize_key, LabelResolver, MessageCatalog, BREADCRUMB_PRIMARY, CATEGORIES_TITLE};
pub use models::{find_category, Category, CategoryNode, CategoryTree, Facet, FilterDocument, FilterGroup};
pub use normalize::{non_empty_groups, normalize_filters};
pub use schema_validation::{filter_document_schema, validate_against_schema, validate_document_value};
pub use selection::{FacetCallback, FacetSelection, SelectionPredicate};
pub use validation::validate_filters;
pub use view::{
    Breadcrumb, BreadcrumbLabel, BreadcrumbTrail, CategoryPanel, CategoryRow, Emphasis, FacetRow,
    Glyph, RenderTree, Section, SectionBody,
};
