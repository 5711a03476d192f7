use thiserror::Error;

pub type Result<T> = std::result::Result<T, AccordionError>;

#[derive(Error, Debug)]
pub enum AccordionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("is_option_selected predicate is required")]
    MissingSelectionPredicate,

    #[error("label resolver is required")]
    MissingLabelResolver,

    #[error("Facet '{facet}' not found in group '{group}'")]
    UnknownFacet { group: String, facet: String },

    #[error("Category not found: {0}")]
    UnknownCategory(String),
}
