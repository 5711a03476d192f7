use std::path::Path;

use accordion_core::AccordionError;

/// A mapped error ready for display. Printed once, by `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayError {
    pub title: String,
    pub message: String,
    pub details: String,
}

impl DisplayError {
    pub fn new((title, message, details): (String, String, String)) -> Self {
        Self {
            title,
            message,
            details,
        }
    }
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.title, self.message)
    }
}

impl std::error::Error for DisplayError {}

/// Map filter document loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &AccordionError, path: &Path) -> (String, String, String) {
    match error {
        AccordionError::Validation(errors) => (
            "Validation Error".to_string(),
            "The filter document has validation errors.".to_string(),
            errors
                .iter()
                .enumerate()
                .map(|(i, e)| format!("{}. {}", i + 1, e))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        AccordionError::Json(e) => (
            "Invalid JSON".to_string(),
            "The filter document is not valid JSON.".to_string(),
            format!("{}\n\nPath: {}", e, path.display()),
        ),
        AccordionError::Io(e) => map_io_error(e, path),
        other => (
            "Error Loading File".to_string(),
            "Failed to load filter document.".to_string(),
            other.to_string(),
        ),
    }
}

/// Map label catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_error(error: &AccordionError, path: &Path) -> (String, String, String) {
    match error {
        AccordionError::Json(e) => (
            "Invalid Label Catalog".to_string(),
            "The label catalog must be a JSON object of key/text pairs.".to_string(),
            format!("{}\n\nPath: {}", e, path.display()),
        ),
        AccordionError::Io(e) => map_io_error(e, path),
        other => (
            "Error Loading Labels".to_string(),
            "Failed to load label catalog.".to_string(),
            other.to_string(),
        ),
    }
}

/// Map interaction errors (unknown targets) to user-friendly messages
/// Returns (title, message, details)
pub fn map_interaction_error(error: &AccordionError) -> (String, String, String) {
    match error {
        AccordionError::UnknownFacet { group, facet } => (
            "Unknown Facet".to_string(),
            format!("No facet '{}' in group '{}'.", facet, group),
            "Empty groups are not rendered, so their facets cannot be checked.".to_string(),
        ),
        AccordionError::UnknownCategory(id) => (
            "Unknown Category".to_string(),
            format!("No category with id '{}'.", id),
            "Category ids are listed in brackets when the categories group is open."
                .to_string(),
        ),
        other => (
            "Interaction Failed".to_string(),
            "The event could not be handled.".to_string(),
            other.to_string(),
        ),
    }
}

fn map_io_error(error: &std::io::Error, path: &Path) -> (String, String, String) {
    match error.kind() {
        std::io::ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        std::io::ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        _ => (
            "Error Reading File".to_string(),
            "The file could not be read.".to_string(),
            error.to_string(),
        ),
    }
}
