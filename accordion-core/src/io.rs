use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{AccordionError, Result};
use crate::models::FilterDocument;
use crate::schema_validation::validate_document_value;
use crate::validation::validate_filters;

/// Parse and validate a filter document from JSON text
pub fn parse_document(json: &str) -> Result<FilterDocument> {
    let value: Value = serde_json::from_str(json)?;
    validate_document_value(&value).map_err(AccordionError::Validation)?;

    let document: FilterDocument = serde_json::from_value(value)?;
    validate_filters(&document.filters).map_err(AccordionError::Validation)?;

    Ok(document)
}

/// Load a filter document from a JSON file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<FilterDocument> {
    let contents = fs::read_to_string(path)?;
    parse_document(&contents)
}

/// Save a filter document with pretty printing
pub fn save_document<P: AsRef<Path>>(document: &FilterDocument, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}
