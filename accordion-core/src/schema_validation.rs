use serde_json::{json, Value};

/// JSON Schema describing a filter document
pub fn filter_document_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "definitions": {
            "facet": {
                "type": "object",
                "properties": { "name": { "type": "string" } },
                "required": ["name"]
            },
            "category": {
                "type": "object",
                "properties": {
                    "id": { "type": "string" },
                    "name": { "type": "string" },
                    "children": {
                        "type": ["array", "null"],
                        "items": { "$ref": "#/definitions/category" }
                    }
                },
                "required": ["id", "name"]
            }
        },
        "properties": {
            "filters": {
                "type": ["array", "null"],
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "facets": {
                            "type": ["array", "null"],
                            "items": { "$ref": "#/definitions/facet" }
                        }
                    },
                    "required": ["title"]
                }
            },
            "tree": {
                "type": ["array", "null"],
                "items": { "$ref": "#/definitions/category" }
            }
        }
    })
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Structural check of a raw filter document
pub fn validate_document_value(data: &Value) -> Result<(), Vec<String>> {
    validate_against_schema(&filter_document_schema(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document_passes() {
        let data = json!({
            "filters": [
                {"title": "brand", "facets": [{"name": "Nike"}]},
                {"title": "color", "facets": null},
                {"title": "size"}
            ],
            "tree": [
                {"id": "1", "name": "Shoes", "children": [{"id": "2", "name": "Running"}]}
            ]
        });
        assert!(validate_document_value(&data).is_ok());
    }

    #[test]
    fn test_missing_title_fails() {
        let data = json!({"filters": [{"facets": []}]});
        let errors = validate_document_value(&data).unwrap_err();
        assert!(!errors.is_empty());
        assert!(errors[0].contains("/filters/0"));
    }

    #[test]
    fn test_nested_category_needs_name() {
        let data = json!({
            "tree": [{"id": "1", "name": "Shoes", "children": [{"id": "2"}]}]
        });
        assert!(validate_document_value(&data).is_err());
    }

    #[test]
    fn test_collects_every_error() {
        let data = json!({
            "filters": [
                {"title": 7},
                {"title": "size", "facets": [{"label": "M"}]}
            ]
        });
        let errors = validate_document_value(&data).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_empty_object_passes() {
        assert!(validate_document_value(&json!({})).is_ok());
    }
}
