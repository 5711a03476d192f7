use std::collections::HashSet;

use crate::labels::CATEGORIES_TITLE;
use crate::models::FilterGroup;

/// Semantic checks on filter groups that the accordion relies on but does
/// not defend against at render time.
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_filters(filters: &[FilterGroup]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut titles = HashSet::new();

    for (idx, group) in filters.iter().enumerate() {
        let group_ref = format!("Group #{} ('{}')", idx + 1, group.title);

        if group.title.trim().is_empty() {
            errors.push(format!("{}: title cannot be empty", group_ref));
        }

        if group.title == CATEGORIES_TITLE {
            errors.push(format!(
                "{}: title is reserved for the categories group",
                group_ref
            ));
        }

        if !titles.insert(group.title.as_str()) {
            errors.push(format!("{}: duplicate group title", group_ref));
        }

        validate_facet_names(group, &group_ref, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_facet_names(group: &FilterGroup, group_ref: &str, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();

    for facet in &group.facets {
        if facet.name.trim().is_empty() {
            errors.push(format!("{}: contains a facet with an empty name", group_ref));
        }
        if !seen.insert(facet.name.as_str()) {
            errors.push(format!(
                "{}: duplicate facet name '{}'",
                group_ref, facet.name
            ));
        }
    }
}
