use crate::models::FilterGroup;

/// Drop every group without facets, keeping input order
pub fn normalize_filters(filters: &[FilterGroup]) -> Vec<FilterGroup> {
    filters
        .iter()
        .filter(|group| !group.is_empty())
        .cloned()
        .collect()
}

/// Borrowing variant used on the render path
pub fn non_empty_groups(filters: &[FilterGroup]) -> impl Iterator<Item = &FilterGroup> {
    filters.iter().filter(|group| !group.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_drops_empty_groups_in_order() {
        let filters = vec![
            FilterGroup::new("brand", ["Nike", "Puma"]),
            FilterGroup::new("color", Vec::<String>::new()),
            FilterGroup::new("size", ["M"]),
        ];

        let normalized = normalize_filters(&filters);
        let titles: Vec<_> = normalized.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["brand", "size"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(normalize_filters(&[]).is_empty());
    }

    #[test]
    fn test_borrowing_variant_matches() {
        let filters = vec![
            FilterGroup::new("color", Vec::<String>::new()),
            FilterGroup::new("brand", ["Nike"]),
        ];
        let borrowed: Vec<_> = non_empty_groups(&filters).cloned().collect();
        assert_eq!(borrowed, normalize_filters(&filters));
    }

    fn arb_groups() -> impl Strategy<Value = Vec<FilterGroup>> {
        prop::collection::vec(
            ("[a-z]{1,6}", prop::collection::vec("[A-Za-z]{1,5}", 0..4))
                .prop_map(|(title, names)| FilterGroup::new(title, names)),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn proptest_normalize_is_idempotent(groups in arb_groups()) {
            let once = normalize_filters(&groups);
            prop_assert_eq!(normalize_filters(&once), once.clone());
            prop_assert!(once.iter().all(|g| !g.facets.is_empty()));
        }
    }
}
