use crate::accordion::OpenState;
use crate::category::{render_categories, CategoryTreeRenderer};
use crate::labels::{LabelResolver, BREADCRUMB_PRIMARY};
use crate::models::{CategoryNode, FilterGroup};
use crate::normalize::non_empty_groups;
use crate::selection::FacetSelection;
use crate::view::{
    Breadcrumb, BreadcrumbLabel, BreadcrumbTrail, Emphasis, Glyph, RenderTree, Section,
    SectionBody,
};

/// Collaborators the composer reads from but never mutates
pub struct ComposeContext<'a> {
    pub labels: &'a dyn LabelResolver,
    pub tree: &'a [CategoryNode],
    pub tree_renderer: &'a dyn CategoryTreeRenderer,
}

/// Breadcrumb header for the given open state
pub fn compose_header(open_state: &OpenState, labels: &dyn LabelResolver) -> Breadcrumb {
    let primary_text = labels.resolve(BREADCRUMB_PRIMARY);

    match open_state.open_item() {
        None => Breadcrumb {
            primary: BreadcrumbLabel {
                text: primary_text,
                emphasis: Emphasis::Normal,
            },
            trail: None,
        },
        Some(id) => Breadcrumb {
            primary: BreadcrumbLabel {
                text: primary_text,
                emphasis: Emphasis::Muted,
            },
            trail: Some(BreadcrumbTrail {
                separator: Glyph::CaretRight,
                label: labels.resolve(id),
            }),
        },
    }
}

/// Facet section for one group, `None` when another group is open
pub fn compose_group(
    group: &FilterGroup,
    open_state: &OpenState,
    selection: &FacetSelection,
    labels: &dyn LabelResolver,
) -> Option<Section> {
    if !open_state.is_shown(&group.title) {
        return None;
    }

    Some(Section {
        id: group.title.clone(),
        title: labels.resolve(&group.title),
        expanded: open_state.is_expanded(&group.title),
        body: SectionBody::Facets(selection.rows(&group.facets)),
    })
}

/// Build the full render tree. Pure: identical inputs give an identical tree.
pub fn compose(
    filters: &[FilterGroup],
    open_state: &OpenState,
    selection: &FacetSelection,
    ctx: &ComposeContext<'_>,
) -> RenderTree {
    let mut sections = Vec::new();

    sections.extend(render_categories(
        ctx.tree,
        open_state,
        ctx.tree_renderer,
        ctx.labels,
    ));
    sections.extend(
        non_empty_groups(filters)
            .filter_map(|group| compose_group(group, open_state, selection, ctx.labels)),
    );

    log::trace!(
        "composed {} section(s) for {:?}",
        sections.len(),
        open_state.open_item()
    );

    RenderTree {
        header: compose_header(open_state, ctx.labels),
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::FlatTreeRenderer;
    use crate::labels::{MessageCatalog, CATEGORIES_TITLE};
    use crate::models::Facet;
    use crate::view::FacetRow;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn filters() -> Vec<FilterGroup> {
        vec![
            FilterGroup::new("brand", ["Nike", "Puma"]),
            FilterGroup::new("color", Vec::<String>::new()),
            FilterGroup::new("size", ["S", "M"]),
        ]
    }

    fn selection_of(names: &'static [&'static str]) -> FacetSelection {
        FacetSelection::new(Box::new(move |f: &Facet| names.contains(&f.name.as_str())), None)
    }

    fn render(filters: &[FilterGroup], open: &OpenState, selection: &FacetSelection) -> RenderTree {
        let catalog = MessageCatalog::new();
        let ctx = ComposeContext {
            labels: &catalog,
            tree: &[],
            tree_renderer: &FlatTreeRenderer,
        };
        compose(filters, open, selection, &ctx)
    }

    #[test]
    fn test_closed_shows_categories_then_non_empty_groups() {
        let tree = render(&filters(), &OpenState::Closed, &selection_of(&[]));

        assert_eq!(tree.section_ids(), vec![CATEGORIES_TITLE, "brand", "size"]);
        assert!(tree.sections.iter().all(|s| !s.expanded));
        assert_eq!(
            tree.header,
            Breadcrumb {
                primary: BreadcrumbLabel {
                    text: "Filters".into(),
                    emphasis: Emphasis::Normal,
                },
                trail: None,
            }
        );
    }

    #[test]
    fn test_open_group_hides_siblings_and_extends_breadcrumb() {
        let open = OpenState::Open("size".into());
        let tree = render(&filters(), &open, &selection_of(&["M"]));

        assert_eq!(tree.section_ids(), vec!["size"]);
        assert!(tree.sections[0].expanded);
        assert_eq!(tree.header.primary.emphasis, Emphasis::Muted);
        assert_eq!(
            tree.header.trail,
            Some(BreadcrumbTrail {
                separator: Glyph::CaretRight,
                label: "Size".into(),
            })
        );
        assert_eq!(
            tree.facet_rows("size"),
            &[
                FacetRow { name: "S".into(), checked: false },
                FacetRow { name: "M".into(), checked: true },
            ]
        );
    }

    #[test]
    fn test_open_categories_hides_all_groups() {
        let open = OpenState::Open(CATEGORIES_TITLE.into());
        let tree = render(&filters(), &open, &selection_of(&[]));

        assert_eq!(tree.section_ids(), vec![CATEGORIES_TITLE]);
        assert_eq!(tree.header.trail.map(|t| t.label), Some("Categories".to_string()));
    }

    #[test]
    fn test_open_unknown_id_renders_no_groups() {
        let open = OpenState::Open("ghost".into());
        let tree = render(&filters(), &open, &selection_of(&[]));

        assert!(tree.sections.is_empty());
        assert_eq!(tree.header.trail.map(|t| t.label), Some("Ghost".to_string()));
    }

    #[test]
    fn test_open_empty_group_is_not_rendered() {
        let open = OpenState::Open("color".into());
        let tree = render(&filters(), &open, &selection_of(&[]));
        assert!(tree.section("color").is_none());
    }

    proptest! {
        #[test]
        fn proptest_compose_is_deterministic(
            open in prop_oneof![
                Just(OpenState::Closed),
                prop::sample::select(vec!["brand", "color", "size", CATEGORIES_TITLE])
                    .prop_map(|id| OpenState::Open(id.to_string())),
            ],
            picked in prop::sample::subsequence(vec!["Nike", "Puma", "S", "M"], 0..=4),
        ) {
            let picked: Vec<String> = picked.into_iter().map(String::from).collect();
            let selection = FacetSelection::new(
                Box::new(move |f: &Facet| picked.contains(&f.name)),
                None,
            );
            let first = render(&filters(), &open, &selection);
            let second = render(&filters(), &open, &selection);
            prop_assert_eq!(first, second);
        }
    }
}
