use crate::accordion::OpenState;
use crate::error::{AccordionError, Result};
use crate::labels::{LabelResolver, CATEGORIES_TITLE};
use crate::models::{find_category, Category, CategoryNode};
use crate::view::{CategoryPanel, CategoryRow, Section, SectionBody};

/// Invoked with the selected category, unmodified
pub type CategoryCallback = Box<dyn FnMut(&Category)>;

/// Props handed to the external tree renderer
#[derive(Debug, Clone, Copy)]
pub struct CategoryTreeProps<'a> {
    pub tree: &'a [CategoryNode],
    pub is_visible: bool,
    pub hide_border: bool,
}

/// The collaborator that draws the category hierarchy.
/// Selection semantics (single or multi) are its concern.
pub trait CategoryTreeRenderer {
    fn render(&self, props: &CategoryTreeProps<'_>) -> Vec<CategoryRow>;
}

/// Depth-first flattening into indented rows
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatTreeRenderer;

impl CategoryTreeRenderer for FlatTreeRenderer {
    fn render(&self, props: &CategoryTreeProps<'_>) -> Vec<CategoryRow> {
        let mut rows = Vec::new();
        if !props.is_visible {
            return rows;
        }
        for node in props.tree {
            flatten_node(node, 0, &mut rows);
        }
        rows
    }
}

fn flatten_node(node: &CategoryNode, depth: usize, rows: &mut Vec<CategoryRow>) {
    rows.push(CategoryRow {
        id: node.id.clone(),
        label: node.name.clone(),
        depth,
    });

    for child in &node.children {
        flatten_node(child, depth + 1, rows);
    }
}

/// Section for the reserved categories group.
/// Returns `None` while another group is open.
pub fn render_categories(
    tree: &[CategoryNode],
    open_state: &OpenState,
    renderer: &dyn CategoryTreeRenderer,
    labels: &dyn LabelResolver,
) -> Option<Section> {
    if !open_state.is_shown(CATEGORIES_TITLE) {
        return None;
    }

    let props = CategoryTreeProps {
        tree,
        is_visible: !tree.is_empty(),
        hide_border: true,
    };

    Some(Section {
        id: CATEGORIES_TITLE.to_string(),
        title: labels.resolve(CATEGORIES_TITLE),
        expanded: open_state.is_expanded(CATEGORIES_TITLE),
        body: SectionBody::Categories(CategoryPanel {
            is_visible: props.is_visible,
            hide_border: props.hide_border,
            rows: renderer.render(&props),
        }),
    })
}

/// Pass a category selection through to the caller's callback
pub fn forward_category_select(
    tree: &[CategoryNode],
    id: &str,
    on_select: Option<&mut CategoryCallback>,
) -> Result<()> {
    let category =
        find_category(tree, id).ok_or_else(|| AccordionError::UnknownCategory(id.to_string()))?;

    match on_select {
        Some(callback) => callback(category),
        None => log::warn!("category '{}' selected but no on_category_select is set", id),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::MessageCatalog;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_tree() -> Vec<CategoryNode> {
        vec![
            CategoryNode::leaf("1", "Shoes").with_children(vec![
                CategoryNode::leaf("2", "Running"),
                CategoryNode::leaf("3", "Trail")
                    .with_children(vec![CategoryNode::leaf("5", "Waterproof")]),
            ]),
            CategoryNode::leaf("4", "Apparel"),
        ]
    }

    #[test]
    fn test_flat_renderer_indents_children() {
        let tree = sample_tree();
        let rows = FlatTreeRenderer.render(&CategoryTreeProps {
            tree: &tree,
            is_visible: true,
            hide_border: true,
        });

        let flat: Vec<_> = rows.iter().map(|r| (r.label.as_str(), r.depth)).collect();
        assert_eq!(
            flat,
            vec![("Shoes", 0), ("Running", 1), ("Trail", 1), ("Waterproof", 2), ("Apparel", 0)]
        );
    }

    #[test]
    fn test_empty_tree_is_not_visible() {
        let catalog = MessageCatalog::new();
        let section =
            render_categories(&[], &OpenState::Closed, &FlatTreeRenderer, &catalog).unwrap();

        assert_eq!(section.title, "Categories");
        assert!(!section.expanded);
        let SectionBody::Categories(panel) = section.body else {
            panic!("expected categories body");
        };
        assert!(!panel.is_visible);
        assert!(panel.rows.is_empty());
    }

    #[test]
    fn test_empty_tree_still_opens() {
        let catalog = MessageCatalog::new();
        let open = OpenState::Open(CATEGORIES_TITLE.to_string());
        let section = render_categories(&[], &open, &FlatTreeRenderer, &catalog).unwrap();
        assert!(section.expanded);
        assert!(matches!(section.body, SectionBody::Categories(ref p) if !p.is_visible));
    }

    #[test]
    fn test_hidden_while_other_group_open() {
        let catalog = MessageCatalog::new();
        let open = OpenState::Open("brand".to_string());
        assert!(render_categories(&sample_tree(), &open, &FlatTreeRenderer, &catalog).is_none());
    }

    #[test]
    fn test_select_forwards_node_unmodified() {
        let tree = sample_tree();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut callback: CategoryCallback = Box::new(move |c: &Category| {
            sink.borrow_mut().push(c.clone());
        });

        forward_category_select(&tree, "3", Some(&mut callback)).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], tree[0].children[1]);
    }

    #[test]
    fn test_select_unknown_category_fails() {
        let result = forward_category_select(&sample_tree(), "42", None);
        assert!(matches!(result, Err(AccordionError::UnknownCategory(id)) if id == "42"));
    }

    #[test]
    fn test_select_without_callback_is_ok() {
        assert!(forward_category_select(&sample_tree(), "4", None).is_ok());
    }
}
