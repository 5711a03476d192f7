use crate::accordion::{Accordion, OpenState, UiEvent};
use crate::category::{
    forward_category_select, CategoryCallback, CategoryTreeRenderer, FlatTreeRenderer,
};
use crate::compose::{compose, ComposeContext};
use crate::error::{AccordionError, Result};
use crate::labels::LabelResolver;
use crate::models::{Category, CategoryTree, Facet, FilterGroup};
use crate::normalize::non_empty_groups;
use crate::selection::{FacetCallback, FacetSelection, SelectionPredicate};
use crate::view::RenderTree;

/// Accordion of filter groups with the categories group pinned first.
///
/// Owns only the open/closed state. Facet selection is read through the
/// injected predicate and reported through the callbacks.
pub struct FilterAccordion {
    filters: Vec<FilterGroup>,
    tree: CategoryTree,
    accordion: Accordion,
    selection: FacetSelection,
    on_category_select: Option<CategoryCallback>,
    labels: Box<dyn LabelResolver>,
    tree_renderer: Box<dyn CategoryTreeRenderer>,
}

#[derive(Default)]
pub struct FilterAccordionBuilder {
    filters: Vec<FilterGroup>,
    tree: CategoryTree,
    is_option_selected: Option<SelectionPredicate>,
    on_filter_check: Option<FacetCallback>,
    on_category_select: Option<CategoryCallback>,
    labels: Option<Box<dyn LabelResolver>>,
    tree_renderer: Option<Box<dyn CategoryTreeRenderer>>,
}

impl FilterAccordionBuilder {
    pub fn filters(mut self, filters: Vec<FilterGroup>) -> Self {
        self.filters = filters;
        self
    }

    pub fn tree(mut self, tree: CategoryTree) -> Self {
        self.tree = tree;
        self
    }

    pub fn is_option_selected(mut self, predicate: impl Fn(&Facet) -> bool + 'static) -> Self {
        self.is_option_selected = Some(Box::new(predicate));
        self
    }

    pub fn on_filter_check(mut self, callback: impl FnMut(&Facet) + 'static) -> Self {
        self.on_filter_check = Some(Box::new(callback));
        self
    }

    pub fn on_category_select(mut self, callback: impl FnMut(&Category) + 'static) -> Self {
        self.on_category_select = Some(Box::new(callback));
        self
    }

    pub fn labels(mut self, labels: impl LabelResolver + 'static) -> Self {
        self.labels = Some(Box::new(labels));
        self
    }

    /// Replace the default flat category renderer
    pub fn tree_renderer(mut self, renderer: impl CategoryTreeRenderer + 'static) -> Self {
        self.tree_renderer = Some(Box::new(renderer));
        self
    }

    /// Fails when a required collaborator is missing
    pub fn build(self) -> Result<FilterAccordion> {
        let is_option_selected = self
            .is_option_selected
            .ok_or(AccordionError::MissingSelectionPredicate)?;
        let labels = self.labels.ok_or(AccordionError::MissingLabelResolver)?;

        Ok(FilterAccordion {
            filters: self.filters,
            tree: self.tree,
            accordion: Accordion::new(),
            selection: FacetSelection::new(is_option_selected, self.on_filter_check),
            on_category_select: self.on_category_select,
            labels,
            tree_renderer: self
                .tree_renderer
                .unwrap_or_else(|| Box::new(FlatTreeRenderer)),
        })
    }
}

impl FilterAccordion {
    pub fn builder() -> FilterAccordionBuilder {
        FilterAccordionBuilder::default()
    }

    pub fn open_state(&self) -> &OpenState {
        self.accordion.state()
    }

    pub fn filters(&self) -> &[FilterGroup] {
        &self.filters
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// New filter data; the open group is kept
    pub fn set_filters(&mut self, filters: Vec<FilterGroup>) {
        self.filters = filters;
    }

    pub fn set_tree(&mut self, tree: CategoryTree) {
        self.tree = tree;
    }

    /// Header click on a group
    pub fn on_group_header_click(&mut self, id: &str, event: &mut UiEvent) -> &OpenState {
        self.accordion.handle_open(id, event)
    }

    pub fn on_breadcrumb_click(&mut self, event: &mut UiEvent) -> &OpenState {
        self.accordion.handle_breadcrumb_click(event)
    }

    pub fn on_breadcrumb_key_down(&mut self, event: &mut UiEvent) -> &OpenState {
        self.accordion.handle_key_down(event)
    }

    /// Checkbox activation on `facet_name` inside group `group`.
    /// Returns whether a callback received it.
    pub fn on_facet_check(&mut self, group: &str, facet_name: &str) -> Result<bool> {
        let facet = non_empty_groups(&self.filters)
            .find(|g| g.title == group)
            .and_then(|g| g.facet(facet_name))
            .cloned()
            .ok_or_else(|| AccordionError::UnknownFacet {
                group: group.to_string(),
                facet: facet_name.to_string(),
            })?;

        Ok(self.selection.toggle(&facet))
    }

    /// Category picked in the tree renderer
    pub fn on_category_select(&mut self, id: &str) -> Result<()> {
        forward_category_select(&self.tree, id, self.on_category_select.as_mut())
    }

    /// Current render tree
    pub fn render(&self) -> RenderTree {
        let ctx = ComposeContext {
            labels: &*self.labels,
            tree: &self.tree,
            tree_renderer: &*self.tree_renderer,
        };
        compose(&self.filters, self.accordion.state(), &self.selection, &ctx)
    }
}

impl std::fmt::Debug for FilterAccordion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterAccordion")
            .field("filters", &self.filters)
            .field("tree", &self.tree)
            .field("accordion", &self.accordion)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}
