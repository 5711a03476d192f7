use std::cell::RefCell;
use std::rc::Rc;

use accordion_core::{FilterAccordion, FilterAccordionBuilder, MessageCatalog, Result};

use crate::state::AppState;

/// Build the accordion with its selection predicate and callbacks bound to
/// the shared application state
pub fn build_accordion(
    app_state: &Rc<RefCell<AppState>>,
    labels: MessageCatalog,
) -> Result<FilterAccordion> {
    let filters = app_state.borrow().filters();
    let tree = app_state.borrow().tree();
    let builder = FilterAccordion::builder()
        .filters(filters)
        .tree(tree)
        .labels(labels);

    let builder = register_is_option_selected(builder, app_state);
    let builder = register_on_filter_check(builder, app_state);
    let builder = register_on_category_select(builder, app_state);

    builder.build()
}

/// Selection predicate reading the facet set
fn register_is_option_selected(
    builder: FilterAccordionBuilder,
    app_state: &Rc<RefCell<AppState>>,
) -> FilterAccordionBuilder {
    let app_state = app_state.clone();
    builder.is_option_selected(move |facet| app_state.borrow().is_facet_selected(facet))
}

/// Facet checkbox activation flips the facet in the selection model
fn register_on_filter_check(
    builder: FilterAccordionBuilder,
    app_state: &Rc<RefCell<AppState>>,
) -> FilterAccordionBuilder {
    let app_state = app_state.clone();
    builder.on_filter_check(move |facet| {
        let selected = app_state.borrow_mut().toggle_facet(facet);
        log::debug!("facet '{}' selected={}", facet.name, selected);
    })
}

/// Category selection flips the category in the selection model
fn register_on_category_select(
    builder: FilterAccordionBuilder,
    app_state: &Rc<RefCell<AppState>>,
) -> FilterAccordionBuilder {
    let app_state = app_state.clone();
    builder.on_category_select(move |category| {
        let selected = app_state.borrow_mut().toggle_category(category);
        log::debug!("category '{}' selected={}", category.id, selected);
    })
}
