//! Controlled facet checkboxes.
//!
//! Selection state lives with the caller. Rows ask the predicate on every
//! render and report activations through the callback; nothing is cached
//! or flipped locally.

use crate::models::Facet;
use crate::view::FacetRow;

/// Answers whether a facet is currently selected
pub type SelectionPredicate = Box<dyn Fn(&Facet) -> bool>;

/// Invoked once per checkbox activation
pub type FacetCallback = Box<dyn FnMut(&Facet)>;

pub struct FacetSelection {
    is_selected: SelectionPredicate,
    on_check: Option<FacetCallback>,
}

impl FacetSelection {
    pub fn new(is_selected: SelectionPredicate, on_check: Option<FacetCallback>) -> Self {
        Self {
            is_selected,
            on_check,
        }
    }

    pub fn is_selected(&self, facet: &Facet) -> bool {
        (self.is_selected)(facet)
    }

    pub fn row(&self, facet: &Facet) -> FacetRow {
        FacetRow {
            name: facet.name.clone(),
            checked: self.is_selected(facet),
        }
    }

    pub fn rows(&self, facets: &[Facet]) -> Vec<FacetRow> {
        facets.iter().map(|facet| self.row(facet)).collect()
    }

    /// Report a checkbox activation. Returns false when no callback is set.
    pub fn toggle(&mut self, facet: &Facet) -> bool {
        match self.on_check.as_mut() {
            Some(on_check) => {
                on_check(facet);
                true
            }
            None => {
                log::warn!("facet '{}' toggled but no on_filter_check is set", facet.name);
                false
            }
        }
    }
}

impl std::fmt::Debug for FacetSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetSelection")
            .field("on_check", &self.on_check.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn test_rows_follow_predicate() {
        let selection = FacetSelection::new(Box::new(|f: &Facet| f.name == "Puma"), None);
        let rows = selection.rows(&[Facet::new("Nike"), Facet::new("Puma")]);

        assert_eq!(
            rows,
            vec![
                FacetRow { name: "Nike".into(), checked: false },
                FacetRow { name: "Puma".into(), checked: true },
            ]
        );
    }

    #[test]
    fn test_predicate_queried_on_every_render() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let selection = FacetSelection::new(
            Box::new(move |_: &Facet| {
                counter.set(counter.get() + 1);
                false
            }),
            None,
        );

        let facet = Facet::new("Nike");
        selection.row(&facet);
        selection.row(&facet);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_toggle_reports_without_flipping() {
        let selected: Rc<RefCell<HashSet<String>>> = Rc::default();
        let checks = Rc::new(RefCell::new(Vec::new()));

        let reader = selected.clone();
        let log = checks.clone();
        let mut selection = FacetSelection::new(
            Box::new(move |f: &Facet| reader.borrow().contains(&f.name)),
            Some(Box::new(move |f: &Facet| log.borrow_mut().push(f.name.clone()))),
        );

        let nike = Facet::new("Nike");
        assert!(selection.toggle(&nike));
        assert_eq!(*checks.borrow(), vec!["Nike".to_string()]);
        // the caller has not updated its model, so the row stays unchecked
        assert!(!selection.row(&nike).checked);

        selected.borrow_mut().insert("Nike".to_string());
        assert!(selection.row(&nike).checked);
    }

    #[test]
    fn test_toggle_without_callback() {
        let mut selection = FacetSelection::new(Box::new(|_: &Facet| true), None);
        assert!(!selection.toggle(&Facet::new("Nike")));
    }
}
