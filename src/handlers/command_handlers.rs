use std::cell::RefCell;
use std::rc::Rc;

use accordion_core::{AccordionError, FilterAccordion, UiEvent};

use crate::errors::map_interaction_error;
use crate::operations::{parse_command, split_check_target, Command, HELP_TEXT};
use crate::state::{AppState, StatusLevel, UiState};
use crate::ui::show_error;

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State or selections may have changed, print the view
    Refresh,
    /// Nothing to redraw, a pending status may still need printing
    Unchanged,
    Quit,
}

/// Parse and apply one input line
pub fn handle_line(
    line: &str,
    accordion: &mut FilterAccordion,
    app_state: &Rc<RefCell<AppState>>,
    ui: &mut UiState,
) -> Outcome {
    match parse_command(line) {
        Ok(command) => handle_command(command, accordion, app_state, ui),
        Err(e) => {
            show_error("Invalid Command", &e.to_string(), "Type 'help' for the command list.");
            Outcome::Unchanged
        }
    }
}

fn report_interaction_error(error: &AccordionError, ui: &mut UiState) -> Outcome {
    let (title, message, details) = map_interaction_error(error);
    log::debug!("{}: {}", title, details);
    ui.set_status(format!("{}: {}", title, message), StatusLevel::Error);
    Outcome::Unchanged
}

/// Route a command to the accordion handlers or the selection model
pub fn handle_command(
    command: Command,
    accordion: &mut FilterAccordion,
    app_state: &Rc<RefCell<AppState>>,
    ui: &mut UiState,
) -> Outcome {
    match command {
        Command::Toggle(id) => {
            let mut event = UiEvent::click();
            accordion.on_group_header_click(&id, &mut event);
            Outcome::Refresh
        }
        Command::Root => {
            let mut event = UiEvent::click();
            accordion.on_breadcrumb_click(&mut event);
            Outcome::Refresh
        }
        Command::Key(key) => {
            let mut event = UiEvent::key_down(key.as_str());
            accordion.on_breadcrumb_key_down(&mut event);
            if !event.is_default_prevented() {
                ui.set_status(format!("Key '{}' ignored", key), StatusLevel::Warning);
            }
            Outcome::Refresh
        }
        Command::Check(target) => {
            let titles: Vec<&str> = accordion
                .filters()
                .iter()
                .map(|g| g.title.as_str())
                .collect();
            let Some((group, facet)) = split_check_target(&target, &titles) else {
                ui.set_status(
                    "usage: check <group-id> <facet-name>",
                    StatusLevel::Warning,
                );
                return Outcome::Unchanged;
            };

            match accordion.on_facet_check(group, facet) {
                Ok(_) => Outcome::Refresh,
                Err(e) => report_interaction_error(&e, ui),
            }
        }
        Command::Category(id) => match accordion.on_category_select(&id) {
            Ok(()) => {
                ui.set_status(format!("Category '{}' toggled", id), StatusLevel::Success);
                Outcome::Refresh
            }
            Err(e) => report_interaction_error(&e, ui),
        },
        Command::Clear => {
            app_state.borrow_mut().clear_selections();
            ui.set_status("Selections cleared", StatusLevel::Info);
            Outcome::Refresh
        }
        Command::Show => Outcome::Refresh,
        Command::Help => {
            println!("{}", HELP_TEXT);
            Outcome::Unchanged
        }
        Command::Quit => {
            ui.request_quit();
            Outcome::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::build_accordion;
    use accordion_core::{FilterDocument, FilterGroup, MessageCatalog, OpenState};

    fn setup() -> (FilterAccordion, Rc<RefCell<AppState>>, UiState) {
        setup_with(vec![
            FilterGroup::new("brand", ["Nike", "Puma"]),
            FilterGroup::new("color", Vec::<String>::new()),
        ])
    }

    fn setup_with(filters: Vec<FilterGroup>) -> (FilterAccordion, Rc<RefCell<AppState>>, UiState) {
        let app_state = Rc::new(RefCell::new(AppState::new()));
        app_state.borrow_mut().document = Some(FilterDocument {
            filters,
            tree: Vec::new(),
        });
        let accordion = build_accordion(&app_state, MessageCatalog::new()).unwrap();
        (accordion, app_state, UiState::new())
    }

    #[test]
    fn test_toggle_then_enter() {
        let (mut accordion, app_state, mut ui) = setup();

        assert_eq!(
            handle_line("toggle brand", &mut accordion, &app_state, &mut ui),
            Outcome::Refresh
        );
        assert_eq!(accordion.open_state(), &OpenState::Open("brand".into()));

        handle_line("enter", &mut accordion, &app_state, &mut ui);
        assert!(accordion.open_state().is_closed());
    }

    #[test]
    fn test_check_updates_selection_model() {
        let (mut accordion, app_state, mut ui) = setup();

        handle_line("check brand Nike", &mut accordion, &app_state, &mut ui);
        assert!(app_state.borrow().selected_facets.contains("Nike"));
        assert!(accordion.render().facet_rows("brand")[0].checked);

        handle_line("clear", &mut accordion, &app_state, &mut ui);
        assert!(!accordion.render().facet_rows("brand")[0].checked);
    }

    #[test]
    fn test_unknown_facet_is_unchanged() {
        let (mut accordion, app_state, mut ui) = setup();
        assert_eq!(
            handle_line("check color Red", &mut accordion, &app_state, &mut ui),
            Outcome::Unchanged
        );
        assert!(app_state.borrow().selected_facets.is_empty());

        let status = ui.take_status().unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.text.starts_with("Unknown Facet"));
    }

    #[test]
    fn test_check_in_group_with_spaces() {
        let (mut accordion, app_state, mut ui) = setup_with(vec![
            FilterGroup::new("price", ["Cheap"]),
            FilterGroup::new("price range", ["Under 50", "Over 50"]),
        ]);

        handle_line("toggle price range", &mut accordion, &app_state, &mut ui);
        assert_eq!(accordion.open_state(), &OpenState::Open("price range".into()));

        assert_eq!(
            handle_line("check price range Under 50", &mut accordion, &app_state, &mut ui),
            Outcome::Refresh
        );
        assert!(app_state.borrow().selected_facets.contains("Under 50"));
        assert!(accordion.render().facet_rows("price range")[0].checked);

        handle_line("check price Cheap", &mut accordion, &app_state, &mut ui);
        assert!(app_state.borrow().selected_facets.contains("Cheap"));
    }

    #[test]
    fn test_other_key_sets_status() {
        let (mut accordion, app_state, mut ui) = setup();
        handle_line("toggle brand", &mut accordion, &app_state, &mut ui);
        handle_line("key Tab", &mut accordion, &app_state, &mut ui);

        assert_eq!(accordion.open_state().open_item(), Some("brand"));
        let status = ui.take_status().unwrap();
        assert_eq!(status.text, "Key 'Tab' ignored");
        assert_eq!(status.level, StatusLevel::Warning);
    }

    #[test]
    fn test_quit() {
        let (mut accordion, app_state, mut ui) = setup();
        assert_eq!(handle_line("quit", &mut accordion, &app_state, &mut ui), Outcome::Quit);
        assert!(ui.quit_requested);
    }
}
