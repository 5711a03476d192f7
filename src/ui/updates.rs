use colored::Colorize;

use accordion_core::FilterAccordion;

use crate::state::{AppState, UiState};
use crate::ui::dialogs::print_status;
use crate::ui::formatting::format_render_tree;

/// Recompose the accordion and print it with the title and status line
pub fn refresh_view(accordion: &FilterAccordion, state: &AppState, ui: &mut UiState) {
    println!();
    println!("{}", state.get_title().underline());

    for line in format_render_tree(&accordion.render()) {
        println!("{}", line);
    }

    println!("{}", state.selection_summary().dimmed());

    flush_status(ui);
}

/// Print the pending status line, if any
pub fn flush_status(ui: &mut UiState) {
    if let Some(status) = ui.take_status() {
        print_status(&status);
    }
}

/// Current render tree as pretty JSON
pub fn render_json(accordion: &FilterAccordion) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&accordion.render())
}
