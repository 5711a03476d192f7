use colored::Colorize;

use accordion_core::{
    Breadcrumb, CategoryPanel, Emphasis, FacetRow, Glyph, RenderTree, Section, SectionBody,
};

const INDENT: &str = "    ";

fn glyph_str(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::CaretRight => "›",
    }
}

/// Breadcrumb line: primary label, then caret and open group when present
pub fn format_header(header: &Breadcrumb) -> String {
    let primary = match header.primary.emphasis {
        Emphasis::Normal => header.primary.text.bold(),
        Emphasis::Muted => header.primary.text.dimmed(),
    };

    match &header.trail {
        Some(trail) => format!(
            "{} {} {}",
            primary,
            glyph_str(trail.separator),
            trail.label.bold()
        ),
        None => primary.to_string(),
    }
}

fn format_facet_row(row: &FacetRow) -> String {
    let checkbox = if row.checked {
        "[x]".green()
    } else {
        "[ ]".normal()
    };
    format!("{}{} {}", INDENT, checkbox, row.name)
}

fn format_category_panel(panel: &CategoryPanel) -> Vec<String> {
    if !panel.is_visible {
        return vec![format!("{}{}", INDENT, "(no categories)".dimmed())];
    }

    panel
        .rows
        .iter()
        .map(|row| {
            format!(
                "{}{}{} {}",
                INDENT,
                "  ".repeat(row.depth),
                row.label,
                format!("[{}]", row.id).dimmed()
            )
        })
        .collect()
}

/// Header line of a section plus its body when expanded
pub fn format_section(section: &Section) -> Vec<String> {
    let marker = if section.expanded { "▾" } else { "▸" };
    let mut lines = vec![format!("{} {}", marker, section.title.bold())];

    if section.expanded {
        match &section.body {
            SectionBody::Facets(rows) => lines.extend(rows.iter().map(format_facet_row)),
            SectionBody::Categories(panel) => lines.extend(format_category_panel(panel)),
        }
    }

    lines
}

/// All lines of the render tree, header first
pub fn format_render_tree(tree: &RenderTree) -> Vec<String> {
    let mut lines = vec![format_header(&tree.header), "─".repeat(32)];

    if tree.sections.is_empty() {
        lines.push("(nothing to show)".dimmed().to_string());
    }
    for section in &tree.sections {
        lines.extend(format_section(section));
    }

    lines
}
