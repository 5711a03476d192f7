use clap::Parser;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use errors::DisplayError;
use handlers::{build_accordion, handle_line, Outcome};
use operations::FileOperations;
use state::{AppState, StatusLevel, UiState};
use ui::{flush_status, refresh_view, render_json, show_error};

/// Filter Accordion - browse product-search filter groups one at a time
///
/// Examples:
///   # Show the collapsed accordion
///   facet-accordion filters.json
///
///   # Open the brand group and check a facet
///   facet-accordion filters.json --event "toggle brand" --event "check brand Nike"
///
///   # Start with selections and drive it by hand
///   facet-accordion filters.json --select Nike --interactive
///
///   # Replay events and dump the resulting view as JSON
///   facet-accordion filters.json --event "toggle brand" --json
#[derive(Parser, Debug)]
#[command(name = "facet-accordion")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Accordion Rules:\n  \
    - At most one group is open; opening a group hides all the others\n  \
    - Toggling the open group again closes it\n  \
    - 'root' or 'enter' on the breadcrumb closes whatever is open\n  \
    - Groups without facets are never shown\n  \
    - The categories group (@categories) is always listed first\n\n\
Commands:\n  \
    toggle <group-id>, root, key <KeyName>, enter,\n  \
    check <group-id> <facet>, category <category-id>,\n  \
    clear, show, help, quit")]
struct Cli {
    /// Path to the filter document JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Label catalog JSON (flat key/text object)
    #[arg(short, long, value_name = "FILE")]
    labels: Option<PathBuf>,

    /// Command to replay (can be specified multiple times)
    #[arg(short, long = "event", value_name = "CMD")]
    events: Vec<String>,

    /// Read commands from stdin after replaying events
    #[arg(short, long)]
    interactive: bool,

    /// Facet selected at start (can be specified multiple times)
    #[arg(short, long = "select", value_name = "NAME")]
    selections: Vec<String>,

    /// Print the final render tree as JSON instead of the text view
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(&cli);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        match e.downcast_ref::<DisplayError>() {
            Some(display) => show_error(&display.title, &display.message, &display.details),
            None => log::error!("{:#}", e),
        }
        process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let app_state = Rc::new(RefCell::new(AppState::new()));

    let file_ops = FileOperations::new(&app_state);
    file_ops.load_file(&cli.file)?;
    let labels = file_ops.load_catalog(cli.labels.as_deref())?;

    let mut ui = UiState::new();
    let group_count = app_state.borrow().filters().len();
    ui.set_status(
        format!("Loaded {} filter group(s)", group_count),
        StatusLevel::Success,
    );
    apply_initial_selections(&app_state, &cli.selections, &mut ui);

    let mut accordion = build_accordion(&app_state, labels)?;

    if cli.json {
        // Replay silently, then emit the resulting tree
        for event in &cli.events {
            if handle_line(event, &mut accordion, &app_state, &mut ui) == Outcome::Quit {
                break;
            }
        }
        println!("{}", render_json(&accordion)?);
        return Ok(());
    }

    refresh_view(&accordion, &app_state.borrow(), &mut ui);

    for event in &cli.events {
        println!("\n> {}", event);
        match handle_line(event, &mut accordion, &app_state, &mut ui) {
            Outcome::Refresh => refresh_view(&accordion, &app_state.borrow(), &mut ui),
            Outcome::Unchanged => flush_status(&mut ui),
            Outcome::Quit => return Ok(()),
        }
    }

    if cli.interactive {
        run_interactive(&mut accordion, &app_state, &mut ui)?;
    }

    Ok(())
}

/// Seed the selection model from `--select`
fn apply_initial_selections(app_state: &Rc<RefCell<AppState>>, names: &[String], ui: &mut UiState) {
    let mut state = app_state.borrow_mut();
    let filters = state.filters();
    let unknown: Vec<&str> = names
        .iter()
        .filter(|name| !filters.iter().any(|group| group.facet(name).is_some()))
        .map(String::as_str)
        .collect();

    if !unknown.is_empty() {
        ui.set_status(
            format!("--select matched no facet: {}", unknown.join(", ")),
            StatusLevel::Warning,
        );
    }
    state.selected_facets.extend(names.iter().cloned());
}

fn run_interactive(
    accordion: &mut accordion_core::FilterAccordion,
    app_state: &Rc<RefCell<AppState>>,
    ui: &mut UiState,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    while !ui.quit_requested {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match handle_line(&line, accordion, app_state, ui) {
            Outcome::Refresh => refresh_view(accordion, &app_state.borrow(), ui),
            Outcome::Unchanged => flush_status(ui),
            Outcome::Quit => {}
        }
    }

    Ok(())
}
