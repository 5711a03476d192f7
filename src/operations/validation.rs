use regex::Regex;
use std::sync::OnceLock;

use accordion_core::CATEGORIES_TITLE;

/// Shorthand accepted in place of the reserved categories identifier
pub const CATEGORIES_ALIAS: &str = "@categories";

/// Validation error with field and message
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click a group header
    Toggle(String),
    /// Click the breadcrumb root
    Root,
    /// Key press on the breadcrumb root
    Key(String),
    /// Activate a facet checkbox. Holds `<group-id> <facet>` unsplit,
    /// see [`split_check_target`].
    Check(String),
    /// Pick a category in the tree
    Category(String),
    /// Drop every selection in the caller model
    Clear,
    Show,
    Help,
    Quit,
}

fn command_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<cmd>[A-Za-z]+)(?:\s+(?P<arg>.+))?$").expect("valid regex")
    })
}

fn missing(field: &str, usage: &str) -> ValidationError {
    ValidationError {
        field: field.to_string(),
        message: format!("missing argument, usage: {}", usage),
    }
}

/// Map the categories alias to the reserved identifier
pub fn resolve_group_id(id: &str) -> String {
    if id == CATEGORIES_ALIAS {
        CATEGORIES_TITLE.to_string()
    } else {
        id.to_string()
    }
}

/// Parse a command line such as `toggle brand` or `check brand Nike`
pub fn parse_command(line: &str) -> Result<Command, ValidationError> {
    let line = line.trim();
    let captures = command_re().captures(line).ok_or_else(|| ValidationError {
        field: "command".to_string(),
        message: format!("cannot parse '{}'", line),
    })?;

    let cmd = captures["cmd"].to_lowercase();
    let arg = captures.name("arg").map(|m| m.as_str().trim());

    match (cmd.as_str(), arg) {
        ("toggle" | "open", Some(id)) => Ok(Command::Toggle(resolve_group_id(id))),
        ("toggle" | "open", None) => Err(missing("group", "toggle <group-id>")),
        ("root", _) => Ok(Command::Root),
        ("enter", _) => Ok(Command::Key("Enter".to_string())),
        ("key", Some(key)) => Ok(Command::Key(key.to_string())),
        ("key", None) => Err(missing("key", "key <KeyName>")),
        ("check", Some(rest)) if rest.contains(char::is_whitespace) => {
            Ok(Command::Check(rest.to_string()))
        }
        ("check", Some(_)) => Err(missing("facet", "check <group-id> <facet-name>")),
        ("check", None) => Err(missing("group", "check <group-id> <facet-name>")),
        ("category", Some(id)) => Ok(Command::Category(id.to_string())),
        ("category", None) => Err(missing("category", "category <category-id>")),
        ("clear", _) => Ok(Command::Clear),
        ("show", _) => Ok(Command::Show),
        ("help", _) => Ok(Command::Help),
        ("quit" | "exit", _) => Ok(Command::Quit),
        (other, _) => Err(ValidationError {
            field: "command".to_string(),
            message: format!("unknown command '{}'", other),
        }),
    }
}

/// Split a `check` argument into group id and facet name.
///
/// Group titles may contain spaces, so the longest known title that is
/// followed by whitespace wins. Without a match the first word is the group.
pub fn split_check_target<'a>(target: &'a str, titles: &[&str]) -> Option<(&'a str, &'a str)> {
    let mut titles = titles.to_vec();
    titles.sort_by_key(|title| std::cmp::Reverse(title.len()));

    let known = titles.iter().find_map(|title| {
        let rest = target.strip_prefix(title)?;
        let facet = rest.trim_start();
        (facet.len() < rest.len() && !facet.is_empty()).then(|| (&target[..title.len()], facet))
    });

    known.or_else(|| {
        let (group, facet) = target.split_once(char::is_whitespace)?;
        let facet = facet.trim();
        (!facet.is_empty()).then_some((group, facet))
    })
}

pub const HELP_TEXT: &str = "\
Commands:
  toggle <group-id>            click a group header (@categories for categories)
  root                         click the breadcrumb root
  key <KeyName> | enter        press a key on the breadcrumb root
  check <group-id> <facet>     activate a facet checkbox
  category <category-id>       select a category
  clear                        drop all selections
  show                         print the current view
  help                         print this help
  quit                         leave";
