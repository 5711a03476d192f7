//! Exclusive-open accordion state.
//!
//! At most one group is open at a time. Opening a group hides every sibling
//! until it is closed again, either by toggling the same header or by a
//! dismiss from the breadcrumb root.

/// Key that dismisses the open group when pressed on the breadcrumb root
pub const DISMISS_KEY: &str = "Enter";

/// Which group, if any, is currently expanded
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum OpenState {
    #[default]
    Closed,
    Open(String),
}

/// Transition triggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccordionEvent {
    /// Header click on the group with this id
    ToggleGroup(String),
    /// Breadcrumb root click or Enter on the breadcrumb
    DismissAll,
}

impl OpenState {
    /// Identifier of the open group
    pub fn open_item(&self) -> Option<&str> {
        match self {
            OpenState::Closed => None,
            OpenState::Open(id) => Some(id),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, OpenState::Closed)
    }

    /// The group is drawn in expanded mode
    pub fn is_expanded(&self, id: &str) -> bool {
        self.open_item() == Some(id)
    }

    /// The group is drawn at all: nothing is open, or it is the open one
    pub fn is_shown(&self, id: &str) -> bool {
        match self {
            OpenState::Closed => true,
            OpenState::Open(open) => open == id,
        }
    }

    /// Pure transition function
    pub fn transition(&self, event: &AccordionEvent) -> OpenState {
        match event {
            AccordionEvent::ToggleGroup(id) if self.is_expanded(id) => OpenState::Closed,
            AccordionEvent::ToggleGroup(id) => OpenState::Open(id.clone()),
            AccordionEvent::DismissAll => OpenState::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEventKind {
    Click,
    KeyDown { key: String },
}

/// An interaction event as delivered by the host toolkit.
/// Handlers mark the default action as suppressed before mutating state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    kind: UiEventKind,
    default_prevented: bool,
}

impl UiEvent {
    pub fn click() -> Self {
        Self {
            kind: UiEventKind::Click,
            default_prevented: false,
        }
    }

    pub fn key_down(key: impl Into<String>) -> Self {
        Self {
            kind: UiEventKind::KeyDown { key: key.into() },
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> &UiEventKind {
        &self.kind
    }

    /// Key name for key-down events
    pub fn key(&self) -> Option<&str> {
        match &self.kind {
            UiEventKind::KeyDown { key } => Some(key),
            UiEventKind::Click => None,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Owner of the single `OpenState` value. No other component writes it.
#[derive(Debug, Default)]
pub struct Accordion {
    state: OpenState,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OpenState {
        &self.state
    }

    /// Apply an event and return the new state
    pub fn dispatch(&mut self, event: AccordionEvent) -> &OpenState {
        let next = self.state.transition(&event);
        if next != self.state {
            log::debug!("accordion {:?} -> {:?} on {:?}", self.state, next, event);
        }
        self.state = next;
        &self.state
    }

    /// Header click for group `id`
    pub fn handle_open(&mut self, id: &str, event: &mut UiEvent) -> &OpenState {
        event.prevent_default();
        self.dispatch(AccordionEvent::ToggleGroup(id.to_string()))
    }

    /// Breadcrumb root click
    pub fn handle_breadcrumb_click(&mut self, event: &mut UiEvent) -> &OpenState {
        event.prevent_default();
        self.dispatch(AccordionEvent::DismissAll)
    }

    /// Key press on the breadcrumb root. Only Enter dismisses; other keys
    /// pass through untouched.
    pub fn handle_key_down(&mut self, event: &mut UiEvent) -> &OpenState {
        if event.key() == Some(DISMISS_KEY) {
            event.prevent_default();
            return self.dispatch(AccordionEvent::DismissAll);
        }
        &self.state
    }
}
