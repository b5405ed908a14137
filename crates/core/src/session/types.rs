//! Type definitions for the browsing session.
//!
//! This module defines the states, input events, effects and list items the
//! session reducer works with.

use std::fmt::{Display, Formatter};

use crate::filtering::FilterMode;

/// Where the session currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Browsing the committed pattern list.
    Selecting,
    /// Choosing how to filter.
    FilterMenu,
    /// Typing a query, or picking a facet value.
    Filtering(FilterMode),
    /// Asking whether to run the built command.
    Confirming { command: String },
    /// The command was confirmed; terminal.
    Executing { command: String },
    /// The user quit; terminal.
    Aborted,
}

impl SessionState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Executing { .. } | SessionState::Aborted)
    }
}

impl Display for SessionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Selecting => f.write_str("selecting"),
            SessionState::FilterMenu => f.write_str("filter menu"),
            SessionState::Filtering(mode) => write!(f, "filtering ({mode})"),
            SessionState::Confirming { .. } => f.write_str("confirming"),
            SessionState::Executing { .. } => f.write_str("executing"),
            SessionState::Aborted => f.write_str("aborted"),
        }
    }
}

/// Input the session reacts to. The host maps raw terminal input onto these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Up,
    Down,
    Confirm,
    Cancel,
    OpenFilter,
    Quit,
    /// A character typed into the search input.
    Input(char),
    /// Delete the last character of the search input.
    Backspace,
    Resize { width: u16, height: u16 },
    Tick,
}

/// What the host should do after an event was handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Draw the current view.
    Render,
    /// Leave the event loop without running anything.
    Quit,
    /// Leave the event loop and hand the command to the dispatcher.
    Execute(String),
}

/// Answer in the confirmation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
}

impl ConfirmChoice {
    pub const ALL: [ConfirmChoice; 2] = [ConfirmChoice::Yes, ConfirmChoice::No];

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ConfirmChoice::Yes => "Execute the command",
            ConfirmChoice::No => "Cancel and return to pattern selection",
        }
    }
}

impl Display for ConfirmChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmChoice::Yes => f.write_str("Yes"),
            ConfirmChoice::No => f.write_str("No"),
        }
    }
}

/// One row of the visible list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListItem {
    /// Position of a record in the session's pattern snapshot.
    Pattern(usize),
    /// A tag, category or directory name.
    Facet(String),
    FilterOption(FilterMode),
    Confirm(ConfirmChoice),
}

/// Terminal size as last reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
}
