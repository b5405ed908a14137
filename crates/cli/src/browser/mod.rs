//! Interactive pattern browser.
//!
//! This module connects a [`Session`](pattern_picker_core::session::Session)
//! to the terminal: it reads crossterm events, maps them onto session events,
//! and draws the session's view after every change.
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys, vim-style (j/k) or the mouse wheel to move the cursor
//! - Enter to select, Esc to back out of a filter
//! - '/' to open the filter menu
//! - 'q' or Ctrl+C to quit

pub mod input;
pub mod ui;
pub mod viewport;

pub use input::{map_key_event, map_terminal_event};
pub use ui::run_session;
