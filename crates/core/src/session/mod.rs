//! The interactive browsing session.
//!
//! [`Session`] is a reducer: [`Session::handle`] takes one [`Event`], updates
//! the state and the visible list, and returns an [`Effect`] telling the host
//! what to do next. It performs no I/O, so the whole interaction can be driven
//! from tests without a terminal.
//!
//! # States
//!
//! ```text
//! Selecting ──/──> FilterMenu ──enter──> Filtering ──enter──> Selecting
//!     │                │ esc                 │ esc
//!     │                └───────> Selecting <─┘
//!     └──enter──> Confirming ──Yes──> Executing
//!                     └──────No────> Selecting
//! ```
//!
//! The list shown while selecting (the baseline) is always the result of the
//! last committed filter applied to the full pattern snapshot. Cancelling a
//! filter restores the baseline exactly.

mod types;
mod view;

use chrono::{DateTime, FixedOffset};
use log::{debug, error};

pub use types::{ConfirmChoice, Effect, Event, Layout, ListItem, SessionState};
pub use view::{Row, TextInput, View};

use crate::command_builder::{build_command, local_now};
use crate::config::SessionConfig;
use crate::filtering::{facet_values, filter_indices, FilterMode};
use crate::pattern_definitions::PatternRecord;
use crate::sorting::sort_patterns;

/// Source of the timestamp embedded in output file names.
pub type Clock = fn() -> DateTime<FixedOffset>;

#[derive(Clone, Copy)]
enum CursorMove {
    Up,
    Down,
}

pub struct Session {
    config: SessionConfig,
    /// Sorted snapshot; never modified after construction.
    patterns: Vec<PatternRecord>,
    /// Committed list, as positions into `patterns`.
    baseline: Vec<usize>,
    /// Cursor position on the baseline, restored when returning to it.
    baseline_selected: usize,
    items: Vec<ListItem>,
    selected: usize,
    state: SessionState,
    query: String,
    layout: Layout,
    clock: Clock,
}

impl Session {
    /// Starts a session over `patterns`, ordered by the configured sort mode.
    #[must_use]
    pub fn new(patterns: Vec<PatternRecord>, config: SessionConfig) -> Self {
        Self::with_clock(patterns, config, local_now)
    }

    /// Like [`Session::new`], with the time of command building taken from
    /// `clock`.
    #[must_use]
    pub fn with_clock(
        mut patterns: Vec<PatternRecord>,
        config: SessionConfig,
        clock: Clock,
    ) -> Self {
        sort_patterns(&mut patterns, config.sort_mode);

        let baseline: Vec<usize> = (0..patterns.len()).collect();
        let items = baseline.iter().map(|&i| ListItem::Pattern(i)).collect();
        let layout = Layout {
            width: config.display.width,
            height: config.display.height,
        };

        debug!(
            "Starting session with {} patterns sorted by {}",
            patterns.len(),
            config.sort_mode
        );

        Self {
            config,
            patterns,
            baseline,
            baseline_selected: 0,
            items,
            selected: 0,
            state: SessionState::Selecting,
            query: String::new(),
            layout,
            clock,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Cursor position, or `None` when the list is empty.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.items.len()).then_some(self.selected)
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&ListItem> {
        self.items.get(self.selected)
    }

    #[must_use]
    pub fn highlighted_pattern(&self) -> Option<&PatternRecord> {
        match self.selected_item() {
            Some(ListItem::Pattern(index)) => self.patterns.get(*index),
            _ => None,
        }
    }

    /// Whether the session reached `Executing` or `Aborted`.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Whether printable keys should go to the search input.
    #[must_use]
    pub fn accepts_text(&self) -> bool {
        self.state == SessionState::Filtering(FilterMode::GlobalSearch)
    }

    /// The records currently listed, in display order.
    #[must_use]
    pub fn visible_patterns(&self) -> Vec<&PatternRecord> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ListItem::Pattern(index) => self.patterns.get(*index),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn visible_directory_names(&self) -> Vec<&str> {
        self.visible_patterns()
            .into_iter()
            .map(|p| p.directory_name.as_str())
            .collect()
    }

    #[must_use]
    pub fn baseline_directory_names(&self) -> Vec<&str> {
        self.baseline
            .iter()
            .map(|&i| self.patterns[i].directory_name.as_str())
            .collect()
    }

    /// Applies one event. Events arriving after a terminal state are ignored.
    pub fn handle(&mut self, event: Event) -> Effect {
        if self.state.is_terminal() {
            return Effect::None;
        }

        let previous_state = self.state.clone();

        let effect = match event {
            Event::Quit => {
                self.state = SessionState::Aborted;
                Effect::Quit
            }
            Event::Resize { width, height } => {
                self.layout = Layout { width, height };
                Effect::Render
            }
            Event::Tick => Effect::None,
            Event::Up => self.move_cursor(CursorMove::Up),
            Event::Down => self.move_cursor(CursorMove::Down),
            Event::OpenFilter => self.open_filter_menu(),
            Event::Confirm => self.confirm(),
            Event::Cancel => self.cancel(),
            Event::Input(c) => self.edit_query(|query| query.push(c)),
            Event::Backspace => self.edit_query(|query| {
                query.pop();
            }),
        };

        if previous_state != self.state {
            debug!("Session {} -> {}", previous_state, self.state);
        }

        effect
    }

    fn show(&mut self, items: Vec<ListItem>, selected: usize) {
        self.items = items;
        self.selected = selected.min(self.items.len().saturating_sub(1));
    }

    fn show_baseline(&mut self) {
        let items = self.baseline.iter().map(|&i| ListItem::Pattern(i)).collect();
        self.show(items, self.baseline_selected);
    }

    fn commit(&mut self, indices: Vec<usize>, selected: usize) {
        self.baseline = indices;
        self.baseline_selected = selected;
        self.query.clear();
        self.state = SessionState::Selecting;
        self.show_baseline();
    }

    fn move_cursor(&mut self, direction: CursorMove) -> Effect {
        let length = self.items.len();
        if length == 0 {
            return Effect::None;
        }

        self.selected = match direction {
            CursorMove::Up if self.selected == 0 => length - 1,
            CursorMove::Up => self.selected - 1,
            CursorMove::Down => (self.selected + 1) % length,
        };

        Effect::Render
    }

    fn open_filter_menu(&mut self) -> Effect {
        if self.state != SessionState::Selecting {
            return Effect::None;
        }

        self.baseline_selected = self.selected;
        self.state = SessionState::FilterMenu;
        let options = FilterMode::ALL.into_iter().map(ListItem::FilterOption).collect();
        self.show(options, 0);

        Effect::Render
    }

    fn confirm(&mut self) -> Effect {
        let Some(item) = self.selected_item().cloned() else {
            // Nothing highlighted; a committed global search may still be empty
            if self.accepts_text() {
                self.commit(Vec::new(), 0);
                return Effect::Render;
            }
            return Effect::None;
        };

        match (self.state.clone(), item) {
            (SessionState::Selecting, ListItem::Pattern(index)) => {
                let pattern = &self.patterns[index];
                let timestamp = (self.clock)();
                match build_command(pattern, &self.config.command, &timestamp) {
                    Ok(command) => {
                        debug!("Selected {pattern}");
                        self.baseline_selected = self.selected;
                        self.state = SessionState::Confirming { command };
                        let choices = ConfirmChoice::ALL
                            .into_iter()
                            .map(ListItem::Confirm)
                            .collect();
                        self.show(choices, 0);
                        Effect::Render
                    }
                    Err(e) => {
                        error!("Could not build command for {pattern}: {e}");
                        Effect::None
                    }
                }
            }
            (SessionState::FilterMenu, ListItem::FilterOption(mode)) => {
                self.query.clear();
                self.state = SessionState::Filtering(mode);

                let items = if mode.is_facet() {
                    facet_values(&self.patterns, mode)
                        .into_iter()
                        .map(ListItem::Facet)
                        .collect()
                } else {
                    self.search_results()
                };
                self.show(items, 0);

                Effect::Render
            }
            (SessionState::Filtering(FilterMode::GlobalSearch), ListItem::Pattern(_)) => {
                let indices = filter_indices(&self.patterns, FilterMode::GlobalSearch, &self.query);
                self.commit(indices, self.selected);
                Effect::Render
            }
            (SessionState::Filtering(mode), ListItem::Facet(value)) => {
                let indices = filter_indices(&self.patterns, mode, &value);
                debug!("{} `{}` matched {} patterns", mode, value, indices.len());
                self.commit(indices, 0);
                Effect::Render
            }
            (SessionState::Confirming { command }, ListItem::Confirm(ConfirmChoice::Yes)) => {
                self.state = SessionState::Executing {
                    command: command.clone(),
                };
                Effect::Execute(command)
            }
            (SessionState::Confirming { .. }, ListItem::Confirm(ConfirmChoice::No)) => {
                self.state = SessionState::Selecting;
                self.show_baseline();
                Effect::Render
            }
            _ => Effect::None,
        }
    }

    fn cancel(&mut self) -> Effect {
        match self.state {
            SessionState::FilterMenu | SessionState::Filtering(_) => {
                self.query.clear();
                self.state = SessionState::Selecting;
                self.show_baseline();
                Effect::Render
            }
            _ => Effect::None,
        }
    }

    fn search_results(&self) -> Vec<ListItem> {
        filter_indices(&self.patterns, FilterMode::GlobalSearch, &self.query)
            .into_iter()
            .map(ListItem::Pattern)
            .collect()
    }

    fn edit_query<F: FnOnce(&mut String)>(&mut self, edit: F) -> Effect {
        if !self.accepts_text() {
            return Effect::None;
        }

        edit(&mut self.query);
        let items = self.search_results();
        self.show(items, 0);

        Effect::Render
    }
}
