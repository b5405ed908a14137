//! The render payload: everything the renderer needs to draw one frame.

use super::types::{ListItem, SessionState};
use super::Session;
use crate::pattern_definitions::PatternRecord;

/// One drawable row of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub title: String,
    pub description: String,
}

/// The search input, shown only while typing a global search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInput<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View<'a> {
    pub title: &'a str,
    pub prompt: String,
    pub input: Option<TextInput<'a>>,
    pub rows: Vec<Row>,
    /// Index into `rows`; `None` when the list is empty.
    pub selected: Option<usize>,
    /// The command awaiting confirmation.
    pub command: Option<&'a str>,
    /// Record under the cursor, for the details block.
    pub highlighted_pattern: Option<&'a PatternRecord>,
}

impl Session {
    fn row(&self, item: &ListItem) -> Row {
        match item {
            ListItem::Pattern(index) => {
                let pattern = &self.patterns[*index];
                Row {
                    title: pattern.title(),
                    description: pattern.short_description.clone(),
                }
            }
            ListItem::Facet(value) => Row {
                title: value.clone(),
                description: String::new(),
            },
            ListItem::FilterOption(mode) => Row {
                title: mode.to_string(),
                description: mode.description().to_string(),
            },
            ListItem::Confirm(choice) => Row {
                title: choice.to_string(),
                description: choice.description().to_string(),
            },
        }
    }

    fn prompt(&self) -> String {
        match &self.state {
            SessionState::Selecting => {
                "Select a pattern (up/down to navigate, enter to select, / to filter):".to_string()
            }
            SessionState::FilterMenu => "Select filter type:".to_string(),
            SessionState::Filtering(mode) if mode.is_facet() => {
                format!("Select {mode} (up/down to navigate, enter to select, esc to cancel):")
            }
            SessionState::Filtering(mode) => {
                format!("Filter {mode} (type to filter, esc to cancel):")
            }
            SessionState::Confirming { .. } => "Do you want to execute this command?".to_string(),
            SessionState::Executing { command } => format!("Executing command: {command}"),
            SessionState::Aborted => String::new(),
        }
    }

    /// Builds the payload for the current frame.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        let input = match self.state {
            SessionState::Filtering(mode) if !mode.is_facet() => Some(TextInput {
                value: &self.query,
                placeholder: &self.config.display.placeholder,
            }),
            _ => None,
        };

        let command = match &self.state {
            SessionState::Confirming { command } | SessionState::Executing { command } => {
                Some(command.as_str())
            }
            _ => None,
        };

        View {
            title: &self.config.display.title,
            prompt: self.prompt(),
            input,
            rows: self.items.iter().map(|item| self.row(item)).collect(),
            selected: self.selected_index(),
            command,
            highlighted_pattern: self.highlighted_pattern(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SessionConfig;
    use crate::pattern_definitions::PatternRecord;
    use crate::session::{Event, Session};

    fn session() -> Session {
        let mut config = SessionConfig::default();
        config.display.title = "My Patterns".to_string();
        config.display.placeholder = "search...".to_string();

        Session::new(
            vec![
                PatternRecord::new("a", "Alpha", "First", &["x"], &[]),
                PatternRecord::new("b", "Beta", "Second", &["y"], &["hot"]),
            ],
            config,
        )
    }

    #[test]
    fn test_selecting_view() {
        let session = session();
        let view = session.view();

        assert_eq!(view.title, "My Patterns");
        assert!(view.prompt.starts_with("Select a pattern"));
        assert!(view.input.is_none());
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].title, "Alpha (dir: \"a\")");
        assert_eq!(view.rows[0].description, "First");
        assert_eq!(view.selected, Some(0));
        assert_eq!(view.highlighted_pattern.map(|p| p.directory_name.as_str()), Some("a"));
    }

    #[test]
    fn test_filter_menu_view() {
        let mut session = session();
        session.handle(Event::OpenFilter);
        let view = session.view();

        assert_eq!(view.prompt, "Select filter type:");
        let titles: Vec<_> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Global Search", "Tags", "Categories", "Directories"]);
        assert!(view.highlighted_pattern.is_none());
    }

    #[test]
    fn test_global_search_view_has_input() {
        let mut session = session();
        session.handle(Event::OpenFilter);
        session.handle(Event::Confirm);
        session.handle(Event::Input('b'));
        let view = session.view();

        let input = view.input.unwrap();
        assert_eq!(input.value, "b");
        assert_eq!(input.placeholder, "search...");
        assert_eq!(view.prompt, "Filter Global Search (type to filter, esc to cancel):");
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn test_confirming_view_shows_command() {
        let mut session = session();
        session.handle(Event::Confirm);
        let view = session.view();

        assert_eq!(view.command, Some("pbpaste | fabric --pattern a"));
        let titles: Vec<_> = view.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Yes", "No"]);
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let session = Session::new(Vec::new(), SessionConfig::default());
        let view = session.view();
        assert!(view.rows.is_empty());
        assert!(view.selected.is_none());
    }
}
