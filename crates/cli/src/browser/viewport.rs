use std::ops::Range;

/// The scrolled window onto the item list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Index of the first visible item.
    pub offset: usize,
    /// Number of list rows available.
    pub height: u16,
    pub width: u16,
}

impl Viewport {
    /// Scrolls just enough to keep `selected` visible, and pulls the window
    /// back up when the list is shorter than it.
    pub fn follow(&mut self, selected: Option<usize>, item_count: usize) {
        let height = self.height as usize;

        if height == 0 || item_count == 0 {
            self.offset = 0;
            return;
        }

        if let Some(selected) = selected {
            if selected < self.offset {
                self.offset = selected;
            } else if selected >= self.offset + height {
                self.offset = selected + 1 - height;
            }
        }

        self.offset = self.offset.min(item_count.saturating_sub(height));
    }

    /// Item indexes currently on screen.
    #[must_use]
    pub fn visible(&self, item_count: usize) -> Range<usize> {
        let start = self.offset.min(item_count);
        let end = (self.offset + self.height as usize).min(item_count);
        start..end
    }
}

/// Size actually used for drawing: the configured size when set and when it
/// fits, the terminal size otherwise.
#[must_use]
pub fn effective_size(requested: u16, terminal: u16) -> u16 {
    if requested == 0 || requested > terminal {
        terminal
    } else {
        requested
    }
}

/// Pads or truncates `text` to exactly `width` characters.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let length = text.chars().count();

    if length > width {
        text.chars().take(width).collect()
    } else {
        format!("{text}{}", " ".repeat(width - length))
    }
}

/// Splits `text` into lines of at most `width` characters.
#[must_use]
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let characters: Vec<char> = text.chars().collect();
    characters
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
