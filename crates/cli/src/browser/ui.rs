use std::fmt::Display;
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::Color::{DarkBlue, DarkGreen, DarkGrey, Red, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{event, queue, terminal, ExecutableCommand};
use itertools::Itertools;
use log::debug;

use super::input::map_terminal_event;
use super::viewport::{effective_size, fit_to_width, wrap_to_width, Viewport};
use pattern_picker_core::error::Result;
use pattern_picker_core::pattern_definitions::PatternRecord;
use pattern_picker_core::session::{Effect, Event, Row, Session, View};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
    }
}

/// Runs the interactive loop until the session quits or confirms a command.
///
/// The terminal is restored before this returns, whatever the outcome. The
/// returned effect is either [`Effect::Quit`] or [`Effect::Execute`].
///
/// # Errors
///
/// Returns an error if the terminal cannot be read from or written to.
pub fn run_session(session: &mut Session) -> Result<Effect> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;

    // Raw mode and mouse capture are disabled when this goes out of scope
    let _raw_mode_guard = RawModeGuard;
    stdout.execute(EnableMouseCapture)?;

    let (width, height) = terminal::size()?;
    session.handle(Event::Resize { width, height });

    let mut viewport = Viewport::default();
    let mut should_redraw = true;

    loop {
        if should_redraw {
            draw(session, &mut viewport)?;
            should_redraw = false;
        }

        let session_event = if event::poll(POLL_INTERVAL)? {
            match map_terminal_event(&event::read()?, session.accepts_text()) {
                Some(session_event) => session_event,
                None => continue,
            }
        } else {
            Event::Tick
        };

        match session.handle(session_event) {
            Effect::None => {}
            Effect::Render => should_redraw = true,
            effect @ (Effect::Quit | Effect::Execute(_)) => {
                debug!("Leaving the browser with {:?}", effect);
                return Ok(effect);
            }
        }
    }
}

fn draw(session: &Session, viewport: &mut Viewport) -> Result<()> {
    let display = &session.config().display;
    let layout = session.layout();
    let width = effective_size(display.width, layout.width);
    let height = effective_size(display.height, layout.height);

    let view = session.view();
    let footer = footer_lines(&view, width as usize);
    let header_rows: u16 = if view.input.is_some() { 3 } else { 2 };

    viewport.width = width;
    viewport.height = height
        .saturating_sub(header_rows)
        .saturating_sub(u16::try_from(footer.len()).unwrap_or(u16::MAX));
    viewport.follow(view.selected, view.rows.len());

    let mut stdout = stdout();
    render(&mut stdout, &view, viewport, &footer)?;
    stdout.flush()?;

    Ok(())
}

fn render<W: Write>(
    out: &mut W,
    view: &View<'_>,
    viewport: &Viewport,
    footer: &[String],
) -> Result<()> {
    let width = viewport.width as usize;

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(out, view, width)?;

    queue!(
        out,
        MoveTo(0, 1),
        SetAttribute(Attribute::Bold),
        Print(fit_to_width(&view.prompt, width)),
        SetAttribute(Attribute::Reset),
    )?;

    let mut row_number: u16 = 2;

    if let Some(input) = &view.input {
        queue!(out, MoveTo(0, row_number), Print("> "))?;
        if input.value.is_empty() {
            queue!(
                out,
                SetForegroundColor(DarkGrey),
                Print(fit_to_width(input.placeholder, width.saturating_sub(2))),
                SetForegroundColor(Reset),
            )?;
        } else {
            queue!(out, Print(fit_to_width(input.value, width.saturating_sub(2))))?;
        }
        row_number += 1;
    }

    if view.rows.is_empty() {
        queue!(
            out,
            MoveTo(0, row_number),
            SetForegroundColor(Red),
            Print("No matching entries!"),
            SetForegroundColor(Reset),
        )?;
        row_number += 1;
    } else {
        for index in viewport.visible(view.rows.len()) {
            queue!(out, MoveTo(0, row_number))?;
            print_row(out, &view.rows[index], view.selected == Some(index), width)?;
            row_number += 1;
        }
    }

    // Footer starts with a blank separator line
    for line in footer.iter().skip(1) {
        row_number += 1;
        queue!(out, MoveTo(0, row_number), Print(line))?;
    }

    Ok(())
}

/// Print the header bar with the title and the cursor position
fn print_header<W: Write>(out: &mut W, view: &View<'_>, width: usize) -> Result<()> {
    let left_padding = " ".repeat(2);
    let count = view.rows.len();
    let position = view.selected.map_or(0, |index| index + 1);

    let right = format!("{}/{}  ", pad_to_width_of(position, count), count);
    let right_width = right.len().min(width);
    let left = format!("{left_padding}{}", view.title);

    queue!(
        out,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(fit_to_width(&left, width - right_width)),
        Print(fit_to_width(&right, right_width)),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

fn print_row<W: Write>(out: &mut W, row: &Row, is_selected: bool, width: usize) -> Result<()> {
    let marker = if is_selected { "> " } else { "  " };
    let title = format!("{marker}{}", row.title);
    let title_width = title.chars().count().min(width);
    let title = fit_to_width(&title, title_width);

    let remaining = width - title_width;
    let description = if row.description.is_empty() {
        fit_to_width("", remaining)
    } else {
        fit_to_width(&format!("  {}", row.description), remaining)
    };

    if is_selected {
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
            Print(title),
            Print(description),
        )?;
    } else {
        queue!(
            out,
            Print(title),
            SetForegroundColor(DarkGrey),
            Print(description),
        )?;
    }

    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Details shown under the list for the highlighted pattern.
fn detail_lines(pattern: &PatternRecord) -> Vec<String> {
    let mut lines = vec![format!("Directory: {}", pattern.directory_name)];

    if !pattern.categories.is_empty() {
        lines.push(format!("Categories: {}", pattern.categories.iter().join(", ")));
    }
    if !pattern.tags.is_empty() {
        lines.push(format!("Tags: {}", pattern.tags.iter().join(", ")));
    }
    if let Some(tokens) = pattern.estimated_token_count {
        lines.push(format!("Estimated tokens: {tokens}"));
    }
    if let Some(usage) = &pattern.usage_example {
        lines.push(format!("Usage: {}", usage.lines().next().unwrap_or_default()));
    } else if let Some(description) = &pattern.description {
        lines.push(description.lines().next().unwrap_or_default().to_string());
    }

    lines
}

/// Lines under the list, starting with an empty separator. The pending
/// command is wrapped so it is always shown in full.
fn footer_lines(view: &View<'_>, width: usize) -> Vec<String> {
    let lines: Vec<String> = if let Some(command) = view.command {
        wrap_to_width(command, width)
    } else if let Some(pattern) = view.highlighted_pattern {
        detail_lines(pattern)
            .iter()
            .map(|line| fit_to_width(line, width))
            .collect()
    } else {
        Vec::new()
    };

    if lines.is_empty() {
        lines
    } else {
        std::iter::once(String::new()).chain(lines).collect()
    }
}
