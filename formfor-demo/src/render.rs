//! Plain-text rendering of the demo form.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use formfor::events::ClickTarget;
use formfor::widgets::select::SelectView;
use serde_json::{Map, Value};

/// Screen row of the toggle button.
pub const TOGGLE_ROW: u16 = 3;
/// Screen row of the first dropdown row.
pub const LIST_ROW: u16 = 5;
/// Dropdown rows visible at once.
pub const VISIBLE_ROWS: u16 = 6;

/// Map a screen row to what a click there lands on.
pub fn hit_test(view: &SelectView, y: u16) -> ClickTarget {
    if y == TOGGLE_ROW {
        return ClickTarget::ToggleButton;
    }
    if view.is_open && (LIST_ROW..LIST_ROW + VISIBLE_ROWS).contains(&y) {
        let index = window_start(view) + usize::from(y - LIST_ROW);
        if index < view.rows.len() {
            return ClickTarget::Option(index);
        }
    }
    ClickTarget::Outside
}

/// First visible dropdown row for a scroll offset, clamped so the window
/// stays full when possible.
fn window_start(view: &SelectView) -> usize {
    let max_start = view.rows.len().saturating_sub(usize::from(VISIBLE_ROWS));
    usize::from(view.scroll_top).min(max_start)
}

pub fn draw(out: &mut impl Write, view: &SelectView, model: &Map<String, Value>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(
        out,
        Print("formfor select demo. Tab opens, arrows move, Enter picks, Esc closes, Ctrl+C quits.")
    )?;

    let label = view.label.as_deref().unwrap_or("");
    queue!(out, MoveTo(0, TOGGLE_ROW - 1), Print(label))?;

    let arrow = if view.is_open { "▲" } else { "▼" };
    let disabled = if view.disabled { " (disabled)" } else { "" };
    queue!(
        out,
        MoveTo(0, TOGGLE_ROW),
        Print(format!("[ {} {} ]{}", view.display_text, arrow, disabled))
    )?;
    queue!(
        out,
        MoveTo(0, TOGGLE_ROW + 1),
        Print(format!("filter: {}", view.filter_text))
    )?;

    let mut next_row = LIST_ROW;
    if view.is_open {
        let start = window_start(view);
        for (offset, row) in view
            .rows
            .iter()
            .skip(start)
            .take(usize::from(VISIBLE_ROWS))
            .enumerate()
        {
            let y = LIST_ROW + offset as u16;
            let marker = if row.selected { "*" } else { " " };
            let text = if row.blank { "(none)" } else { row.label.as_str() };
            queue!(out, MoveTo(2, y))?;
            if row.highlighted {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                out,
                Print(format!("{} {}", marker, text)),
                SetAttribute(Attribute::Reset)
            )?;
            next_row = y + 1;
        }
    }

    if let Some(help) = view.help.as_deref() {
        queue!(out, MoveTo(0, next_row + 1), Print(help))?;
    }
    queue!(
        out,
        MoveTo(0, next_row + 3),
        Print(format!("model: {}", Value::Object(model.clone())))
    )?;
    out.flush()
}
