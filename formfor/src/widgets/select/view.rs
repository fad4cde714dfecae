//! Render snapshot of a select field.

use super::state::SelectField;

/// One dropdown row as a renderer should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: String,
    /// Keyboard or pointer highlight.
    pub highlighted: bool,
    /// Bound to the current form value.
    pub selected: bool,
    /// The empty option.
    pub blank: bool,
}

/// Everything a renderer needs to draw a select field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub label: Option<String>,
    pub help: Option<String>,
    /// Selected label, or the placeholder.
    pub display_text: String,
    pub is_open: bool,
    pub disabled: bool,
    pub filter_text: String,
    /// Empty while the dropdown is closed.
    pub rows: Vec<RowView>,
    pub scroll_top: u16,
}

impl SelectField {
    /// Snapshot the field for rendering.
    pub fn view(&self) -> SelectView {
        let value = self.value();
        let rows = if self.is_open {
            self.filtered
                .iter()
                .enumerate()
                .map(|(i, entry)| RowView {
                    label: entry.label(&self.fields),
                    highlighted: self.mouse_over == Some(i),
                    selected: !value.is_null() && entry.bound_value(&self.fields) == value,
                    blank: entry.is_blank(),
                })
                .collect()
        } else {
            Vec::new()
        };

        SelectView {
            label: self.config.label.clone(),
            help: self.config.help.clone(),
            display_text: self.display_text().to_string(),
            is_open: self.is_open,
            disabled: self.is_disabled(),
            filter_text: self.filter_text(),
            rows,
            scroll_top: self.scroll_top,
        }
    }
}
