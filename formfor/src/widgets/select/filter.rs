//! Case-insensitive substring filtering of select options.

use serde_json::Value;

use super::item::{FieldNames, ListEntry};

/// Derive the visible option list.
///
/// With filtering disabled or an empty `filter_text`, every option is kept in
/// order. Otherwise an option is kept when its label contains `filter_text`,
/// ignoring case. Options without a label never match a non-empty filter.
/// When `allow_blank` is set the blank entry is always first, even if nothing
/// else matched.
///
/// # Example
///
/// ```
/// use formfor::widgets::select::{FieldNames, ListEntry, filter_options};
/// use serde_json::json;
///
/// let options = vec![
///     json!({"label": "Red", "value": 1}),
///     json!({"label": "Blue", "value": 3}),
/// ];
/// let visible = filter_options(&options, "RE", true, true, &FieldNames::default());
/// assert_eq!(visible, vec![ListEntry::Blank, ListEntry::Item(options[0].clone())]);
/// ```
pub fn filter_options(
    options: &[Value],
    filter_text: &str,
    enable_filtering: bool,
    allow_blank: bool,
    fields: &FieldNames,
) -> Vec<ListEntry> {
    let mut filtered = Vec::with_capacity(options.len() + usize::from(allow_blank));
    if allow_blank {
        filtered.push(ListEntry::Blank);
    }

    if !enable_filtering || filter_text.is_empty() {
        filtered.extend(options.iter().cloned().map(ListEntry::Item));
    } else {
        let needle = filter_text.to_lowercase();
        filtered.extend(
            options
                .iter()
                .filter(|option| label_matches(option, &needle, fields))
                .cloned()
                .map(ListEntry::Item),
        );
    }

    filtered
}

/// Whether the option's label contains `needle`, which must already be lowercase.
fn label_matches(option: &Value, needle: &str, fields: &FieldNames) -> bool {
    fields
        .label_of(option)
        .is_some_and(|label| label.to_lowercase().contains(needle))
}
