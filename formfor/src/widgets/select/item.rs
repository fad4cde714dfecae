//! Option records and the entries of a filtered option list.

use serde_json::Value;

/// Names of the option fields holding the label and the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub label: String,
    pub value: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LABEL, Self::DEFAULT_VALUE)
    }
}

impl FieldNames {
    pub const DEFAULT_LABEL: &'static str = "label";
    pub const DEFAULT_VALUE: &'static str = "value";

    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Display text of an option.
    ///
    /// Strings are used as-is, numbers and booleans are rendered. Anything
    /// else, including a missing field, has no label.
    pub fn label_of(&self, option: &Value) -> Option<String> {
        match option.get(&self.label)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Value field of an option, if present.
    pub fn value_of<'a>(&self, option: &'a Value) -> Option<&'a Value> {
        option.get(&self.value)
    }
}

/// One row of the filtered option list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    /// The empty option, present when blank selection is allowed.
    Blank,
    /// A copy of one of the source options.
    Item(Value),
}

impl ListEntry {
    pub fn is_blank(&self) -> bool {
        matches!(self, ListEntry::Blank)
    }

    /// The copied option record, `None` for the blank entry.
    pub fn option(&self) -> Option<&Value> {
        match self {
            ListEntry::Blank => None,
            ListEntry::Item(option) => Some(option),
        }
    }

    /// The value this entry writes to the form when selected.
    ///
    /// The blank entry, and options without a value field, write `Null`.
    pub fn bound_value(&self, fields: &FieldNames) -> Value {
        self.option()
            .and_then(|option| fields.value_of(option))
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Row text. The blank entry renders as an empty string.
    pub fn label(&self, fields: &FieldNames) -> String {
        self.option()
            .and_then(|option| fields.label_of(option))
            .unwrap_or_default()
    }
}
