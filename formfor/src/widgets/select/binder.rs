//! Mapping between the bound form value and the selected option.

use serde_json::Value;

use super::item::FieldNames;

/// The option currently matching the bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Index into the source options.
    pub index: usize,
    /// The option record.
    pub option: Value,
    /// Its display label, empty when the option has none.
    pub label: String,
}

/// Find the first option whose value field equals `value`.
///
/// A `Null` value means "nothing bound" and never selects an option, even one
/// without a value field.
pub fn find_selection(options: &[Value], value: &Value, fields: &FieldNames) -> Option<Selection> {
    if value.is_null() {
        return None;
    }
    options
        .iter()
        .position(|option| fields.value_of(option) == Some(value))
        .map(|index| {
            let option = options[index].clone();
            let label = fields.label_of(&option).unwrap_or_default();
            Selection {
                index,
                option,
                label,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn colors() -> Vec<Value> {
        vec![
            json!({ "label": "Red", "value": 1 }),
            json!({ "label": "Green", "value": 2 }),
            json!({ "label": "Lime", "value": 2 }),
        ]
    }

    #[test]
    fn first_match_wins() {
        let selection = find_selection(&colors(), &json!(2), &FieldNames::default()).unwrap();
        assert_eq!(selection.index, 1);
        assert_eq!(selection.label, "Green");
    }

    #[test]
    fn miss_is_no_selection() {
        assert_eq!(find_selection(&colors(), &json!(9), &FieldNames::default()), None);
        assert_eq!(find_selection(&colors(), &json!("1"), &FieldNames::default()), None);
    }

    #[test]
    fn null_never_selects() {
        let options = vec![json!({ "label": "No value" })];
        assert_eq!(find_selection(&options, &Value::Null, &FieldNames::default()), None);
    }
}
