use formfor::prelude::*;
use formfor::widgets::select::filter_options;
use serde_json::{Value, json};

fn colors() -> Vec<Value> {
    vec![
        json!({ "label": "Red", "value": 1 }),
        json!({ "label": "Green", "value": 2 }),
        json!({ "label": "Blue", "value": 3 }),
    ]
}

fn items(options: &[Value]) -> Vec<ListEntry> {
    options.iter().cloned().map(ListEntry::Item).collect()
}

#[test]
fn test_substring_filter_scenario() {
    let options = colors();
    let visible = filter_options(&options, "re", true, false, &FieldNames::default());
    assert_eq!(visible, items(&options[..2]));
}

#[test]
fn test_blank_prefix_without_filter() {
    let options = colors();
    let visible = filter_options(&options, "", true, true, &FieldNames::default());
    let mut expected = vec![ListEntry::Blank];
    expected.extend(items(&options));
    assert_eq!(visible, expected);
}

#[test]
fn test_blank_first_even_when_nothing_matches() {
    let visible = filter_options(&colors(), "purple", true, true, &FieldNames::default());
    assert_eq!(visible, vec![ListEntry::Blank]);
}

#[test]
fn test_empty_filter_copies_in_order() {
    let fixtures = vec![
        Vec::new(),
        colors(),
        vec![
            json!({ "label": "b", "value": 2 }),
            json!({ "label": "a", "value": 1 }),
            json!({ "label": "b", "value": 2 }),
        ],
    ];
    for options in fixtures {
        for enabled in [true, false] {
            let visible = filter_options(&options, "", enabled, false, &FieldNames::default());
            assert_eq!(visible, items(&options));
        }
    }
}

#[test]
fn test_retained_match_and_excluded_do_not() {
    let options = vec![
        json!({ "label": "Apple", "value": 1 }),
        json!({ "label": "apricot", "value": 2 }),
        json!({ "label": "BANANA", "value": 3 }),
        json!({ "label": "Cherry", "value": 4 }),
        json!({ "value": 5 }),
    ];
    let fields = FieldNames::default();
    for filter in ["a", "AP", "an", "rr", "x", "Cherry"] {
        let visible = filter_options(&options, filter, true, false, &fields);
        let needle = filter.to_lowercase();
        for option in &options {
            let label = fields.label_of(option).unwrap_or_default().to_lowercase();
            let kept = visible.contains(&ListEntry::Item(option.clone()));
            assert_eq!(kept, label.contains(&needle), "filter {filter:?} on {option}");
        }
    }
}

#[test]
fn test_widget_filters_by_bound_text() {
    let form = Form::new();
    let filter = State::new(String::new());
    let mut field = SelectField::mount(
        SelectFieldConfig::new("color").enable_filtering(),
        State::new(colors()),
        &form,
    )
    .bind_filter(filter.clone());
    assert_eq!(field.filtered_options().len(), 3);

    filter.set("BLU".to_string());
    field.digest();
    assert_eq!(field.filtered_options(), items(&colors()[2..]).as_slice());
    assert_eq!(field.filter_text(), "BLU");
}

#[test]
fn test_widget_initial_filter_from_config() {
    let form = Form::new();
    let field = SelectField::mount(
        SelectFieldConfig::new("color").enable_filtering().filter("re"),
        State::new(colors()),
        &form,
    );
    assert_eq!(field.filtered_options().len(), 2);
}

#[test]
fn test_refilter_follows_options_length_only() {
    let form = Form::new();
    let options = State::new(colors());
    let mut field = SelectField::mount(
        SelectFieldConfig::new("color").enable_filtering().filter("re"),
        options.clone(),
        &form,
    );
    assert_eq!(field.filtered_options().len(), 2);

    // Same length, new content: the digest does not notice.
    options.update(|o| o[2] = json!({ "label": "Cream", "value": 3 }));
    field.digest();
    assert_eq!(field.filtered_options().len(), 2);

    field.refilter();
    assert_eq!(field.filtered_options().len(), 3);

    options.update(|o| o.push(json!({ "label": "Coral", "value": 4 })));
    field.digest();
    assert_eq!(field.filtered_options().len(), 3);
    options.update(|o| o.push(json!({ "label": "Ochre", "value": 5 })));
    field.digest();
    assert_eq!(field.filtered_options().len(), 4);
}

#[test]
fn test_empty_options() {
    let form = Form::new();
    let field = SelectField::mount(
        SelectFieldConfig::new("color").allow_blank(),
        State::new(Vec::new()),
        &form,
    );
    assert_eq!(field.filtered_options(), &[ListEntry::Blank]);
}
