use formfor::prelude::*;
use serde_json::{Value, json};

fn colors() -> State<Vec<Value>> {
    State::new(vec![
        json!({ "label": "Red", "value": 1 }),
        json!({ "label": "Green", "value": 2 }),
        json!({ "label": "Blue", "value": 3 }),
    ])
}

fn opened(config: SelectFieldConfig, form: &Form) -> SelectField {
    let mut field = SelectField::mount(config, colors(), form);
    field.tick();
    field.click(ClickTarget::ToggleButton);
    field.tick();
    field
}

fn press(field: &mut SelectField, key: Key) -> EventResult {
    field.key_down(&KeyCombo::key(key))
}

#[test]
fn test_opening_resets_highlight() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    assert_eq!(field.mouse_over_index(), None);
    press(&mut field, Key::Down);
    assert_eq!(field.mouse_over_index(), Some(0));

    press(&mut field, Key::Escape);
    field.tick();
    field.click(ClickTarget::ToggleButton);
    assert!(field.is_open());
    assert_eq!(field.mouse_over_index(), None);
    assert!(field.mouse_over_option().is_none());
}

#[test]
fn test_down_wraps_from_last_to_first() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    for _ in 0..3 {
        press(&mut field, Key::Down);
    }
    assert_eq!(field.mouse_over_index(), Some(2));
    press(&mut field, Key::Down);
    assert_eq!(field.mouse_over_index(), Some(0));
}

#[test]
fn test_up_wraps_from_first_to_last() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    press(&mut field, Key::Up);
    assert_eq!(field.mouse_over_index(), Some(2));
    press(&mut field, Key::Up);
    press(&mut field, Key::Up);
    assert_eq!(field.mouse_over_index(), Some(0));
    press(&mut field, Key::Up);
    assert_eq!(field.mouse_over_index(), Some(2));
}

#[test]
fn test_up_then_down_round_trip() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color").allow_blank(), &form);
    for start in 0..4 {
        field.hover(start);
        for n in 0..9 {
            for _ in 0..n {
                press(&mut field, Key::Up);
            }
            for _ in 0..n {
                press(&mut field, Key::Down);
            }
            assert_eq!(field.mouse_over_index(), Some(start), "start {start}, n {n}");
        }
    }
}

#[test]
fn test_enter_commits_highlight() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    for _ in 0..3 {
        press(&mut field, Key::Down);
    }
    assert_eq!(
        field.mouse_over_option(),
        Some(&ListEntry::Item(json!({ "label": "Blue", "value": 3 })))
    );

    let result = press(&mut field, Key::Enter);
    assert_eq!(result, EventResult::Consumed);
    assert!(result.prevents_default());
    assert!(result.stops_propagation());
    assert_eq!(form.value("color"), Ok(json!(3)));
    assert!(!field.is_open());
}

#[test]
fn test_enter_without_highlight_clears_value() {
    let form = Form::new();
    form.register_form_field("color").bindable.set(json!(1));
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    assert_eq!(field.mouse_over_index(), None);
    assert_eq!(field.selected_label(), "Red");

    let result = press(&mut field, Key::Enter);
    assert_eq!(result, EventResult::Consumed);
    assert!(!field.is_open());
    assert_eq!(form.value("color"), Ok(Value::Null));
    assert!(field.selected_option().is_none());

    field.tick();
    assert!(field.is_toggle_armed());
}

#[test]
fn test_escape_closes_without_selecting() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    press(&mut field, Key::Down);
    let result = press(&mut field, Key::Escape);
    assert_eq!(result, EventResult::Handled);
    assert!(!result.prevents_default());
    assert!(!field.is_open());
    assert_eq!(form.value("color"), Ok(Value::Null));
}

#[test]
fn test_dom_key_codes() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    field.key_code(40);
    field.key_code(40);
    assert_eq!(field.mouse_over_index(), Some(1));
    field.key_code(38);
    assert_eq!(field.mouse_over_index(), Some(0));
    assert_eq!(field.key_code(13), EventResult::Consumed);
    assert_eq!(form.value("color"), Ok(json!(1)));
}

#[test]
fn test_hover_sets_highlight_directly() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    assert!(field.hover(2).is_handled());
    assert_eq!(field.mouse_over_index(), Some(2));
    assert_eq!(field.hover(3), EventResult::Ignored);
    assert_eq!(field.mouse_over_index(), Some(2));
}

#[test]
fn test_filtered_length_change_resets_highlight() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color").enable_filtering(), &form);
    field.hover(2);
    field.set_filter("re");
    assert_eq!(field.filtered_options().len(), 2);
    assert_eq!(field.mouse_over_index(), None);
}

#[test]
fn test_keys_ignored_while_closed() {
    let form = Form::new();
    let mut field = SelectField::mount(SelectFieldConfig::new("color"), colors(), &form);
    field.tick();
    assert_eq!(press(&mut field, Key::Down), EventResult::Ignored);
    assert_eq!(press(&mut field, Key::Enter), EventResult::Ignored);
    assert_eq!(field.mouse_over_index(), None);
    assert_eq!(form.value("color"), Ok(Value::Null));
}

#[test]
fn test_modified_keys_ignored() {
    let form = Form::new();
    let mut field = opened(SelectFieldConfig::new("color"), &form);
    let result = field.key_down(&KeyCombo::key(Key::Down).ctrl());
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(field.mouse_over_index(), None);
}

#[test]
fn test_navigation_on_empty_list() {
    let form = Form::new();
    let mut field = SelectField::mount(
        SelectFieldConfig::new("color").enable_filtering().filter("zzz"),
        colors(),
        &form,
    );
    field.tick();
    field.click(ClickTarget::ToggleButton);
    press(&mut field, Key::Down);
    press(&mut field, Key::Up);
    assert_eq!(field.mouse_over_index(), None);
}
