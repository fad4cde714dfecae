mod render;
mod terminal;

use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::EventStream;
use formfor::prelude::*;
use formfor::runtime::events::{Event, convert_event};
use futures::StreamExt;
use log::{debug, error, info};
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::time::MissedTickBehavior;

use terminal::TerminalGuard;

/// Event loop turn length; deferred widget work runs once per turn.
const TICK: Duration = Duration::from_millis(16);

fn fruit_options() -> Vec<Value> {
    [
        "Apple",
        "Apricot",
        "Banana",
        "Blackberry",
        "Cherry",
        "Grape",
        "Lemon",
        "Mango",
        "Orange",
        "Peach",
        "Pear",
        "Plum",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| json!({ "label": name, "value": i + 1 }))
    .collect()
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let log_file = File::create("formfor-demo.log")?;
    if let Err(err) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    let form = Form::new();
    let config = SelectFieldConfig::new("fruit")
        .label("Favorite fruit")
        .help("Type to filter the list.")
        .placeholder("Choose a fruit...")
        .allow_blank()
        .enable_filtering()
        .filter_debounce(Duration::from_millis(150));
    let mut field = SelectField::mount(config, State::new(fruit_options()), &form);
    info!("Mounted select field {}", field.id());

    let mut term = TerminalGuard::new()?;
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        render::draw(term.stdout(), &field.view(), &form.values())?;

        tokio::select! {
            _ = ticker.tick() => field.tick(),
            next = events.next() => match next {
                Some(Ok(raw)) => {
                    let Some(event) = convert_event(raw) else {
                        continue;
                    };
                    if !dispatch(&mut field, event) {
                        break;
                    }
                }
                Some(Err(err)) => {
                    error!("Event stream error: {}", err);
                    return Err(err);
                }
                None => break,
            },
        }
    }

    field.unmount();
    info!("Final model: {}", Value::Object(form.values()));
    Ok(())
}

/// Forward one terminal event to the field. Returns `false` to quit.
fn dispatch(field: &mut SelectField, event: Event) -> bool {
    debug!("dispatch {:?}", event);
    match event {
        Event::Quit => return false,
        Event::Click { y, .. } => {
            let target = render::hit_test(&field.view(), y);
            field.click(target);
        }
        Event::Hover { y, .. } => {
            if let ClickTarget::Option(index) = render::hit_test(&field.view(), y) {
                field.hover(index);
            }
        }
        Event::Key(combo) => {
            if field.key_down(&combo).is_handled() {
                return true;
            }
            match combo.key {
                Key::Tab => {
                    field.click(ClickTarget::ToggleButton);
                }
                Key::Char(c) => {
                    let mut text = field.filter_text();
                    text.push(c);
                    field.set_filter(text);
                }
                Key::Space => {
                    let mut text = field.filter_text();
                    text.push(' ');
                    field.set_filter(text);
                }
                Key::Backspace => {
                    let mut text = field.filter_text();
                    text.pop();
                    field.set_filter(text);
                }
                _ => {}
            }
        }
    }
    true
}
