//! Event handling for the SelectField widget.

use log::{debug, trace};
use serde_json::Value;

use crate::events::{ClickTarget, EventResult};
use crate::keybinds::{Key, KeyCombo};
use crate::runtime::{ListenerTarget, TimerHandle};

use super::item::ListEntry;
use super::state::{Deferred, SelectField};

impl SelectField {
    /// Dispatch a click.
    ///
    /// The target's own handler runs first, then the click bubbles to the
    /// document listener. The listener that closes an open dropdown is armed
    /// one tick after opening, so the click that opened it never closes it.
    pub fn click(&mut self, target: ClickTarget) -> EventResult {
        if self.is_inert() {
            return EventResult::Ignored;
        }

        let mut result = match target {
            ClickTarget::ToggleButton => {
                if self.listeners.take(ListenerTarget::ToggleButton) {
                    self.click_to_open();
                    EventResult::Handled
                } else {
                    EventResult::Ignored
                }
            }
            ClickTarget::Option(index) => match self.filtered.get(index).cloned() {
                Some(entry) if self.is_open => {
                    self.select_option(&entry);
                    EventResult::Handled
                }
                _ => EventResult::Ignored,
            },
            ClickTarget::Outside => EventResult::Ignored,
        };

        if self.listeners.take(ListenerTarget::Document) {
            trace!("SelectField::click id={} document listener fired", self.id);
            self.close();
            result = EventResult::Handled;
        }

        self.digest();
        result
    }

    /// Handle a key press while the field has focus.
    ///
    /// Keys are only handled while the dropdown is open. Enter commits the
    /// highlighted row like a click would; with nothing highlighted it clears
    /// the bound value. Enter is consumed so that it does not also submit an
    /// enclosing form.
    pub fn key_down(&mut self, key: &KeyCombo) -> EventResult {
        if self.is_inert() || !self.is_open {
            return EventResult::Ignored;
        }
        if key.modifiers.ctrl || key.modifiers.alt {
            return EventResult::Ignored;
        }

        let result = match key.key {
            Key::Escape => {
                self.close();
                EventResult::Handled
            }
            Key::Enter => {
                let entry = self.mouse_over_option().cloned().unwrap_or(ListEntry::Blank);
                self.select_option(&entry);
                EventResult::Consumed
            }
            Key::Up => {
                self.highlight_previous();
                EventResult::Handled
            }
            Key::Down => {
                self.highlight_next();
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        };

        self.digest();
        result
    }

    /// Handle a key press given as a DOM `keyCode`.
    pub fn key_code(&mut self, code: u32) -> EventResult {
        match Key::from_key_code(code) {
            Some(key) => self.key_down(&KeyCombo::key(key)),
            None => EventResult::Ignored,
        }
    }

    /// Highlight the row under the pointer.
    pub fn hover(&mut self, index: usize) -> EventResult {
        if self.is_inert() || !self.is_open || index >= self.filtered.len() {
            return EventResult::Ignored;
        }
        self.mouse_over = Some(index);
        EventResult::Handled
    }

    /// Commit `entry` as the selection and close the dropdown.
    ///
    /// The blank entry clears the bound value.
    pub fn select_option(&mut self, entry: &ListEntry) {
        let Some(model) = self.model.as_ref() else {
            return;
        };
        let value = entry.bound_value(&self.fields);
        debug!("SelectField::select_option id={} value={}", self.id, value);
        model.bindable.set(value);
        self.close();
        self.digest();
    }

    /// Advance one event-loop tick: run deferred work that became due, then
    /// digest.
    pub fn tick(&mut self) {
        if self.is_inert() {
            return;
        }
        for (handle, task) in self.timers.advance() {
            self.run_deferred(handle, task);
        }
        self.digest();
    }

    /// Tear the field down.
    ///
    /// Armed listeners and pending deferred work are dropped, and the field
    /// ignores every event afterwards.
    pub fn unmount(&mut self) {
        debug!("SelectField::unmount id={}", self.id);
        self.listeners.clear();
        self.timers.cancel_all();
        self.pending = Default::default();
        self.is_open = false;
        self.mouse_over = None;
        self.model = None;
    }

    /// Whether the document click-to-close listener is armed.
    pub fn is_document_listener_armed(&self) -> bool {
        self.listeners.is_armed(ListenerTarget::Document)
    }

    /// Whether the toggle button will open the dropdown when clicked.
    pub fn is_toggle_armed(&self) -> bool {
        self.listeners.is_armed(ListenerTarget::ToggleButton)
    }

    /// Number of deferred tasks waiting for a tick.
    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    // -------------------------------------------------------------------------
    // State machine
    // -------------------------------------------------------------------------

    fn click_to_open(&mut self) {
        if self.is_disabled() {
            debug!("SelectField::click_to_open id={} ignored: disabled", self.id);
            self.arm_toggle_later();
            return;
        }
        if self.is_open {
            return;
        }

        debug!("SelectField::open id={}", self.id);
        self.is_open = true;
        self.cancel_open_timers();
        self.pending.document = Some(self.timers.schedule(Deferred::ArmDocumentClick, 1));
        let value = self.value();
        self.pending.scroll = Some(self.timers.schedule(Deferred::ScrollTo(value), 1));
    }

    /// Leave the open state: drop the document listener and any work still
    /// pending for the open dropdown, then re-arm the toggle button.
    fn close(&mut self) {
        if !self.is_open {
            return;
        }
        debug!("SelectField::close id={}", self.id);
        self.is_open = false;
        self.listeners.disarm(ListenerTarget::Document);
        self.cancel_open_timers();
        self.arm_toggle_later();
    }

    fn run_deferred(&mut self, handle: TimerHandle, task: Deferred) {
        trace!("SelectField::run_deferred id={} {:?}", self.id, task);
        match task {
            Deferred::ArmDocumentClick => {
                if self.pending.document == Some(handle) {
                    self.pending.document = None;
                }
                if self.is_open {
                    self.listeners.arm(ListenerTarget::Document);
                }
            }
            Deferred::ArmToggleClick => {
                if self.pending.toggle == Some(handle) {
                    self.pending.toggle = None;
                }
                if !self.is_open {
                    self.listeners.arm(ListenerTarget::ToggleButton);
                }
            }
            Deferred::ScrollTo(value) => {
                if self.pending.scroll == Some(handle) {
                    self.pending.scroll = None;
                }
                if self.is_open {
                    self.scroll_to_value(&value);
                }
            }
        }
    }

    /// Scroll so the row bound to `value` sits at the top of the container.
    /// The blank row is bound to `Null`.
    fn scroll_to_value(&mut self, value: &Value) {
        let row = self
            .filtered
            .iter()
            .position(|entry| &entry.bound_value(&self.fields) == value);
        if let Some(index) = row {
            self.scroll_top = self.layout.row_top(index);
            trace!(
                "SelectField::scroll id={} row={} top={}",
                self.id, index, self.scroll_top
            );
        }
    }

    fn highlight_previous(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.mouse_over = Some(match self.mouse_over {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        });
    }

    fn highlight_next(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.mouse_over = Some(match self.mouse_over {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }
}
