//! Select field state and change detection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::{debug, error, trace};
use serde_json::Value;

use crate::form::{FieldModel, FormController};
use crate::runtime::{ListenerRegistry, TimerHandle, TimerQueue, Watch};
use crate::state::State;

use super::binder::{Selection, find_selection};
use super::config::SelectFieldConfig;
use super::filter::filter_options;
use super::item::{FieldNames, ListEntry};
use super::layout::{RowLayout, UniformRows};

/// Unique identifier for a SelectField instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Work deferred to a later tick.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Deferred {
    /// Arm the document click listener that closes the dropdown.
    ArmDocumentClick,
    /// Arm the toggle button listener that opens the dropdown.
    ArmToggleClick,
    /// Scroll the row bound to this value into view.
    ScrollTo(Value),
}

/// Pending deferred work, one slot per kind.
#[derive(Debug, Default)]
pub(super) struct PendingTimers {
    pub(super) document: Option<TimerHandle>,
    pub(super) toggle: Option<TimerHandle>,
    pub(super) scroll: Option<TimerHandle>,
}

/// Watched inputs of the derived state.
#[derive(Debug, Default)]
struct Watches {
    filter: Watch<String>,
    options_len: Watch<usize>,
    bindable: Watch<Value>,
    open_and_len: Watch<(bool, usize)>,
}

/// A filterable dropdown bound to one field of a form.
///
/// The field is driven by its host: input events go through
/// [`click`](Self::click), [`key_down`](Self::key_down) and
/// [`hover`](Self::hover), and the host's event loop calls
/// [`tick`](Self::tick) once per turn. External writes to the options, the
/// filter text or the bound value are picked up by [`digest`](Self::digest),
/// which every handler and every tick runs before returning.
///
/// # Example
///
/// ```
/// use formfor::prelude::*;
/// use serde_json::json;
///
/// let form = Form::new();
/// let options = State::new(vec![
///     json!({"label": "Red", "value": 1}),
///     json!({"label": "Green", "value": 2}),
/// ]);
/// let mut color = SelectField::mount(SelectFieldConfig::new("color"), options, &form);
///
/// color.tick(); // toggle button becomes clickable
/// color.click(ClickTarget::ToggleButton);
/// color.click(ClickTarget::Option(1));
/// assert_eq!(form.value("color"), Ok(json!(2)));
/// assert_eq!(color.selected_label(), "Green");
/// ```
#[derive(Debug)]
pub struct SelectField {
    pub(super) id: SelectId,
    pub(super) config: SelectFieldConfig,
    pub(super) fields: FieldNames,
    pub(super) options: State<Vec<Value>>,
    pub(super) filter: State<String>,
    /// `None` when mounting failed or after unmount: the field is inert.
    pub(super) model: Option<FieldModel>,
    pub(super) layout: Box<dyn RowLayout + Send + Sync>,

    pub(super) is_open: bool,
    pub(super) mouse_over: Option<usize>,
    pub(super) filtered: Vec<ListEntry>,
    pub(super) selected: Option<Selection>,
    pub(super) scroll_top: u16,

    pub(super) listeners: ListenerRegistry,
    pub(super) timers: TimerQueue<Deferred>,
    pub(super) pending: PendingTimers,
    watches: Watches,
}

impl SelectField {
    /// Mount a select field and register it with `form`.
    ///
    /// A config without an `attribute` is logged and yields an inert field
    /// that ignores every event.
    pub fn mount(
        config: SelectFieldConfig,
        options: State<Vec<Value>>,
        form: &impl FormController,
    ) -> Self {
        let filter = State::new(config.filter.clone().unwrap_or_default());
        let mut field = Self {
            id: SelectId::new(),
            fields: config.field_names(),
            config,
            options,
            filter,
            model: None,
            layout: Box::new(UniformRows::default()),
            is_open: false,
            mouse_over: None,
            filtered: Vec::new(),
            selected: None,
            scroll_top: 0,
            listeners: ListenerRegistry::new(),
            timers: TimerQueue::new(),
            pending: PendingTimers::default(),
            watches: Watches::default(),
        };

        let attribute = match field.config.validate() {
            Ok(attribute) => attribute.to_string(),
            Err(err) => {
                error!("{}", err);
                return field;
            }
        };

        debug!("SelectField::mount id={} attribute={}", field.id, attribute);
        field.model = Some(form.register_form_field(&attribute));
        field.arm_toggle_later();
        field.digest();
        field
    }

    /// Bind the filter text to a slot owned by the host.
    pub fn bind_filter(mut self, filter: State<String>) -> Self {
        self.filter = filter;
        self.digest();
        self
    }

    /// Use `layout` to locate rows when scrolling.
    pub fn with_layout(mut self, layout: impl RowLayout + Send + Sync + 'static) -> Self {
        self.layout = Box::new(layout);
        self
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    pub fn config(&self) -> &SelectFieldConfig {
        &self.config
    }

    /// Whether the field is unmounted or failed to mount.
    pub fn is_inert(&self) -> bool {
        self.model.is_none()
    }

    // -------------------------------------------------------------------------
    // Change detection
    // -------------------------------------------------------------------------

    /// Recompute derived state whose inputs changed since the last digest.
    ///
    /// The filtered list follows the filter text and the NUMBER of options:
    /// replacing an option in place does not refilter until
    /// [`refilter`](Self::refilter) is called or the length changes. The
    /// selection follows the bound value and the number of options, so a
    /// value set before its options load resolves once they arrive.
    pub fn digest(&mut self) {
        let Some(model) = self.model.as_ref() else {
            return;
        };
        let value = model.bindable.get();

        let filter_text = self.filter.get();
        let options_len = self.options.with(Vec::len);
        let filter_changed = self.watches.filter.changed(&filter_text);
        let len_changed = self.watches.options_len.changed(&options_len);
        if filter_changed || len_changed {
            self.refilter();
        }

        let value_changed = self.watches.bindable.changed(&value);
        if value_changed || len_changed {
            self.selected = self
                .options
                .with(|options| find_selection(options, &value, &self.fields));
            trace!(
                "SelectField::digest id={} selected={:?}",
                self.id,
                self.selected.as_ref().map(|s| s.index)
            );
        }

        if self
            .watches
            .open_and_len
            .changed(&(self.is_open, self.filtered.len()))
        {
            self.mouse_over = None;
        }
    }

    /// Rebuild the filtered list from the current options and filter text.
    pub fn refilter(&mut self) {
        let filter_text = self.filter.get();
        self.filtered = self.options.with(|options| {
            filter_options(
                options,
                &filter_text,
                self.config.enable_filtering,
                self.config.allow_blank,
                &self.fields,
            )
        });
        debug!(
            "SelectField::refilter id={} filter={:?} visible={}",
            self.id,
            filter_text,
            self.filtered.len()
        );
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    /// Current filter text.
    pub fn filter_text(&self) -> String {
        self.filter.get()
    }

    /// Replace the filter text and refresh derived state.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter.set(text.into());
        self.digest();
    }

    /// Debounce interval configured for the filter input.
    pub fn filter_debounce(&self) -> Option<Duration> {
        self.config.filter_debounce_duration()
    }

    /// The visible option list.
    pub fn filtered_options(&self) -> &[ListEntry] {
        &self.filtered
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// The option matching the bound value.
    pub fn selected_option(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    /// Label of the selected option, empty when nothing is selected.
    pub fn selected_label(&self) -> &str {
        self.selected.as_ref().map_or("", |s| s.label.as_str())
    }

    /// Text for the closed field: the selected label, else the placeholder.
    pub fn display_text(&self) -> &str {
        match self.selected.as_ref() {
            Some(selection) => &selection.label,
            None => self.config.placeholder.as_deref().unwrap_or(""),
        }
    }

    /// The bound form value, `Null` when inert.
    pub fn value(&self) -> Value {
        self.model
            .as_ref()
            .map_or(Value::Null, |model| model.bindable.get())
    }

    // -------------------------------------------------------------------------
    // Open state and highlight
    // -------------------------------------------------------------------------

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether interaction is disabled by the config or by the form.
    pub fn is_disabled(&self) -> bool {
        self.config.disable
            || self
                .model
                .as_ref()
                .is_some_and(|model| model.disabled.get())
    }

    /// Highlighted row, by index into the filtered list.
    pub fn mouse_over_index(&self) -> Option<usize> {
        self.mouse_over
    }

    /// Highlighted entry.
    pub fn mouse_over_option(&self) -> Option<&ListEntry> {
        self.mouse_over.and_then(|i| self.filtered.get(i))
    }

    /// Scroll offset of the list inside its container.
    pub fn scroll_top(&self) -> u16 {
        self.scroll_top
    }

    // -------------------------------------------------------------------------
    // Display pass-through
    // -------------------------------------------------------------------------

    pub fn label(&self) -> Option<&str> {
        self.config.label.as_deref()
    }

    pub fn help(&self) -> Option<&str> {
        self.config.help.as_deref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.config.placeholder.as_deref()
    }

    // -------------------------------------------------------------------------
    // Deferred work
    // -------------------------------------------------------------------------

    /// Re-arm the toggle button listener on the next tick.
    pub(super) fn arm_toggle_later(&mut self) {
        if let Some(handle) = self.pending.toggle.take() {
            self.timers.cancel(handle);
        }
        self.pending.toggle = Some(self.timers.schedule(Deferred::ArmToggleClick, 1));
    }

    /// Cancel the deferred work tied to the open state.
    pub(super) fn cancel_open_timers(&mut self) {
        for handle in [self.pending.document.take(), self.pending.scroll.take()]
            .into_iter()
            .flatten()
        {
            self.timers.cancel(handle);
        }
    }
}
