//! Host form: owns the model every bound field writes into.
//!
//! Widgets never hold the form itself. They register once with a
//! [`FormController`] and keep the returned [`FieldModel`], whose slots are
//! shared with the form.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use log::debug;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::state::State;

/// Errors raised by form model access.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// No field was registered under this attribute.
    #[error("Field '{0}' is not registered with the form")]
    UnknownField(String),
}

/// Registration service a form exposes to its fields.
pub trait FormController {
    /// Register a field under `attribute` and return its model.
    ///
    /// Registering the same attribute twice returns handles to the same slot.
    fn register_form_field(&self, attribute: &str) -> FieldModel;
}

/// What a field receives from the form on registration.
#[derive(Debug, Clone)]
pub struct FieldModel {
    /// The field's value. `Value::Null` means "no value".
    pub bindable: State<Value>,
    /// Form-wide disabled flag, shared by every registered field.
    pub disabled: State<bool>,
}

/// A form model keyed by attribute name.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Arc<RwLock<BTreeMap<String, State<Value>>>>,
    disabled: State<bool>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form pre-populated with `values`.
    ///
    /// Fields registered later under one of these attributes start out bound
    /// to the given value.
    pub fn with_values(values: Map<String, Value>) -> Self {
        let fields = values
            .into_iter()
            .map(|(name, value)| (name, State::new(value)))
            .collect();
        Self {
            fields: Arc::new(RwLock::new(fields)),
            disabled: State::new(false),
        }
    }

    /// Disable or enable every field of the form.
    pub fn set_disabled(&self, disabled: bool) {
        debug!("Form::set_disabled {}", disabled);
        self.disabled.set(disabled);
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    /// Current value of a registered field.
    pub fn value(&self, attribute: &str) -> Result<Value, FormError> {
        self.slot(attribute).map(|slot| slot.get())
    }

    /// Write a field's value, as a programmatic change would.
    pub fn set_value(&self, attribute: &str, value: Value) -> Result<(), FormError> {
        self.slot(attribute)?.set(value);
        Ok(())
    }

    /// Snapshot of the whole model as a JSON object.
    pub fn values(&self) -> Map<String, Value> {
        self.read_fields(|fields| {
            fields
                .iter()
                .map(|(name, slot)| (name.clone(), slot.get()))
                .collect()
        })
    }

    /// Names of all registered fields, sorted.
    pub fn field_names(&self) -> Vec<String> {
        self.read_fields(|fields| fields.keys().cloned().collect())
    }

    fn slot(&self, attribute: &str) -> Result<State<Value>, FormError> {
        self.read_fields(|fields| fields.get(attribute).cloned())
            .ok_or_else(|| FormError::UnknownField(attribute.to_string()))
    }

    fn read_fields<R>(&self, f: impl FnOnce(&BTreeMap<String, State<Value>>) -> R) -> R {
        match self.fields.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }
}

impl FormController for Form {
    fn register_form_field(&self, attribute: &str) -> FieldModel {
        let mut fields = self
            .fields
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let bindable = fields
            .entry(attribute.to_string())
            .or_insert_with(|| {
                debug!("Form::register_form_field new field '{}'", attribute);
                State::new(Value::Null)
            })
            .clone();
        FieldModel {
            bindable,
            disabled: self.disabled.clone(),
        }
    }
}
