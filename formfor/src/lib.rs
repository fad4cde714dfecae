pub mod events;
pub mod form;
pub mod keybinds;
pub mod runtime;
pub mod state;
pub mod widgets;

pub mod prelude {
    pub use crate::events::{ClickTarget, EventResult, Modifiers};
    pub use crate::form::{FieldModel, Form, FormController, FormError};
    pub use crate::keybinds::{Key, KeyCombo};
    pub use crate::state::State;
    pub use crate::widgets::select::{
        ConfigError, FieldNames, ListEntry, RowLayout, SelectField, SelectFieldConfig,
        SelectView, UniformRows,
    };
}
