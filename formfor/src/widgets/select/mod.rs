//! Select field - a filterable dropdown bound to a form field.

mod binder;
mod config;
mod events;
mod filter;
mod item;
mod layout;
mod state;
mod view;

pub use binder::{Selection, find_selection};
pub use config::{ConfigError, SelectFieldConfig};
pub use filter::filter_options;
pub use item::{FieldNames, ListEntry};
pub use layout::{RowLayout, UniformRows};
pub use state::{SelectField, SelectId};
pub use view::{RowView, SelectView};
