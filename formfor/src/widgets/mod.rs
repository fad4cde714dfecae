//! Form widgets.

pub mod select;

pub use select::{SelectField, SelectFieldConfig};
