//! Select field configuration.

use std::time::Duration;

use log::trace;
use serde::Deserialize;
use thiserror::Error;

use super::item::FieldNames;

/// Errors in a select field's configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `attribute` option naming the bound form field is missing or empty.
    #[error("Missing required field \"attribute\"")]
    MissingAttribute,

    /// An option was present but could not be interpreted.
    #[error("Invalid value '{value}' for option '{name}': {reason}")]
    InvalidAttribute {
        /// Option name.
        name: &'static str,
        /// Raw value supplied.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// JSON configuration could not be parsed.
    #[error("Invalid select field configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration of one select field.
///
/// Can be built in code, parsed from a JSON object with camelCase keys, or
/// read from a string attribute map.
///
/// # Example
///
/// ```
/// use formfor::widgets::select::SelectFieldConfig;
///
/// let config = SelectFieldConfig::new("color")
///     .allow_blank()
///     .enable_filtering()
///     .placeholder("Pick a color");
/// assert_eq!(config.label_attribute, "label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectFieldConfig {
    /// Form field this select is bound to. Required.
    pub attribute: Option<String>,
    /// Disable user interaction.
    pub disable: bool,
    /// Initial filter text.
    pub filter: Option<String>,
    /// Filter input debounce in milliseconds. Carried for renderers, not enforced.
    pub filter_debounce: Option<u64>,
    /// Help text shown below the field.
    pub help: Option<String>,
    /// Field label.
    pub label: Option<String>,
    /// Text shown when nothing is selected.
    pub placeholder: Option<String>,
    /// Offer an empty option that clears the value.
    pub allow_blank: bool,
    /// Filter options by label substring.
    pub enable_filtering: bool,
    /// Name of the option field used as its label.
    pub label_attribute: String,
    /// Name of the option field used as its value.
    pub value_attribute: String,
}

impl Default for SelectFieldConfig {
    fn default() -> Self {
        Self {
            attribute: None,
            disable: false,
            filter: None,
            filter_debounce: None,
            help: None,
            label: None,
            placeholder: None,
            allow_blank: false,
            enable_filtering: false,
            label_attribute: FieldNames::DEFAULT_LABEL.to_string(),
            value_attribute: FieldNames::DEFAULT_VALUE.to_string(),
        }
    }
}

impl SelectFieldConfig {
    /// Create a config bound to the form field `attribute`.
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: Some(attribute.into()),
            ..Default::default()
        }
    }

    /// Parse a JSON object such as
    /// `{"attribute": "color", "allowBlank": true}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a config from element-style attributes.
    ///
    /// `allowBlank` and `enableFiltering` are enabled by their presence alone.
    /// `disable` is enabled unless its value is empty or `"false"`. Unknown
    /// attributes are ignored.
    pub fn from_attributes<'a>(
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (name, value) in attributes {
            match name {
                "attribute" => config.attribute = Some(value.to_string()),
                "disable" => config.disable = !(value.is_empty() || value == "false"),
                "filter" => config.filter = Some(value.to_string()),
                "filterDebounce" => {
                    let ms = value.trim().parse::<u64>().map_err(|err| {
                        ConfigError::InvalidAttribute {
                            name: "filterDebounce",
                            value: value.to_string(),
                            reason: err.to_string(),
                        }
                    })?;
                    config.filter_debounce = Some(ms);
                }
                "help" => config.help = Some(value.to_string()),
                "label" => config.label = Some(value.to_string()),
                "placeholder" => config.placeholder = Some(value.to_string()),
                "allowBlank" => config.allow_blank = true,
                "enableFiltering" => config.enable_filtering = true,
                "labelAttribute" if !value.is_empty() => {
                    config.label_attribute = value.to_string()
                }
                "valueAttribute" if !value.is_empty() => {
                    config.value_attribute = value.to_string()
                }
                other => trace!("SelectFieldConfig ignoring attribute '{}'", other),
            }
        }
        Ok(config)
    }

    /// The bound attribute name, or [`ConfigError::MissingAttribute`].
    pub fn validate(&self) -> Result<&str, ConfigError> {
        match self.attribute.as_deref() {
            Some(attribute) if !attribute.is_empty() => Ok(attribute),
            _ => Err(ConfigError::MissingAttribute),
        }
    }

    /// Option field names used for labels and values.
    pub fn field_names(&self) -> FieldNames {
        FieldNames::new(&self.label_attribute, &self.value_attribute)
    }

    /// Debounce interval for the filter input, if configured.
    pub fn filter_debounce_duration(&self) -> Option<Duration> {
        self.filter_debounce.map(Duration::from_millis)
    }

    /// Mark the select as disabled.
    pub fn disabled(mut self) -> Self {
        self.disable = true;
        self
    }

    /// Offer an empty option.
    pub fn allow_blank(mut self) -> Self {
        self.allow_blank = true;
        self
    }

    /// Enable label filtering.
    pub fn enable_filtering(mut self) -> Self {
        self.enable_filtering = true;
        self
    }

    /// Set the initial filter text.
    pub fn filter(mut self, text: impl Into<String>) -> Self {
        self.filter = Some(text.into());
        self
    }

    /// Set the filter debounce interval.
    pub fn filter_debounce(mut self, debounce: Duration) -> Self {
        self.filter_debounce = Some(debounce.as_millis().try_into().unwrap_or(u64::MAX));
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Use `name` as the option label field.
    pub fn label_attribute(mut self, name: impl Into<String>) -> Self {
        self.label_attribute = name.into();
        self
    }

    /// Use `name` as the option value field.
    pub fn value_attribute(mut self, name: impl Into<String>) -> Self {
        self.value_attribute = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SelectFieldConfig::default();
        assert_eq!(config.label_attribute, "label");
        assert_eq!(config.value_attribute, "value");
        assert!(matches!(config.validate(), Err(ConfigError::MissingAttribute)));
    }

    #[test]
    fn empty_attribute_is_missing() {
        let config = SelectFieldConfig::new("");
        assert!(matches!(config.validate(), Err(ConfigError::MissingAttribute)));
        assert_eq!(
            ConfigError::MissingAttribute.to_string(),
            "Missing required field \"attribute\""
        );
    }

    #[test]
    fn presence_flags_from_attributes() {
        let config = SelectFieldConfig::from_attributes([
            ("attribute", "color"),
            ("allowBlank", ""),
            ("enableFiltering", ""),
            ("labelAttribute", "name"),
            ("filterDebounce", "250"),
            ("data-unknown", "x"),
        ])
        .unwrap();
        assert_eq!(config.validate().unwrap(), "color");
        assert!(config.allow_blank);
        assert!(config.enable_filtering);
        assert_eq!(config.label_attribute, "name");
        assert_eq!(config.value_attribute, "value");
        assert_eq!(
            config.filter_debounce_duration(),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn disable_attribute_values() {
        let on = SelectFieldConfig::from_attributes([("disable", "true")]).unwrap();
        let off = SelectFieldConfig::from_attributes([("disable", "false")]).unwrap();
        assert!(on.disable);
        assert!(!off.disable);
    }

    #[test]
    fn bad_debounce_is_rejected() {
        let err = SelectFieldConfig::from_attributes([("filterDebounce", "soon")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidAttribute {
                name: "filterDebounce",
                ..
            }
        ));
    }

    #[test]
    fn from_json_uses_camel_case() {
        let config = SelectFieldConfig::from_json(
            r#"{"attribute": "color", "allowBlank": true, "valueAttribute": "id"}"#,
        )
        .unwrap();
        assert_eq!(config.attribute.as_deref(), Some("color"));
        assert!(config.allow_blank);
        assert_eq!(config.value_attribute, "id");
        assert_eq!(config.label_attribute, "label");
    }
}
