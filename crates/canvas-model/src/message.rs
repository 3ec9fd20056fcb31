use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Property path reported by errors that explain a widget's own visibility.
pub const VISIBILITY_PROPERTY: &str = "isVisible";

/// Entity and property that produced a debugger message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSource {
    /// Entity name, used to join against the data tree.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_path: Option<String>,
}

impl ErrorSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            entity_type: None,
            property_path: None,
        }
    }

    #[must_use]
    pub fn with_property_path(mut self, path: impl Into<String>) -> Self {
        self.property_path = Some(path.into());
        self
    }

    pub fn property_path(&self) -> Option<&str> {
        self.property_path.as_deref()
    }
}

/// An evaluation-time problem shown in the debugger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

impl ErrorRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: ErrorSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Name of the owning entity, if the error is attributed to one.
    pub fn source_name(&self) -> Option<&str> {
        self.source
            .as_ref()
            .map(|source| source.name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn property_path(&self) -> Option<&str> {
        self.source.as_ref().and_then(ErrorSource::property_path)
    }
}

/// Debugger errors keyed by message key.
pub type ErrorMap = BTreeMap<String, ErrorRecord>;
