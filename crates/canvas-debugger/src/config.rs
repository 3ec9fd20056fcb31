//! Configuration for the debugger derivations.
//!
//! Every field has a default matching the editor's built-in behavior, so an
//! empty TOML document is a valid configuration:
//!
//! ```toml
//! root_parent_id = "0"
//! visibility_property = "isVisible"
//! warning_marker = "warning"
//! datasource_route = "/applications/:applicationId/pages/:pageId/edit/datasource/:datasourceId"
//! missing_ancestor = "assume-visible"
//!
//! [containers]
//! tabs = ["TABS_WIDGET"]
//! modals = ["MODAL_WIDGET"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use canvas_model::{MAIN_CONTAINER_WIDGET_ID, VISIBILITY_PROPERTY, WidgetType};

use crate::counter::DEFAULT_WARNING_MARKER;
use crate::error::ConfigError;
use crate::routes::{DATASOURCE_EDITOR_ROUTE, RoutePattern};
use crate::visibility::ContainerPolicy;

/// What to assume when a parent id or parent name cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingAncestorPolicy {
    /// Keep the widget's own flag (fail-open).
    #[default]
    AssumeVisible,
    /// Treat the unverifiable chain as hidden.
    AssumeHidden,
}

/// Widget type tags that get container-specific visibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerTypes {
    pub tabs: Vec<String>,
    pub modals: Vec<String>,
}

impl Default for ContainerTypes {
    fn default() -> Self {
        Self {
            tabs: vec![WidgetType::TABS.to_string()],
            modals: vec![WidgetType::MODAL.to_string()],
        }
    }
}

impl ContainerTypes {
    /// Policy a parent of this type applies to its children.
    pub fn policy_for(&self, widget_type: &WidgetType) -> ContainerPolicy {
        let tag = widget_type.as_str();
        if self.tabs.iter().any(|t| t == tag) {
            ContainerPolicy::Tab
        } else if self.modals.iter().any(|t| t == tag) {
            ContainerPolicy::Modal
        } else {
            ContainerPolicy::Generic
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebuggerConfig {
    /// Parent id meaning "no parent".
    pub root_parent_id: String,
    /// Property path whose errors survive on hidden widgets.
    pub visibility_property: String,
    /// Key substring that classifies a message as a warning.
    pub warning_marker: String,
    /// Route on which the debugger icon is hidden.
    pub datasource_route: String,
    pub missing_ancestor: MissingAncestorPolicy,
    pub containers: ContainerTypes,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            root_parent_id: MAIN_CONTAINER_WIDGET_ID.to_string(),
            visibility_property: VISIBILITY_PROPERTY.to_string(),
            warning_marker: DEFAULT_WARNING_MARKER.to_string(),
            datasource_route: DATASOURCE_EDITOR_ROUTE.to_string(),
            missing_ancestor: MissingAncestorPolicy::default(),
            containers: ContainerTypes::default(),
        }
    }
}

impl DebuggerConfig {
    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_parent_id.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "root_parent_id",
                message: "must not be empty".to_string(),
            });
        }
        if self.visibility_property.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "visibility_property",
                message: "must not be empty".to_string(),
            });
        }
        // An empty marker would classify every message as a warning.
        if self.warning_marker.is_empty() {
            return Err(ConfigError::Invalid {
                field: "warning_marker",
                message: "must not be empty".to_string(),
            });
        }
        if let Some(tag) = self
            .containers
            .tabs
            .iter()
            .find(|tag| self.containers.modals.contains(tag))
        {
            return Err(ConfigError::Invalid {
                field: "containers",
                message: format!("{tag} is listed as both a tab and a modal container"),
            });
        }
        self.datasource_route()?;
        Ok(())
    }

    /// Compiled datasource route pattern.
    pub fn datasource_route(&self) -> Result<RoutePattern, ConfigError> {
        Ok(RoutePattern::new(&self.datasource_route)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = DebuggerConfig::from_toml_str("").expect("parse empty config");
        assert_eq!(config, DebuggerConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = DebuggerConfig::from_toml_str(
            r#"
            warning_marker = "WARN"
            missing_ancestor = "assume-hidden"

            [containers]
            tabs = ["TABS_WIDGET", "TABS_MIGRATOR_WIDGET"]
            "#,
        )
        .expect("parse config");
        assert_eq!(config.warning_marker, "WARN");
        assert_eq!(config.missing_ancestor, MissingAncestorPolicy::AssumeHidden);
        assert_eq!(
            config
                .containers
                .policy_for(&WidgetType::new("TABS_MIGRATOR_WIDGET")),
            ContainerPolicy::Tab
        );
        assert_eq!(
            config.containers.policy_for(&WidgetType::new(WidgetType::MODAL)),
            ContainerPolicy::Modal
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = DebuggerConfig::from_toml_str("hide_everything = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_marker_is_rejected() {
        let err = DebuggerConfig::from_toml_str(r#"warning_marker = """#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "warning_marker",
                ..
            }
        ));
    }

    #[test]
    fn overlapping_container_tags_are_rejected() {
        let err = DebuggerConfig::from_toml_str(
            r#"
            [containers]
            tabs = ["PANEL_WIDGET"]
            modals = ["PANEL_WIDGET"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("PANEL_WIDGET"));
    }

    #[test]
    fn bad_route_is_rejected() {
        let err = DebuggerConfig::from_toml_str(r#"datasource_route = "datasource/:id""#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Route(_)));
    }
}
