//! Effective visibility of widgets nested in containers.
//!
//! A widget is shown only when its own flag is set and every container above
//! it lets it through. What "lets it through" means depends on the kind of
//! container:
//!
//! - tab containers show a child only while the container is visible and its
//!   selected tab is the child's tab;
//! - modals decide on their own, whatever sits above them;
//! - any other container passes its own visibility down.
//!
//! The walk is iterative and tracks visited ids so a malformed parent chain
//! fails with [`VisibilityError::CyclicParentChain`] instead of looping.

use std::collections::HashSet;

use tracing::{debug, warn};

use canvas_model::EvaluatedWidget;

use crate::config::{DebuggerConfig, MissingAncestorPolicy};
use crate::error::VisibilityError;
use crate::graph::{WidgetGraph, parent_link};

/// Visibility rule a container applies to its direct children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerPolicy {
    Tab,
    Modal,
    Generic,
}

/// Outcome of composing one container with one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Child is visible as far as this container goes; check the container's own parents.
    Ascend,
    Resolved(bool),
}

impl ContainerPolicy {
    fn compose(self, container: &EvaluatedWidget, child: &EvaluatedWidget) -> Step {
        match self {
            Self::Tab => {
                if container.is_visible && container.selected_tab == child.tab_name {
                    Step::Ascend
                } else {
                    Step::Resolved(false)
                }
            }
            Self::Modal => Step::Resolved(container.is_visible),
            Self::Generic => {
                if container.is_visible {
                    Step::Ascend
                } else {
                    Step::Resolved(false)
                }
            }
        }
    }
}

pub struct VisibilityResolver<'g, G: WidgetGraph + ?Sized> {
    graph: &'g G,
    config: &'g DebuggerConfig,
}

impl<'g, G: WidgetGraph + ?Sized> VisibilityResolver<'g, G> {
    pub fn new(graph: &'g G, config: &'g DebuggerConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn has_parent(&self, widget: &EvaluatedWidget) -> bool {
        parent_link(widget, &self.config.root_parent_id).is_some()
    }

    pub fn policy_for(&self, container: &EvaluatedWidget) -> ContainerPolicy {
        self.config.containers.policy_for(&container.widget_type)
    }

    /// Whether the containers above `widget` let it be shown. A widget with no
    /// parent resolves to its own flag, as does one whose chain cannot be
    /// followed under [`MissingAncestorPolicy::AssumeVisible`].
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::CyclicParentChain`] when the parent links
    /// loop back on themselves.
    pub fn is_effectively_visible<'w>(
        &self,
        widget: &'w EvaluatedWidget,
    ) -> Result<bool, VisibilityError>
    where
        'g: 'w,
    {
        let graph: &'g G = self.graph;
        let mut visited: HashSet<&'w str> = HashSet::new();
        let mut current: &'w EvaluatedWidget = widget;

        loop {
            let Some(parent_id) = parent_link(current, &self.config.root_parent_id) else {
                return Ok(current.is_visible);
            };
            if !visited.insert(parent_id) {
                warn!(
                    widget = %widget.widget_name,
                    parent_id,
                    "cyclic parent chain"
                );
                return Err(VisibilityError::CyclicParentChain {
                    widget: widget.widget_name.clone(),
                    repeated_id: parent_id.to_string(),
                });
            }
            let Some(node) = graph.node(parent_id) else {
                debug!(
                    widget = %current.widget_name,
                    parent_id,
                    "parent widget missing from canvas"
                );
                return Ok(self.unresolved_ancestor(current));
            };
            let Some(container) = graph.evaluated(&node.widget_name) else {
                debug!(
                    widget = %current.widget_name,
                    parent = %node.widget_name,
                    "parent widget has no evaluated state"
                );
                return Ok(self.unresolved_ancestor(current));
            };
            match self.policy_for(container).compose(container, current) {
                Step::Ascend => current = container,
                Step::Resolved(visible) => return Ok(visible),
            }
        }
    }

    /// Names of the containers above `widget`, nearest first, as far as they
    /// can be resolved.
    ///
    /// # Errors
    ///
    /// Returns [`VisibilityError::CyclicParentChain`] on looping parent links.
    pub fn ancestors<'w>(&self, widget: &'w EvaluatedWidget) -> Result<Vec<&'w str>, VisibilityError>
    where
        'g: 'w,
    {
        let graph: &'g G = self.graph;
        let mut visited: HashSet<&'w str> = HashSet::new();
        let mut names = Vec::new();
        let mut current: &'w EvaluatedWidget = widget;

        while let Some(parent_id) = parent_link(current, &self.config.root_parent_id) {
            if !visited.insert(parent_id) {
                return Err(VisibilityError::CyclicParentChain {
                    widget: widget.widget_name.clone(),
                    repeated_id: parent_id.to_string(),
                });
            }
            let Some(node) = graph.node(parent_id) else {
                break;
            };
            names.push(node.widget_name.as_str());
            let Some(container) = graph.evaluated(&node.widget_name) else {
                break;
            };
            current = container;
        }
        Ok(names)
    }

    fn unresolved_ancestor(&self, widget: &EvaluatedWidget) -> bool {
        match self.config.missing_ancestor {
            MissingAncestorPolicy::AssumeVisible => widget.is_visible,
            MissingAncestorPolicy::AssumeHidden => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_child(tab: Option<&str>) -> EvaluatedWidget {
        let child = EvaluatedWidget::new("Input1", "INPUT_WIDGET");
        match tab {
            Some(tab) => child.with_tab_name(tab),
            None => child,
        }
    }

    #[test]
    fn tab_policy_requires_visible_container_and_matching_tab() {
        let tabs = EvaluatedWidget::new("Tabs1", "TABS_WIDGET").with_selected_tab("Tab 1");
        assert_eq!(
            ContainerPolicy::Tab.compose(&tabs, &tab_child(Some("Tab 1"))),
            Step::Ascend
        );
        assert_eq!(
            ContainerPolicy::Tab.compose(&tabs, &tab_child(Some("Tab 2"))),
            Step::Resolved(false)
        );
        let hidden = tabs.clone().visible(false);
        assert_eq!(
            ContainerPolicy::Tab.compose(&hidden, &tab_child(Some("Tab 1"))),
            Step::Resolved(false)
        );
    }

    #[test]
    fn tab_policy_treats_two_missing_names_as_equal() {
        let tabs = EvaluatedWidget::new("Tabs1", "TABS_WIDGET");
        assert_eq!(
            ContainerPolicy::Tab.compose(&tabs, &tab_child(None)),
            Step::Ascend
        );
    }

    #[test]
    fn modal_policy_is_terminal() {
        let child = tab_child(None);
        let open = EvaluatedWidget::new("Modal1", "MODAL_WIDGET");
        let closed = open.clone().visible(false);
        assert_eq!(
            ContainerPolicy::Modal.compose(&open, &child),
            Step::Resolved(true)
        );
        assert_eq!(
            ContainerPolicy::Modal.compose(&closed, &child),
            Step::Resolved(false)
        );
    }

    #[test]
    fn generic_policy_passes_visibility_down() {
        let child = tab_child(None);
        let shown = EvaluatedWidget::new("Container1", "CONTAINER_WIDGET");
        let hidden = shown.clone().visible(false);
        assert_eq!(
            ContainerPolicy::Generic.compose(&shown, &child),
            Step::Ascend
        );
        assert_eq!(
            ContainerPolicy::Generic.compose(&hidden, &child),
            Step::Resolved(false)
        );
    }
}
