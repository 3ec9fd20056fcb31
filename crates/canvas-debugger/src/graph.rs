//! Read-only access to the two widget maps.
//!
//! Canvas widgets are keyed by id and carry the authored parent links;
//! evaluated widgets are keyed by name and carry runtime state. Resolving a
//! parent therefore goes id -> canvas node -> name -> evaluated widget.

use canvas_model::{CanvasWidgets, DataTree, DataTreeEntity, EvaluatedWidget, WidgetNode};

pub trait WidgetGraph {
    fn node(&self, widget_id: &str) -> Option<&WidgetNode>;

    /// Evaluated widget by name. Non-widget entities resolve to `None`.
    fn evaluated(&self, widget_name: &str) -> Option<&EvaluatedWidget>;
}

/// [`WidgetGraph`] over borrowed snapshot maps.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotGraph<'a> {
    canvas_widgets: &'a CanvasWidgets,
    data_tree: &'a DataTree,
}

impl<'a> SnapshotGraph<'a> {
    pub fn new(canvas_widgets: &'a CanvasWidgets, data_tree: &'a DataTree) -> Self {
        Self {
            canvas_widgets,
            data_tree,
        }
    }

    /// Evaluated widgets in name order.
    pub fn widgets(&self) -> impl Iterator<Item = (&'a str, &'a EvaluatedWidget)> + use<'a> {
        self.data_tree
            .iter()
            .filter_map(|(name, entity)| entity.as_widget().map(|w| (name.as_str(), w)))
    }

    pub fn entity(&self, name: &str) -> Option<&'a DataTreeEntity> {
        self.data_tree.get(name)
    }
}

impl WidgetGraph for SnapshotGraph<'_> {
    fn node(&self, widget_id: &str) -> Option<&WidgetNode> {
        self.canvas_widgets.get(widget_id)
    }

    fn evaluated(&self, widget_name: &str) -> Option<&EvaluatedWidget> {
        self.data_tree
            .get(widget_name)
            .and_then(DataTreeEntity::as_widget)
    }
}

/// Parent id of `widget`, or `None` when it sits at the root.
pub fn parent_link<'w>(widget: &'w EvaluatedWidget, root_parent_id: &str) -> Option<&'w str> {
    widget
        .parent_id
        .as_deref()
        .filter(|id| !id.is_empty() && *id != root_parent_id)
}
