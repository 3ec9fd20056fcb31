pub mod debugger;
pub mod entity;
pub mod error;
pub mod message;
pub mod widget;

pub use debugger::{DebuggerSnapshot, DebuggerState, DebuggerTab};
pub use entity::{ActionEntity, DataTree, DataTreeEntity, EvaluatedWidget};
pub use error::{ModelError, Result};
pub use message::{ErrorMap, ErrorRecord, ErrorSource, VISIBILITY_PROPERTY};
pub use widget::{CanvasWidgets, MAIN_CONTAINER_WIDGET_ID, WidgetNode, WidgetType};
