//! Headless host for adjustable widgets.
//!
//! Loads a nested widget scene and a scripted pointer sequence from JSON,
//! routes the events the way a desktop toolkit would (hit testing, pointer
//! grab, propagation of ignored events to the parent) and reports the
//! resulting geometry.

pub mod error;
pub mod host;
pub mod replay;
pub mod scene;

pub use error::{DemoError, DemoResult};
pub use host::{NodeId, SceneTree, WidgetHandle};
pub use replay::{OutcomeRecord, Replay, Report, WidgetReport};
pub use scene::{Scene, ScriptStep, WidgetSpec};
