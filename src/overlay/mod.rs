pub mod controls;
pub mod dispatch;
pub mod edit;
pub mod element;
pub mod gesture;
mod input_overlay;

pub use controls::{ControlKind, ControlSpec, OverlayMetrics, CONTROLS};
pub use edit::EditController;
pub use element::{DpadDirections, DpadState, DrawCommand, OverlayElement, Sprite};
pub use gesture::{GestureEvent, Pointer, TouchAction};
pub use input_overlay::{InputOverlay, TouchOutcome};
