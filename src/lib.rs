pub mod gateway;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod overlay;
pub mod store;

pub use gateway::{AlertHost, AlertRouter, EmulationGateway, GatewayCall, RecordingGateway};
pub use input::{ButtonState, InputCode, TOUCHSCREEN_DEVICE};
pub use overlay::{GestureEvent, InputOverlay, OverlayMetrics, Pointer, TouchAction, TouchOutcome};
pub use store::{JsonPreferences, LayoutStore, MemoryPreferences, PreferenceStore};
