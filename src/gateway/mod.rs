mod alerts;

pub use alerts::{AlertHost, AlertRouter};

use crate::input::{ButtonState, InputCode};

/// Entry points of the emulation core that the overlay drives.
///
/// The core treats every call as a standalone event; the overlay does not
/// check whether a core is running before calling.
pub trait EmulationGateway {
    fn on_button_event(&mut self, device: &str, code: InputCode, state: ButtonState) -> bool;
    fn on_axis_event(&mut self, device: &str, axis: InputCode, x: f32, y: f32) -> bool;
    fn on_pointer_down(&mut self, x: f32, y: f32);
    fn on_pointer_move(&mut self, x: f32, y: f32);
    fn on_pointer_up(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    Button {
        device: String,
        code: InputCode,
        state: ButtonState,
    },
    Axis {
        device: String,
        axis: InputCode,
        x: f32,
        y: f32,
    },
    PointerDown {
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
}

/// Gateway that records every call, for hosts without a core and for tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingGateway {
    calls: Vec<GatewayCall>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[GatewayCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<GatewayCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// `(code, state)` of every button event, in call order.
    pub fn button_events(&self) -> Vec<(InputCode, ButtonState)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Button { code, state, .. } => Some((*code, *state)),
                _ => None,
            })
            .collect()
    }

    /// `(axis, x, y)` of every axis event, in call order.
    pub fn axis_events(&self) -> Vec<(InputCode, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Axis { axis, x, y, .. } => Some((*axis, *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn pointer_calls(&self) -> Vec<GatewayCall> {
        self.calls
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    GatewayCall::PointerDown { .. }
                        | GatewayCall::PointerMove { .. }
                        | GatewayCall::PointerUp
                )
            })
            .cloned()
            .collect()
    }
}

impl EmulationGateway for RecordingGateway {
    fn on_button_event(&mut self, device: &str, code: InputCode, state: ButtonState) -> bool {
        self.calls.push(GatewayCall::Button {
            device: device.to_string(),
            code,
            state,
        });
        true
    }

    fn on_axis_event(&mut self, device: &str, axis: InputCode, x: f32, y: f32) -> bool {
        self.calls.push(GatewayCall::Axis {
            device: device.to_string(),
            axis,
            x,
            y,
        });
        true
    }

    fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.calls.push(GatewayCall::PointerDown { x, y });
    }

    fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.calls.push(GatewayCall::PointerMove { x, y });
    }

    fn on_pointer_up(&mut self) {
        self.calls.push(GatewayCall::PointerUp);
    }
}
