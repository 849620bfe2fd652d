use crate::gateway::EmulationGateway;
use crate::input::{ButtonState, TOUCHSCREEN_DEVICE};
use crate::overlay::controls::ControlKind;
use crate::overlay::element::OverlayElement;
use crate::overlay::gesture::{GestureEvent, TouchAction};
use slab::Slab;

/// Normal-mode handling of one gesture event.
///
/// Pressed buttons and Dpads are emitted in build order, Buttons first, then
/// Dpads, then one axis event per joystick.
pub fn dispatch_gesture<G>(
    elements: &mut Slab<OverlayElement>,
    event: &GestureEvent,
    touch_passthrough: bool,
    gateway: &mut G,
) where
    G: EmulationGateway + ?Sized,
{
    if touch_passthrough {
        forward_touch(event, gateway);
    }

    if let Some(pointer) = event.action_pointer().copied() {
        let (x, y) = pointer.pixel();
        if event.action.is_down() {
            for kind in [ControlKind::Button, ControlKind::Dpad, ControlKind::Joystick] {
                for (_, element) in elements.iter_mut().filter(|(_, e)| e.kind() == kind) {
                    if element.contains_point(x, y) {
                        press(element, pointer.id, x, y, gateway);
                    }
                }
            }
        } else if event.action.is_up() {
            for kind in [ControlKind::Button, ControlKind::Dpad, ControlKind::Joystick] {
                for (_, element) in elements.iter_mut().filter(|(_, e)| e.kind() == kind) {
                    if element.track_id() == Some(pointer.id) {
                        release(element, gateway);
                    }
                }
            }
        }
    }

    for (_, element) in elements.iter_mut() {
        let OverlayElement::Joystick(joystick) = element else {
            continue;
        };
        if let Some(pointer) = joystick.track_id().and_then(|id| event.pointer_by_id(id)) {
            joystick.track(pointer.x, pointer.y);
        }
        let (axis_x, axis_y) = joystick.axes();
        gateway.on_axis_event(TOUCHSCREEN_DEVICE, joystick.code(), axis_x, axis_y);
    }
}

fn forward_touch<G>(event: &GestureEvent, gateway: &mut G)
where
    G: EmulationGateway + ?Sized,
{
    match event.action {
        TouchAction::Down | TouchAction::PointerDown => {
            if let Some(pointer) = event.action_pointer() {
                gateway.on_pointer_down(pointer.x, pointer.y);
            }
        }
        TouchAction::Move => {
            if let Some(pointer) = event.pointers.first() {
                gateway.on_pointer_move(pointer.x, pointer.y);
            }
        }
        TouchAction::Up | TouchAction::PointerUp => gateway.on_pointer_up(),
        TouchAction::Cancel | TouchAction::Other(_) => {}
    }
}

fn press<G>(element: &mut OverlayElement, pointer_id: i32, x: i32, y: i32, gateway: &mut G)
where
    G: EmulationGateway + ?Sized,
{
    match element {
        OverlayElement::Button(button) => {
            button.press(pointer_id);
            gateway.on_button_event(TOUCHSCREEN_DEVICE, button.code(), ButtonState::Pressed);
        }
        OverlayElement::Dpad(dpad) => {
            let directions = dpad.directions_at(x, y);
            for (code, pressed) in dpad.codes().into_iter().zip(directions.as_array()) {
                if pressed {
                    gateway.on_button_event(TOUCHSCREEN_DEVICE, code, ButtonState::Pressed);
                }
            }
            dpad.press(pointer_id, directions);
        }
        OverlayElement::Joystick(joystick) => joystick.press(pointer_id),
    }
}

fn release<G>(element: &mut OverlayElement, gateway: &mut G)
where
    G: EmulationGateway + ?Sized,
{
    match element {
        OverlayElement::Button(button) => {
            button.release();
            gateway.on_button_event(TOUCHSCREEN_DEVICE, button.code(), ButtonState::Released);
        }
        OverlayElement::Dpad(dpad) => {
            dpad.release();
            for code in dpad.codes() {
                gateway.on_button_event(TOUCHSCREEN_DEVICE, code, ButtonState::Released);
            }
        }
        OverlayElement::Joystick(joystick) => joystick.release(),
    }
}
