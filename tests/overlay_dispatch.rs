use touch_overlay::overlay::{ControlKind, DpadState, OverlayMetrics, CONTROLS};
use touch_overlay::store::{position_keys, toggle_key, OVERLAY_INIT_KEY};
use touch_overlay::{
    ButtonState, GatewayCall, GestureEvent, InputCode, InputOverlay, MemoryPreferences, Pointer,
    PreferenceStore, RecordingGateway, TouchAction,
};

/// Overlay with only the listed controls enabled, at the given positions,
/// on a 256px base so a default-scale button is 32x32.
fn overlay_with(placed: &[(InputCode, f32, f32)]) -> InputOverlay<MemoryPreferences> {
    let mut prefs = MemoryPreferences::new();
    prefs.put_bool(OVERLAY_INIT_KEY, true);
    for spec in CONTROLS {
        let placement = placed
            .iter()
            .find(|(code, _, _)| *code == spec.primary_code());
        match placement {
            Some((code, x, y)) => {
                let (x_key, y_key) = position_keys(*code);
                prefs.put_float(&x_key, *x as f64);
                prefs.put_float(&y_key, *y as f64);
            }
            None => prefs.put_bool(&toggle_key(spec.toggle_index), false),
        }
    }
    InputOverlay::new(prefs, OverlayMetrics::new(1280, 720).with_base_size(256))
        .expect("overlay")
}

fn down(x: f32, y: f32) -> GestureEvent {
    GestureEvent::single(TouchAction::Down, x, y)
}

fn up(x: f32, y: f32) -> GestureEvent {
    GestureEvent::single(TouchAction::Up, x, y)
}

#[test]
fn default_scale_button_renders_32px() {
    let overlay = overlay_with(&[(InputCode::BUTTON_A, 100.0, 100.0)]);
    let bounds = overlay.element(InputCode::BUTTON_A).expect("a").bounds();
    assert_eq!((bounds.width(), bounds.height()), (32, 32));
    assert_eq!((bounds.left, bounds.top), (100, 100));
}

#[test]
fn press_and_release_button() {
    let mut overlay = overlay_with(&[(InputCode::BUTTON_A, 100.0, 100.0)]);
    let mut gateway = RecordingGateway::new();

    let outcome = overlay
        .on_touch(&down(110.0, 110.0), &mut gateway)
        .expect("down");
    assert!(outcome.redraw_requested);
    assert!(overlay
        .element(InputCode::BUTTON_A)
        .and_then(|e| e.as_button())
        .is_some_and(|b| b.is_pressed()));

    overlay.on_touch(&up(110.0, 110.0), &mut gateway).expect("up");

    assert_eq!(
        gateway.button_events(),
        vec![
            (InputCode::BUTTON_A, ButtonState::Pressed),
            (InputCode::BUTTON_A, ButtonState::Released),
        ]
    );
    let a = overlay.element(InputCode::BUTTON_A).expect("a");
    assert_eq!(a.track_id(), None);
}

#[test]
fn button_events_use_touchscreen_device() {
    let mut overlay = overlay_with(&[(InputCode::BUTTON_B, 0.0, 0.0)]);
    let mut gateway = RecordingGateway::new();
    overlay.on_touch(&down(1.0, 1.0), &mut gateway).expect("down");

    assert!(gateway.calls().iter().any(|call| matches!(
        call,
        GatewayCall::Button { device, code, .. }
            if device == "Touchscreen" && *code == InputCode::BUTTON_B
    )));
}

#[test]
fn overlapping_buttons_are_both_pressed() {
    let mut overlay = overlay_with(&[
        (InputCode::BUTTON_A, 100.0, 100.0),
        (InputCode::BUTTON_B, 110.0, 110.0),
    ]);
    let mut gateway = RecordingGateway::new();

    overlay
        .on_touch(&down(120.0, 120.0), &mut gateway)
        .expect("down");

    let pressed = gateway.button_events();
    assert_eq!(pressed.len(), 2);
    assert!(pressed.contains(&(InputCode::BUTTON_A, ButtonState::Pressed)));
    assert!(pressed.contains(&(InputCode::BUTTON_B, ButtonState::Pressed)));
}

#[test]
fn move_onto_button_does_not_press_it() {
    let mut overlay = overlay_with(&[(InputCode::BUTTON_A, 100.0, 100.0)]);
    let mut gateway = RecordingGateway::new();

    overlay.on_touch(&down(5.0, 5.0), &mut gateway).expect("down");
    overlay
        .on_touch(&GestureEvent::single(TouchAction::Move, 110.0, 110.0), &mut gateway)
        .expect("move");
    overlay.on_touch(&up(110.0, 110.0), &mut gateway).expect("up");

    assert!(gateway.button_events().is_empty());
}

#[test]
fn dpad_emits_one_press_per_direction_and_releases_all_four() {
    let mut overlay = overlay_with(&[(InputCode::DPAD_UP, 300.0, 300.0)]);
    let mut gateway = RecordingGateway::new();
    let bounds = overlay.element(InputCode::DPAD_UP).expect("dpad").bounds();
    assert_eq!(bounds.width(), 70);

    overlay
        .on_touch(&down(302.0, 302.0), &mut gateway)
        .expect("down");
    assert_eq!(
        gateway.button_events(),
        vec![
            (InputCode::DPAD_UP, ButtonState::Pressed),
            (InputCode::DPAD_LEFT, ButtonState::Pressed),
        ]
    );
    let dpad = overlay
        .element(InputCode::DPAD_DOWN)
        .and_then(|e| e.as_dpad())
        .expect("dpad");
    assert_eq!(dpad.state(), DpadState::PressedUpLeft);

    gateway.clear();
    overlay.on_touch(&up(302.0, 302.0), &mut gateway).expect("up");
    assert_eq!(
        gateway.button_events(),
        vec![
            (InputCode::DPAD_UP, ButtonState::Released),
            (InputCode::DPAD_DOWN, ButtonState::Released),
            (InputCode::DPAD_LEFT, ButtonState::Released),
            (InputCode::DPAD_RIGHT, ButtonState::Released),
        ]
    );
    let dpad = overlay
        .element(InputCode::DPAD_UP)
        .and_then(|e| e.as_dpad())
        .expect("dpad");
    assert_eq!(dpad.state(), DpadState::Default);
}

#[test]
fn dpad_center_touch_tracks_without_pressing() {
    let mut overlay = overlay_with(&[(InputCode::DPAD_UP, 300.0, 300.0)]);
    let mut gateway = RecordingGateway::new();

    overlay
        .on_touch(&down(335.0, 335.0), &mut gateway)
        .expect("down");
    assert!(gateway.button_events().is_empty());
    assert_eq!(
        overlay.element(InputCode::DPAD_UP).and_then(|e| e.track_id()),
        Some(0)
    );
}

#[test]
fn releasing_untracked_pointer_leaves_dpad_pressed() {
    let mut overlay = overlay_with(&[(InputCode::DPAD_UP, 300.0, 300.0)]);
    let mut gateway = RecordingGateway::new();

    let first = Pointer::new(0, 335.0, 305.0);
    let second = Pointer::new(1, 900.0, 600.0);
    overlay
        .on_touch(
            &GestureEvent::new(TouchAction::Down, 0, vec![first]),
            &mut gateway,
        )
        .expect("first down");
    overlay
        .on_touch(
            &GestureEvent::new(TouchAction::PointerDown, 1, vec![first, second]),
            &mut gateway,
        )
        .expect("second down");
    gateway.clear();

    overlay
        .on_touch(
            &GestureEvent::new(TouchAction::PointerUp, 1, vec![first, second]),
            &mut gateway,
        )
        .expect("second up");

    assert!(gateway.button_events().is_empty());
    let dpad = overlay
        .element(InputCode::DPAD_UP)
        .and_then(|e| e.as_dpad())
        .expect("dpad");
    assert_eq!(dpad.state(), DpadState::PressedUp);
}

#[test]
fn pointer_down_uses_action_index() {
    let mut overlay = overlay_with(&[
        (InputCode::BUTTON_A, 100.0, 100.0),
        (InputCode::BUTTON_B, 400.0, 100.0),
    ]);
    let mut gateway = RecordingGateway::new();

    let held = Pointer::new(3, 900.0, 600.0);
    let new = Pointer::new(7, 410.0, 110.0);
    overlay
        .on_touch(
            &GestureEvent::from_raw(0x0105, vec![held, new]),
            &mut gateway,
        )
        .expect("pointer down");

    assert_eq!(
        gateway.button_events(),
        vec![(InputCode::BUTTON_B, ButtonState::Pressed)]
    );
    assert_eq!(
        overlay.element(InputCode::BUTTON_B).and_then(|e| e.track_id()),
        Some(7)
    );
}

#[test]
fn joystick_emits_axis_event_for_every_gesture() {
    let mut overlay = overlay_with(&[(InputCode::STICK_LEFT, 500.0, 100.0)]);
    let mut gateway = RecordingGateway::new();
    let bounds = overlay.element(InputCode::STICK_LEFT).expect("stick").bounds();
    assert_eq!(bounds.width(), 70);

    overlay
        .on_touch(&GestureEvent::single(TouchAction::Move, 5.0, 5.0), &mut gateway)
        .expect("idle move");
    overlay
        .on_touch(&down(535.0, 135.0), &mut gateway)
        .expect("down");
    overlay
        .on_touch(&GestureEvent::single(TouchAction::Move, 570.0, 135.0), &mut gateway)
        .expect("move");
    overlay
        .on_touch(&GestureEvent::single(TouchAction::Move, 2000.0, 135.0), &mut gateway)
        .expect("far move");
    overlay.on_touch(&up(2000.0, 135.0), &mut gateway).expect("up");
    overlay
        .on_touch(&GestureEvent::new(TouchAction::Other(9), 0, vec![]), &mut gateway)
        .expect("unknown");

    assert_eq!(
        gateway.axis_events(),
        vec![
            (InputCode::STICK_LEFT, 0.0, 0.0),
            (InputCode::STICK_LEFT, 0.0, 0.0),
            (InputCode::STICK_LEFT, 1.0, 0.0),
            (InputCode::STICK_LEFT, 1.0, 0.0),
            (InputCode::STICK_LEFT, 0.0, 0.0),
            (InputCode::STICK_LEFT, 0.0, 0.0),
        ]
    );
    assert!(gateway.button_events().is_empty());
}

#[test]
fn joystick_diagonal_stays_in_unit_disk() {
    let mut overlay = overlay_with(&[(InputCode::STICK_C, 500.0, 100.0)]);
    let mut gateway = RecordingGateway::new();

    overlay
        .on_touch(&down(535.0, 135.0), &mut gateway)
        .expect("down");
    overlay
        .on_touch(&GestureEvent::single(TouchAction::Move, -4000.0, 9000.0), &mut gateway)
        .expect("move");

    let (_, x, y) = *gateway.axis_events().last().expect("axis");
    assert!(x.hypot(y) <= 1.0 + f32::EPSILON);
    assert!(x < 0.0 && y > 0.0);
}

#[test]
fn passthrough_forwards_raw_touches_when_enabled() {
    let mut overlay = overlay_with(&[(InputCode::BUTTON_A, 100.0, 100.0)]);
    let mut gateway = RecordingGateway::new();

    overlay.on_touch(&down(10.0, 20.0), &mut gateway).expect("down");
    overlay
        .on_touch(&GestureEvent::single(TouchAction::Move, 30.0, 40.0), &mut gateway)
        .expect("move");
    overlay.on_touch(&up(30.0, 40.0), &mut gateway).expect("up");
    overlay
        .on_touch(&GestureEvent::single(TouchAction::Cancel, 0.0, 0.0), &mut gateway)
        .expect("cancel");

    assert_eq!(
        gateway.pointer_calls(),
        vec![
            GatewayCall::PointerDown { x: 10.0, y: 20.0 },
            GatewayCall::PointerMove { x: 30.0, y: 40.0 },
            GatewayCall::PointerUp,
        ]
    );
}

#[test]
fn passthrough_disabled_forwards_nothing() {
    let mut overlay = overlay_with(&[(InputCode::BUTTON_A, 100.0, 100.0)]);
    overlay
        .store_mut()
        .set_touch_passthrough(false)
        .expect("disable passthrough");
    let mut gateway = RecordingGateway::new();

    overlay.on_touch(&down(110.0, 110.0), &mut gateway).expect("down");
    overlay.on_touch(&up(110.0, 110.0), &mut gateway).expect("up");

    assert!(gateway.pointer_calls().is_empty());
    assert_eq!(gateway.button_events().len(), 2);
}

#[test]
fn refresh_twice_yields_identical_layout() {
    let mut overlay = overlay_with(&[
        (InputCode::BUTTON_A, 100.0, 100.0),
        (InputCode::DPAD_UP, 300.0, 300.0),
        (InputCode::STICK_LEFT, 500.0, 100.0),
    ]);
    overlay.refresh_controls();
    let first = overlay.layout();
    overlay.refresh_controls();
    assert_eq!(overlay.layout(), first);
    assert_eq!(first.len(), 3);
}

#[test]
fn control_scale_preference_resizes_on_refresh() {
    let mut overlay = overlay_with(&[(InputCode::BUTTON_A, 100.0, 100.0)]);
    overlay.store_mut().set_control_scale(100).expect("scale");
    overlay.refresh_controls();

    let bounds = overlay.element(InputCode::BUTTON_A).expect("a").bounds();
    assert_eq!((bounds.left, bounds.top), (100, 100));
    assert_eq!(bounds.width(), 48);
}

#[test]
fn draw_commands_follow_class_order() {
    let overlay = overlay_with(&[
        (InputCode::STICK_LEFT, 500.0, 100.0),
        (InputCode::DPAD_UP, 300.0, 300.0),
        (InputCode::BUTTON_A, 100.0, 100.0),
    ]);
    let kinds: Vec<_> = overlay
        .draw_commands()
        .iter()
        .map(|cmd| cmd.code)
        .collect();
    assert_eq!(
        kinds,
        vec![
            InputCode::BUTTON_A,
            InputCode::DPAD_UP,
            InputCode::STICK_LEFT,
            InputCode::STICK_LEFT,
        ]
    );
    assert!(overlay
        .elements()
        .any(|element| element.kind() == ControlKind::Joystick));
}
