use crate::geometry::Rect;
use crate::input::InputCode;
use crate::overlay::controls::{ControlKind, ControlSpec, OverlayMetrics};

/// Which directions of a Dpad a touch point falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DpadDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DpadDirections {
    /// Splits `bounds` into thirds on each axis; a point in an outer third
    /// presses that direction.
    pub fn from_point(bounds: Rect, x: i32, y: i32) -> Self {
        let third_h = bounds.height() / 3;
        let third_w = bounds.width() / 3;
        Self {
            up: bounds.top + third_h > y,
            down: bounds.bottom - third_h < y,
            left: bounds.left + third_w > x,
            right: bounds.right - third_w < x,
        }
    }

    /// Flags in up, down, left, right order.
    pub fn as_array(self) -> [bool; 4] {
        [self.up, self.down, self.left, self.right]
    }

    pub fn state(self) -> DpadState {
        if self.up {
            if self.left {
                DpadState::PressedUpLeft
            } else if self.right {
                DpadState::PressedUpRight
            } else {
                DpadState::PressedUp
            }
        } else if self.down {
            if self.left {
                DpadState::PressedDownLeft
            } else if self.right {
                DpadState::PressedDownRight
            } else {
                DpadState::PressedDown
            }
        } else if self.left {
            DpadState::PressedLeft
        } else if self.right {
            DpadState::PressedRight
        } else {
            DpadState::Default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DpadState {
    #[default]
    Default,
    PressedUp,
    PressedDown,
    PressedLeft,
    PressedRight,
    PressedUpLeft,
    PressedUpRight,
    PressedDownLeft,
    PressedDownRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    ButtonDefault,
    ButtonPressed,
    DpadDefault,
    DpadOneDirection,
    DpadTwoDirections,
    JoystickRange,
    JoystickThumb,
    JoystickThumbPressed,
}

/// One bitmap blit for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub code: InputCode,
    pub art: &'static str,
    pub sprite: Sprite,
    pub rect: Rect,
    /// Clockwise rotation in degrees.
    pub rotation: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayButton {
    code: InputCode,
    art: &'static str,
    bounds: Rect,
    pressed: bool,
    track_id: Option<i32>,
}

impl OverlayButton {
    pub fn new(code: InputCode, art: &'static str, bounds: Rect) -> Self {
        Self {
            code,
            art,
            bounds,
            pressed: false,
            track_id: None,
        }
    }

    pub fn code(&self) -> InputCode {
        self.code
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn track_id(&self) -> Option<i32> {
        self.track_id
    }

    pub fn press(&mut self, pointer_id: i32) {
        self.pressed = true;
        self.track_id = Some(pointer_id);
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.track_id = None;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayDpad {
    codes: [InputCode; 4],
    art: &'static str,
    bounds: Rect,
    state: DpadState,
    track_id: Option<i32>,
}

impl OverlayDpad {
    pub fn new(codes: [InputCode; 4], art: &'static str, bounds: Rect) -> Self {
        Self {
            codes,
            art,
            bounds,
            state: DpadState::Default,
            track_id: None,
        }
    }

    /// Up, down, left, right.
    pub fn codes(&self) -> [InputCode; 4] {
        self.codes
    }

    pub fn state(&self) -> DpadState {
        self.state
    }

    pub fn directions_at(&self, x: i32, y: i32) -> DpadDirections {
        DpadDirections::from_point(self.bounds, x, y)
    }

    pub fn press(&mut self, pointer_id: i32, directions: DpadDirections) {
        self.state = directions.state();
        self.track_id = Some(pointer_id);
    }

    pub fn release(&mut self) {
        self.state = DpadState::Default;
        self.track_id = None;
    }

    fn sprite(&self) -> (Sprite, u16) {
        match self.state {
            DpadState::Default => (Sprite::DpadDefault, 0),
            DpadState::PressedUp => (Sprite::DpadOneDirection, 0),
            DpadState::PressedRight => (Sprite::DpadOneDirection, 90),
            DpadState::PressedDown => (Sprite::DpadOneDirection, 180),
            DpadState::PressedLeft => (Sprite::DpadOneDirection, 270),
            DpadState::PressedUpLeft => (Sprite::DpadTwoDirections, 0),
            DpadState::PressedUpRight => (Sprite::DpadTwoDirections, 90),
            DpadState::PressedDownRight => (Sprite::DpadTwoDirections, 180),
            DpadState::PressedDownLeft => (Sprite::DpadTwoDirections, 270),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayJoystick {
    code: InputCode,
    art: &'static str,
    outer: Rect,
    inner: Rect,
    axes: (f32, f32),
    pressed: bool,
    track_id: Option<i32>,
}

impl OverlayJoystick {
    /// `inner_size` is the thumb edge; the thumb starts centred.
    pub fn new(code: InputCode, art: &'static str, outer: Rect, inner_size: i32) -> Self {
        let inner = Rect::from_origin_size(0, 0, inner_size, inner_size)
            .centered_at(outer.center_x(), outer.center_y());
        Self {
            code,
            art,
            outer,
            inner,
            axes: (0.0, 0.0),
            pressed: false,
            track_id: None,
        }
    }

    pub fn code(&self) -> InputCode {
        self.code
    }

    pub fn track_id(&self) -> Option<i32> {
        self.track_id
    }

    pub fn inner_bounds(&self) -> Rect {
        self.inner
    }

    /// Current stick deflection, always within the unit disk.
    pub fn axes(&self) -> (f32, f32) {
        self.axes
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn press(&mut self, pointer_id: i32) {
        self.pressed = true;
        self.track_id = Some(pointer_id);
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.track_id = None;
        self.axes = (0.0, 0.0);
        self.recenter_inner();
    }

    /// Recomputes the deflection from a touch at `(x, y)`.
    pub fn track(&mut self, x: f32, y: f32) {
        let half_w = self.outer.width() as f32 / 2.0;
        let half_h = self.outer.height() as f32 / 2.0;
        if half_w <= 0.0 || half_h <= 0.0 {
            self.axes = (0.0, 0.0);
            return;
        }

        let center_x = self.outer.left as f32 + half_w;
        let center_y = self.outer.top as f32 + half_h;
        let mut axis_x = (x - center_x) / half_w;
        let mut axis_y = (y - center_y) / half_h;

        let magnitude = axis_x.hypot(axis_y);
        if magnitude > 1.0 {
            axis_x /= magnitude;
            axis_y /= magnitude;
        }
        self.axes = (axis_x, axis_y);
        self.recenter_inner();
    }

    fn recenter_inner(&mut self) {
        let half_w = self.outer.width() as f32 / 2.0;
        let half_h = self.outer.height() as f32 / 2.0;
        let cx = self.outer.left as f32 + half_w + self.axes.0 * half_w;
        let cy = self.outer.top as f32 + half_h + self.axes.1 * half_h;
        self.inner = self.inner.centered_at(cx.round() as i32, cy.round() as i32);
    }
}

/// An interactive overlay control.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayElement {
    Button(OverlayButton),
    Dpad(OverlayDpad),
    Joystick(OverlayJoystick),
}

impl OverlayElement {
    /// Builds the element for `spec` with its top-left at `position`.
    pub fn build(
        spec: &ControlSpec,
        position: (f32, f32),
        metrics: &OverlayMetrics,
        multiplier: f32,
    ) -> Self {
        let size = metrics.scaled_size(spec.class_scale(), multiplier);
        let bounds = Rect::from_origin_size(position.0 as i32, position.1 as i32, size, size);
        match spec.kind {
            ControlKind::Button => {
                OverlayElement::Button(OverlayButton::new(spec.primary_code(), spec.art, bounds))
            }
            ControlKind::Dpad => {
                let mut codes = [spec.primary_code(); 4];
                for (slot, code) in codes.iter_mut().zip(spec.codes) {
                    *slot = *code;
                }
                OverlayElement::Dpad(OverlayDpad::new(codes, spec.art, bounds))
            }
            ControlKind::Joystick => {
                let inner_size = (size as f32 / spec.inner_divisor()) as i32;
                OverlayElement::Joystick(OverlayJoystick::new(
                    spec.primary_code(),
                    spec.art,
                    bounds,
                    inner_size,
                ))
            }
        }
    }

    pub fn kind(&self) -> ControlKind {
        match self {
            OverlayElement::Button(_) => ControlKind::Button,
            OverlayElement::Dpad(_) => ControlKind::Dpad,
            OverlayElement::Joystick(_) => ControlKind::Joystick,
        }
    }

    /// Code the element's position is persisted under.
    pub fn primary_code(&self) -> InputCode {
        match self {
            OverlayElement::Button(button) => button.code,
            OverlayElement::Dpad(dpad) => dpad.codes[0],
            OverlayElement::Joystick(joystick) => joystick.code,
        }
    }

    pub fn codes(&self) -> Vec<InputCode> {
        match self {
            OverlayElement::Button(button) => vec![button.code],
            OverlayElement::Dpad(dpad) => dpad.codes.to_vec(),
            OverlayElement::Joystick(joystick) => vec![joystick.code],
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            OverlayElement::Button(button) => button.bounds,
            OverlayElement::Dpad(dpad) => dpad.bounds,
            OverlayElement::Joystick(joystick) => joystick.outer,
        }
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        match self {
            OverlayElement::Button(button) => button.bounds = button.bounds.move_to(x, y),
            OverlayElement::Dpad(dpad) => dpad.bounds = dpad.bounds.move_to(x, y),
            OverlayElement::Joystick(joystick) => {
                joystick.outer = joystick.outer.move_to(x, y);
                joystick.recenter_inner();
            }
        }
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.bounds().contains(x, y)
    }

    pub fn track_id(&self) -> Option<i32> {
        match self {
            OverlayElement::Button(button) => button.track_id,
            OverlayElement::Dpad(dpad) => dpad.track_id,
            OverlayElement::Joystick(joystick) => joystick.track_id,
        }
    }

    pub fn as_button(&self) -> Option<&OverlayButton> {
        match self {
            OverlayElement::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_dpad(&self) -> Option<&OverlayDpad> {
        match self {
            OverlayElement::Dpad(dpad) => Some(dpad),
            _ => None,
        }
    }

    pub fn as_joystick(&self) -> Option<&OverlayJoystick> {
        match self {
            OverlayElement::Joystick(joystick) => Some(joystick),
            _ => None,
        }
    }

    /// Appends the blits for the current visual state.
    pub fn draw(&self, out: &mut Vec<DrawCommand>) {
        match self {
            OverlayElement::Button(button) => out.push(DrawCommand {
                code: button.code,
                art: button.art,
                sprite: if button.pressed {
                    Sprite::ButtonPressed
                } else {
                    Sprite::ButtonDefault
                },
                rect: button.bounds,
                rotation: 0,
            }),
            OverlayElement::Dpad(dpad) => {
                let (sprite, rotation) = dpad.sprite();
                out.push(DrawCommand {
                    code: dpad.codes[0],
                    art: dpad.art,
                    sprite,
                    rect: dpad.bounds,
                    rotation,
                });
            }
            OverlayElement::Joystick(joystick) => {
                out.push(DrawCommand {
                    code: joystick.code,
                    art: joystick.art,
                    sprite: Sprite::JoystickRange,
                    rect: joystick.outer,
                    rotation: 0,
                });
                out.push(DrawCommand {
                    code: joystick.code,
                    art: joystick.art,
                    sprite: if joystick.pressed {
                        Sprite::JoystickThumbPressed
                    } else {
                        Sprite::JoystickThumb
                    },
                    rect: joystick.inner,
                    rotation: 0,
                });
            }
        }
    }
}
