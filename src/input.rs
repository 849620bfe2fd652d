use std::fmt;

/// Device name the overlay reports to the emulation core.
pub const TOUCHSCREEN_DEVICE: &str = "Touchscreen";

/// Identifier the emulation core uses for one logical button or axis pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputCode(pub i32);

impl InputCode {
    pub const BUTTON_A: Self = Self(700);
    pub const BUTTON_B: Self = Self(701);
    pub const BUTTON_X: Self = Self(702);
    pub const BUTTON_Y: Self = Self(703);
    pub const BUTTON_START: Self = Self(704);
    pub const BUTTON_SELECT: Self = Self(705);
    pub const BUTTON_HOME: Self = Self(706);
    pub const BUTTON_ZL: Self = Self(707);
    pub const BUTTON_ZR: Self = Self(708);
    pub const DPAD_UP: Self = Self(709);
    pub const DPAD_DOWN: Self = Self(710);
    pub const DPAD_LEFT: Self = Self(711);
    pub const DPAD_RIGHT: Self = Self(712);
    pub const STICK_LEFT: Self = Self(713);
    pub const STICK_LEFT_UP: Self = Self(714);
    pub const STICK_LEFT_DOWN: Self = Self(715);
    pub const STICK_LEFT_LEFT: Self = Self(716);
    pub const STICK_LEFT_RIGHT: Self = Self(717);
    pub const STICK_C: Self = Self(718);
    pub const STICK_C_UP: Self = Self(719);
    pub const STICK_C_DOWN: Self = Self(720);
    pub const STICK_C_LEFT: Self = Self(771);
    pub const STICK_C_RIGHT: Self = Self(772);
    pub const TRIGGER_L: Self = Self(773);
    pub const TRIGGER_R: Self = Self(774);
}

impl fmt::Display for InputCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Released = 0,
    Pressed = 1,
}
