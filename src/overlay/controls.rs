use crate::input::InputCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Button,
    Dpad,
    Joystick,
}

/// One entry of the on-screen control table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    /// Index used by the `buttonToggle{N}` preference.
    pub toggle_index: usize,
    pub kind: ControlKind,
    /// Button: one code. Dpad: up, down, left, right. Joystick: axis pair.
    pub codes: &'static [InputCode],
    /// Artwork name for the host renderer.
    pub art: &'static str,
    /// Default top-left, in thousandths of the landscape width/height.
    pub default_permille: (u32, u32),
}

impl ControlSpec {
    pub fn primary_code(&self) -> InputCode {
        self.codes[0]
    }

    /// Size of this control relative to the base size, before the user
    /// scale multiplier.
    pub fn class_scale(&self) -> f32 {
        match self.kind {
            ControlKind::Button => button_scale(self.primary_code()),
            ControlKind::Dpad => dpad_scale(self.primary_code()),
            ControlKind::Joystick => 0.275,
        }
    }

    /// Outer-to-thumb ratio for joysticks.
    pub fn inner_divisor(&self) -> f32 {
        if self.primary_code() == InputCode::STICK_C {
            1.833
        } else {
            1.375
        }
    }
}

fn button_scale(code: InputCode) -> f32 {
    match code {
        InputCode::BUTTON_HOME | InputCode::BUTTON_START | InputCode::BUTTON_SELECT => 0.0625,
        InputCode::TRIGGER_L | InputCode::TRIGGER_R | InputCode::BUTTON_ZL | InputCode::BUTTON_ZR => {
            0.25
        }
        _ => 0.125,
    }
}

fn dpad_scale(up_code: InputCode) -> f32 {
    if up_code == InputCode::DPAD_UP {
        0.275
    } else {
        0.2125
    }
}

pub const CONTROLS: &[ControlSpec] = &[
    ControlSpec {
        toggle_index: 0,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_A],
        art: "classic_a",
        default_permille: (920, 460),
    },
    ControlSpec {
        toggle_index: 1,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_B],
        art: "classic_b",
        default_permille: (845, 600),
    },
    ControlSpec {
        toggle_index: 2,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_X],
        art: "classic_x",
        default_permille: (845, 320),
    },
    ControlSpec {
        toggle_index: 3,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_Y],
        art: "classic_y",
        default_permille: (770, 460),
    },
    ControlSpec {
        toggle_index: 4,
        kind: ControlKind::Button,
        codes: &[InputCode::TRIGGER_L],
        art: "classic_l",
        default_permille: (20, 40),
    },
    ControlSpec {
        toggle_index: 5,
        kind: ControlKind::Button,
        codes: &[InputCode::TRIGGER_R],
        art: "classic_r",
        default_permille: (870, 40),
    },
    ControlSpec {
        toggle_index: 6,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_ZL],
        art: "classic_zl",
        default_permille: (160, 40),
    },
    ControlSpec {
        toggle_index: 7,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_ZR],
        art: "classic_zr",
        default_permille: (730, 40),
    },
    ControlSpec {
        toggle_index: 8,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_START],
        art: "gcpad_start",
        default_permille: (560, 880),
    },
    ControlSpec {
        toggle_index: 9,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_SELECT],
        art: "n3ds_select",
        default_permille: (400, 880),
    },
    ControlSpec {
        toggle_index: 10,
        kind: ControlKind::Button,
        codes: &[InputCode::BUTTON_HOME],
        art: "wiimote_home",
        default_permille: (480, 880),
    },
    ControlSpec {
        toggle_index: 11,
        kind: ControlKind::Dpad,
        codes: &[
            InputCode::DPAD_UP,
            InputCode::DPAD_DOWN,
            InputCode::DPAD_LEFT,
            InputCode::DPAD_RIGHT,
        ],
        art: "gcwii_dpad",
        default_permille: (30, 520),
    },
    ControlSpec {
        toggle_index: 12,
        kind: ControlKind::Joystick,
        codes: &[InputCode::STICK_LEFT],
        art: "gcwii_joystick",
        default_permille: (30, 200),
    },
    ControlSpec {
        toggle_index: 13,
        kind: ControlKind::Joystick,
        codes: &[InputCode::STICK_C],
        art: "gcpad_c",
        default_permille: (700, 640),
    },
];

/// Screen geometry the host reports when the overlay is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayMetrics {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Edge length that class scales are applied to.
    pub base_size: u32,
}

impl OverlayMetrics {
    /// Uses the smaller screen dimension as base size, so controls keep the
    /// same size in portrait and landscape.
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            base_size: screen_width.min(screen_height),
        }
    }

    pub fn with_base_size(mut self, base_size: u32) -> Self {
        self.base_size = base_size;
        self
    }

    /// `(larger, smaller)` screen dimension.
    pub fn landscape_extent(&self) -> (f32, f32) {
        let larger = self.screen_width.max(self.screen_height);
        let smaller = self.screen_width.min(self.screen_height);
        (larger as f32, smaller as f32)
    }

    /// Pulls a stored top-left back into a window of twice the larger screen
    /// edge around the screen. Non-finite coordinates land on 0.
    pub fn clamp_position(&self, position: (f32, f32)) -> (f32, f32) {
        let (larger, _) = self.landscape_extent();
        let limit = larger * 2.0;
        let clamp = |value: f32| {
            if value.is_finite() {
                value.clamp(-limit, limit)
            } else {
                0.0
            }
        };
        (clamp(position.0), clamp(position.1))
    }

    /// Rendered edge length for a control of `class_scale` under the
    /// multiplier `multiplier`.
    pub fn scaled_size(&self, class_scale: f32, multiplier: f32) -> i32 {
        let scale = class_scale * multiplier;
        ((self.base_size as f32 * scale) as i32).max(0)
    }
}
