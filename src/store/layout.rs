use crate::input::InputCode;
use crate::overlay::controls::{ControlSpec, OverlayMetrics, CONTROLS};
use crate::store::prefs::PreferenceStore;
use anyhow::{Context, Result};

pub const OVERLAY_INIT_KEY: &str = "OverlayInit";
pub const CONTROL_SCALE_KEY: &str = "controlScale";
pub const TOUCH_ENABLED_KEY: &str = "isTouchEnabled";
pub const DEFAULT_CONTROL_SCALE: i32 = 50;
const MAX_CONTROL_SCALE: i32 = 100;

pub fn position_keys(code: InputCode) -> (String, String) {
    (format!("{code}-X"), format!("{code}-Y"))
}

pub fn toggle_key(toggle_index: usize) -> String {
    format!("buttonToggle{toggle_index}")
}

/// Persisted overlay layout and the preferences that shape it.
#[derive(Debug, Clone)]
pub struct LayoutStore<P> {
    prefs: P,
}

impl<P: PreferenceStore> LayoutStore<P> {
    pub fn new(prefs: P) -> Self {
        Self { prefs }
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn prefs_mut(&mut self) -> &mut P {
        &mut self.prefs
    }

    pub fn into_inner(self) -> P {
        self.prefs
    }

    /// Stored top-left of the control keyed by `code`, or `None` when
    /// neither coordinate was ever written.
    pub fn position(&self, code: InputCode) -> Option<(f32, f32)> {
        let (x_key, y_key) = position_keys(code);
        let x = self.prefs.get_float(&x_key);
        let y = self.prefs.get_float(&y_key);
        if x.is_none() && y.is_none() {
            return None;
        }
        Some((x.unwrap_or(0.0) as f32, y.unwrap_or(0.0) as f32))
    }

    pub fn position_or_origin(&self, code: InputCode) -> (f32, f32) {
        self.position(code).unwrap_or((0.0, 0.0))
    }

    pub fn set_position(&mut self, code: InputCode, x: f32, y: f32) -> Result<()> {
        self.stage_position(code, x, y);
        self.prefs
            .flush()
            .with_context(|| format!("persist overlay position for control {code}"))
    }

    pub fn is_initialized(&self) -> bool {
        self.prefs.get_bool(OVERLAY_INIT_KEY).unwrap_or(false)
    }

    pub fn mark_initialized(&mut self) -> Result<()> {
        self.prefs.put_bool(OVERLAY_INIT_KEY, true);
        self.prefs
            .flush()
            .context("persist overlay initialized flag")
    }

    /// User scale preference clamped to `[0, 100]`.
    pub fn control_scale(&self) -> i32 {
        let raw = self
            .prefs
            .get_int(CONTROL_SCALE_KEY)
            .unwrap_or(DEFAULT_CONTROL_SCALE as i64);
        let clamped = raw.clamp(0, MAX_CONTROL_SCALE as i64) as i32;
        if clamped as i64 != raw {
            tracing::warn!(raw, clamped, "control scale preference out of range");
        }
        clamped
    }

    pub fn set_control_scale(&mut self, value: i32) -> Result<()> {
        self.prefs
            .put_int(CONTROL_SCALE_KEY, value.clamp(0, MAX_CONTROL_SCALE) as i64);
        self.prefs.flush().context("persist control scale")
    }

    /// Global size multiplier in `[0.5, 1.5]`.
    pub fn scale_multiplier(&self) -> f32 {
        (self.control_scale() + 50) as f32 / 100.0
    }

    pub fn is_control_enabled(&self, toggle_index: usize) -> bool {
        self.prefs
            .get_bool(&toggle_key(toggle_index))
            .unwrap_or(true)
    }

    pub fn set_control_enabled(&mut self, toggle_index: usize, enabled: bool) -> Result<()> {
        self.prefs.put_bool(&toggle_key(toggle_index), enabled);
        self.prefs
            .flush()
            .with_context(|| format!("persist toggle for control slot {toggle_index}"))
    }

    pub fn touch_passthrough_enabled(&self) -> bool {
        self.prefs.get_bool(TOUCH_ENABLED_KEY).unwrap_or(true)
    }

    pub fn set_touch_passthrough(&mut self, enabled: bool) -> Result<()> {
        self.prefs.put_bool(TOUCH_ENABLED_KEY, enabled);
        self.prefs.flush().context("persist touch passthrough flag")
    }

    /// Generates the default layout on first run.
    ///
    /// Returns `true` when default positions were written. A store that was
    /// never initialized but already holds a placed A button keeps that
    /// layout and is only marked initialized.
    pub fn ensure_default_layout(&mut self, metrics: &OverlayMetrics) -> Result<bool> {
        if self.is_initialized() {
            return Ok(false);
        }

        let has_custom_layout = self
            .prefs
            .get_float(&position_keys(InputCode::BUTTON_A).0)
            .is_some_and(|x| x != 0.0);

        let wrote_defaults = if has_custom_layout {
            tracing::info!("keeping existing overlay layout");
            false
        } else {
            self.write_default_layout(metrics)?;
            true
        };

        self.mark_initialized()?;
        Ok(wrote_defaults)
    }

    /// Overwrites every known control position with its default placement
    /// and flushes before returning.
    pub fn write_default_layout(&mut self, metrics: &OverlayMetrics) -> Result<()> {
        let (max_x, max_y) = metrics.landscape_extent();
        for spec in CONTROLS {
            let (x, y) = default_position(spec, max_x, max_y);
            self.stage_position(spec.primary_code(), x, y);
        }
        self.prefs
            .flush()
            .context("persist default overlay layout")?;
        tracing::info!(
            controls = CONTROLS.len(),
            max_x,
            max_y,
            "wrote default overlay layout"
        );
        Ok(())
    }

    fn stage_position(&mut self, code: InputCode, x: f32, y: f32) {
        let (x_key, y_key) = position_keys(code);
        self.prefs.put_float(&x_key, x as f64);
        self.prefs.put_float(&y_key, y as f64);
    }
}

fn default_position(spec: &ControlSpec, max_x: f32, max_y: f32) -> (f32, f32) {
    let (permille_x, permille_y) = spec.default_permille;
    (
        (permille_x as f32 / 1000.0) * max_x,
        (permille_y as f32 / 1000.0) * max_y,
    )
}
