use crate::gateway::EmulationGateway;
use crate::geometry::Rect;
use crate::input::InputCode;
use crate::overlay::controls::{ControlKind, OverlayMetrics, CONTROLS};
use crate::overlay::dispatch::dispatch_gesture;
use crate::overlay::edit::EditController;
use crate::overlay::element::{DrawCommand, OverlayElement};
use crate::overlay::gesture::GestureEvent;
use crate::store::{LayoutStore, PreferenceStore};
use anyhow::Result;
use slab::Slab;
use std::collections::HashMap;

/// What the host should do after a touch event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchOutcome {
    pub redraw_requested: bool,
    /// Controls whose new position was persisted by an edit-mode drag.
    pub persisted: Vec<InputCode>,
}

/// The on-screen controls drawn over the emulated display.
///
/// Owns the element set and the layout store. Touch dispatch, refresh and
/// drawing all go through `&mut self`/`&self`, so they are serialized on the
/// owning thread.
pub struct InputOverlay<P> {
    store: LayoutStore<P>,
    metrics: OverlayMetrics,
    elements: Slab<OverlayElement>,
    by_code: HashMap<InputCode, usize>,
    edit_mode: bool,
    editor: EditController,
}

impl<P: PreferenceStore> InputOverlay<P> {
    /// Writes the default layout on first run, then builds the controls.
    pub fn new(prefs: P, metrics: OverlayMetrics) -> Result<Self> {
        let mut store = LayoutStore::new(prefs);
        store.ensure_default_layout(&metrics)?;

        let mut overlay = Self {
            store,
            metrics,
            elements: Slab::new(),
            by_code: HashMap::new(),
            edit_mode: false,
            editor: EditController::new(),
        };
        overlay.refresh_controls();
        Ok(overlay)
    }

    /// Rebuilds every control from the current preferences. Any press or
    /// drag in progress is dropped without emitting events.
    pub fn refresh_controls(&mut self) {
        let multiplier = self.store.scale_multiplier();
        let mut elements = Slab::with_capacity(CONTROLS.len());
        let mut by_code = HashMap::new();

        for spec in CONTROLS {
            if !self.store.is_control_enabled(spec.toggle_index) {
                continue;
            }
            let stored = self.store.position_or_origin(spec.primary_code());
            let position = self.metrics.clamp_position(stored);
            if position != stored {
                tracing::warn!(
                    code = %spec.primary_code(),
                    x = stored.0,
                    y = stored.1,
                    "stored overlay position out of range, clamping"
                );
            }
            let element = OverlayElement::build(spec, position, &self.metrics, multiplier);
            let key = elements.insert(element);
            for code in spec.codes {
                by_code.insert(*code, key);
            }
        }

        tracing::debug!(
            controls = elements.len(),
            multiplier,
            "rebuilt overlay controls"
        );
        self.elements = elements;
        self.by_code = by_code;
        self.editor.reset();
    }

    /// Replaces the screen metrics (e.g. after rotation) and rebuilds.
    pub fn set_metrics(&mut self, metrics: OverlayMetrics) {
        self.metrics = metrics;
        self.refresh_controls();
    }

    pub fn metrics(&self) -> OverlayMetrics {
        self.metrics
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        if self.edit_mode != edit_mode {
            tracing::debug!(edit_mode, "overlay edit mode changed");
        }
        self.edit_mode = edit_mode;
        self.editor.reset();
    }

    pub fn is_in_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn editor(&self) -> &EditController {
        &self.editor
    }

    /// Handles one gesture event.
    ///
    /// In normal mode this never fails. In edit mode a failed position save
    /// is returned after the drag has already ended.
    pub fn on_touch<G>(&mut self, event: &GestureEvent, gateway: &mut G) -> Result<TouchOutcome>
    where
        G: EmulationGateway + ?Sized,
    {
        if self.edit_mode {
            let edit = self
                .editor
                .handle(&mut self.elements, event, &mut self.store)?;
            return Ok(TouchOutcome {
                redraw_requested: edit.moved,
                persisted: edit.persisted,
            });
        }

        let passthrough = self.store.touch_passthrough_enabled();
        dispatch_gesture(&mut self.elements, event, passthrough, gateway);
        Ok(TouchOutcome {
            redraw_requested: true,
            persisted: Vec::new(),
        })
    }

    /// Blits for every control, Buttons first, then Dpads, then Joysticks.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(self.elements.len() + 2);
        for kind in [ControlKind::Button, ControlKind::Dpad, ControlKind::Joystick] {
            for (_, element) in self.elements.iter().filter(|(_, e)| e.kind() == kind) {
                element.draw(&mut out);
            }
        }
        out
    }

    /// Element owning `code`; any Dpad direction resolves to the Dpad.
    pub fn element(&self, code: InputCode) -> Option<&OverlayElement> {
        self.by_code
            .get(&code)
            .and_then(|key| self.elements.get(*key))
    }

    pub fn elements(&self) -> impl Iterator<Item = &OverlayElement> {
        self.elements.iter().map(|(_, element)| element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Primary code and bounds of every control, in build order.
    pub fn layout(&self) -> Vec<(InputCode, Rect)> {
        self.elements()
            .map(|element| (element.primary_code(), element.bounds()))
            .collect()
    }

    pub fn store(&self) -> &LayoutStore<P> {
        &self.store
    }

    /// Preference changes made here take effect on the next
    /// [`refresh_controls`](Self::refresh_controls).
    pub fn store_mut(&mut self) -> &mut LayoutStore<P> {
        &mut self.store
    }
}
