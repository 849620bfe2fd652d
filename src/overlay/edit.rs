use crate::input::InputCode;
use crate::overlay::controls::ControlKind;
use crate::overlay::element::OverlayElement;
use crate::overlay::gesture::{GestureEvent, TouchAction};
use crate::store::{LayoutStore, PreferenceStore};
use anyhow::Result;
use slab::Slab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    key: usize,
    code: InputCode,
    pointer_id: i32,
    anchor: (i32, i32),
}

/// Result of one edit-mode event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOutcome {
    pub moved: bool,
    /// Controls whose position was written to the layout store.
    pub persisted: Vec<InputCode>,
}

/// Drag-to-reposition state, one independent machine per control class.
///
/// A Button and a Dpad may be dragged at the same time by different
/// pointers; two Buttons may not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditController {
    button: Option<Drag>,
    dpad: Option<Drag>,
    joystick: Option<Drag>,
}

impl EditController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Code of the control currently being dragged in `kind`, if any.
    pub fn configuring(&self, kind: ControlKind) -> Option<InputCode> {
        self.slot(kind).map(|drag| drag.code)
    }

    pub fn is_idle(&self) -> bool {
        self.button.is_none() && self.dpad.is_none() && self.joystick.is_none()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn handle<P: PreferenceStore>(
        &mut self,
        elements: &mut Slab<OverlayElement>,
        event: &GestureEvent,
        store: &mut LayoutStore<P>,
    ) -> Result<EditOutcome> {
        let mut outcome = EditOutcome::default();
        match event.action {
            TouchAction::Down | TouchAction::PointerDown => self.begin(elements, event),
            TouchAction::Move => outcome.moved = self.follow(elements, event),
            TouchAction::Up | TouchAction::PointerUp => {
                return self.finish(elements, event, store);
            }
            TouchAction::Cancel | TouchAction::Other(_) => {}
        }
        Ok(outcome)
    }

    fn begin(&mut self, elements: &Slab<OverlayElement>, event: &GestureEvent) {
        let Some(pointer) = event.action_pointer() else {
            return;
        };
        let (x, y) = pointer.pixel();

        for kind in [ControlKind::Button, ControlKind::Dpad, ControlKind::Joystick] {
            if self.slot(kind).is_some() {
                continue;
            }
            let hit = elements
                .iter()
                .find(|(_, element)| element.kind() == kind && element.contains_point(x, y));
            if let Some((key, element)) = hit {
                tracing::debug!(code = %element.primary_code(), "drag started");
                *self.slot_mut(kind) = Some(Drag {
                    key,
                    code: element.primary_code(),
                    pointer_id: pointer.id,
                    anchor: (x, y),
                });
            }
        }
    }

    fn follow(&mut self, elements: &mut Slab<OverlayElement>, event: &GestureEvent) -> bool {
        let mut moved = false;
        for kind in [ControlKind::Button, ControlKind::Dpad, ControlKind::Joystick] {
            let Some(drag) = self.slot_mut(kind).as_mut() else {
                continue;
            };
            let Some(pointer) = event
                .pointer_by_id(drag.pointer_id)
                .or_else(|| event.action_pointer())
            else {
                continue;
            };
            let Some(element) = elements.get_mut(drag.key) else {
                continue;
            };

            let (x, y) = pointer.pixel();
            let moved_to = element.bounds().offset(
                x.saturating_sub(drag.anchor.0),
                y.saturating_sub(drag.anchor.1),
            );
            element.set_position(moved_to.left, moved_to.top);
            drag.anchor = (x, y);
            moved = true;
        }
        moved
    }

    fn finish<P: PreferenceStore>(
        &mut self,
        elements: &Slab<OverlayElement>,
        event: &GestureEvent,
        store: &mut LayoutStore<P>,
    ) -> Result<EditOutcome> {
        let mut outcome = EditOutcome::default();
        let Some(pointer) = event.action_pointer() else {
            return Ok(outcome);
        };

        let mut first_error = None;
        for kind in [ControlKind::Button, ControlKind::Dpad, ControlKind::Joystick] {
            let slot = self.slot_mut(kind);
            if slot.map(|drag| drag.pointer_id) != Some(pointer.id) {
                continue;
            }
            let Some(drag) = slot.take() else {
                continue;
            };
            let Some(element) = elements.get(drag.key) else {
                continue;
            };

            let bounds = element.bounds();
            match store.set_position(drag.code, bounds.left as f32, bounds.top as f32) {
                Ok(()) => {
                    tracing::info!(
                        code = %drag.code,
                        x = bounds.left,
                        y = bounds.top,
                        "saved overlay control position"
                    );
                    outcome.persisted.push(drag.code);
                }
                Err(err) => {
                    tracing::warn!(code = %drag.code, "failed to save control position: {err:#}");
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(outcome),
        }
    }

    fn slot(&self, kind: ControlKind) -> Option<&Drag> {
        match kind {
            ControlKind::Button => self.button.as_ref(),
            ControlKind::Dpad => self.dpad.as_ref(),
            ControlKind::Joystick => self.joystick.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: ControlKind) -> &mut Option<Drag> {
        match kind {
            ControlKind::Button => &mut self.button,
            ControlKind::Dpad => &mut self.dpad,
            ControlKind::Joystick => &mut self.joystick,
        }
    }
}
