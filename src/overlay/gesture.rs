const ACTION_MASK: i32 = 0xff;
const ACTION_POINTER_INDEX_MASK: i32 = 0xff00;
const ACTION_POINTER_INDEX_SHIFT: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Up,
    Move,
    Cancel,
    PointerDown,
    PointerUp,
    Other(i32),
}

impl TouchAction {
    /// Decodes a masked platform action value.
    pub fn from_masked(action: i32) -> Self {
        match action {
            0 => TouchAction::Down,
            1 => TouchAction::Up,
            2 => TouchAction::Move,
            3 => TouchAction::Cancel,
            5 => TouchAction::PointerDown,
            6 => TouchAction::PointerUp,
            other => TouchAction::Other(other),
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, TouchAction::Down | TouchAction::PointerDown)
    }

    pub fn is_up(self) -> bool {
        matches!(self, TouchAction::Up | TouchAction::PointerUp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    /// Position truncated to whole pixels for hit-testing.
    pub fn pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// One multi-touch gesture event as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEvent {
    pub action: TouchAction,
    /// Index into `pointers` of the pointer that changed.
    pub action_index: usize,
    pub pointers: Vec<Pointer>,
}

impl GestureEvent {
    pub fn new(action: TouchAction, action_index: usize, pointers: Vec<Pointer>) -> Self {
        Self {
            action,
            action_index,
            pointers,
        }
    }

    /// Splits a packed platform action into the action kind and the index of
    /// the pointer it refers to.
    pub fn from_raw(raw_action: i32, pointers: Vec<Pointer>) -> Self {
        let action = TouchAction::from_masked(raw_action & ACTION_MASK);
        let action_index =
            ((raw_action & ACTION_POINTER_INDEX_MASK) >> ACTION_POINTER_INDEX_SHIFT) as usize;
        Self::new(action, action_index, pointers)
    }

    /// Single-pointer event with pointer id 0.
    pub fn single(action: TouchAction, x: f32, y: f32) -> Self {
        Self::new(action, 0, vec![Pointer::new(0, x, y)])
    }

    pub fn action_pointer(&self) -> Option<&Pointer> {
        self.pointers.get(self.action_index)
    }

    pub fn pointer_by_id(&self, id: i32) -> Option<&Pointer> {
        self.pointers.iter().find(|pointer| pointer.id == id)
    }
}
