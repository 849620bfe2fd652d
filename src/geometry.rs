/// Axis-aligned integer rectangle in screen pixels. `right`/`bottom` are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Builds a rectangle from its top-left corner and size. Negative sizes
    /// collapse to zero; an origin too close to `i32::MAX` is pulled back so
    /// the size is kept.
    pub fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let left = left.min(i32::MAX - width);
        let top = top.min(i32::MAX - height);
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        !self.is_empty() && x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    pub fn center_x(&self) -> i32 {
        self.left + self.width() / 2
    }

    pub fn center_y(&self) -> i32 {
        self.top + self.height() / 2
    }

    pub fn move_to(&self, left: i32, top: i32) -> Self {
        Self::from_origin_size(left, top, self.width(), self.height())
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        self.move_to(self.left.saturating_add(dx), self.top.saturating_add(dy))
    }

    /// Same size, re-centred on `(cx, cy)`.
    pub fn centered_at(&self, cx: i32, cy: i32) -> Self {
        let width = self.width();
        let height = self.height();
        Self::from_origin_size(
            cx.saturating_sub(width / 2),
            cy.saturating_sub(height / 2),
            width,
            height,
        )
    }
}
