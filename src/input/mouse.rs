/// Pointer travel (pixels) beyond which a press becomes a drag.
const DRAG_THRESHOLD: f32 = 4.0;

/// Result of releasing the primary button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ClickResult {
    /// The press turned into a drag, or there was no matching press.
    NoAction,
    /// A click at the release position.
    Click {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
}

/// Tracks cursor position and press-to-release drag detection.
#[derive(Debug, Clone, Default)]
pub(crate) struct InputState {
    /// Last known cursor position.
    pub(crate) mouse_pos: Option<(f32, f32)>,
    /// Where the primary button went down, while it is held.
    press_pos: Option<(f32, f32)>,
    /// Whether the current press has travelled past the drag threshold.
    pub(crate) is_dragging: bool,
}

impl InputState {
    /// Record a cursor move and return the delta from the last position.
    pub(crate) fn handle_mouse_position(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = self
            .mouse_pos
            .map_or((0.0, 0.0), |(lx, ly)| (x - lx, y - ly));
        self.mouse_pos = Some((x, y));

        if let Some((px, py)) = self.press_pos {
            let (dx, dy) = (x - px, y - py);
            if dx * dx + dy * dy > DRAG_THRESHOLD * DRAG_THRESHOLD {
                self.is_dragging = true;
            }
        }
        delta
    }

    /// Primary button went down at the current cursor position.
    pub(crate) fn handle_mouse_down(&mut self) {
        self.press_pos = Some(self.mouse_pos.unwrap_or((0.0, 0.0)));
        self.is_dragging = false;
    }

    /// Primary button released: a click unless the press became a drag.
    pub(crate) fn process_mouse_up(&mut self) -> ClickResult {
        let press = self.press_pos.take();
        let was_dragging = std::mem::take(&mut self.is_dragging);

        match (press, self.mouse_pos) {
            (Some(_), Some((x, y))) if !was_dragging => {
                ClickResult::Click { x, y }
            }
            _ => ClickResult::NoAction,
        }
    }
}
