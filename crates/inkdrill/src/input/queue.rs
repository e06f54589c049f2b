/// Input events the stroke capture understands.
/// Device-agnostic: mouse and touch both arrive in this shape after
/// [`normalize`](super::normalize::normalize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Contact began at surface coordinates (x, y).
    GestureStart { x: f32, y: f32 },
    /// Contact moved to surface coordinates (x, y).
    GestureMove { x: f32, y: f32 },
    /// Contact was released (or left the surface).
    GestureEnd,
}

/// A queue of normalized input events.
/// The host pushes events as they arrive; the drill drains them on its next pass.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(64),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
