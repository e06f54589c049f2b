//! Mapping of raw mouse and touch events onto [`InputEvent`].
//!
//! Pure functions only. The host reports client-space coordinates together
//! with the drawing surface's bounding rectangle; the result is expressed
//! relative to the surface's top-left corner, so where the surface sits on
//! screen never matters.

use glam::Vec2;

use super::queue::InputEvent;

/// Bounding rectangle of the drawing surface in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// A rect anchored at the client origin. Surface and client coordinates coincide.
    pub fn at_origin(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Convert a client-space position into surface space.
    pub fn to_surface(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.left, self.top)
    }
}

impl Default for SurfaceRect {
    fn default() -> Self {
        Self::at_origin(800.0, 300.0)
    }
}

/// Phase of a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MousePhase {
    Down,
    Move,
    Up,
    /// Pointer left the surface while (possibly) drawing.
    Leave,
}

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A device event as reported by the host, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPointerEvent {
    /// `client` is `None` when the host could not read coordinates.
    Mouse { phase: MousePhase, client: Option<Vec2> },
    /// `touches` lists active contacts in client space; the first one drives the stroke.
    Touch { phase: TouchPhase, touches: Vec<Vec2> },
}

/// Normalize a raw device event into a gesture event.
///
/// Returns `None` for events that carry no usable coordinate data; callers
/// drop those without further handling.
pub fn normalize(raw: &RawPointerEvent, rect: &SurfaceRect) -> Option<InputEvent> {
    match raw {
        RawPointerEvent::Mouse { phase, client } => match phase {
            MousePhase::Down => surface_point(*client, rect)
                .map(|p| InputEvent::GestureStart { x: p.x, y: p.y }),
            MousePhase::Move => surface_point(*client, rect)
                .map(|p| InputEvent::GestureMove { x: p.x, y: p.y }),
            MousePhase::Up | MousePhase::Leave => Some(InputEvent::GestureEnd),
        },
        RawPointerEvent::Touch { phase, touches } => match phase {
            TouchPhase::Start => surface_point(touches.first().copied(), rect)
                .map(|p| InputEvent::GestureStart { x: p.x, y: p.y }),
            TouchPhase::Move => surface_point(touches.first().copied(), rect)
                .map(|p| InputEvent::GestureMove { x: p.x, y: p.y }),
            TouchPhase::End | TouchPhase::Cancel => Some(InputEvent::GestureEnd),
        },
    }
}

fn surface_point(client: Option<Vec2>, rect: &SurfaceRect) -> Option<Vec2> {
    let client = client.filter(|c| c.is_finite())?;
    let p = rect.to_surface(client);
    p.is_finite().then_some(p)
}
