use glam::Vec2;

use super::stroke::{Stroke, StrokeCollection};
use crate::input::queue::InputEvent;

/// Capture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// No contact; move events are ignored.
    Idle,
    /// A stroke is accumulating points.
    Active,
}

/// Outcome of feeding one operation into the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureResult {
    /// A new stroke was started.
    Started,
    /// A new stroke was started; the unfinished one before it was dropped.
    Restarted,
    /// The point was appended to the active stroke.
    Extended,
    /// The active stroke was committed to the collection.
    Committed,
    /// Nothing happened (move or end while idle).
    Ignored,
}

/// Accumulates pointer gestures into strokes for the current word attempt.
///
/// The capture is the only owner of its [`StrokeCollection`]; everything
/// else reads it through [`StrokeCapture::strokes`].
#[derive(Debug, Default)]
pub struct StrokeCapture {
    strokes: StrokeCollection,
    active: Option<Stroke>,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        if self.active.is_some() {
            CaptureState::Active
        } else {
            CaptureState::Idle
        }
    }

    /// Committed strokes. The active stroke is not included until it ends.
    pub fn strokes(&self) -> &StrokeCollection {
        &self.strokes
    }

    /// The stroke currently being drawn, if any.
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    /// Start a new stroke at `point`.
    ///
    /// A start that arrives while a stroke is active (a release the host never
    /// reported) drops the unfinished stroke and starts over from `point`.
    pub fn begin_stroke(&mut self, point: Vec2) -> CaptureResult {
        let dropped = self.active.replace(Stroke::new(point));
        match dropped {
            Some(stroke) => {
                log::debug!("capture: dropped unfinished stroke ({} points)", stroke.len());
                CaptureResult::Restarted
            }
            None => CaptureResult::Started,
        }
    }

    /// Append `point` to the active stroke. Ignored when idle.
    pub fn extend_stroke(&mut self, point: Vec2) -> CaptureResult {
        match self.active.as_mut() {
            Some(stroke) => {
                stroke.push(point);
                CaptureResult::Extended
            }
            None => CaptureResult::Ignored,
        }
    }

    /// Commit the active stroke. A no-op when idle, so repeated calls are harmless.
    pub fn end_stroke(&mut self) -> CaptureResult {
        match self.active.take() {
            Some(stroke) => {
                log::debug!(
                    "capture: stroke {} committed ({} points)",
                    self.strokes.len() + 1,
                    stroke.len()
                );
                self.strokes.push(stroke);
                CaptureResult::Committed
            }
            None => CaptureResult::Ignored,
        }
    }

    /// Drop all strokes, including any in progress, and return to idle.
    pub fn reset(&mut self) {
        self.strokes.clear();
        self.active = None;
    }

    /// Dispatch a normalized input event.
    pub fn apply(&mut self, event: InputEvent) -> CaptureResult {
        match event {
            InputEvent::GestureStart { x, y } => self.begin_stroke(Vec2::new(x, y)),
            InputEvent::GestureMove { x, y } => self.extend_stroke(Vec2::new(x, y)),
            InputEvent::GestureEnd => self.end_stroke(),
        }
    }
}
