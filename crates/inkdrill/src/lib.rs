//! Headless core of a handwriting vocabulary drill.
//!
//! Pointer and touch input is normalized into gestures, gestures become
//! strokes, and strokes are scored against the target word with a purely
//! geometric heuristic. The host page owns the canvas, the buttons and the
//! speech output; everything it needs flows through [`Drill`].

pub mod api;
pub mod bridge;
pub mod capture;
pub mod input;
pub mod scoring;
pub mod session;

// Re-export key types at crate root for convenience
pub use api::drill::{Drill, DrillConfig, ScoreReport, WordSource};
pub use api::error::DrillError;
pub use api::types::{DrillEvent, WireEvent};
pub use bridge::protocol::{StrokeVertex, PROTOCOL_VERSION};
pub use bridge::stroke_buffer::StrokeBuffer;
pub use capture::recorder::{CaptureResult, CaptureState, StrokeCapture};
pub use capture::stroke::{Stroke, StrokeCollection};
pub use input::normalize::{normalize, MousePhase, RawPointerEvent, SurfaceRect, TouchPhase};
pub use input::queue::{InputEvent, InputQueue};
pub use scoring::config::{ScoreWeights, ScoringConfig};
pub use scoring::error::ScoreError;
pub use scoring::scorer::{HeuristicScorer, ScoreBreakdown};
pub use session::state::{DrillSession, Verdict};
pub use session::words::WordList;

/// A point on the drawing surface, in pixels from its top-left corner.
pub type Point = glam::Vec2;
