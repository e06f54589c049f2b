//! Wire layout shared with the host page.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Two flat f32 arrays are exposed through raw pointers:
//! ```text
//! [Stroke vertices: vertex_count × 4 floats]   x, y, stroke, active
//! [Events:          event_count  × 4 floats]   kind, a, b, c
//! ```
//!
//! Consecutive vertices with the same `stroke` value form one polyline.

use bytemuck::{Pod, Zeroable};

use crate::api::types::WireEvent;

/// Protocol version reported to the host.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per stroke vertex (wire format — never changes).
pub const VERTEX_FLOATS: usize = 4;

/// Floats per event (wire format — never changes).
pub const EVENT_FLOATS: usize = WireEvent::FLOATS;

/// One captured point, tagged with the stroke it belongs to.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct StrokeVertex {
    /// X in surface pixels.
    pub x: f32,
    /// Y in surface pixels.
    pub y: f32,
    /// Zero-based stroke index in drawing order.
    pub stroke: f32,
    /// 1.0 for the stroke still being drawn, 0.0 for committed strokes.
    pub active: f32,
}

impl StrokeVertex {
    pub const FLOATS: usize = VERTEX_FLOATS;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}
