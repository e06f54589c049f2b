use super::protocol::StrokeVertex;
use crate::capture::recorder::StrokeCapture;
use crate::capture::stroke::Stroke;

/// Flat vertex list of everything on the drawing surface, for the host to
/// draw. Rebuilt from the capture after each input pass.
pub struct StrokeBuffer {
    pub vertices: Vec<StrokeVertex>,
}

impl StrokeBuffer {
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Replace the contents with the capture's committed strokes followed by
    /// the active stroke, if any.
    pub fn rebuild(&mut self, capture: &StrokeCapture) {
        self.clear();
        let committed = capture.strokes();
        for (i, stroke) in committed.iter().enumerate() {
            self.push_stroke(stroke, i, false);
        }
        if let Some(active) = capture.active_stroke() {
            self.push_stroke(active, committed.len(), true);
        }
    }

    fn push_stroke(&mut self, stroke: &Stroke, index: usize, active: bool) {
        let active = if active { 1.0 } else { 0.0 };
        self.vertices.extend(stroke.points().iter().map(|p| StrokeVertex {
            x: p.x,
            y: p.y,
            stroke: index as f32,
            active,
        }));
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Raw pointer to vertex data for reads from the host.
    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    /// Vertex data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Default for StrokeBuffer {
    fn default() -> Self {
        Self::new()
    }
}
