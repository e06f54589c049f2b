use glam::Vec2;

/// One continuous contact-to-release gesture.
///
/// A stroke always holds at least one point: it can only be created from a
/// seed point, and only the capture that owns it may append more.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Vec2>,
}

impl Stroke {
    /// Start a stroke at `seed`.
    pub fn new(seed: Vec2) -> Self {
        let mut points = Vec::with_capacity(64);
        points.push(seed);
        Self { points }
    }

    /// Build a stroke from a list of points. Returns `None` for an empty list.
    pub fn from_points(points: Vec<Vec2>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub(crate) fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// False for any stroke built through this module.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of distances between consecutive points.
    pub fn path_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}

/// Strokes drawn for the current word attempt, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeCollection {
    strokes: Vec<Stroke>,
}

impl StrokeCollection {
    pub fn new() -> Self {
        Self { strokes: Vec::new() }
    }

    pub(crate) fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub(crate) fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    /// All points of all strokes, in drawing order.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.strokes.iter().flat_map(|s| s.points().iter().copied())
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total ink: path length summed over every stroke.
    /// Distances are never bridged across pen lifts.
    pub fn total_path_length(&self) -> f32 {
        self.strokes.iter().map(Stroke::path_length).sum()
    }

    /// Leftmost and rightmost x over all points, or `None` when empty.
    pub fn horizontal_extent(&self) -> Option<(f32, f32)> {
        self.points().fold(None, |acc, p| match acc {
            None => Some((p.x, p.x)),
            Some((min_x, max_x)) => Some((min_x.min(p.x), max_x.max(p.x))),
        })
    }
}

impl FromIterator<Stroke> for StrokeCollection {
    fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
        Self {
            strokes: iter.into_iter().collect(),
        }
    }
}
