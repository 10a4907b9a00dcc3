//! Pta - Point arrays
//!
//! Ordered lists of `(x, y)` positions. The drawing code generates a
//! shape once as a point list and then stamps it onto an image.

/// Ordered list of points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pta {
    points: Vec<(f32, f32)>,
}

impl Pta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<(f32, f32)> {
        self.points.get(index).copied()
    }

    pub fn push(&mut self, x: f32, y: f32) {
        self.points.push((x, y));
    }

    /// Copy of the list moved by `(dx, dy)`.
    pub fn translate(&self, dx: f32, dy: f32) -> Pta {
        Pta {
            points: self.points.iter().map(|&(x, y)| (x + dx, y + dy)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.points.iter().copied()
    }
}
