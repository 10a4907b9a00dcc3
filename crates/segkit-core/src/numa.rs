//! Numa - Numeric arrays
//!
//! Arrays of floating-point numbers, used here for histograms.

/// Array of floating-point numbers
///
/// `Numa` manages a dynamic array of `f32` values. It includes the
/// parameters `startx` and `delx` for representing sampled functions
/// or histograms where values correspond to evenly-spaced x positions.
#[derive(Debug, Clone)]
pub struct Numa {
    data: Vec<f32>,
    startx: f32,
    delx: f32,
}

impl Default for Numa {
    fn default() -> Self {
        Self::new()
    }
}

impl Numa {
    /// Create a new empty Numa
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            startx: 0.0,
            delx: 1.0,
        }
    }

    /// Create a Numa from a vector of values
    pub fn from_vec(data: Vec<f32>) -> Self {
        Self {
            data,
            startx: 0.0,
            delx: 1.0,
        }
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a value by index.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.data.get(index).copied()
    }

    /// Append a value.
    pub fn push(&mut self, val: f32) {
        self.data.push(val);
    }

    /// Borrow all values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Set the x-axis parameters: x(i) = startx + i * delx.
    pub fn set_parameters(&mut self, startx: f32, delx: f32) {
        self.startx = startx;
        self.delx = delx;
    }

    /// Get the x-axis parameters `(startx, delx)`.
    pub fn parameters(&self) -> (f32, f32) {
        (self.startx, self.delx)
    }

    /// Sum of all values.
    pub fn sum(&self) -> f64 {
        self.data.iter().map(|&v| v as f64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numa_basics() {
        let mut na = Numa::new();
        assert!(na.is_empty());
        na.push(1.5);
        na.push(2.5);
        assert_eq!(na.len(), 2);
        assert_eq!(na.get(0), Some(1.5));
        assert_eq!(na.get(2), None);
        assert_eq!(na.sum(), 4.0);
        assert_eq!(na.parameters(), (0.0, 1.0));
    }

    #[test]
    fn test_numa_parameters() {
        let mut na = Numa::from_vec(vec![0.0; 4]);
        na.set_parameters(10.0, 0.5);
        assert_eq!(na.parameters(), (10.0, 0.5));
        assert_eq!(na.as_slice().len(), 4);
    }
}
