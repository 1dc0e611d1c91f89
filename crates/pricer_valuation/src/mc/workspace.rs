//! Pre-allocated random-draw buffer.

/// Grow-only scratch buffer for standard-normal draws.
///
/// A [`NoteValuer`](crate::NoteValuer) keeps one of these across
/// valuation calls so repeated runs with the same dimensions allocate
/// nothing. The buffer holds `n_paths × n_steps × n_assets` draws in
/// `(path, step, asset)` order, the same order the generator fills
/// them in, which is what makes the fill part of the reproducible
/// stream.
#[derive(Clone, Debug, Default)]
pub struct SimWorkspace {
    randoms: Vec<f64>,
    len: usize,
}

impl SimWorkspace {
    /// Creates a workspace with the given initial capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            randoms: vec![0.0; capacity],
            len: capacity,
        }
    }

    /// Ensures capacity for `len` draws and sets the logical size.
    ///
    /// Grows with a doubling strategy, never shrinks.
    pub fn ensure_capacity(&mut self, len: usize) {
        if len > self.randoms.len() {
            let new_capacity = len.max(self.randoms.len() * 2);
            self.randoms.resize(new_capacity, 0.0);
        }
        self.len = len;
    }

    /// Returns the draw buffer for filling.
    #[inline]
    pub fn randoms_mut(&mut self) -> &mut [f64] {
        &mut self.randoms[..self.len]
    }

    /// Returns the filled draw buffer.
    #[inline]
    pub fn randoms(&self) -> &[f64] {
        &self.randoms[..self.len]
    }
}
