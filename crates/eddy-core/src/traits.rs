//! Read-only access to a scalar grid.

/// Pull-based, read-only view of a 2D scalar grid.
///
/// This is the only surface a renderer needs: it samples
/// [`get_value`](GridRead::get_value) for every `(row, col)` once per
/// frame. Implementors must panic on out-of-range indices rather than
/// wrap or clamp them.
pub trait GridRead {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    fn get_value(&self, row: usize, col: usize) -> f32;

    /// All cells in row-major order.
    fn as_slice(&self) -> &[f32];

    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }
}
