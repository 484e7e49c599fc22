//! Deterministic grid hashing.
//!
//! Uses FNV-1a over the grid shape and every cell's `f32::to_bits()`.
//! Two grids hash equal only if they are bit-identical (so `0.0` and
//! `-0.0` differ, as do distinct NaN payloads). Not cryptographic.

use eddy_core::GridRead;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[inline]
fn fold(hash: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(hash, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// Hash a grid's shape and contents.
///
/// Shape is folded in first so that a 2×3 and a 3×2 grid with the same
/// row-major data hash differently.
pub fn grid_hash(grid: &dyn GridRead) -> u64 {
    let hash = fold(FNV_OFFSET, &(grid.rows() as u64).to_le_bytes());
    let hash = fold(hash, &(grid.cols() as u64).to_le_bytes());
    grid.as_slice()
        .iter()
        .fold(hash, |h, v| fold(h, &v.to_bits().to_le_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn same_data_same_hash() {
        let a = Grid::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Grid::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn different_data_different_hash() {
        let a = Grid::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        let b = Grid::from_vec(1, 3, vec![1.0, 2.0, 4.0]).unwrap();
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn shape_matters() {
        let a = Grid::from_vec(2, 3, vec![1.0; 6]).unwrap();
        let b = Grid::from_vec(3, 2, vec![1.0; 6]).unwrap();
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn signed_zero_is_distinguished() {
        let a = Grid::from_vec(1, 1, vec![0.0]).unwrap();
        let b = Grid::from_vec(1, 1, vec![-0.0]).unwrap();
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }
}
