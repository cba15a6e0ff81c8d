//! Perceptron lesson data. Features are stored one sample per column,
//! labels as a single row.

use ndarray::{Array2, s};

use super::{Seed, seeded};
use crate::Matrix;

pub const LESSON_PHRASE: &str = "Neural Network";

#[derive(Clone, Debug, PartialEq)]
pub struct SeparableData {
    /// Shape (2, 200), uniform on the unit square.
    pub x: Matrix,
    /// Shape (1, 200), true where `2 * x[0] + x[1] > 1.5`.
    pub y: Array2<bool>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlobData {
    /// Shape (2, 200): 100 points around (0, 3), then 100 around the origin.
    pub x: Matrix,
    /// Shape (1, 200): 100 ones followed by 100 zeros.
    pub y: Array2<i64>,
}

pub fn linearly_separable(seed: Seed) -> SeparableData {
    const M: usize = 200;
    let mut rng = seeded(seed, LESSON_PHRASE, "perceptron::linearly_separable");

    let x = rng.random_array((2, M));
    let y = Array2::from_shape_fn((1, M), |(_, j)| 2.0 * x[[0, j]] + x[[1, j]] > 1.5);

    SeparableData { x, y }
}

pub fn gaussian_blobs(seed: Seed) -> BlobData {
    const M: usize = 100;
    let mut rng = seeded(seed, LESSON_PHRASE, "perceptron::gaussian_blobs");

    let mut shifted = rng.standard_normal_array((2, M));
    shifted.row_mut(1).mapv_inplace(|v| v + 3.0);
    let centred = rng.standard_normal_array((2, M));

    let mut x = Matrix::zeros((2, 2 * M));
    x.slice_mut(s![.., ..M]).assign(&shifted);
    x.slice_mut(s![.., M..]).assign(&centred);

    let y = Array2::from_shape_fn((1, 2 * M), |(_, j)| i64::from(j < M));

    BlobData { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linearly_separable_shapes() {
        let data = linearly_separable(Seed::Lesson);
        assert_eq!(data.x.shape(), &[2, 200]);
        assert_eq!(data.y.shape(), &[1, 200]);
        assert!(data.x.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_linearly_separable_labels_follow_the_line() {
        let data = linearly_separable(Seed::Lesson);
        for j in 0..200 {
            let above = 2.0 * data.x[[0, j]] + data.x[[1, j]] > 1.5;
            assert_eq!(data.y[[0, j]], above);
        }
        assert!(data.y.iter().any(|&b| b));
        assert!(data.y.iter().any(|&b| !b));
    }

    #[test]
    fn test_gaussian_blobs() {
        let data = gaussian_blobs(Seed::Lesson);
        assert_eq!(data.x.shape(), &[2, 200]);
        assert_eq!(data.y.shape(), &[1, 200]);
        assert_eq!(data.y.sum(), 100);
        assert!(data.y.slice(s![.., ..100]).iter().all(|&v| v == 1));

        // The first blob sits around y = 3, the second around the origin.
        let upper = data.x.slice(s![1, ..100]).mean().unwrap();
        let lower = data.x.slice(s![1, 100..]).mean().unwrap();
        assert!(upper > 2.5 && upper < 3.5);
        assert!(lower.abs() < 0.5);
    }

    #[test]
    fn test_reproducible() {
        assert_eq!(linearly_separable(Seed::Lesson), linearly_separable(Seed::Lesson));
        assert_eq!(gaussian_blobs(Seed::Fixed(1)), gaussian_blobs(Seed::Fixed(1)));
        assert_ne!(gaussian_blobs(Seed::Fixed(1)), gaussian_blobs(Seed::Fixed(2)));
    }
}
