//! k-nearest-neighbours lesson data.
//!
//! The classification sets are plain uniform points with random class
//! labels. The regression sets sample the surface
//! `z = (1 - x + y·x³ + y⁵)·exp(-x² - y²)` on `[-3, 3]²`, either on a
//! regular grid or at random locations.
//!
//! ```rust
//! use mlfund::datasets::{knn, Seed};
//! use mlfund::datasets::knn::{Distance, Metric};
//! use ndarray::{array, Axis, stack};
//!
//! let train = knn::classification_points(Seed::Lesson);
//! let points = stack![Axis(1), train.q1, train.q2];
//!
//! let dist = Distance::from(Metric::Manhattan);
//! let d = dist.distance(&points, &array![0.5, 0.5]).unwrap();
//! assert_eq!(d.len(), 100);
//! ```

use ndarray::Array1;
use tracing::debug;

use super::{Seed, mgrid, seeded};
use crate::{Matrix, Vector};

pub use crate::distance::{Distance, Metric};

pub const LESSON_PHRASE: &str = "k-nearest neighbors";

const GRID_MIN: f64 = -3.0;
const GRID_MAX: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationData {
    pub q1: Vector,
    pub q2: Vector,
    /// Class labels in `{0, 1, 2}`.
    pub cl: Array1<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueryData {
    pub p1: Vector,
    pub p2: Vector,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceData {
    pub x: Matrix,
    pub y: Matrix,
    pub z: Matrix,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SampleData {
    pub q1: Vector,
    pub q2: Vector,
    pub vl: Vector,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridData {
    /// Scattered sample locations, shape (2048, 2).
    pub p: Matrix,
    pub xi: Matrix,
    pub yi: Matrix,
}

/// The regression target shared by the surface and sample sets.
pub fn surface(x: f64, y: f64) -> f64 {
    (1.0 - x + y * x.powf(3.0) + y.powf(5.0)) * (-x * x - y * y).exp()
}

/// 100 labelled training points on the unit square.
pub fn classification_points(seed: Seed) -> ClassificationData {
    const N: usize = 100;
    let mut rng = seeded(seed, LESSON_PHRASE, "knn::classification_points");

    let q1 = rng.uniform_array(0.0, 1.0, N);
    let q2 = rng.uniform_array(0.0, 1.0, N);
    let cl = rng.randint_array(0, 3, N);

    ClassificationData { q1, q2, cl }
}

/// 2048 unlabelled query points on the unit square.
pub fn query_points(seed: Seed) -> QueryData {
    const N: usize = 2048;
    let mut rng = seeded(seed, LESSON_PHRASE, "knn::query_points");

    let p1 = rng.uniform_array(0.0, 1.0, N);
    let p2 = rng.uniform_array(0.0, 1.0, N);

    QueryData { p1, p2 }
}

/// The target surface on a 256 x 256 grid.
///
/// Draws no random numbers, so `seed` only shows up in the log and every
/// seed yields the same arrays.
pub fn regression_surface(seed: Seed) -> SurfaceData {
    const N: usize = 256;
    debug!(
        dataset = "knn::regression_surface",
        seed = seed.resolve(LESSON_PHRASE),
        "generating synthetic dataset"
    );

    let (x, y) = mgrid(GRID_MIN, GRID_MAX, N);
    let z = ndarray::Zip::from(&x).and(&y).map_collect(|&x, &y| surface(x, y));

    SurfaceData { x, y, z }
}

/// 512 scattered samples of the target surface.
pub fn regression_samples(seed: Seed) -> SampleData {
    const N: usize = 512;
    let mut rng = seeded(seed, LESSON_PHRASE, "knn::regression_samples");

    let q1 = rng.uniform_array(GRID_MIN, GRID_MAX, N);
    let q2 = rng.uniform_array(GRID_MIN, GRID_MAX, N);
    let vl = ndarray::Zip::from(&q1).and(&q2).map_collect(|&x, &y| surface(x, y));

    SampleData { q1, q2, vl }
}

/// 2048 scattered locations plus a 1024 x 1024 grid to interpolate onto.
pub fn interpolation_grid(seed: Seed) -> GridData {
    const N: usize = 2048;
    const GRID: usize = 1024;
    let mut rng = seeded(seed, LESSON_PHRASE, "knn::interpolation_grid");

    let p = rng.uniform_array(GRID_MIN, GRID_MAX, (N, 2));
    let (xi, yi) = mgrid(GRID_MIN, GRID_MAX, GRID);

    GridData { p, xi, yi }
}
