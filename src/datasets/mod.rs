//! Synthetic datasets for the course lessons.
//!
//! This module provides one submodule per lesson:
//! - `perceptron`: linearly separable points and two Gaussian blobs
//! - `cluster`: a Gaussian mixture and a ring around a dense centre
//! - `knn`: labelled points, query points and a regression surface
//! - `regression`: simple, multiple, logistic and polynomial regression data
//!
//! Every generator seeds a fresh [`RandomState`] per call. `Seed::Lesson`
//! uses the seed the lesson notebooks were built with (the sum of the
//! character codes of the lesson phrase); `Seed::Fixed` takes an explicit one.
//!
//! # Examples
//!
//! ```rust
//! use mlfund::datasets::{perceptron, regression, Seed};
//!
//! let data = perceptron::linearly_separable(Seed::Lesson);
//! assert_eq!(data.x.shape(), &[2, 200]);
//! assert_eq!(data.y.shape(), &[1, 200]);
//!
//! // Same seed, same arrays.
//! assert_eq!(regression::polynomial(Seed::Fixed(3)), regression::polynomial(Seed::Fixed(3)));
//! ```

pub mod cluster;
pub mod knn;
pub mod perceptron;
pub mod regression;

use tracing::debug;

use crate::{Matrix, RandomState, Vector};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Seed {
    /// The seed derived from the lesson phrase.
    #[default]
    Lesson,
    Fixed(u32),
}

impl Seed {
    pub fn resolve(self, phrase: &str) -> u32 {
        match self {
            Seed::Lesson => lesson_seed(phrase),
            Seed::Fixed(seed) => seed,
        }
    }
}

/// Sum of the character codes of `phrase`.
pub fn lesson_seed(phrase: &str) -> u32 {
    phrase.chars().map(u32::from).sum()
}

pub(crate) fn seeded(seed: Seed, phrase: &str, dataset: &str) -> RandomState {
    let seed = seed.resolve(phrase);
    debug!(dataset, seed, "generating synthetic dataset");
    RandomState::new(seed)
}

/// `num` evenly spaced values from `start` to `stop` inclusive.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vector {
    let step = if num > 1 {
        (stop - start) / (num - 1) as f64
    } else {
        0.0
    };

    let mut values = Vector::from_shape_fn(num, |k| k as f64 * step + start);
    if num > 1 {
        values[num - 1] = stop;
    }
    values
}

/// Square coordinate grids over `[start, stop]` with `num` points per axis.
///
/// The first grid varies down the rows and the second across the columns,
/// both endpoints included.
pub fn mgrid(start: f64, stop: f64, num: usize) -> (Matrix, Matrix) {
    let step = if num != 1 {
        (stop - start) / (num as f64 - 1.0)
    } else {
        1.0
    };

    let rows = Matrix::from_shape_fn((num, num), |(i, _)| i as f64 * step + start);
    let cols = Matrix::from_shape_fn((num, num), |(_, j)| j as f64 * step + start);
    (rows, cols)
}
