//! Synthetic datasets and distance metrics for an introductory machine
//! learning course.
//!
//! Every dataset is regenerated on each call from a fixed seed, so lesson
//! plots come out the same every time. The default seeds reproduce the
//! NumPy-generated lesson artifacts bit for bit.
//!
//! ```rust
//! use mlfund::{Distance, Metric};
//! use mlfund::datasets::{knn, Seed};
//! use ndarray::array;
//!
//! let data = knn::classification_points(Seed::Lesson);
//! assert_eq!(data.q1.len(), 100);
//!
//! let metric = Distance::from(Metric::Manhattan);
//! let d = metric.distance(&array![[0.0, 0.0], [1.0, 1.0]], &array![1.0, 2.0]).unwrap();
//! assert_eq!(d, array![3.0, 1.0]);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod datasets;
pub mod distance;
pub mod metrics;
pub mod random;

pub use distance::{Distance, InvalidMetricError, Metric};
pub use random::RandomState;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
