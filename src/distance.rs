//! Row-wise distance metrics shared by the clustering and kNN lessons.
//!
//! A [`Distance`] holds one [`Metric`] and reduces two point-sets row by row.
//! Operands follow NumPy broadcasting, so a single query vector can be
//! measured against every row of a set:
//!
//! ```rust
//! use mlfund::Distance;
//! use ndarray::array;
//!
//! let mut dist = Distance::new("chebyshev").unwrap();
//! let points = array![[0.0, 0.0], [3.0, 1.0]];
//! assert_eq!(dist.distance(&points, &array![1.0, 1.0]).unwrap(), array![1.0, 2.0]);
//!
//! assert!(dist.set_metric("hamming").is_err());
//! assert_eq!(dist.name(), "chebyshev");
//! ```

use std::fmt;
use std::str::FromStr;

use ndarray::{ArrayBase, ArrayView1, Axis, Data, Dimension, ErrorKind, Ix2, ShapeError, Zip};
use thiserror::Error;
use tracing::{debug, warn};

use crate::Vector;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
    Canberra,
    Cosine,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Euclidean,
        Metric::Manhattan,
        Metric::Chebyshev,
        Metric::Canberra,
        Metric::Cosine,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
            Metric::Chebyshev => "chebyshev",
            Metric::Canberra => "canberra",
            Metric::Cosine => "cosine",
        }
    }

    /// Distance between two rows of equal length.
    ///
    /// Zero denominators in canberra and cosine are not guarded; the
    /// resulting `NaN` or `inf` is returned as is.
    pub(crate) fn between(self, p: ArrayView1<f64>, q: ArrayView1<f64>) -> f64 {
        let pairs = p.iter().zip(q.iter());
        match self {
            Metric::Euclidean => pairs.map(|(a, b)| (a - b) * (a - b)).sum::<f64>().sqrt(),
            Metric::Manhattan => pairs.map(|(a, b)| (a - b).abs()).sum(),
            Metric::Chebyshev => pairs
                .map(|(a, b)| (a - b).abs())
                .fold(f64::NEG_INFINITY, |max, v| if v > max || v.is_nan() { v } else { max }),
            Metric::Canberra => pairs
                .map(|(a, b)| (a - b).abs() / (a.abs() + b.abs()))
                .sum(),
            Metric::Cosine => {
                let dot = p.dot(&q);
                let norm_p = p.dot(&p).sqrt();
                let norm_q = q.dot(&q).sqrt();
                1.0 - dot / (norm_p * norm_q)
            }
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the canonical names returned by [`Metric::as_str`].
///
/// `"euclidian"` is also accepted and maps to [`Metric::Euclidean`], so it
/// is the one input that does not round-trip: it reads back as
/// `"euclidean"`.
impl FromStr for Metric {
    type Err = InvalidMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // Old lesson notebooks spell it this way.
            "euclidean" | "euclidian" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            "chebyshev" => Ok(Metric::Chebyshev),
            "canberra" => Ok(Metric::Canberra),
            "cosine" => Ok(Metric::Cosine),
            _ => Err(InvalidMetricError { name: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("metric '{name}' does not exist, choose between: [{}]", valid_names())]
pub struct InvalidMetricError {
    pub name: String,
}

fn valid_names() -> String {
    Metric::ALL.map(Metric::as_str).join(", ")
}

/// A selectable distance function between two point-sets.
///
/// The metric is the only state. Changing it needs `&mut self`, so an
/// instance shared across threads must sit behind a lock to be reassigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Distance {
    metric: Metric,
}

impl Distance {
    pub fn new(metric: &str) -> Result<Self, InvalidMetricError> {
        let metric = parse_metric(metric)?;
        Ok(Self { metric })
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn name(&self) -> &'static str {
        self.metric.as_str()
    }

    /// Replaces the metric. On error the current metric is kept.
    pub fn set_metric(&mut self, metric: &str) -> Result<(), InvalidMetricError> {
        let metric = parse_metric(metric)?;
        debug!(from = %self.metric, to = %metric, "distance metric changed");
        self.metric = metric;
        Ok(())
    }

    /// Distance between corresponding rows of `p` and `q`.
    ///
    /// Both operands may be 1-D or 2-D and are broadcast against each other
    /// the way NumPy does before reducing along axis 1. The result has one
    /// entry per broadcast row. Incompatible shapes give an
    /// `IncompatibleShape` error; a broadcast result that is not 2-D (two
    /// plain vectors under anything but cosine) gives `OutOfBounds`.
    /// Chebyshev over rows with no columns gives `Unsupported`.
    pub fn distance<S1, S2, D1, D2>(
        &self,
        p: &ArrayBase<S1, D1>,
        q: &ArrayBase<S2, D2>,
    ) -> Result<Vector, ShapeError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = f64>,
        D1: Dimension,
        D2: Dimension,
    {
        let mut p = p.view().into_dyn();
        let mut q = q.view().into_dyn();

        if self.metric == Metric::Cosine {
            if p.ndim() == 1 {
                p = p.insert_axis(Axis(0));
            }
            if q.ndim() == 1 {
                q = q.insert_axis(Axis(0));
            }
        }

        let shape = broadcast_shape(p.shape(), q.shape())?;
        if shape.len() != 2 {
            return Err(ShapeError::from_kind(ErrorKind::OutOfBounds));
        }
        // Max over an empty row has no identity.
        if self.metric == Metric::Chebyshev && shape[0] > 0 && shape[1] == 0 {
            return Err(ShapeError::from_kind(ErrorKind::Unsupported));
        }

        let p = p
            .broadcast(shape.clone())
            .ok_or_else(|| ShapeError::from_kind(ErrorKind::IncompatibleShape))?
            .into_dimensionality::<Ix2>()?;
        let q = q
            .broadcast(shape)
            .ok_or_else(|| ShapeError::from_kind(ErrorKind::IncompatibleShape))?
            .into_dimensionality::<Ix2>()?;

        let metric = self.metric;
        Ok(Zip::from(p.rows())
            .and(q.rows())
            .map_collect(|a, b| metric.between(a, b)))
    }
}

impl From<Metric> for Distance {
    fn from(metric: Metric) -> Self {
        Self { metric }
    }
}

fn parse_metric(name: &str) -> Result<Metric, InvalidMetricError> {
    name.parse().inspect_err(|err| warn!(%err, "rejected distance metric"))
}

fn broadcast_shape(a: &[usize], b: &[usize]) -> Result<Vec<usize>, ShapeError> {
    let ndim = a.len().max(b.len());
    let pad = |s: &[usize], i: usize| {
        let offset = ndim - s.len();
        if i < offset { 1 } else { s[i - offset] }
    };

    (0..ndim)
        .map(|i| match (pad(a, i), pad(b, i)) {
            (x, y) if x == y || y == 1 => Ok(x),
            (1, y) => Ok(y),
            _ => Err(ShapeError::from_kind(ErrorKind::IncompatibleShape)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;
    use ndarray::array;

    #[test]
    fn test_metric_names_round_trip() {
        for metric in Metric::ALL {
            let dist = Distance::new(metric.as_str()).unwrap();
            assert_eq!(dist.metric(), metric);
            assert_eq!(dist.name(), metric.as_str());
        }
    }

    #[test]
    fn test_unequal_row_lengths_fail_for_every_metric() {
        let p = array![[1.0, 2.0, 3.0]];
        let q = array![[1.0, 2.0]];
        for metric in Metric::ALL {
            let err = Distance::from(metric).distance(&p, &q).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IncompatibleShape, "{metric}");

            // A single column broadcasts, as in NumPy.
            let d = Distance::from(metric).distance(&p, &array![1.0]).unwrap();
            assert_eq!(d.len(), 1, "{metric}");
        }
    }

    #[test]
    fn test_chebyshev_of_empty_rows() {
        let empty = Matrix::zeros((2, 0));
        let err = Distance::from(Metric::Chebyshev)
            .distance(&empty, &empty)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unsupported);

        // Sums over empty rows are zero.
        let d = Distance::from(Metric::Manhattan).distance(&empty, &empty).unwrap();
        assert_eq!(d, Vector::zeros(2));

        let none = Matrix::zeros((0, 0));
        let d = Distance::from(Metric::Chebyshev).distance(&none, &none).unwrap();
        assert_eq!(d.len(), 0);
    }

    #[test]
    fn test_legacy_spelling_is_accepted() {
        let dist = Distance::new("euclidian").unwrap();
        assert_eq!(dist.metric(), Metric::Euclidean);
        // The alias does not round-trip; every canonical name does.
        assert_eq!(dist.name(), "euclidean");
        assert_ne!(dist.name(), "euclidian");
    }

    #[test]
    fn test_invalid_metric() {
        let err = Distance::new("minkowski").unwrap_err();
        assert_eq!(err.name, "minkowski");
        let message = err.to_string();
        for metric in Metric::ALL {
            assert!(message.contains(metric.as_str()));
        }
    }

    #[test]
    fn test_set_metric_keeps_old_value_on_error() {
        let mut dist = Distance::default();
        dist.set_metric("cosine").unwrap();
        assert_eq!(dist.metric(), Metric::Cosine);

        assert!(dist.set_metric("Cosine").is_err());
        assert_eq!(dist.metric(), Metric::Cosine);
    }

    #[test]
    fn test_formulas() {
        let p = array![[1.0, 2.0, 3.0]];
        let q = array![[4.0, 0.0, 3.0]];

        let euclidean = Distance::from(Metric::Euclidean).distance(&p, &q).unwrap();
        assert!((euclidean[0] - 13.0_f64.sqrt()).abs() < 1e-12);

        let manhattan = Distance::from(Metric::Manhattan).distance(&p, &q).unwrap();
        assert!((manhattan[0] - 5.0).abs() < 1e-12);

        let chebyshev = Distance::from(Metric::Chebyshev).distance(&p, &q).unwrap();
        assert!((chebyshev[0] - 3.0).abs() < 1e-12);

        // 3/5 + 2/2 + 0/6
        let canberra = Distance::from(Metric::Canberra).distance(&p, &q).unwrap();
        assert!((canberra[0] - 1.6).abs() < 1e-12);

        // 1 - 13 / (sqrt(14) * 5)
        let cosine = Distance::from(Metric::Cosine).distance(&p, &q).unwrap();
        assert!((cosine[0] - (1.0 - 13.0 / (14.0_f64.sqrt() * 5.0))).abs() < 1e-12);
    }

    #[test]
    fn test_identical_sets_are_zero() {
        let p = array![[1.0, -2.0], [0.5, 4.0], [3.0, 3.0]];
        let d = Distance::default().distance(&p, &p).unwrap();
        assert_eq!(d, Vector::zeros(3));
    }

    #[test]
    fn test_query_vector_broadcasts_over_rows() {
        let p = array![[0.0, 0.0], [3.0, 4.0], [6.0, 8.0]];
        let q = array![0.0, 0.0];
        let d = Distance::default().distance(&p, &q).unwrap();
        assert_eq!(d, array![0.0, 5.0, 10.0]);

        // Broadcasting works with the set on the right as well.
        let d = Distance::default().distance(&q, &p).unwrap();
        assert_eq!(d, array![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_cosine_promotes_vectors() {
        let p = array![1.0, 1.0];
        let q = array![[1.0, 1.0], [1.0, 0.0], [-1.0, -1.0]];

        let d = Distance::from(Metric::Cosine).distance(&p, &q).unwrap();
        assert_eq!(d.len(), 3);
        assert!(d[0].abs() < 1e-12);
        assert!((d[1] - (1.0 - 1.0 / 2.0_f64.sqrt())).abs() < 1e-12);
        assert!((d[2] - 2.0).abs() < 1e-12);

        let single = Distance::from(Metric::Cosine).distance(&p, &p).unwrap();
        assert_eq!(single.len(), 1);
        assert!(single[0].abs() < 1e-12);
    }

    #[test]
    fn test_two_vectors_need_cosine() {
        let p = array![1.0, 2.0];
        let err = Distance::default().distance(&p, &p).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn test_shape_mismatch() {
        let p = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let q = array![[1.0, 2.0], [3.0, 4.0]];
        let err = Distance::from(Metric::Manhattan).distance(&p, &q).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleShape);

        let q = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert!(Distance::default().distance(&p, &q).is_err());
    }

    #[test]
    fn test_zero_denominators_pass_through() {
        let zero = array![[0.0, 0.0]];
        let canberra = Distance::from(Metric::Canberra).distance(&zero, &zero).unwrap();
        assert!(canberra[0].is_nan());

        let cosine = Distance::from(Metric::Cosine)
            .distance(&zero, &array![[1.0, 1.0]])
            .unwrap();
        assert!(cosine[0].is_nan());
    }

    #[test]
    fn test_chebyshev_propagates_nan() {
        let p = array![[f64::NAN, 1.0]];
        let q = array![[0.0, 5.0]];
        let d = Distance::from(Metric::Chebyshev).distance(&p, &q).unwrap();
        assert!(d[0].is_nan());
    }

    #[test]
    fn test_with_metric() {
        let dist = Distance::default().with_metric(Metric::Canberra);
        assert_eq!(dist.name(), "canberra");
        assert_eq!(Metric::Canberra.to_string(), "canberra");
    }

    #[test]
    fn test_inputs_are_views() {
        let p = array![[1.0, 2.0], [3.0, 4.0]];
        let d = Distance::from(Metric::Manhattan)
            .distance(&p.view(), &p.row(0))
            .unwrap();
        assert_eq!(d, array![0.0, 4.0]);
    }
}
