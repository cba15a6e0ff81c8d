//! Clustering lesson data: three small Gaussian blobs, and a noisy ring
//! around a dense square centre.

use std::f64::consts::PI;

use super::{Seed, seeded};
use crate::Vector;

pub use crate::distance::{Distance, Metric};

pub const LESSON_PHRASE: &str = "clustering";

const BLOBS: usize = 3;
const BLOB_SIZE: usize = 32;
const RING_SIZE: usize = 1000;
const RING_RADIUS: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct MixtureData {
    /// Blob x coordinates, 96 values.
    pub x1: Vector,
    /// Blob y coordinates, 96 values.
    pub y1: Vector,
    /// Ring then centre x coordinates, 1250 values.
    pub x2: Vector,
    /// Ring then centre y coordinates, 1250 values.
    pub y2: Vector,
}

pub fn mixtures(seed: Seed) -> MixtureData {
    let mut rng = seeded(seed, LESSON_PHRASE, "cluster::mixtures");

    let mut x1: Vec<f64> = Vec::with_capacity(BLOBS * BLOB_SIZE);
    let mut y1: Vec<f64> = Vec::with_capacity(BLOBS * BLOB_SIZE);
    for _ in 0..BLOBS {
        let mu_x = rng.uniform(-2.0, 2.0);
        let mu_y = rng.uniform(-2.0, 2.0);
        let sigma = rng.uniform(0.0, 0.5);
        x1.extend(rng.normal_array(mu_x, sigma, BLOB_SIZE).iter());
        y1.extend(rng.normal_array(mu_y, sigma, BLOB_SIZE).iter());
    }

    let t = rng.uniform_array(0.0, 2.0 * PI, RING_SIZE);
    let jitter_x = rng.random_array(RING_SIZE);
    let jitter_y = rng.random_array(RING_SIZE);

    let centre = RING_SIZE / 4;
    let mut x2: Vec<f64> = t
        .iter()
        .zip(jitter_x.iter())
        .map(|(t, j)| t.cos() * RING_RADIUS + j)
        .collect();
    let mut y2: Vec<f64> = t
        .iter()
        .zip(jitter_y.iter())
        .map(|(t, j)| t.sin() * RING_RADIUS + j)
        .collect();
    x2.extend(rng.uniform_array(-2.5, 2.5, centre).iter());
    y2.extend(rng.uniform_array(-2.5, 2.5, centre).iter());

    MixtureData {
        x1: Vector::from(x1),
        y1: Vector::from(y1),
        x2: Vector::from(x2),
        y2: Vector::from(y2),
    }
}
