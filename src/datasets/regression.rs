//! Regression lesson data.

use ndarray::{Array1, Zip, array};

use super::{Seed, linspace, mgrid, seeded};
use crate::{Matrix, Vector};

pub const LESSON_PHRASE: &str = "Regression";

/// Four targets over the same inputs, from a perfect line to pure noise.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleLinearData {
    pub x: Vector,
    pub y_a: Vector,
    pub y_b: Vector,
    pub y_c: Vector,
    pub y_d: Vector,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MultipleLinearData {
    pub s: Matrix,
    pub t: Matrix,
    pub x1: Vector,
    pub x2: Vector,
    pub y: Vector,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescentData {
    pub x: Vector,
    /// Parameter sweep over `[-5, 5]` for plotting the cost.
    pub x_wide: Vector,
    pub y: Vector,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogisticData {
    pub x1: Vector,
    pub x2: Vector,
    pub y: Array1<i8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialData {
    pub x: Vector,
    pub y: Vector,
}

/// Adds `(u * 2 - 1) * amplitude` noise, `u` uniform on `[0, 1)`.
fn with_noise(base: &Vector, noise: Vector, amplitude: f64) -> Vector {
    Zip::from(base)
        .and(&noise)
        .map_collect(|&b, &u| b + (u * 2.0 - 1.0) * amplitude)
}

fn join(head: Vector, tail: Vector) -> Vector {
    head.iter().chain(tail.iter()).copied().collect()
}

pub fn simple_linear(seed: Seed) -> SimpleLinearData {
    const N: usize = 20;
    let mut rng = seeded(seed, LESSON_PHRASE, "regression::simple_linear");

    let x = linspace(0.0, 1.0, N);
    let y_a = x.clone();
    let y_b = with_noise(&x, rng.random_array(N), 0.15);
    let y_c = with_noise(&x, rng.random_array(N), 0.5);
    let y_d = rng.random_array(N);

    SimpleLinearData { x, y_a, y_b, y_c, y_d }
}

/// `m * m` samples of `y = (x1 + x2) / 2` plus noise over a grid on `[-1, 1]²`.
///
/// `s` and `t` are the grids themselves; `x1` and `x2` are the same values
/// flattened in row-major order.
pub fn multiple_linear(m: usize, seed: Seed) -> MultipleLinearData {
    let mut rng = seeded(seed, LESSON_PHRASE, "regression::multiple_linear");

    let (s, t) = mgrid(-1.0, 1.0, m);
    let x1: Vector = s.iter().copied().collect();
    let x2: Vector = t.iter().copied().collect();
    let mean = (&x1 + &x2) * 0.5;
    let y = with_noise(&mean, rng.random_array(m * m), 0.75);

    MultipleLinearData { s, t, x1, x2, y }
}

pub fn gradient_descent(seed: Seed) -> GradientDescentData {
    const N: usize = 20;
    let mut rng = seeded(seed, LESSON_PHRASE, "regression::gradient_descent");

    let x = linspace(0.0, 1.0, N);
    let x_wide = linspace(-5.0, 5.0, N);
    let y = with_noise(&x, rng.random_array(N), 0.25);

    GradientDescentData { x, x_wide, y }
}

/// Anscombe's quartet as rows `x1, y1, x2, y2, x3, y3, x4, y4`.
pub fn anscombe_quartet() -> Matrix {
    array![
        [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0],
        [8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68],
        [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0],
        [9.14, 8.14, 8.74, 8.77, 9.26, 8.10, 6.13, 3.10, 9.13, 7.26, 4.74],
        [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0],
        [7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73],
        [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 19.0, 8.0, 8.0, 8.0],
        [6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.50, 5.56, 7.91, 6.89],
    ]
}

/// Two overlapping Gaussian classes of 256 points each, class 0 first.
pub fn logistic(seed: Seed) -> LogisticData {
    const HALF: usize = 256;
    let mut rng = seeded(seed, LESSON_PHRASE, "regression::logistic");

    let x1 = rng.normal_array(1.0, 0.3, HALF);
    let x1 = join(x1, rng.normal_array(2.0, 0.3, HALF));
    let x2 = rng.normal_array(0.0, 0.3, HALF);
    let x2 = join(x2, rng.normal_array(0.25, 0.3, HALF));
    let y = Array1::from_shape_fn(2 * HALF, |i| i8::from(i >= HALF));

    LogisticData { x1, x2, y }
}

/// 21 noisy samples of `x³ - 3x² + x + 1` on `[-3, 3)`.
pub fn polynomial(seed: Seed) -> PolynomialData {
    const N: usize = 21;
    let mut rng = seeded(seed, LESSON_PHRASE, "regression::polynomial");

    let x = rng.uniform_array(-3.0, 3.0, N);
    let noise = rng.uniform_array(-3.0, 3.0, N);
    let y = Zip::from(&x)
        .and(&noise)
        .map_collect(|&x, &e| x.powf(3.0) - 3.0 * (x * x) + x + 1.0 + e);

    PolynomialData { x, y }
}
