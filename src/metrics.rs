use crate::Vector;

/// Pearson correlation of two samples, using population moments.
///
/// A constant sample has zero spread and yields `NaN`.
pub fn correlation(x: &Vector, y: &Vector) -> Result<f64, String> {
    if x.len() != y.len() {
        return Err("x and y must have the same length".to_string());
    }
    if x.is_empty() {
        return Err("x and y must not be empty".to_string());
    }

    let n = x.len() as f64;
    let mu_x = x.sum() / n;
    let mu_y = y.sum() / n;
    let cov = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - mu_x) * (b - mu_y))
        .sum::<f64>()
        / n;

    Ok(cov / (x.std(0.0) * y.std(0.0)))
}
