use mlfund::datasets::{Seed, regression};
use mlfund::metrics::correlation;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mlfund=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Correlation Example ===\n");

    let simple = regression::simple_linear(Seed::Lesson);
    println!("Simple linear data ({} samples):", simple.x.len());
    for (label, y) in [
        ("yA", &simple.y_a),
        ("yB", &simple.y_b),
        ("yC", &simple.y_c),
        ("yD", &simple.y_d),
    ] {
        println!("  r(x, {}) = {:.4}", label, correlation(&simple.x, y)?);
    }

    println!("\nAnscombe's quartet:");
    let quartet = regression::anscombe_quartet();
    for pair in 0..4 {
        let x = quartet.row(2 * pair).to_owned();
        let y = quartet.row(2 * pair + 1).to_owned();
        println!(
            "  set {}: mean(y) = {:.2}, r = {:.4}",
            pair + 1,
            y.mean().unwrap_or(f64::NAN),
            correlation(&x, &y)?
        );
    }
    println!("Same statistics, very different shapes: always plot the data.");

    let multiple = regression::multiple_linear(16, Seed::Lesson);
    println!("\nMultiple linear data on a 16 x 16 grid:");
    println!("  r(x1, y) = {:.4}", correlation(&multiple.x1, &multiple.y)?);
    println!("  r(x2, y) = {:.4}", correlation(&multiple.x2, &multiple.y)?);

    Ok(())
}
