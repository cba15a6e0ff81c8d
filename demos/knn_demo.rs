use mlfund::datasets::knn::{self, Distance, Metric};
use mlfund::datasets::Seed;
use ndarray::{Axis, array, stack};
use tracing_subscriber::EnvFilter;

const K: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mlfund=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== k-Nearest Neighbours Example ===\n");

    let train = knn::classification_points(Seed::Lesson);
    let points = stack(Axis(1), &[train.q1.view(), train.q2.view()])?;
    let query = knn::query_points(Seed::Fixed(7));

    println!("Training set: {} points, 3 classes", points.nrows());
    println!("Voting with k = {}\n", K);

    for metric in Metric::ALL {
        let dist = Distance::from(metric);
        let mut votes = [0usize; 3];

        for i in 0..query.p1.len().min(200) {
            let q = array![query.p1[i], query.p2[i]];
            let d = dist.distance(&points, &q)?;

            let mut order: Vec<usize> = (0..d.len()).collect();
            order.sort_by(|&a, &b| d[a].total_cmp(&d[b]));

            let mut counts = [0usize; 3];
            for &idx in order.iter().take(K) {
                counts[train.cl[idx] as usize] += 1;
            }
            let winner = (0..3).max_by_key(|&c| counts[c]).unwrap_or(0);
            votes[winner] += 1;
        }

        println!(
            "{:<10} class counts over 200 queries: {:?}",
            metric.as_str(),
            votes
        );
    }

    let mut dist = Distance::default();
    if let Err(e) = dist.set_metric("minkowski") {
        println!("\nRejected metric: {}", e);
    }

    Ok(())
}
