//! Force-directed placement of the graph's nodes.

use nalgebra::{Point2, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Deserialize;

use crate::graph::PeerGraph;

/// Parameters of the Fruchterman-Reingold spring layout.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfiguration {
    /// Maximum number of iterations.
    pub iterations: usize,
    /// Seed of the initial random placement.
    pub seed: u64,
    /// The layout stops early once the mean node displacement falls under this value.
    pub threshold: f64,
}

impl Default for LayoutConfiguration {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: 1,
            threshold: 1e-4,
        }
    }
}

/// Computes a spring layout for the graph, positions are indexed by node and fit within
/// `[-1.0, 1.0]` on both axes.
///
/// Edges attract their endpoints and all node pairs repel each other. The maximum step shrinks
/// linearly every iteration, and the same seed always yields the same layout.
pub fn spring_layout(graph: &PeerGraph, config: &LayoutConfiguration) -> Vec<Point2<f64>> {
    let n = graph.node_count();

    match n {
        0 => return vec![],
        1 => return vec![Point2::origin()],
        _ => {}
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut positions: Vec<Point2<f64>> = (0..n)
        .map(|_| Point2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    // Optimal distance between nodes.
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1 * extent(&positions);
    let cooling = temperature / (config.iterations as f64 + 1.0);

    for iteration in 0..config.iterations {
        let mut displacement = vec![Vector2::<f64>::zeros(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let distance = delta.norm().max(0.01);
                let force = delta * (k * k / (distance * distance));

                displacement[i] += force;
                displacement[j] -= force;
            }
        }

        for edge in graph.edges().iter().filter(|edge| !edge.is_loop()) {
            let (s, t) = (*edge.source(), *edge.target());
            let delta = positions[s] - positions[t];
            let distance = delta.norm().max(0.01);
            let force = delta * (distance / k);

            displacement[s] -= force;
            displacement[t] += force;
        }

        let mut moved = 0.0;
        for (position, d) in positions.iter_mut().zip(&displacement) {
            let length = d.norm();
            if length > 0.0 {
                let step = *d * (length.min(temperature) / length);
                *position += step;
                moved += step.norm();
            }
        }

        temperature -= cooling;

        if moved / (n as f64) < config.threshold {
            tracing::debug!(iteration, "layout converged");
            break;
        }
    }

    rescale(&mut positions);
    positions
}

/// Returns the larger of the horizontal and vertical spans of the positions.
fn extent(positions: &[Point2<f64>]) -> f64 {
    let (min, max) = bounds(positions);
    let span = max - min;

    span.x.max(span.y)
}

fn bounds(positions: &[Point2<f64>]) -> (Point2<f64>, Point2<f64>) {
    positions.iter().fold(
        (
            Point2::new(f64::INFINITY, f64::INFINITY),
            Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(min, max), p| (min.inf(p), max.sup(p)),
    )
}

/// Centers the positions on the origin and scales them so the largest coordinate is 1.
fn rescale(positions: &mut [Point2<f64>]) {
    let n = positions.len() as f64;
    let center = positions
        .iter()
        .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.coords)
        / n;

    let mut limit: f64 = 0.0;
    for p in positions.iter_mut() {
        *p -= center;
        limit = limit.max(p.x.abs()).max(p.y.abs());
    }

    if limit > 0.0 {
        for p in positions.iter_mut() {
            p.coords /= limit;
        }
    }
}
