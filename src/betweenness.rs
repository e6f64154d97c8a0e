//! A module for performing the multi-threaded computation of betweenness

use std::{collections::VecDeque, sync::Arc, thread};

pub(crate) const MIN_NUM_THREADS: usize = 1;
pub(crate) const MAX_NUM_THREADS: usize = 128;

/// this is an implementation of Ulrik Brandes's
/// A Faster Algorithm for Betweenness Centrality
/// http://snap.stanford.edu/class/cs224w-readings/brandes01centrality.pdf
/// page 10, "Algorithm 1: Betweenness centrality in unweighted graphs"
///
/// Neighbour lists may repeat a vertex for parallel edges, each repetition is a distinct
/// shortest path.
fn betweenness_for_node(index: usize, indices: &[Vec<usize>], betweenness_count: &mut [f64]) {
    let num_nodes = indices.len();

    let mut sigma: Vec<f64> = vec![0.0; num_nodes];
    let mut distance: Vec<Option<usize>> = vec![None; num_nodes];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); num_nodes];
    let mut delta: Vec<f64> = vec![0.0; num_nodes];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut stack: Vec<usize> = Vec::new();

    sigma[index] = 1.0;
    distance[index] = Some(0);
    queue.push_back(index);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        // Only vertices with a distance are queued.
        let next = distance[v].unwrap_or_default() + 1;

        for &w in &indices[v] {
            if distance[w].is_none() {
                distance[w] = Some(next);
                queue.push_back(w);
            }
            if distance[w] == Some(next) {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != index {
            betweenness_count[w] += delta[w];
        }
    }
}

/// The thread task: runs the single source pass for every `stride`-th node starting at
/// `offset`, returning the partial betweenness sums.
fn betweenness_task(offset: usize, stride: usize, aindices: Arc<Vec<Vec<usize>>>) -> Vec<f64> {
    let indices = &aindices;
    let num_nodes = indices.len();

    let mut betweenness_count: Vec<f64> = vec![0.0; num_nodes];

    for index in (offset..num_nodes).step_by(stride) {
        betweenness_for_node(index, indices, &mut betweenness_count);
    }

    betweenness_count
}

/// Returns what the raw sums are divided by. Every source is visited, so each pair is counted
/// from both ends.
fn divisor(num_nodes: usize, normalize: bool) -> Option<f64> {
    if normalize {
        if num_nodes <= 2 {
            None
        } else {
            Some(((num_nodes - 1) * (num_nodes - 2)) as f64)
        }
    } else {
        Some(2.0)
    }
}

/// Called by [`PeerGraph::betweenness_centrality`](crate::graph::PeerGraph::betweenness_centrality).
///
/// Sources are split over the threads by stride and the partial sums are added up in thread
/// order, so the same graph and thread count always produce the same floats.
pub(crate) fn compute_betweenness(
    indices: Vec<Vec<usize>>,
    num_threads: usize,
    normalize: bool,
) -> Vec<f64> {
    let num_nodes = indices.len();
    let num_threads = num_threads
        .clamp(MIN_NUM_THREADS, MAX_NUM_THREADS)
        .min(num_nodes.max(1));

    tracing::debug!(num_nodes, num_threads, normalize, "computing betweenness");

    let mut betweenness_count: Vec<f64> = vec![0.0; num_nodes];

    if num_threads == 1 {
        for index in 0..num_nodes {
            betweenness_for_node(index, &indices, &mut betweenness_count);
        }
    } else {
        let wrapped_indices = Arc::new(indices);

        let handles: Vec<_> = (0..num_threads)
            .map(|offset| {
                let aindices = Arc::clone(&wrapped_indices);
                thread::spawn(move || betweenness_task(offset, num_threads, aindices))
            })
            .collect();

        for h in handles {
            let partial = match h.join() {
                Ok(partial) => partial,
                Err(panic) => std::panic::resume_unwind(panic),
            };

            for (total, b) in betweenness_count.iter_mut().zip(partial) {
                *total += b;
            }
        }
    }

    if let Some(divisor) = divisor(num_nodes, normalize) {
        for b in betweenness_count.iter_mut() {
            *b /= divisor;
        }
    }

    betweenness_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisors() {
        assert_eq!(divisor(0, true), None);
        assert_eq!(divisor(2, true), None);
        assert_eq!(divisor(4, true), Some(6.0));
        assert_eq!(divisor(4, false), Some(2.0));
    }

    #[test]
    fn disconnected_components() {
        // Two separate lines: 0 - 1 - 2 and 3 - 4 - 5.
        let indices = vec![
            vec![1],
            vec![0, 2],
            vec![1],
            vec![4],
            vec![3, 5],
            vec![4],
        ];

        let b = compute_betweenness(indices, 1, false);

        assert_eq!(b, vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn self_loop_has_no_effect() {
        let with_loop = vec![vec![1, 0, 0], vec![0, 2], vec![1]];
        let without_loop = vec![vec![1], vec![0, 2], vec![1]];

        assert_eq!(
            compute_betweenness(with_loop, 1, true),
            compute_betweenness(without_loop, 1, true)
        );
    }

    #[test]
    fn more_threads_than_nodes() {
        let indices = vec![vec![1], vec![0, 2], vec![1]];

        assert_eq!(compute_betweenness(indices, 64, true), vec![0.0, 1.0, 0.0]);
    }
}
