//! Figures logged alongside the drawing.

use itertools::Itertools;

use crate::{colormap::Normalization, graph::PeerGraph};

/// A digest of the analysed graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub node_count: usize,
    pub edge_count: usize,
    pub distinct_edge_count: usize,
    /// Edges over the pairs a simple graph could hold, parallel edges included.
    pub density: f64,
    pub centrality_range: Normalization,
    /// Nodes whose final degree exceeds the connection cap, the cap only bounds the edges a
    /// record adds itself.
    pub over_cap: usize,
    /// The most central peers, highest first.
    pub top: Vec<(String, f64)>,
}

impl Summary {
    pub fn new(graph: &PeerGraph, centrality: &[f64], conn_limit: usize, top: usize) -> Self {
        let over_cap = (0..graph.node_count())
            .filter(|&node| graph.degree(node) > conn_limit)
            .count();

        // Ties keep node order so the listing is stable.
        let top = graph
            .nodes()
            .iter()
            .zip(centrality)
            .sorted_by(|(_, a), (_, b)| b.total_cmp(a))
            .take(top)
            .map(|(ip, c)| (ip.clone(), *c))
            .collect();

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            distinct_edge_count: graph.distinct_edge_count(),
            density: graph.density(),
            centrality_range: Normalization::determine(centrality),
            over_cap,
            top,
        }
    }

    pub fn log(&self) {
        tracing::info!(
            nodes = self.node_count,
            edges = self.edge_count,
            distinct = self.distinct_edge_count,
            density = self.density,
            min = self.centrality_range.min,
            max = self.centrality_range.max,
            "peer graph analysed"
        );

        if self.over_cap > 0 {
            tracing::info!(nodes = self.over_cap, "degree exceeds the connection cap");
        }

        for (rank, (ip, centrality)) in self.top.iter().enumerate() {
            tracing::info!(rank = rank + 1, %ip, centrality, "central peer");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peer::PeerRecord;

    #[test]
    fn star() {
        let peers = vec![
            PeerRecord::new("hub", &["a", "b", "c"]),
            PeerRecord::new("a", &["hub"]),
            PeerRecord::new("b", &[]),
            PeerRecord::new("c", &[]),
        ];
        let graph = PeerGraph::from_peers(&peers, 1).unwrap();
        let centrality = graph.betweenness_centrality(true, 1);

        let summary = Summary::new(&graph, &centrality, 1, 2);

        assert_eq!(summary.node_count, 4);
        // The hub adds two edges before the cap trips, a adds one back.
        assert_eq!(summary.edge_count, 3);
        assert_eq!(summary.distinct_edge_count, 2);
        // Three edges over six possible pairs.
        assert_eq!(summary.density, 0.5);
        // hub and a both end with degree above 1.
        assert_eq!(summary.over_cap, 2);
        assert_eq!(summary.top[0].0, "hub");
        assert_eq!(summary.top.len(), 2);
        assert_eq!(summary.centrality_range.min, 0.0);
    }

    #[test]
    fn empty_graph() {
        let summary = Summary::new(&PeerGraph::new(), &[], 20, 10);

        assert_eq!(summary.node_count, 0);
        assert!(summary.density.is_nan());
        assert!(summary.top.is_empty());
        assert_eq!(summary.centrality_range, Normalization::default());
    }
}
