//! A module for building peer graphs.

use std::collections::{HashMap, HashSet};

use crate::{
    betweenness::compute_betweenness,
    edge::Edge,
    error::{Error, Result},
    peer::PeerRecord,
};

/// The default number of connections registered per peer record.
pub const DEFAULT_CONN_LIMIT: usize = 20;

/// An undirected multigraph of peers.
///
/// Vertices are peer identifiers, stored in the order they were added. Edges are stored as
/// reported: if two peers list each other, both connections are kept.
#[derive(Clone, Debug, Default)]
pub struct PeerGraph {
    /// The peer identifiers, the position in the vector is the node index.
    nodes: Vec<String>,
    /// A mapping of peer identifiers to their node index.
    index: HashMap<String, usize>,
    /// The connections between node indices.
    edges: Vec<Edge<usize>>,
}

impl PeerGraph {
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use peergraph::graph::PeerGraph;
    ///
    /// let graph = PeerGraph::new();
    /// assert_eq!(graph.node_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from crawled peer records.
    ///
    /// Every record's ip is registered first, then each record's neighbour list is walked and
    /// one edge is added per neighbour. The walk stops once more than `conn_limit` edges have
    /// been added for that record, so at most `conn_limit + 1` edges come from a single record.
    /// Edges added by other records aren't counted, a node's final degree isn't capped.
    ///
    /// # Examples
    ///
    /// ```
    /// use peergraph::{graph::PeerGraph, peer::parse_peers};
    ///
    /// let peers = parse_peers(r#"[{"ip":"A","list":["B"]},{"ip":"B","list":["A"]}]"#).unwrap();
    /// let graph = PeerGraph::from_peers(&peers, 20).unwrap();
    ///
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_peers(peers: &[PeerRecord], conn_limit: usize) -> Result<Self> {
        let mut graph = Self::new();

        for peer in peers {
            graph.add_node(&peer.ip);
        }

        for peer in peers {
            // Every record's ip was registered in the previous pass.
            let node = graph.index[&peer.ip];
            let mut conns = 0;

            for neighbour in &peer.list {
                let target = graph
                    .node_index(neighbour)
                    .ok_or_else(|| Error::UnknownPeer(neighbour.clone()))?;

                graph.add_edge(node, target);
                conns += 1;
                if conns > conn_limit {
                    break;
                }
            }
        }

        Ok(graph)
    }

    /// Registers a peer and returns its node index. A peer that is already present keeps its
    /// original index.
    ///
    /// # Examples
    ///
    /// ```
    /// use peergraph::graph::PeerGraph;
    ///
    /// let mut graph = PeerGraph::new();
    ///
    /// assert_eq!(graph.add_node("1.2.3.4"), 0);
    /// assert_eq!(graph.add_node("5.6.7.8"), 1);
    /// assert_eq!(graph.add_node("1.2.3.4"), 0);
    /// ```
    pub fn add_node(&mut self, ip: &str) -> usize {
        if let Some(i) = self.index.get(ip) {
            return *i;
        }

        let i = self.nodes.len();
        self.nodes.push(ip.to_owned());
        self.index.insert(ip.to_owned(), i);

        i
    }

    /// Adds an edge between two node indices. Duplicates and self-loops are kept.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn add_edge(&mut self, source: usize, target: usize) {
        assert!(
            source < self.nodes.len() && target < self.nodes.len(),
            "edge ({source}, {target}) references a missing node"
        );

        self.edges.push(Edge::new(source, target));
    }

    /// Returns the node index of a peer, if it's registered.
    pub fn node_index(&self, ip: &str) -> Option<usize> {
        self.index.get(ip).copied()
    }

    /// Returns the peer identifiers, ordered by node index.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Returns the edges in insertion order.
    pub fn edges(&self) -> &[Edge<usize>] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of distinct connected pairs, ignoring orientation and multiplicity.
    ///
    /// # Examples
    ///
    /// ```
    /// use peergraph::graph::PeerGraph;
    ///
    /// let mut graph = PeerGraph::new();
    /// let (a, b) = (graph.add_node("a"), graph.add_node("b"));
    /// graph.add_edge(a, b);
    /// graph.add_edge(b, a);
    ///
    /// assert_eq!(graph.edge_count(), 2);
    /// assert_eq!(graph.distinct_edge_count(), 1);
    /// ```
    pub fn distinct_edge_count(&self) -> usize {
        self.edges.iter().collect::<HashSet<_>>().len()
    }

    /// Returns the degree of a node, a self-loop counts twice.
    pub fn degree(&self, node: usize) -> usize {
        self.edges
            .iter()
            .map(|edge| {
                usize::from(*edge.source() == node) + usize::from(*edge.target() == node)
            })
            .sum()
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges in a simple graph. Parallel edges are counted so the value can exceed 1.
    pub fn density(&self) -> f64 {
        let vc = self.node_count() as f64;
        let ec = self.edge_count() as f64;

        let pec = vc * (vc - 1.0) / 2.0;
        ec / pec
    }

    /// Returns the neighbour lists of every node, one entry per edge end. Parallel edges show
    /// up as repeated neighbours, a self-loop lists the node twice in its own list.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.node_count()];

        for edge in &self.edges {
            let (s, t) = (*edge.source(), *edge.target());
            adjacency[s].push(t);
            adjacency[t].push(s);
        }

        adjacency
    }

    /// Computes the betweenness centrality of every node, indexed by node.
    ///
    /// With `normalize` set, the scores are scaled by `1 / ((n - 1)(n - 2))` for graphs of more
    /// than two nodes, endpoints excluded. The work is split across `num_threads` threads; the
    /// result only depends on the graph and the thread count.
    ///
    /// # Examples
    ///
    /// ```
    /// use peergraph::graph::PeerGraph;
    ///
    /// let mut graph = PeerGraph::new();
    /// let (a, b, c) = (graph.add_node("a"), graph.add_node("b"), graph.add_node("c"));
    /// graph.add_edge(a, b);
    /// graph.add_edge(b, c);
    ///
    /// assert_eq!(graph.betweenness_centrality(true, 1), vec![0.0, 1.0, 0.0]);
    /// assert_eq!(graph.betweenness_centrality(false, 1), vec![0.0, 1.0, 0.0]);
    /// ```
    pub fn betweenness_centrality(&self, normalize: bool, num_threads: usize) -> Vec<f64> {
        compute_betweenness(self.adjacency(), num_threads, normalize)
    }

    /// Maps per-node scores back onto the peer identifiers.
    pub fn centrality_by_peer(&self, scores: &[f64]) -> HashMap<String, f64> {
        self.nodes
            .iter()
            .cloned()
            .zip(scores.iter().copied())
            .collect()
    }
}
