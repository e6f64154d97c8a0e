//! Peergraph loads a crawled p2p peer list, scores every peer by its betweenness centrality and
//! draws the resulting graph with nodes coloured by score.
//!
//! # Basic usage
//!
//! The library is centered around the [`PeerGraph`](graph::PeerGraph) structure which is built
//! from the [`PeerRecord`](peer::PeerRecord)s of a peers file. Each record adds a capped number
//! of connections to the graph.
//!
//! ```rust
//! use peergraph::{graph::PeerGraph, peer::parse_peers};
//!
//! let peers = parse_peers(
//!     r#"[
//!         {"ip": "10.0.0.1", "list": ["10.0.0.2"]},
//!         {"ip": "10.0.0.2", "list": ["10.0.0.1", "10.0.0.3"]},
//!         {"ip": "10.0.0.3", "list": ["10.0.0.2"]}
//!     ]"#,
//! )
//! .unwrap();
//!
//! // Register at most 21 connections per record.
//! let graph = PeerGraph::from_peers(&peers, 20).unwrap();
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 4);
//!
//! // The middle peer is on the only shortest path between the other two.
//! let centrality = graph.betweenness_centrality(true, 1);
//! assert_eq!(centrality, vec![0.0, 1.0, 0.0]);
//! ```

pub mod args;
mod betweenness;
pub mod colormap;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod layout;
pub mod peer;
pub mod render;
pub mod summary;

pub use error::{Error, Result};
