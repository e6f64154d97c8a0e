use peergraph::{
    config::VisualizerConfiguration,
    graph::{PeerGraph, DEFAULT_CONN_LIMIT},
    layout::spring_layout,
    peer::load_peers,
    summary::Summary,
    Error,
};

const PEERS: &str = "testdata/peers.json";
const HUB: &str = "10.0.0.1";

fn sample_graph() -> PeerGraph {
    let peers = load_peers(PEERS).unwrap();
    PeerGraph::from_peers(&peers, DEFAULT_CONN_LIMIT).unwrap()
}

#[test]
fn sample_counts() {
    let graph = sample_graph();

    assert_eq!(graph.node_count(), 26);
    // 21 from the capped hub, 2 from each of the first 24 leaves and 1 from the last.
    assert_eq!(graph.edge_count(), 21 + 24 * 2 + 1);
    assert_eq!(graph.distinct_edge_count(), 25 + 24);
    // The cap doesn't bound edges reported by other peers.
    assert_eq!(graph.degree(graph.node_index(HUB).unwrap()), 21 + 25);
}

#[test]
fn sample_centrality() {
    let graph = sample_graph();
    let centrality = graph.betweenness_centrality(true, 1);
    let by_peer = graph.centrality_by_peer(&centrality);

    assert_eq!(centrality.len(), 26);
    assert!(centrality.iter().all(|c| (0.0..=1.0).contains(c)));

    let hub = by_peer[HUB];
    assert!(by_peer
        .iter()
        .filter(|(ip, _)| ip.as_str() != HUB)
        .all(|(_, c)| *c < hub));
}

#[test]
fn centrality_is_deterministic() {
    let first = sample_graph().betweenness_centrality(true, 4);
    let second = sample_graph().betweenness_centrality(true, 4);

    assert_eq!(first, second);
}

#[test]
fn summary_of_sample() {
    let graph = sample_graph();
    let centrality = graph.betweenness_centrality(true, 2);
    let summary = Summary::new(&graph, &centrality, DEFAULT_CONN_LIMIT, 3);

    assert_eq!(summary.top.len(), 3);
    assert_eq!(summary.top[0].0, HUB);
    assert_eq!(summary.over_cap, 1);
}

#[test]
fn layout_of_sample() {
    let graph = sample_graph();
    let config = VisualizerConfiguration::new("testdata/peergraph.toml").unwrap();

    let positions = spring_layout(&graph, &config.layout);

    assert_eq!(positions.len(), graph.node_count());
    assert_eq!(positions, spring_layout(&graph, &config.layout));
}

#[test]
fn config_fixture() {
    let config = VisualizerConfiguration::new("testdata/peergraph.toml").unwrap();

    assert_eq!(config.conn_limit, DEFAULT_CONN_LIMIT);
    assert_eq!(config.num_threads, 2);
    assert_eq!(config.top, 5);
}

#[test]
fn malformed_fixture() {
    assert!(matches!(
        load_peers("testdata/malformed.json"),
        Err(Error::Parse(_))
    ));
}

#[test]
fn unknown_peer_fixture() {
    let peers = load_peers("testdata/unknown_peer.json").unwrap();

    assert!(matches!(
        PeerGraph::from_peers(&peers, DEFAULT_CONN_LIMIT),
        Err(Error::UnknownPeer(ip)) if ip == "10.0.0.9"
    ));
}
