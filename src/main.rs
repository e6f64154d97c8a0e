use std::{
    path::Path,
    process::{self, ExitCode},
};

use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

use peergraph::{
    args::{Args, USAGE},
    config::VisualizerConfiguration,
    graph::PeerGraph,
    layout::spring_layout,
    peer::load_peers,
    render::{render, show, title},
    summary::Summary,
    Result,
};

fn main() -> ExitCode {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let Some(peers_file) = args.peers_file.clone() else {
        println!("{USAGE}");
        process::exit(1);
    };

    match run(&args, &peers_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, peers_file: &Path) -> Result<()> {
    let mut configuration = args
        .config_file
        .as_ref()
        .map(VisualizerConfiguration::new)
        .transpose()?
        .unwrap_or_default();
    args.apply(&mut configuration);

    let peers = load_peers(peers_file)?;
    tracing::info!(path = %peers_file.display(), records = peers.len(), "loaded peers");

    let graph = PeerGraph::from_peers(&peers, configuration.conn_limit)?;

    tracing::info!("Counting betweenness centrality...");
    let centrality = graph.betweenness_centrality(configuration.normalize, configuration.num_threads);
    Summary::new(&graph, &centrality, configuration.conn_limit, configuration.top).log();

    tracing::info!("Drawing graph...");
    let positions = spring_layout(&graph, &configuration.layout);
    let frame = render(
        &graph,
        &centrality,
        &positions,
        &configuration.canvas,
        configuration.conn_limit,
    )?;

    tracing::info!("Showing graph...");
    show(&frame, &title(configuration.conn_limit))
}
