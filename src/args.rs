use std::path::PathBuf;

use clap::Parser;

use crate::config::VisualizerConfiguration;

pub const USAGE: &str = "Usage: peergraph <peers.json>";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Peers file, a JSON list of `{"ip": ..., "list": [...]}` records
    pub peers_file: Option<PathBuf>,
    /// Configuration file path (if none defaults will be assumed)
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
    /// Connections registered per peer record (overrides the configuration file)
    #[arg(short = 'l', long)]
    pub conn_limit: Option<usize>,
    /// Threads computing betweenness centrality (overrides the configuration file)
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// Seed of the graph layout (overrides the configuration file)
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Number of most central peers to log (overrides the configuration file)
    #[arg(long)]
    pub top: Option<usize>,
}

impl Args {
    /// Applies the command line overrides to the configuration.
    pub fn apply(&self, config: &mut VisualizerConfiguration) {
        if let Some(conn_limit) = self.conn_limit {
            config.conn_limit = conn_limit;
        }
        if let Some(threads) = self.threads {
            config.num_threads = threads;
        }
        if let Some(seed) = self.seed {
            config.layout.seed = seed;
        }
        if let Some(top) = self.top {
            config.top = top;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_peers_file_still_parses() {
        let args = Args::try_parse_from(["peergraph"]).unwrap();

        assert!(args.peers_file.is_none());
    }

    #[test]
    fn overrides() {
        let args =
            Args::try_parse_from(["peergraph", "peers.json", "-l", "5", "--threads", "4", "-s", "3"])
                .unwrap();
        let mut config = VisualizerConfiguration::default();
        args.apply(&mut config);

        assert_eq!(args.peers_file, Some(PathBuf::from("peers.json")));
        assert_eq!(config.conn_limit, 5);
        assert_eq!(config.num_threads, 4);
        assert_eq!(config.layout.seed, 3);
        assert_eq!(config.top, 10);
    }
}
