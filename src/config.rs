use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    graph::DEFAULT_CONN_LIMIT,
    layout::LayoutConfiguration,
};

/// Main configuration structure, every field falls back to its default when omitted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisualizerConfiguration {
    /// Number of connections registered per peer record before the rest are skipped
    pub conn_limit: usize,
    /// Number of threads computing betweenness centrality
    pub num_threads: usize,
    /// Scale betweenness by the number of node pairs
    pub normalize: bool,
    /// Number of most central peers written to the log
    pub top: usize,
    /// Drawing parameters
    pub canvas: CanvasConfiguration,
    /// Spring layout parameters
    pub layout: LayoutConfiguration,
}

/// Drawing parameters
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfiguration {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Node radius in pixels
    pub node_radius: u32,
    /// Opacity of the edge lines, from 0.0 to 1.0
    pub edge_opacity: f64,
}

impl VisualizerConfiguration {
    pub fn new(conf_path: impl AsRef<Path>) -> Result<VisualizerConfiguration> {
        let path = conf_path.as_ref();
        let config_string = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&config_string)?)
    }
}

impl Default for VisualizerConfiguration {
    fn default() -> Self {
        Self {
            conn_limit: DEFAULT_CONN_LIMIT,
            num_threads: 1,
            normalize: true,
            top: 10,
            canvas: CanvasConfiguration::default(),
            layout: LayoutConfiguration::default(),
        }
    }
}

impl Default for CanvasConfiguration {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 1500,
            node_radius: 4,
            edge_opacity: 0.2,
        }
    }
}
