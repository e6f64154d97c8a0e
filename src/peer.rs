//! A module for loading crawled peer records.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A crawled node and the neighbours it reported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerRecord {
    /// The node's identifier, usually an ip address.
    pub ip: String,
    /// The identifiers of the node's reported neighbours.
    pub list: Vec<String>,
}

impl PeerRecord {
    pub fn new(ip: impl Into<String>, list: &[&str]) -> Self {
        Self {
            ip: ip.into(),
            list: list.iter().map(|peer| peer.to_string()).collect(),
        }
    }
}

/// Parses a JSON list of peer records.
///
/// # Examples
///
/// ```
/// use peergraph::peer::parse_peers;
///
/// let peers = parse_peers(r#"[{"ip":"1.2.3.4","list":["5.6.7.8"]}]"#).unwrap();
///
/// assert_eq!(peers[0].ip, "1.2.3.4");
/// assert_eq!(peers[0].list, vec!["5.6.7.8"]);
/// ```
pub fn parse_peers(json: &str) -> Result<Vec<PeerRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the peers file at `path`.
pub fn load_peers(path: impl AsRef<Path>) -> Result<Vec<PeerRecord>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_peers(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let peers = parse_peers(
            r#"[{"ip":"1.2.3.4","list":["5.6.7.8","9.9.9.9"]},{"ip":"5.6.7.8","list":[]}]"#,
        )
        .unwrap();

        assert_eq!(
            peers,
            vec![
                PeerRecord::new("1.2.3.4", &["5.6.7.8", "9.9.9.9"]),
                PeerRecord::new("5.6.7.8", &[]),
            ]
        );
    }

    #[test]
    fn parse_empty_list() {
        assert!(parse_peers("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_not_a_list() {
        let err = parse_peers(r#"{"ip":"A","list":[]}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn parse_missing_field() {
        let err = parse_peers(r#"[{"ip":"A"}]"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn parse_truncated() {
        let err = parse_peers(r#"[{"ip":"A","list":["B"]"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn load_missing_file() {
        let err = load_peers("does/not/exist.json").unwrap_err();

        match err {
            Error::Io { path, .. } => assert_eq!(path, Path::new("does/not/exist.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
