//! A module for working with connections between peers.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// A connection between two vertices. Connections are undirected: the `source` is the peer that
/// reported the connection, the `target` the peer it was reported for, but `(a, b)` and `(b, a)`
/// compare and hash equal.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Edge<T> {
    source: T,
    target: T,
}

impl<T> Edge<T> {
    /// Creates a new edge from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use peergraph::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1);
    /// assert_eq!(edge, Edge::new(1, 0));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Returns the vertex that reported the connection.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the vertex the connection was reported for.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns whether both ends of the edge are the same vertex.
    pub fn is_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.source == self.target
    }
}

//
// Trait implementations
//

/// Orientation is ignored, so a peer pair listed by both sides yields two equal edges. The graph
/// keeps both; collecting them into a set counts the pair once.
impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.source, &self.target);
        let (c, d) = (&other.source, &other.target);

        a == d && b == c || a == c && b == d
    }
}

/// Hashes the ordered pair of vertices, consistent with the orientation-free `PartialEq`.
impl<T: Hash + Ord> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = (&self.source, &self.target);

        // (a, b) and (b, a) must hash the same.
        match a.cmp(b) {
            Ordering::Greater => {
                b.hash(state);
                a.hash(state);
            }
            _ => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn new() {
        let (source, target) = (3, 7);

        assert_eq!(Edge::new(source, target), Edge { source, target })
    }

    #[test]
    fn source_and_target() {
        let edge = Edge::new("a", "b");

        assert_eq!(edge.source(), &"a");
        assert_eq!(edge.target(), &"b");
    }

    #[test]
    fn is_loop() {
        assert!(Edge::new(4, 4).is_loop());
        assert!(!Edge::new(4, 5).is_loop());
    }

    //
    // Trait implementations
    //

    #[test]
    fn partial_eq() {
        assert_eq!(Edge::new(0, 1), Edge::new(0, 1));
        assert_eq!(Edge::new(0, 1), Edge::new(1, 0));
        assert_ne!(Edge::new(0, 1), Edge::new(0, 2));
    }

    #[test]
    fn hash_ignores_orientation() {
        let edges: HashSet<Edge<usize>> = [Edge::new(0, 1), Edge::new(1, 0), Edge::new(1, 2)]
            .into_iter()
            .collect();

        assert_eq!(edges.len(), 2);
    }
}
