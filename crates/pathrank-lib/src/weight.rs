use crate::graph::{Graph, VertexId, Weight};

/// Total weight of `path`: the sum of the edge weights between consecutive vertices.
///
/// # Panics
///
/// Panics if two consecutive vertices are not connected. Enumerated paths
/// always satisfy this, so a failure here is a bug in the caller.
pub fn path_weight(graph: &Graph, path: &[VertexId]) -> Weight {
    path.windows(2)
        .map(|pair| {
            let (u, v) = (pair[0], pair[1]);
            match graph.edge_weight(u, v) {
                Some(weight) => weight,
                None => panic!("path weight requested across missing edge {u} -> {v}"),
            }
        })
        .sum()
}
