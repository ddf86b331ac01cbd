//! Exhaustive simple-path enumeration over an adjacency matrix.
//!
//! Works on directed and symmetrized matrices alike: a node already on the
//! current path is never revisited, which bounds the search even when the
//! input has cycles.

use rgci_core::errors::RgciResult;
use rgci_core::models::{AdjacencyMatrix, Path};

/// Every simple path from `start` to `end`, endpoints included.
///
/// Results come back in depth-first discovery order with neighbours visited
/// in ascending index order. No path yields an empty list, and
/// `start == end` yields `[[start]]`.
pub fn find_all_paths(adjacency: &AdjacencyMatrix, start: usize, end: usize) -> RgciResult<Vec<Path>> {
    adjacency.check_node(start)?;
    adjacency.check_node(end)?;

    let mut search = PathSearch {
        adjacency,
        end,
        on_path: vec![false; adjacency.size()],
        path: Vec::new(),
        found: Vec::new(),
    };
    search.visit(start);
    Ok(search.found)
}

struct PathSearch<'a> {
    adjacency: &'a AdjacencyMatrix,
    end: usize,
    on_path: Vec<bool>,
    path: Vec<usize>,
    found: Vec<Path>,
}

impl PathSearch<'_> {
    fn visit(&mut self, node: usize) {
        self.path.push(node);
        self.on_path[node] = true;

        if node == self.end {
            self.found.push(self.path.clone());
        } else {
            let adjacency = self.adjacency;
            for next in adjacency.children(node) {
                if !self.on_path[next] {
                    self.visit(next);
                }
            }
        }

        self.on_path[node] = false;
        self.path.pop();
    }
}
