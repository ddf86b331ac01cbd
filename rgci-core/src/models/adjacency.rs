//! Dense binary adjacency matrix. `has_edge(i, j)` means `i → j`.

use serde::{Deserialize, Serialize};

use crate::errors::SynthError;

/// Square 0/1 adjacency matrix stored row-major.
///
/// Serialized as a list of rows so downstream consumers see the plain
/// `n × n` layout. Mutating operations that model an intervention return a
/// copy; the matrix is never changed through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// An `n × n` matrix with no edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build from an edge list. Duplicate edges collapse into one.
    pub fn from_edges(size: usize, edges: &[(usize, usize)]) -> Result<Self, SynthError> {
        let mut matrix = Self::new(size);
        for &(from, to) in edges {
            matrix.add_edge(from, to)?;
        }
        Ok(matrix)
    }

    /// Build from explicit rows. Any nonzero cell counts as an edge.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, SynthError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(SynthError::DimensionMismatch {
                    what: "adjacency row",
                    expected: size,
                    actual: row.len(),
                });
            }
            cells.extend(row.into_iter().map(|cell| u8::from(cell != 0)));
        }
        Ok(Self { size, cells })
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Fails with `NodeOutOfRange` unless `node < size`.
    pub fn check_node(&self, node: usize) -> Result<(), SynthError> {
        if node < self.size {
            Ok(())
        } else {
            Err(SynthError::NodeOutOfRange {
                node,
                node_count: self.size,
            })
        }
    }

    /// Whether the edge `from → to` exists. Out-of-range indices have no edges.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.size && to < self.size && self.cells[from * self.size + to] == 1
    }

    /// Set `from → to`. Returns `true` if the edge was not present before.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, SynthError> {
        self.check_node(from)?;
        self.check_node(to)?;
        let cell = &mut self.cells[from * self.size + to];
        let added = *cell == 0;
        *cell = 1;
        Ok(added)
    }

    /// One row of the matrix: the outgoing edges of `node`.
    pub fn row(&self, node: usize) -> &[u8] {
        &self.cells[node * self.size..(node + 1) * self.size]
    }

    /// Successors of `node` in ascending index order.
    pub fn children(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(node)
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 1)
            .map(|(idx, _)| idx)
    }

    /// Predecessors of `node` in ascending index order.
    pub fn parents(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&from| self.has_edge(from, node))
    }

    pub fn in_degree(&self, node: usize) -> usize {
        self.parents(node).count()
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.children(node).count()
    }

    /// In-degree of every node (column sums).
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.size];
        for (_, to) in self.edges() {
            degrees[to] += 1;
        }
        degrees
    }

    /// Out-degree of every node (row sums).
    pub fn out_degrees(&self) -> Vec<usize> {
        (0..self.size).map(|node| self.out_degree(node)).collect()
    }

    /// All edges in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 1)
            .map(move |(idx, _)| (idx / self.size, idx % self.size))
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// Nodes with no incoming edge, ascending.
    pub fn roots(&self) -> Vec<usize> {
        self.in_degrees()
            .into_iter()
            .enumerate()
            .filter(|&(_, degree)| degree == 0)
            .map(|(node, _)| node)
            .collect()
    }

    /// Undirected view: `i - j` iff `i → j` or `j → i`.
    pub fn symmetrized(&self) -> Self {
        let mut undirected = self.clone();
        for (from, to) in self.edges() {
            undirected.cells[to * self.size + from] = 1;
        }
        undirected
    }

    /// Copy of this matrix with every incoming edge of `nodes` removed.
    ///
    /// This is the do-operator mutation: the listed nodes lose their
    /// structural parents. `self` is left untouched. Out-of-range nodes are
    /// ignored.
    pub fn without_incoming(&self, nodes: &[usize]) -> Self {
        let mut severed = self.clone();
        for &node in nodes.iter().filter(|&&node| node < self.size) {
            for from in 0..self.size {
                severed.cells[from * self.size + node] = 0;
            }
        }
        severed
    }
}

impl TryFrom<Vec<Vec<u8>>> for AdjacencyMatrix {
    type Error = SynthError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<u8>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix
            .cells
            .chunks(matrix.size.max(1))
            .take(matrix.size)
            .map(<[u8]>::to_vec)
            .collect()
    }
}
