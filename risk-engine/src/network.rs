//! Network-topology risk metrics
//!
//! Derives degree, clustering, and centralization figures from the
//! adjacency matrix of the undirected participant graph.

use crate::types::NetworkMetrics;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Adjacency matrix of an undirected participant graph
///
/// Validated on construction: square, symmetric, zero diagonal. Entries
/// are usually 0/1; weighted matrices are accepted, in which case the
/// triangle figures represent weighted-triangle sums rather than counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<f64>>,
}

impl AdjacencyMatrix {
    /// Validate and wrap a raw matrix
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidInput(format!(
                    "Adjacency matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            if row[i].abs() > SYMMETRY_TOLERANCE {
                return Err(Error::InvalidInput(format!(
                    "Adjacency matrix has non-zero diagonal at node {}",
                    i
                )));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if (rows[i][j] - rows[j][i]).abs() > SYMMETRY_TOLERANCE {
                    return Err(Error::InvalidInput(format!(
                        "Adjacency matrix is not symmetric at ({}, {})",
                        i, j
                    )));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Row sums (node degrees for a 0/1 matrix)
    fn degrees(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    /// Trace of the matrix cube
    ///
    /// Each closed walk of length 3 contributes once; for a 0/1 matrix
    /// this equals six times the triangle count. Direct summation keeps
    /// the result exact for integer input.
    fn trace_cubed(&self) -> f64 {
        let n = self.rows.len();
        let mut trace = 0.0;
        for i in 0..n {
            for j in 0..n {
                if self.rows[i][j] == 0.0 {
                    continue;
                }
                for k in 0..n {
                    trace += self.rows[i][j] * self.rows[j][k] * self.rows[k][i];
                }
            }
        }
        trace
    }

    /// Derive topology metrics for the graph
    ///
    /// Requires at least two nodes since degree centralization is
    /// undefined for a single-node or empty graph.
    pub fn metrics(&self) -> Result<NetworkMetrics> {
        let node_count = self.node_count();
        if node_count <= 1 {
            return Err(Error::InvalidInput(format!(
                "Centralization requires more than one node, got {}",
                node_count
            )));
        }

        let degrees = self.degrees();
        let total_weight: f64 = degrees.iter().sum();
        let edge_count = total_weight / 2.0;
        let average_degree = total_weight / node_count as f64;

        // Global clustering: fraction of connected triples that close
        // into triangles. Each triangle closes three triples.
        let triangles = self.trace_cubed() / 6.0;
        let connected_triples: f64 = degrees.iter().map(|d| d * (d - 1.0) / 2.0).sum();
        let clustering_coefficient = if connected_triples > 0.0 {
            3.0 * triangles / connected_triples
        } else {
            0.0
        };

        // Freeman degree centralization
        let max_degree = degrees.iter().fold(f64::MIN, |a, &b| a.max(b));
        let centralization = degrees.iter().map(|d| max_degree - d).sum::<f64>()
            / (node_count as f64 * (node_count as f64 - 1.0));

        Ok(NetworkMetrics {
            node_count,
            edge_count,
            average_degree,
            clustering_coefficient,
            centralization,
        })
    }
}

impl TryFrom<Vec<Vec<f64>>> for AdjacencyMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<f64>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_graph(n: usize) -> AdjacencyMatrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
            .collect();
        AdjacencyMatrix::new(rows).unwrap()
    }

    #[test]
    fn test_complete_graph_metrics() {
        let metrics = complete_graph(4).metrics().unwrap();
        assert_eq!(metrics.node_count, 4);
        assert_eq!(metrics.edge_count, 6.0);
        assert_eq!(metrics.average_degree, 3.0);
        assert!((metrics.clustering_coefficient - 1.0).abs() < 1e-12);
        assert_eq!(metrics.centralization, 0.0);
    }

    #[test]
    fn test_cycle_graph_metrics() {
        let matrix = AdjacencyMatrix::new(vec![
            vec![0.0, 1.0, 0.0, 1.0],
            vec![1.0, 0.0, 1.0, 0.0],
            vec![0.0, 1.0, 0.0, 1.0],
            vec![1.0, 0.0, 1.0, 0.0],
        ])
        .unwrap();

        let metrics = matrix.metrics().unwrap();
        assert_eq!(metrics.edge_count, 4.0);
        assert_eq!(metrics.average_degree, 2.0);
        assert_eq!(metrics.clustering_coefficient, 0.0);
        assert_eq!(metrics.centralization, 0.0);
    }

    #[test]
    fn test_star_graph_centralization() {
        // Hub-and-spoke on 4 nodes: maximally centralized
        let matrix = AdjacencyMatrix::new(vec![
            vec![0.0, 1.0, 1.0, 1.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();

        let metrics = matrix.metrics().unwrap();
        assert_eq!(metrics.edge_count, 3.0);
        // Hub degree 3, spokes degree 1: sum(3 - d) = 6 over 4*3
        assert!((metrics.centralization - 0.5).abs() < 1e-12);
        assert_eq!(metrics.clustering_coefficient, 0.0);
    }

    #[test]
    fn test_single_node_rejected() {
        let matrix = AdjacencyMatrix::new(vec![vec![0.0]]).unwrap();
        assert!(matrix.metrics().is_err());
    }

    #[test]
    fn test_empty_graph_rejected() {
        let matrix = AdjacencyMatrix::new(Vec::new()).unwrap();
        assert!(matrix.metrics().is_err());
    }

    #[test]
    fn test_non_square_rejected() {
        assert!(AdjacencyMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]).is_err());
    }

    #[test]
    fn test_asymmetric_rejected() {
        assert!(AdjacencyMatrix::new(vec![vec![0.0, 1.0], vec![0.0, 0.0]]).is_err());
    }

    #[test]
    fn test_non_zero_diagonal_rejected() {
        assert!(AdjacencyMatrix::new(vec![vec![1.0, 0.0], vec![0.0, 0.0]]).is_err());
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let matrix: AdjacencyMatrix =
            serde_json::from_str("[[0.0, 1.0], [1.0, 0.0]]").unwrap();
        assert_eq!(matrix.node_count(), 2);

        // Asymmetric input is rejected by the same constructor checks
        let result: std::result::Result<AdjacencyMatrix, _> =
            serde_json::from_str("[[0.0, 1.0], [0.0, 0.0]]");
        assert!(result.is_err());

        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[0.0,1.0],[1.0,0.0]]");
    }

    #[test]
    fn test_edgeless_graph_has_zero_clustering() {
        let matrix = AdjacencyMatrix::new(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let metrics = matrix.metrics().unwrap();
        assert_eq!(metrics.clustering_coefficient, 0.0);
        assert_eq!(metrics.edge_count, 0.0);
    }
}
