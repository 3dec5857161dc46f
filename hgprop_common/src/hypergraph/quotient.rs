use std::fmt::Debug;
use std::hash::Hash;

use super::{Attributes, Hyperedge, Hypergraph};
use crate::error::Result;
use crate::ids::VertexId;
use crate::partition::{Block, Partition};

impl<V: Clone + Eq + Hash + Debug> Hypergraph<V> {
    /// Quotient by raw blocks; see [`Hypergraph::quotient_by`].
    pub fn quotient<P, B>(&self, blocks: P) -> Result<Hypergraph<Block<V>>>
    where
        P: IntoIterator<Item = B>,
        B: IntoIterator<Item = V>,
    {
        self.quotient_by(&Partition::new(blocks)?)
    }

    /// Merge vertices block-wise.
    ///
    /// The result has one vertex per block, in partition order, and one edge
    /// per distinct image of a source edge. Source edges whose images
    /// coincide collapse into a single edge. Fails with
    /// [`crate::HypergraphError::InvalidPartition`] unless `partition` covers
    /// exactly this vertex set with disjoint blocks.
    pub fn quotient_by(&self, partition: &Partition<V>) -> Result<Hypergraph<Block<V>>> {
        partition.validate(self.vertices())?;

        let mut block_of = vec![VertexId::new(0); self.num_vertices()];
        let mut quotient = Hypergraph::new();
        for (i, raw) in partition.blocks().iter().enumerate() {
            let mut ids: Vec<VertexId> = raw.iter().filter_map(|v| self.vertex_id(v)).collect();
            ids.sort_unstable();
            for id in &ids {
                block_of[id.as_usize()] = VertexId::from(i);
            }
            let members = ids.iter().filter_map(|&id| self.vertex(id)).cloned().collect();
            quotient.add_vertex(Block::from_ordered(members));
        }

        for edge in self.edges() {
            let image = Hyperedge::new(edge.iter().map(|v| block_of[v.as_usize()]))?;
            quotient.insert_edge(image, Attributes::new())?;
        }

        tracing::debug!(
            "quotient: |V| {} -> {}, |E| {} -> {}",
            self.num_vertices(),
            quotient.num_vertices(),
            self.num_edges(),
            quotient.num_edges()
        );
        Ok(quotient)
    }
}
