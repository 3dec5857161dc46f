//! Node indices of a [`crate::GraphIndex`].

hgprop_common::dense_id! {
    /// Local identifier of a node within one [`crate::GraphIndex`].
    ///
    /// Incidence graphs number vertex-nodes first, then edge-nodes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct NodeIdx, "n"
}
