/// Identifier for a point in a [`crate::network::Network`].
///
/// This is an index into `Network::points`. Points are never removed, so an
/// id stays valid for the whole lifetime of the network that issued it.
pub type PointId = usize;
