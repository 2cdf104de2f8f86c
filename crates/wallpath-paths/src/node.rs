/// A search position paired with a numeric key.
///
/// In the frontier the key is the A* priority (cost so far plus estimate).
/// Several nodes may name the same position over a search; only `pos` is
/// identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<K> {
    pub pos: K,
    pub priority: f64,
}

impl<K> Node<K> {
    #[inline]
    pub const fn new(pos: K, priority: f64) -> Self {
        Self { pos, priority }
    }
}
