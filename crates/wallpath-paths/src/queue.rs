//! Binary min-heap with in-place priority updates.
//!
//! Entries live in a dense array addressed 1-based (parent `i / 2`,
//! children `2i` and `2i + 1`). A key → index map locates any queued key
//! in O(1), so [`PriorityQueue::update_or_insert`] re-sifts in O(log n)
//! instead of scanning. Each key appears at most once.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::Node;

/// A min-priority queue of [`Node`]s keyed by position.
#[derive(Debug, Clone)]
pub struct PriorityQueue<K> {
    heap: Vec<Node<K>>,
    index: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> PriorityQueue<K> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of queued entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove every entry, keeping allocations.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Whether `key` is queued.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Current priority of `key`, if queued.
    pub fn priority_of(&self, key: &K) -> Option<f64> {
        self.index.get(key).map(|&i| self.at(i).priority)
    }

    /// The minimum-priority entry without removing it.
    pub fn peek(&self) -> Option<&Node<K>> {
        self.heap.first()
    }

    /// Queue `node`. If its key is already queued this is
    /// [`update_or_insert`](Self::update_or_insert).
    pub fn insert(&mut self, node: Node<K>) {
        if self.index.contains_key(&node.pos) {
            self.update_or_insert(node.pos, node.priority);
            return;
        }
        self.heap.push(node);
        let i = self.heap.len();
        self.index.insert(node.pos, i);
        self.sift_up(i);
    }

    /// Remove and return the minimum-priority entry, or `None` if empty.
    pub fn extract_min(&mut self) -> Option<Node<K>> {
        let last = self.heap.len();
        if last == 0 {
            return None;
        }
        self.swap(1, last);
        let min = self.heap.pop()?;
        self.index.remove(&min.pos);
        if !self.heap.is_empty() {
            self.sift_down(1);
        }
        Some(min)
    }

    /// Set the priority of `key`, queueing it if absent.
    ///
    /// Returns `true` if the key was already queued.
    pub fn update_or_insert(&mut self, key: K, priority: f64) -> bool {
        let Some(i) = self.index.get(&key).copied() else {
            self.insert(Node::new(key, priority));
            return false;
        };
        let old = self.at(i).priority;
        self.heap[i - 1].priority = priority;
        if priority < old {
            self.sift_up(i);
        } else if priority > old {
            self.sift_down(i);
        }
        true
    }

    /// Iterate over queued entries in heap order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<K>> {
        self.heap.iter()
    }

    // -----------------------------------------------------------------------
    // 1-based heap helpers
    // -----------------------------------------------------------------------

    #[inline]
    fn at(&self, i: usize) -> &Node<K> {
        &self.heap[i - 1]
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.heap.swap(i - 1, j - 1);
        self.index.insert(self.heap[i - 1].pos, i);
        self.index.insert(self.heap[j - 1].pos, j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 1 {
            let parent = i / 2;
            if self.at(parent).priority > self.at(i).priority {
                self.swap(parent, i);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i;
            if left > n {
                break;
            }
            let right = left + 1;
            let child = if right <= n && self.at(right).priority < self.at(left).priority {
                right
            } else {
                left
            };
            if self.at(child).priority < self.at(i).priority {
                self.swap(i, child);
                i = child;
            } else {
                break;
            }
        }
    }
}
