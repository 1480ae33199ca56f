//! Connectivity tracking for maze construction
//!
//! Union-find with path compression and union by rank. Tracks which
//! locations are already joined while the spanning tree is being built.

/// Disjoint sets over `0..len`
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Create a tracker where every element is its own set
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Representative of the set containing `a`
    pub fn find(&mut self, a: usize) -> usize {
        let mut root = a;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // compress
        let mut cur = a;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Check if two elements are in the same set
    pub fn are_connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the sets of `a` and `b`. Returns false if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            core::cmp::Ordering::Less => self.parent[ra] = rb,
            core::cmp::Ordering::Greater => self.parent[rb] = ra,
            core::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Number of disjoint sets remaining
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Check if everything is joined into one set
    pub fn all_connected(&self) -> bool {
        self.sets <= 1
    }
}
