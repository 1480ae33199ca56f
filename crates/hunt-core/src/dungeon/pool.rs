//! Draw-without-replacement pools
//!
//! Drawing index `k` from a pool of `n` items removes the k-th remaining item
//! in insertion order, exactly like removing from the middle of a list, but
//! in O(log n) using a Fenwick tree over the items still present.

use hunt_rng::RandomSource;

#[derive(Debug, Clone)]
pub(crate) struct DrawPool<T> {
    items: Vec<T>,
    /// 1-based Fenwick tree of presence flags
    tree: Vec<u32>,
    remaining: usize,
}

impl<T: Copy> DrawPool<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        let n = items.len();
        let mut tree = vec![0u32; n + 1];
        for i in 1..=n {
            tree[i] += 1;
            let parent = i + (i & i.wrapping_neg());
            if parent <= n {
                tree[parent] += tree[i];
            }
        }
        Self {
            items,
            tree,
            remaining: n,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.remaining
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Remove and return the k-th remaining item (0-based)
    pub(crate) fn take(&mut self, k: usize) -> Option<T> {
        if k >= self.remaining {
            return None;
        }
        let n = self.items.len();
        let mut pos = 0usize;
        let mut rank = k as u32 + 1;
        let mut step = if n == 0 { 0 } else { 1usize << (usize::BITS - 1 - n.leading_zeros()) };
        while step > 0 {
            let next = pos + step;
            if next <= n && self.tree[next] < rank {
                pos = next;
                rank -= self.tree[next];
            }
            step >>= 1;
        }

        let mut i = pos + 1;
        while i <= n {
            self.tree[i] -= 1;
            i += i & i.wrapping_neg();
        }
        self.remaining -= 1;
        self.items.get(pos).copied()
    }

    /// Draw a uniformly random remaining item
    pub(crate) fn draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let k = rng.index(self.remaining);
        self.take(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_rng::GameRng;

    #[test]
    fn test_take_matches_list_removal() {
        let mut rng = GameRng::new(9);
        let items: Vec<u32> = (0..137).collect();
        let mut list = items.clone();
        let mut pool = DrawPool::new(items);

        while !list.is_empty() {
            let k = rng.index(list.len());
            assert_eq!(pool.take(k), Some(list.remove(k)));
            assert_eq!(pool.len(), list.len());
        }
        assert!(pool.is_empty());
        assert_eq!(pool.take(0), None);
    }

    #[test]
    fn test_draw_exhausts_every_item_once() {
        let mut rng = GameRng::new(1);
        let mut pool = DrawPool::new((0..64).collect::<Vec<u32>>());
        let mut seen = Vec::new();
        while let Some(item) = pool.draw(&mut rng) {
            seen.push(item);
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..64).collect::<Vec<u32>>());
    }

    #[test]
    fn test_out_of_range_take() {
        let mut pool = DrawPool::new(vec!['a', 'b']);
        assert_eq!(pool.take(2), None);
        assert_eq!(pool.take(1), Some('b'));
        assert_eq!(pool.take(0), Some('a'));
        assert!(DrawPool::<u8>::new(Vec::new()).is_empty());
    }
}
