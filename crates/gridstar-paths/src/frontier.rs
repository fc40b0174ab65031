//! The open set: discovered cells that have not been expanded yet.
//!
//! Stored as an indexed binary min-heap. A dense slot table maps each cell of
//! the range to its heap position, giving O(1) membership and O(log n)
//! insert, re-key and removal. Entries are ordered by `(f, insertion order)`,
//! so among equal `f` the earliest inserted cell comes out first. That order
//! is deterministic but not part of the contract.

use gridstar_core::{Point, Range};

use crate::error::FrontierError;

#[derive(Debug, Clone, Copy)]
struct Entry {
    cell: Point,
    slot: usize,
    f: i32,
    seq: u64,
}

impl Entry {
    #[inline]
    fn key(&self) -> (i32, u64) {
        (self.f, self.seq)
    }
}

/// Set of frontier cells with cheapest-`f` lookup.
#[derive(Debug, Clone)]
pub struct Frontier {
    range: Range,
    heap: Vec<Entry>,
    // Heap position for each cell of `range`.
    slots: Vec<Option<usize>>,
    next_seq: u64,
}

impl Frontier {
    /// An empty frontier able to hold any cell of `range`.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            heap: Vec::new(),
            slots: vec![None; range.len()],
            next_seq: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Point) -> bool {
        self.position(cell).is_some()
    }

    /// Add `cell` with priority `f` unless it is already a member.
    ///
    /// A member whose `f` has dropped since insertion is moved up to its new
    /// place; membership is unchanged. Returns `true` if the cell was added.
    pub fn insert_if_absent(&mut self, cell: Point, f: i32) -> Result<bool, FrontierError> {
        let slot = self
            .range
            .index_of(cell)
            .ok_or(FrontierError::OutOfRange(cell))?;

        if let Some(pos) = self.slots[slot] {
            if f < self.heap[pos].f {
                self.heap[pos].f = f;
                self.sift_up(pos);
            }
            return Ok(false);
        }

        let pos = self.heap.len();
        self.heap.push(Entry {
            cell,
            slot,
            f,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.slots[slot] = Some(pos);
        self.sift_up(pos);
        Ok(true)
    }

    /// The member with the lowest `f`. The cell stays in the frontier; take
    /// it out with [`Frontier::remove`] once it is expanded.
    pub fn extract_min(&self) -> Result<Point, FrontierError> {
        self.heap
            .first()
            .map(|e| e.cell)
            .ok_or(FrontierError::Empty)
    }

    /// Delete `cell` from the frontier.
    pub fn remove(&mut self, cell: Point) -> Result<(), FrontierError> {
        let pos = self.position(cell).ok_or(FrontierError::NotFound(cell))?;
        let last = self.heap.len() - 1;
        self.swap(pos, last);
        if let Some(removed) = self.heap.pop() {
            self.slots[removed.slot] = None;
        }
        if pos < self.heap.len() {
            self.sift_down(pos);
            self.sift_up(pos);
        }
        Ok(())
    }

    /// Priority `cell` is currently filed under, if it is a member.
    pub fn priority(&self, cell: Point) -> Option<i32> {
        self.position(cell).map(|pos| self.heap[pos].f)
    }

    #[inline]
    fn position(&self, cell: Point) -> Option<usize> {
        self.range.index_of(cell).and_then(|slot| self.slots[slot])
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].slot] = Some(a);
        self.slots[self.heap[b].slot] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].key() >= self.heap[parent].key() {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;
            if left < len && self.heap[left].key() < self.heap[best].key() {
                best = left;
            }
            if right < len && self.heap[right].key() < self.heap[best].key() {
                best = right;
            }
            if best == pos {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;

    fn range() -> Range {
        Range::new(0, 0, 10, 10)
    }

    #[test]
    fn empty_frontier_errors() {
        let mut fr = Frontier::new(range());
        assert!(fr.is_empty());
        assert_eq!(fr.extract_min(), Err(FrontierError::Empty));
        assert_eq!(
            fr.remove(Point::new(1, 1)),
            Err(FrontierError::NotFound(Point::new(1, 1)))
        );
    }

    #[test]
    fn insert_is_idempotent() {
        let mut fr = Frontier::new(range());
        let p = Point::new(3, 4);
        assert_eq!(fr.insert_if_absent(p, 7), Ok(true));
        assert_eq!(fr.insert_if_absent(p, 7), Ok(false));
        assert_eq!(fr.len(), 1);
        assert!(fr.contains(p));
    }

    #[test]
    fn extract_does_not_remove() {
        let mut fr = Frontier::new(range());
        fr.insert_if_absent(Point::new(1, 0), 5).unwrap();
        fr.insert_if_absent(Point::new(2, 0), 3).unwrap();
        assert_eq!(fr.extract_min(), Ok(Point::new(2, 0)));
        assert_eq!(fr.extract_min(), Ok(Point::new(2, 0)));
        fr.remove(Point::new(2, 0)).unwrap();
        assert_eq!(fr.extract_min(), Ok(Point::new(1, 0)));
    }

    #[test]
    fn lowered_priority_moves_member_up() {
        let mut fr = Frontier::new(range());
        fr.insert_if_absent(Point::new(0, 0), 4).unwrap();
        fr.insert_if_absent(Point::new(1, 0), 9).unwrap();
        assert_eq!(fr.insert_if_absent(Point::new(1, 0), 2), Ok(false));
        assert_eq!(fr.priority(Point::new(1, 0)), Some(2));
        assert_eq!(fr.extract_min(), Ok(Point::new(1, 0)));

        // A higher f never demotes a member.
        fr.insert_if_absent(Point::new(1, 0), 20).unwrap();
        assert_eq!(fr.priority(Point::new(1, 0)), Some(2));
    }

    #[test]
    fn equal_f_comes_out_in_insertion_order() {
        let mut fr = Frontier::new(range());
        let cells = [Point::new(5, 5), Point::new(0, 9), Point::new(2, 1)];
        for &c in &cells {
            fr.insert_if_absent(c, 6).unwrap();
        }
        for &c in &cells {
            assert_eq!(fr.extract_min(), Ok(c));
            fr.remove(c).unwrap();
        }
        assert!(fr.is_empty());
    }

    #[test]
    fn out_of_range_insert_is_rejected() {
        let mut fr = Frontier::new(range());
        let p = Point::new(10, 0);
        assert_eq!(fr.insert_if_absent(p, 1), Err(FrontierError::OutOfRange(p)));
        assert!(!fr.contains(p));
    }

    #[test]
    fn matches_naive_model_under_random_ops() {
        let rng_area = range();
        let mut rng = StdRng::seed_from_u64(11);
        let mut fr = Frontier::new(rng_area);
        let mut model: HashMap<Point, i32> = HashMap::new();

        for _ in 0..2000 {
            let p = Point::new(rng.random_range(0..10), rng.random_range(0..10));
            match rng.random_range(0..3u32) {
                0 | 1 => {
                    let f = rng.random_range(0..50);
                    let added = fr.insert_if_absent(p, f).unwrap();
                    assert_eq!(added, !model.contains_key(&p));
                    let e = model.entry(p).or_insert(f);
                    *e = (*e).min(f);
                }
                _ => {
                    let res = fr.remove(p);
                    assert_eq!(res.is_ok(), model.remove(&p).is_some());
                }
            }
            assert_eq!(fr.len(), model.len());
            match fr.extract_min() {
                Ok(min) => {
                    let best = model.values().copied().min().unwrap();
                    assert_eq!(model[&min], best);
                    assert_eq!(fr.priority(min), Some(best));
                }
                Err(e) => {
                    assert_eq!(e, FrontierError::Empty);
                    assert!(model.is_empty());
                }
            }
        }
    }
}
