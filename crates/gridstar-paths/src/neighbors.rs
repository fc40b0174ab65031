use gridstar_core::Point;

/// Reusable buffer for enumerating the orthogonal neighbors of a cell.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the up-to-4 cardinal neighbors of `p` (up, right, down, left)
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Range;

    #[test]
    fn corner_has_two_neighbors() {
        let rng = Range::new(0, 0, 3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::new(0, 0), |q| rng.contains(q));
        assert_eq!(got, &[Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn buffer_is_cleared_between_calls() {
        let mut nb = Neighbors::new();
        assert_eq!(nb.cardinal(Point::new(5, 5), |_| true).len(), 4);
        assert!(nb.cardinal(Point::new(5, 5), |_| false).is_empty());
    }
}
