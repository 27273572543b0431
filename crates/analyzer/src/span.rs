//! Half-open line intervals and the overlap rule used to exclude heading
//! sections that collide with tag blocks.

use promptmap_core::Part;

/// A half-open line range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn of(part: &Part) -> Self {
        Self::new(part.start_line, part.end_line)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when the two ranges share at least one line. An empty range
    /// shares no line with anything.
    pub fn overlaps(&self, other: &Span) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

/// True when `span` overlaps any range in `consumed`.
pub fn overlaps_any(span: &Span, consumed: &[Span]) -> bool {
    consumed.iter().any(|c| span.overlaps(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let a = Span::new(0, 3);
        let b = Span::new(3, 6);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn shared_line_overlaps() {
        let a = Span::new(0, 4);
        let b = Span::new(3, 6);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn containment_overlaps() {
        let outer = Span::new(1, 10);
        let inner = Span::new(4, 5);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn empty_range_overlaps_nothing() {
        let empty = Span::new(4, 4);
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&Span::new(0, 10)));
        assert!(!Span::new(0, 10).overlaps(&empty));
    }

    #[test]
    fn overlaps_any_scans_all_ranges() {
        let consumed = [Span::new(0, 2), Span::new(8, 12)];
        assert!(overlaps_any(&Span::new(10, 14), &consumed));
        assert!(!overlaps_any(&Span::new(2, 8), &consumed));
        assert!(!overlaps_any(&Span::new(2, 8), &[]));
        assert!(!overlaps_any(&Span::new(9, 9), &consumed));
    }
}
