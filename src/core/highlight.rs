// highlight module - which 1-based lines get a highlight bar
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    lines: BTreeSet<usize>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every line from `from` to `to` inclusive, swapping inverted bounds.
    /// Line 0 does not exist and is never stored.
    pub fn add_range(&mut self, from: usize, to: usize) {
        let (start, end) = if from > to { (to, from) } else { (from, to) };
        self.lines.extend(start.max(1)..=end);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines that exist in a text of `line_count` lines; the rest stay stored
    pub fn visible(&self, line_count: usize) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().copied().take_while(move |&line| line <= line_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_then_clear() {
        let mut set = HighlightSet::new();
        set.add_range(3, 5);
        assert_eq!(set.visible(usize::MAX).collect::<Vec<_>>(), vec![3, 4, 5]);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_reversed_range_normalizes() {
        let mut forward = HighlightSet::new();
        forward.add_range(3, 5);
        let mut reversed = HighlightSet::new();
        reversed.add_range(5, 3);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_ranges_union() {
        let mut set = HighlightSet::new();
        set.add_range(1, 2);
        set.add_range(2, 4);
        set.add_range(10, 10);
        assert_eq!(set.visible(usize::MAX).collect::<Vec<_>>(), vec![1, 2, 3, 4, 10]);
    }

    #[test]
    fn test_visible_skips_out_of_range_but_keeps_them() {
        let mut set = HighlightSet::new();
        set.add_range(2, 7);
        assert_eq!(set.visible(3).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(set.len(), 6);
        assert_eq!(set.visible(0).count(), 0);
    }

    #[test]
    fn test_line_zero_is_ignored() {
        let mut set = HighlightSet::new();
        set.add_range(0, 1);
        assert_eq!(set.visible(usize::MAX).collect::<Vec<_>>(), vec![1]);
    }
}
