/// Three-up carousel over the experience entries.
///
/// The window is left/center/right; `next` and `prev` rotate it by one with
/// wraparound at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSlider {
    left: usize,
    total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPosition {
    Left,
    Center,
    Right,
}

impl WorkSlider {
    pub fn new(total: usize) -> Self {
        Self { left: 0, total }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.left = (self.left + 1) % self.total;
        }
    }

    pub fn prev(&mut self) {
        if self.total > 0 {
            self.left = (self.left + self.total - 1) % self.total;
        }
    }

    /// Entry index in each visible slot. Fewer than three entries fill fewer slots.
    pub fn visible(&self) -> Vec<(SlotPosition, usize)> {
        [SlotPosition::Left, SlotPosition::Center, SlotPosition::Right]
            .into_iter()
            .enumerate()
            .take(self.total.min(3))
            .map(|(offset, slot)| (slot, (self.left + offset) % self.total))
            .collect()
    }

    pub fn center(&self) -> Option<usize> {
        self.visible()
            .into_iter()
            .find(|(slot, _)| *slot == SlotPosition::Center)
            .map(|(_, index)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(slider: &WorkSlider) -> Vec<usize> {
        slider.visible().into_iter().map(|(_, i)| i).collect()
    }

    #[test]
    fn next_wraps_each_slot() {
        let mut slider = WorkSlider::new(4);
        assert_eq!(indices(&slider), vec![0, 1, 2]);
        slider.next();
        assert_eq!(indices(&slider), vec![1, 2, 3]);
        slider.next();
        assert_eq!(indices(&slider), vec![2, 3, 0]);
        slider.next();
        assert_eq!(indices(&slider), vec![3, 0, 1]);
        slider.next();
        assert_eq!(indices(&slider), vec![0, 1, 2]);
    }

    #[test]
    fn prev_from_start_wraps_to_end() {
        let mut slider = WorkSlider::new(4);
        slider.prev();
        assert_eq!(indices(&slider), vec![3, 0, 1]);
        assert_eq!(slider.center(), Some(0));
    }

    #[test]
    fn next_then_prev_is_identity() {
        let mut slider = WorkSlider::new(5);
        slider.next();
        slider.next();
        let before = slider;
        slider.next();
        slider.prev();
        assert_eq!(slider, before);
    }

    #[test]
    fn short_lists_fill_fewer_slots() {
        let slider = WorkSlider::new(2);
        assert_eq!(indices(&slider), vec![0, 1]);

        let mut empty = WorkSlider::new(0);
        empty.next();
        empty.prev();
        assert!(empty.visible().is_empty());
        assert_eq!(empty.center(), None);
    }
}
