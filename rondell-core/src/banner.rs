//! Three-slot banner rotation.
//!
//! A rotating banner shows exactly three of its items at a time, one in
//! each of a left, center, and right slot, and advances the trio by one
//! item per tick, wrapping at both ends. The rotator owns only the cursor
//! arithmetic; whoever ticks it (a timer collaborator) and however slots
//! map to styles stay outside.

use rondell_model::BannerConfig;

/// The slot an item occupies, when it occupies one at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSlot {
    Left,
    Center,
    Right,
}

/// One tick's slot assignment: which item index sits in each slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerSlots {
    pub previous: usize,
    pub center: usize,
    pub next: usize,
}

impl BannerSlots {
    /// The slot `index` occupies this tick, checked in the left, center,
    /// right order; `None` means the item stays hidden.
    pub fn slot_for(&self, index: usize) -> Option<BannerSlot> {
        if self.previous == index {
            Some(BannerSlot::Left)
        } else if self.center == index {
            Some(BannerSlot::Center)
        } else if self.next == index {
            Some(BannerSlot::Right)
        } else {
            None
        }
    }
}

/// Cursor state for one rotating banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerRotator {
    total_items: usize,
    running: usize,
}

impl BannerRotator {
    pub fn new(total_items: usize) -> Self {
        Self {
            total_items,
            running: 0,
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// The assignment the next [`advance`](Self::advance) will produce,
    /// without moving the cursor.
    pub fn current(&self) -> Option<BannerSlots> {
        let total = self.total_items;
        if total == 0 {
            return None;
        }
        Some(BannerSlots {
            previous: (self.running + total - 1) % total,
            center: self.running,
            next: (self.running + 1) % total,
        })
    }

    /// Produce this tick's slot assignment and advance the cursor, wrapping
    /// past the last item. Returns `None` for an empty banner.
    pub fn advance(&mut self) -> Option<BannerSlots> {
        let slots = self.current()?;
        self.running = (self.running + 1) % self.total_items;
        Some(slots)
    }

    /// Rewind to the first item.
    pub fn reset(&mut self) {
        self.running = 0;
    }
}

impl From<BannerConfig> for BannerRotator {
    fn from(config: BannerConfig) -> Self {
        Self::new(config.total_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_wraps_the_previous_slot_to_the_end() {
        let mut banner = BannerRotator::new(4);
        let slots = banner.advance().unwrap();
        assert_eq!(slots.previous, 3);
        assert_eq!(slots.center, 0);
        assert_eq!(slots.next, 1);
    }

    #[test]
    fn last_tick_wraps_the_next_slot_to_the_start() {
        let mut banner = BannerRotator::new(4);
        for _ in 0..3 {
            banner.advance();
        }
        let slots = banner.advance().unwrap();
        assert_eq!(slots.previous, 2);
        assert_eq!(slots.center, 3);
        assert_eq!(slots.next, 0);
    }

    #[test]
    fn full_cycle_returns_to_the_start() {
        let mut banner = BannerRotator::new(3);
        let first = banner.advance().unwrap();
        for _ in 0..2 {
            banner.advance();
        }
        assert_eq!(banner.advance().unwrap(), first);
    }

    #[test]
    fn slot_assignment_prefers_left_over_center() {
        // Two items: index 1 is both previous and next of center 0; the
        // left slot wins, matching the original class assignment order.
        let mut banner = BannerRotator::new(2);
        let slots = banner.advance().unwrap();
        assert_eq!(slots.slot_for(1), Some(BannerSlot::Left));
        assert_eq!(slots.slot_for(0), Some(BannerSlot::Center));
    }

    #[test]
    fn items_outside_the_trio_are_hidden() {
        let mut banner = BannerRotator::new(6);
        let slots = banner.advance().unwrap();
        assert_eq!(slots.slot_for(3), None);
        assert_eq!(slots.slot_for(4), None);
    }

    #[test]
    fn current_does_not_move_the_cursor() {
        let mut banner = BannerRotator::new(3);
        let peeked = banner.current().unwrap();
        assert_eq!(banner.advance().unwrap(), peeked);
    }

    #[test]
    fn empty_banner_never_assigns() {
        let mut banner = BannerRotator::new(0);
        assert!(banner.current().is_none());
        assert!(banner.advance().is_none());
    }

    #[test]
    fn reset_restarts_the_cycle() {
        let mut banner = BannerRotator::new(5);
        banner.advance();
        banner.advance();
        banner.reset();
        assert_eq!(banner.advance().unwrap().center, 0);
    }
}
