// Full-page paging state machine.
//
// `Pager` knows nothing about the DOM or timers: the navigator applies the
// transform and schedules [`Pager::release_lock`] after a successful move.

use super::constants::PAGE_HEIGHT_VH;
use super::gesture::{Direction, Gesture, ScrollMetrics};

/// Outcome of feeding one gesture to the pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDecision {
    /// A transition is in flight; input is dropped.
    Locked,
    /// The active page scrolls internally instead.
    Absorbed,
    /// Already at the first/last page.
    AtEdge,
    /// Move to this page index.
    Move(usize),
}

#[derive(Clone, Debug)]
pub struct Pager {
    page_count: usize,
    current: usize,
    transitioning: bool,
}

impl Pager {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count: page_count.max(1),
            current: 0,
            transitioning: false,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Jump to `target`. Returns false (and changes nothing) when the target
    /// is out of range or a transition still holds the lock.
    pub fn move_to(&mut self, target: usize) -> bool {
        if target >= self.page_count || self.transitioning {
            return false;
        }
        self.current = target;
        self.transitioning = true;
        true
    }

    pub fn release_lock(&mut self) {
        self.transitioning = false;
    }

    /// Decide what a gesture should do given the active page's live metrics.
    pub fn decide(&self, gesture: Gesture, metrics: &ScrollMetrics) -> PageDecision {
        if self.transitioning {
            return PageDecision::Locked;
        }
        if metrics.absorbs(gesture.direction) {
            return PageDecision::Absorbed;
        }
        let target = match gesture.direction {
            Direction::Forward => self.current + 1,
            Direction::Backward => match self.current.checked_sub(1) {
                Some(t) => t,
                None => return PageDecision::AtEdge,
            },
        };
        if target >= self.page_count {
            return PageDecision::AtEdge;
        }
        PageDecision::Move(target)
    }

    /// `decide` followed by `move_to`. Returns the new index when a page
    /// change happened.
    pub fn handle_gesture(&mut self, gesture: Gesture, metrics: &ScrollMetrics) -> Option<usize> {
        match self.decide(gesture, metrics) {
            PageDecision::Move(target) if self.move_to(target) => Some(target),
            _ => None,
        }
    }

    /// Vertical offset of the page stack for the current page.
    #[inline]
    pub fn offset_vh(&self) -> f32 {
        offset_vh_for(self.current)
    }
}

#[inline]
pub fn offset_vh_for(index: usize) -> f32 {
    0.0 - index as f32 * PAGE_HEIGHT_VH
}

/// CSS transform string applied to the page wrapper.
pub fn translate_css(index: usize) -> String {
    format!("translateY({}vh)", offset_vh_for(index))
}
