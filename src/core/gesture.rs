// Directional gestures and live page scroll metrics.
//
// Wheel and touch input are both reduced to a [`Gesture`] before any paging
// decision is made, so the inner-scroll check only exists once.

use super::constants::{BOTTOM_SLACK_PX, WHEEL_LINE_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the next page (wheel down, finger swiped up).
    Forward,
    /// Towards the previous page (wheel up, finger swiped down).
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub direction: Direction,
    /// Absolute travel in px. Only the direction affects paging.
    pub magnitude: f64,
}

impl Gesture {
    /// Classify a wheel delta already normalised to px. A zero delta
    /// (pure horizontal scroll) is not a gesture.
    pub fn from_wheel(delta_y_px: f64) -> Option<Self> {
        let direction = if delta_y_px > 0.0 {
            Direction::Forward
        } else if delta_y_px < 0.0 {
            Direction::Backward
        } else {
            return None;
        };
        Some(Self {
            direction,
            magnitude: delta_y_px.abs(),
        })
    }

    /// Classify a finished touch swipe. Swipes shorter than `threshold_px`
    /// are treated as noise, and a tap with no travel is never a gesture.
    pub fn from_touch(start_y: f64, end_y: f64, threshold_px: f64) -> Option<Self> {
        let delta = start_y - end_y;
        if delta == 0.0 || delta.abs() < threshold_px {
            return None;
        }
        Some(Self {
            direction: if delta > 0.0 {
                Direction::Forward
            } else {
                Direction::Backward
            },
            magnitude: delta.abs(),
        })
    }
}

/// Convert a `WheelEvent.deltaY` to px according to its `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, viewport_height: f64) -> f64 {
    match delta_mode {
        1 => delta_y * WHEEL_LINE_PX,
        2 => delta_y * viewport_height,
        _ => delta_y,
    }
}

/// Snapshot of a page element's scroll state, read at gesture time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub client_height: f64,
    pub scroll_top: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_height: f64, client_height: f64, scroll_top: f64) -> Self {
        Self {
            scroll_height,
            client_height,
            scroll_top,
        }
    }

    #[inline]
    pub fn is_scrollable(&self) -> bool {
        self.scroll_height > self.client_height
    }

    #[inline]
    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    #[inline]
    pub fn at_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - BOTTOM_SLACK_PX
    }

    /// True when the page itself should consume a gesture in `direction`.
    pub fn absorbs(&self, direction: Direction) -> bool {
        if !self.is_scrollable() {
            return false;
        }
        match direction {
            Direction::Forward => !self.at_bottom(),
            Direction::Backward => !self.at_top(),
        }
    }
}
