//! DOM side of the page navigator: applies the wrapper transform and owns
//! the timer that releases the transition lock.

use crate::core::{translate_css, Gesture, PageDecision, Pager, TRANSITION_VISUAL_MS};
use crate::dom;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct PageNavigator {
    pager: Rc<RefCell<Pager>>,
    wrapper: web::HtmlElement,
    pages: Vec<web::HtmlElement>,
    lock_ms: u32,
    // Dropping the handle cancels the pending release.
    release: RefCell<Option<Timeout>>,
}

impl PageNavigator {
    pub fn new(wrapper: web::HtmlElement, pages: Vec<web::HtmlElement>, lock_ms: u32) -> Self {
        let pager = Rc::new(RefCell::new(Pager::new(pages.len())));
        _ = wrapper.style().set_property(
            "transition",
            &format!("transform {}ms ease", TRANSITION_VISUAL_MS),
        );
        _ = wrapper.style().set_property("transform", &translate_css(0));
        Self {
            pager,
            wrapper,
            pages,
            lock_ms,
            release: RefCell::new(None),
        }
    }

    /// Shared handle to the paging state; the frame loop reads it.
    pub fn pager(&self) -> Rc<RefCell<Pager>> {
        self.pager.clone()
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.pager.borrow().is_transitioning()
    }

    pub fn move_to(&self, target: usize) -> bool {
        if !self.pager.borrow_mut().move_to(target) {
            return false;
        }
        self.apply_transform(target);
        self.arm_release();
        log::info!("[pager] page {}/{}", target + 1, self.pages.len());
        true
    }

    /// Feed one gesture through the shared paging decision.
    pub fn handle_gesture(&self, gesture: Gesture) {
        let decision = {
            let pager = self.pager.borrow();
            let Some(page) = self.pages.get(pager.current()) else {
                return;
            };
            pager.decide(gesture, &dom::scroll_metrics(page))
        };
        match decision {
            PageDecision::Move(target) => {
                self.move_to(target);
            }
            PageDecision::AtEdge => {
                log::debug!(
                    "[pager] at edge, {:?} ({:.0}px) ignored",
                    gesture.direction,
                    gesture.magnitude
                );
            }
            PageDecision::Locked | PageDecision::Absorbed => {}
        }
    }

    /// Session teardown: drop any pending lock release and free the lock, so
    /// a page restored from the back-forward cache can still page.
    pub fn cancel_pending(&self) {
        drop(self.release.borrow_mut().take());
        self.pager.borrow_mut().release_lock();
    }

    fn apply_transform(&self, index: usize) {
        _ = self
            .wrapper
            .style()
            .set_property("transform", &translate_css(index));
    }

    fn arm_release(&self) {
        let pager = Rc::downgrade(&self.pager);
        let timeout = Timeout::new(self.lock_ms, move || {
            if let Some(p) = pager.upgrade() {
                p.borrow_mut().release_lock();
            }
        });
        // replacing the handle drops (cancels) any earlier timer
        *self.release.borrow_mut() = Some(timeout);
    }
}
