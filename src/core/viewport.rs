//! Compact-mode selection driven by viewport width.
//!
//! [`is_compact`] is the only place the breakpoint comparison lives; the
//! client-side resize script is generated from the same breakpoint value.

use crate::domain::model::ViewMode;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// md 斷點 (邏輯像素)
pub const COMPACT_BREAKPOINT_PX: u32 = 768;

pub fn is_compact(width: u32, breakpoint: u32) -> bool {
    width < breakpoint
}

pub fn view_mode(width: u32, breakpoint: u32) -> ViewMode {
    if is_compact(width, breakpoint) {
        ViewMode::Compact
    } else {
        ViewMode::Wide
    }
}

type Listener = Rc<RefCell<dyn FnMut(bool)>>;

struct ViewportState {
    width: u32,
    breakpoint: u32,
    compact: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Single-threaded viewport with resize listeners.
pub struct Viewport {
    state: Rc<RefCell<ViewportState>>,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self::with_breakpoint(width, COMPACT_BREAKPOINT_PX)
    }

    pub fn with_breakpoint(width: u32, breakpoint: u32) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewportState {
                width,
                breakpoint,
                compact: is_compact(width, breakpoint),
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn width(&self) -> u32 {
        self.state.borrow().width
    }

    pub fn breakpoint(&self) -> u32 {
        self.state.borrow().breakpoint
    }

    pub fn is_compact(&self) -> bool {
        self.state.borrow().compact
    }

    pub fn mode(&self) -> ViewMode {
        let state = self.state.borrow();
        view_mode(state.width, state.breakpoint)
    }

    /// 更新寬度並重新計算，每次都通知所有監聽者
    pub fn resize(&self, width: u32) -> bool {
        let (compact, listeners) = {
            let mut state = self.state.borrow_mut();
            state.width = width;
            state.compact = is_compact(width, state.breakpoint);
            let listeners: Vec<Listener> =
                state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (state.compact, listeners)
        };

        // 呼叫時不持有借用，監聽者可自行取消訂閱
        for listener in listeners {
            let mut callback = listener.borrow_mut();
            (*callback)(compact);
        }

        compact
    }

    /// Registers `listener` until the returned guard is dropped.
    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn subscribe<F>(&self, listener: F) -> ResizeSubscription
    where
        F: FnMut(bool) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        state.listeners.push((id, listener));

        ResizeSubscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

/// Removes its listener from the viewport on drop.
pub struct ResizeSubscription {
    state: Weak<RefCell<ViewportState>>,
    id: u64,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };

        // 監聽者須在釋放借用後才 drop，它可能持有其他訂閱
        let removed = match state.try_borrow_mut() {
            Ok(mut state) => state
                .listeners
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| state.listeners.remove(index)),
            Err(_) => None,
        };
        drop(removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_breakpoint() {
        assert!(is_compact(767, COMPACT_BREAKPOINT_PX));
        assert!(!is_compact(768, COMPACT_BREAKPOINT_PX));
        assert_eq!(view_mode(320, 768), ViewMode::Compact);
        assert_eq!(view_mode(1280, 768), ViewMode::Wide);
    }

    #[test]
    fn test_resize_reevaluates() {
        let viewport = Viewport::new(1024);
        assert!(!viewport.is_compact());
        assert!(viewport.resize(500));
        assert!(viewport.is_compact());
        assert_eq!(viewport.mode(), ViewMode::Compact);
        assert_eq!(viewport.width(), 500);
    }

    #[test]
    fn test_listener_notified_until_dropped() {
        let viewport = Viewport::new(1024);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let subscription = {
            let seen = Rc::clone(&seen);
            viewport.subscribe(move |compact| seen.borrow_mut().push(compact))
        };
        assert_eq!(viewport.listener_count(), 1);

        viewport.resize(600);
        viewport.resize(900);
        drop(subscription);
        viewport.resize(300);

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_listener_fires_on_every_resize() {
        let viewport = Viewport::new(1000);
        let calls = Rc::new(Cell::new(0));
        let _subscription = {
            let calls = Rc::clone(&calls);
            viewport.subscribe(move |_| calls.set(calls.get() + 1))
        };

        viewport.resize(1100);
        viewport.resize(1200);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_listener_can_unsubscribe_itself() {
        let viewport = Viewport::new(1000);
        let slot: Rc<RefCell<Option<ResizeSubscription>>> = Rc::new(RefCell::new(None));

        let subscription = {
            let slot = Rc::clone(&slot);
            viewport.subscribe(move |_| {
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        viewport.resize(400);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_nested_subscription_released_with_outer() {
        let viewport = Viewport::new(1000);
        let inner = viewport.subscribe(|_| {});
        let outer = viewport.subscribe(move |_| {
            let _keep = &inner;
        });
        assert_eq!(viewport.listener_count(), 2);

        drop(outer);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outlives_viewport() {
        let viewport = Viewport::new(1000);
        let subscription = viewport.subscribe(|_| {});
        drop(viewport);
        drop(subscription);
    }
}
