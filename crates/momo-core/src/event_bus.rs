//! Queue of `ChatEvent`s from the session dispatchers to the UI.
//!
//! Login, history and send tasks run on `spawn_local` and only ever push
//! here; `UiState` is mutated exclusively by the frame that drains the
//! queue. Single-threaded, so a `RefCell` suffices.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use momo_types::event::ChatEvent;

/// Handle shared by the app and every in-flight request task.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: ChatEvent) {
        log::trace!("emit {:?}", event);
        self.queue.borrow_mut().push_back(event);
    }

    /// Take everything queued since the last frame, oldest first.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
