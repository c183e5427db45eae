//! Callback registry with explicit unsubscribe handles
//!
//! Used by the device arbiter and the navigation bridge. Everything runs on
//! the shell's frame loop, so the registry is single-threaded (`Rc`).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&T)>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
    // Ids detached while an emit had the entries checked out
    detached: Vec<u64>,
}

pub struct Listeners<T> {
    inner: Rc<RefCell<Registry<T>>>,
}

/// Handle returned by every `subscribe`; call `unsubscribe` on teardown
#[must_use = "keep the subscription and call unsubscribe() on teardown"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl<T: 'static> Listeners<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
                detached: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut reg = self.inner.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.entries.push((id, Box::new(callback)));
            id
        };

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut reg = inner.borrow_mut();
                    let before = reg.entries.len();
                    reg.entries.retain(|(entry_id, _)| *entry_id != id);
                    if reg.entries.len() == before {
                        reg.detached.push(id);
                    }
                }
            })),
        }
    }

    /// Invoke every listener in subscription order
    ///
    /// Listeners may subscribe or unsubscribe from inside their callback.
    pub fn emit(&self, value: &T) {
        let mut active = std::mem::take(&mut self.inner.borrow_mut().entries);
        for (_, callback) in active.iter_mut() {
            callback(value);
        }

        let mut reg = self.inner.borrow_mut();
        let added = std::mem::take(&mut reg.entries);
        let detached = std::mem::take(&mut reg.detached);
        active.retain(|(id, _)| !detached.contains(id));
        active.extend(added);
        reg.entries = active;
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
