//! Bounded pool of reusable objects.

use std::sync::Mutex;

/// Objects that can be returned to a [`Pool`] must be able to clear
/// themselves back to their freshly constructed state.
pub trait Reset {
    fn reset(&mut self);
}

/// A bounded free list.
///
/// `acquire` hands out a recycled object when one is available and a new
/// `T::default()` otherwise. `release` resets the object and keeps it unless
/// the pool is already at capacity, in which case it is dropped.
#[derive(Debug)]
pub struct Pool<T> {
    idle: Mutex<Vec<T>>,
    capacity: usize,
}

impl<T: Default + Reset> Pool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            capacity,
        }
    }

    pub fn acquire(&self) -> T {
        let recycled = match self.idle.lock() {
            Ok(mut idle) => idle.pop(),
            Err(poisoned) => poisoned.into_inner().pop(),
        };
        match recycled {
            Some(item) => {
                log::trace!("reusing pooled object");
                item
            }
            None => T::default(),
        }
    }

    pub fn release(&self, mut item: T) {
        item.reset();
        let mut idle = match self.idle.lock() {
            Ok(idle) => idle,
            Err(poisoned) => poisoned.into_inner(),
        };
        if idle.len() < self.capacity {
            idle.push(item);
        }
    }

    /// Number of idle objects currently held.
    pub fn idle_count(&self) -> usize {
        match self.idle.lock() {
            Ok(idle) => idle.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
