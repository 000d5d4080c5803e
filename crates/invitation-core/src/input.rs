//! Pointer primitives and scoped input subscriptions.
//!
//! Components that need pointer events beyond their own bounds (the
//! carousel keeps tracking a drag after the pointer leaves it) acquire a
//! [`Subscription`] from the shared [`InputSurface`]. Dropping the guard
//! deregisters it, so every exit path releases the listener: normal
//! completion, cancellation, or the owning component being torn down.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pointer position in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement `(dx, dy)` from `origin` to `self`.
    pub fn delta_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Which part of the carousel a press landed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressTarget {
    #[default]
    Slide,
    ControlLeft,
    ControlRight,
}

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// Whole-page pointer move/up, held for the duration of a drag.
    Document,
    /// Pointer input on a modal overlay, held while the overlay is open.
    Overlay,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: Vec<(u64, ListenerScope)>,
}

/// Shared registry of live input listeners for one page.
#[derive(Debug, Default)]
pub struct InputSurface {
    registry: RefCell<Registry>,
}

impl InputSurface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Register a listener; it stays registered until the guard is dropped.
    pub fn subscribe(self: &Rc<Self>, scope: ListenerScope) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.active.push((id, scope));
        debug!("Input listener {id} attached ({scope:?})");

        Subscription {
            surface: Rc::clone(self),
            id,
            scope,
        }
    }

    pub fn is_listening(&self, scope: ListenerScope) -> bool {
        self.registry
            .borrow()
            .active
            .iter()
            .any(|&(_, s)| s == scope)
    }

    pub fn active_count(&self) -> usize {
        self.registry.borrow().active.len()
    }

    fn release(&self, id: u64) {
        let mut registry = self.registry.borrow_mut();
        registry.active.retain(|&(active, _)| active != id);
        debug!("Input listener {id} detached");
    }
}

/// RAII guard for a registered listener.
#[derive(Debug)]
pub struct Subscription {
    surface: Rc<InputSurface>,
    id: u64,
    scope: ListenerScope,
}

impl Subscription {
    pub fn scope(&self) -> ListenerScope {
        self.scope
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.surface.release(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_on_drop() {
        let surface = InputSurface::new();
        let doc = surface.subscribe(ListenerScope::Document);
        let overlay = surface.subscribe(ListenerScope::Overlay);
        assert_eq!(surface.active_count(), 2);

        drop(doc);
        assert!(!surface.is_listening(ListenerScope::Document));
        assert!(surface.is_listening(ListenerScope::Overlay));

        drop(overlay);
        assert_eq!(surface.active_count(), 0);
    }
}
