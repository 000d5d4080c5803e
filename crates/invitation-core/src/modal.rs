//! Modal overlay host.
//!
//! The page has a single overlay slot. Opening replaces whatever is shown,
//! and closing is idempotent: stale handles and repeated close signals are
//! no-ops.

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModalHandle(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct ModalConfig<C> {
    pub content: C,
    pub class_name: String,
    pub close_on_click_background: bool,
}

impl<C> ModalConfig<C> {
    pub fn new(content: C, class_name: impl Into<String>) -> Self {
        Self {
            content,
            class_name: class_name.into(),
            close_on_click_background: false,
        }
    }

    pub fn close_on_click_background(mut self, enabled: bool) -> Self {
        self.close_on_click_background = enabled;
        self
    }
}

/// Capability to mount and unmount overlay content.
pub trait ModalHost<C> {
    fn open_modal(&mut self, config: ModalConfig<C>) -> ModalHandle;

    /// Close `handle`, or whatever is open when `None`. Idempotent.
    fn close_modal(&mut self, handle: Option<ModalHandle>);
}

/// Single-overlay [`ModalHost`].
#[derive(Debug)]
pub struct ModalSlot<C> {
    next_id: u64,
    current: Option<(ModalHandle, ModalConfig<C>)>,
}

impl<C> Default for ModalSlot<C> {
    fn default() -> Self {
        Self {
            next_id: 0,
            current: None,
        }
    }
}

impl<C> ModalSlot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn handle(&self) -> Option<ModalHandle> {
        self.current.as_ref().map(|(h, _)| *h)
    }

    pub fn current(&self) -> Option<&ModalConfig<C>> {
        self.current.as_ref().map(|(_, c)| c)
    }

    pub fn current_mut(&mut self) -> Option<&mut ModalConfig<C>> {
        self.current.as_mut().map(|(_, c)| c)
    }

    /// Background click: closes only overlays that allow it.
    /// Returns whether something was closed.
    pub fn click_background(&mut self) -> bool {
        let closable = self
            .current()
            .is_some_and(|c| c.close_on_click_background);
        if closable {
            self.close_modal(None);
        }
        closable
    }

    /// Remove and return the open overlay's content.
    pub fn take(&mut self) -> Option<C> {
        self.current.take().map(|(_, c)| c.content)
    }
}

impl<C> ModalHost<C> for ModalSlot<C> {
    fn open_modal(&mut self, config: ModalConfig<C>) -> ModalHandle {
        let handle = ModalHandle(self.next_id);
        self.next_id += 1;
        if let Some((old, _)) = self.current.take() {
            debug!("Modal {:?} replaced", old);
        }
        debug!("Modal {:?} opened ({})", handle, config.class_name);
        self.current = Some((handle, config));
        handle
    }

    fn close_modal(&mut self, handle: Option<ModalHandle>) {
        let matches = match (&self.current, handle) {
            (Some((open, _)), Some(requested)) => *open == requested,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if matches {
            if let Some((closed, _)) = self.current.take() {
                debug!("Modal {:?} closed", closed);
            }
        }
    }
}
