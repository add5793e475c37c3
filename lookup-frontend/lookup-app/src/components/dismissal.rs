use leptos::prelude::WindowListenerHandle;

use crate::widget::Dismissal;

/// Something registered on the page that has to be taken off again.
pub trait Listener {
    fn remove(self);
}

impl Listener for WindowListenerHandle {
    fn remove(self) {
        WindowListenerHandle::remove(self)
    }
}

/// Holds the click listener of one navigation panel.
#[derive(Debug)]
pub struct DismissalSlot<L> {
    listener: Option<L>,
}

impl<L> Default for DismissalSlot<L> {
    fn default() -> Self {
        Self { listener: None }
    }
}

impl<L: Listener> DismissalSlot<L> {
    /// `arm` registers the listener; it only runs for [`Dismissal::Arm`].
    pub fn apply(&mut self, dismissal: Dismissal, arm: impl FnOnce() -> L) {
        match dismissal {
            Dismissal::Arm => {
                if let Some(stale) = self.listener.replace(arm()) {
                    stale.remove();
                }
            }
            Dismissal::Disarm => self.clear(),
            Dismissal::Unchanged => {}
        }
    }

    pub fn clear(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.remove();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.listener.is_some()
    }
}
