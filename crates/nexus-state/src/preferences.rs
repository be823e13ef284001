//! Persisted UI preferences.

use nexus_core::error::NexusResult;

use crate::keys;
use crate::kv::KeyValueStore;

#[derive(Debug, Clone)]
pub struct Preferences<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Sidebar state; anything but a stored `"true"` means expanded.
    pub fn sidebar_collapsed(&self) -> bool {
        matches!(
            self.store.get(keys::SIDEBAR_COLLAPSED).ok().flatten().as_deref(),
            Some("true")
        )
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) -> NexusResult<()> {
        self.store
            .set(keys::SIDEBAR_COLLAPSED, if collapsed { "true" } else { "false" })?;
        Ok(())
    }

    /// Flip the sidebar state and return the new value.
    pub fn toggle_sidebar(&self) -> NexusResult<bool> {
        let collapsed = !self.sidebar_collapsed();
        self.set_sidebar_collapsed(collapsed)?;
        Ok(collapsed)
    }
}
