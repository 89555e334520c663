//! Ordered tab collection with a single active slot.

use crate::error::TabError;
use crate::tab::{Tab, TabId};
use crate::Result;

/// The window's tabs, insertion order = display order.
///
/// Exactly one tab is active whenever the collection is non-empty; every
/// mutation below keeps the active index valid.
pub struct Session {
    tabs: Vec<Tab>,
    active: usize,
}

impl Session {
    /// New session holding `initial` as its only, active tab.
    pub fn new(initial: Tab) -> Self {
        Self {
            tabs: vec![initial],
            active: 0,
        }
    }

    /// Append `tab` and make it active.
    pub fn push(&mut self, tab: Tab) -> TabId {
        let id = tab.id();
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        tracing::info!(tab_id = %id, count = self.tabs.len(), "opened tab");
        id
    }

    /// Focus the tab `id`.
    pub fn set_active(&mut self, id: TabId) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or(TabError::InvalidTabReference(id))?;
        self.active = index;
        Ok(())
    }

    pub fn active_tab(&self) -> Result<&Tab> {
        self.tabs.get(self.active).ok_or(TabError::NoActiveTab)
    }

    pub fn active_tab_mut(&mut self) -> Result<&mut Tab> {
        self.tabs.get_mut(self.active).ok_or(TabError::NoActiveTab)
    }

    /// Remove the tab `id`, dropping its engine with it.
    ///
    /// If it was active, focus moves to the tab now occupying the same
    /// position, or the new last tab when the end was removed. Closing the
    /// last remaining tab leaves the session empty.
    pub fn close(&mut self, id: TabId) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or(TabError::InvalidTabReference(id))?;
        self.tabs.remove(index);
        tracing::info!(tab_id = %id, remaining = self.tabs.len(), "closed tab");

        if self.tabs.is_empty() {
            self.active = 0;
        } else if index < self.active {
            self.active -= 1;
        } else if self.active >= self.tabs.len() {
            self.active = self.tabs.len() - 1;
        }

        Ok(())
    }

    pub fn get(&self, id: TabId) -> Result<&Tab> {
        self.index_of(id)
            .map(|index| &self.tabs[index])
            .ok_or(TabError::InvalidTabReference(id))
    }

    pub fn get_mut(&mut self, id: TabId) -> Result<&mut Tab> {
        let index = self
            .index_of(id)
            .ok_or(TabError::InvalidTabReference(id))?;
        Ok(&mut self.tabs[index])
    }

    /// Tabs in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tab> {
        self.tabs.iter_mut()
    }

    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(Tab::id).collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the active tab, `None` when the session is empty.
    pub fn active_index(&self) -> Option<usize> {
        (!self.tabs.is_empty()).then_some(self.active)
    }

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id() == id)
    }
}
