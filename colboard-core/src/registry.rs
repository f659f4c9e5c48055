//! Registry of mounted column UI handles
//!
//! Column views register their handle when they mount and drop the returned
//! [`Registration`] when they unmount. Post-move effects use the registry to
//! find the element to flash. The registry never says anything about order.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::RegistryError;
use crate::models::ColumnId;

struct Entry<H> {
    generation: u64,
    handle: H,
}

struct RegistryInner<H> {
    next_generation: u64,
    columns: HashMap<ColumnId, Entry<H>>,
}

/// Maps column IDs to the UI handle of the mounted column view.
///
/// Clones share the same entries.
pub struct Registry<H> {
    inner: Rc<RefCell<RegistryInner<H>>>,
}

impl<H> Registry<H> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                next_generation: 0,
                columns: HashMap::new(),
            })),
        }
    }

    /// Registers the handle of a mounted column.
    ///
    /// Registering a column that is already registered replaces its handle
    /// (remount). The entry stays until the returned registration is
    /// cleaned up or dropped.
    pub fn register(&self, column_id: impl Into<ColumnId>, handle: H) -> Registration<H> {
        let column_id = column_id.into();
        let mut inner = self.inner.borrow_mut();
        let generation = inner.next_generation;
        inner.next_generation += 1;

        let replaced = inner
            .columns
            .insert(column_id.clone(), Entry { generation, handle })
            .is_some();
        tracing::trace!(column_id = %column_id, replaced, "Column registered");

        Registration {
            column_id,
            generation,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Returns true if a handle is registered for the column.
    #[must_use]
    pub fn contains(&self, column_id: &ColumnId) -> bool {
        self.inner.borrow().columns.contains_key(column_id)
    }

    /// Returns the number of registered columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().columns.len()
    }

    /// Returns true if no column is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: Clone> Registry<H> {
    /// Returns the handle registered for the column.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the column is not mounted.
    pub fn lookup(&self, column_id: &ColumnId) -> Result<H, RegistryError> {
        self.inner
            .borrow()
            .columns
            .get(column_id)
            .map(|entry| entry.handle.clone())
            .ok_or_else(|| RegistryError::NotFound(column_id.clone()))
    }
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for Registry<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H> fmt::Debug for Registry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        let mut ids: Vec<&ColumnId> = inner.columns.keys().collect();
        ids.sort();
        f.debug_struct("Registry").field("columns", &ids).finish()
    }
}

/// A live registry entry owned by a mounted column view.
///
/// Cleaning up (or dropping) the registration removes the entry, unless the
/// column has been registered again since, in which case the newer handle
/// stays.
#[must_use = "dropping the registration removes the entry immediately"]
pub struct Registration<H> {
    column_id: ColumnId,
    generation: u64,
    registry: Weak<RefCell<RegistryInner<H>>>,
}

impl<H> Registration<H> {
    /// Returns the column this registration belongs to.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    /// Removes the entry. Called by the column view when it unmounts.
    pub fn cleanup(self) {
        drop(self);
    }
}

impl<H> Drop for Registration<H> {
    fn drop(&mut self) {
        let Some(inner) = self.registry.upgrade() else {
            return;
        };
        let Ok(mut inner) = inner.try_borrow_mut() else {
            tracing::warn!(column_id = %self.column_id, "Registry busy, entry left in place");
            return;
        };

        let current = inner
            .columns
            .get(&self.column_id)
            .is_some_and(|entry| entry.generation == self.generation);
        if current {
            inner.columns.remove(&self.column_id);
            tracing::trace!(column_id = %self.column_id, "Column unregistered");
        }
    }
}

impl<H> fmt::Debug for Registration<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("column_id", &self.column_id)
            .field("generation", &self.generation)
            .finish()
    }
}
