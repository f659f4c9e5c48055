//! Drop notification monitor
//!
//! The boundary to the drag primitive layer. Interested parties subscribe
//! with a predicate over the drag source and a drop handler; the primitive
//! layer reports each finished drag through [`DropMonitor::drop_event`].
//!
//! Everything here is single-threaded. Handlers are invoked after the
//! monitor's own state has been released, so a handler may subscribe or
//! unsubscribe without deadlocking the monitor.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::types::{DropEvent, SourceData};

type CanMonitorFn = Rc<dyn Fn(&SourceData) -> bool>;
type OnDropFn = Rc<RefCell<dyn FnMut(&DropEvent)>>;

struct Listener {
    id: u64,
    can_monitor: CanMonitorFn,
    on_drop: OnDropFn,
}

#[derive(Default)]
struct MonitorInner {
    next_id: u64,
    listeners: Vec<Listener>,
}

/// Dispatches drop notifications to subscribed monitors.
///
/// Cloning a `DropMonitor` yields another handle to the same set of
/// subscriptions.
#[derive(Clone, Default)]
pub struct DropMonitor {
    inner: Rc<RefCell<MonitorInner>>,
}

impl DropMonitor {
    /// Creates a monitor with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to drop notifications.
    ///
    /// `can_monitor` is asked for every drop; `on_drop` only runs for drops
    /// it accepted. The subscription lasts until the returned guard is
    /// dropped or [`MonitorSubscription::unsubscribe`] is called.
    pub fn monitor<C, D>(&self, can_monitor: C, on_drop: D) -> MonitorSubscription
    where
        C: Fn(&SourceData) -> bool + 'static,
        D: FnMut(&DropEvent) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push(Listener {
            id,
            can_monitor: Rc::new(can_monitor),
            on_drop: Rc::new(RefCell::new(on_drop)),
        });
        tracing::debug!(subscription = id, "Drop monitor subscribed");

        MonitorSubscription {
            id,
            monitor: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers a finished drag to every subscriber that accepts its source.
    ///
    /// Returns the number of handlers that ran. A handler that is already
    /// running (a drop reported from inside a drop handler) is skipped.
    pub fn drop_event(&self, event: &DropEvent) -> usize {
        let accepted: Vec<OnDropFn> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|listener| (listener.can_monitor)(&event.source))
            .map(|listener| Rc::clone(&listener.on_drop))
            .collect();

        let mut delivered = 0;
        for handler in accepted {
            match handler.try_borrow_mut() {
                Ok(mut on_drop) => {
                    let on_drop = &mut *on_drop;
                    on_drop(event);
                    delivered += 1;
                }
                Err(_) => {
                    tracing::warn!("Skipping re-entrant drop notification");
                }
            }
        }
        delivered
    }

    /// Returns the number of active subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for DropMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropMonitor")
            .field("subscriptions", &self.subscription_count())
            .finish()
    }
}

/// Guard for one monitor subscription.
///
/// Dropping the guard unsubscribes, so a subscription can never outlive the
/// component that created it.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct MonitorSubscription {
    id: u64,
    monitor: Weak<RefCell<MonitorInner>>,
}

impl MonitorSubscription {
    /// Returns true while the subscription is registered with a live monitor.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.monitor
            .upgrade()
            .is_some_and(|inner| inner.borrow().listeners.iter().any(|l| l.id == self.id))
    }

    /// Ends the subscription now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for MonitorSubscription {
    fn drop(&mut self) {
        let Some(inner) = self.monitor.upgrade() else {
            return;
        };
        if let Ok(mut inner) = inner.try_borrow_mut() {
            inner.listeners.retain(|listener| listener.id != self.id);
            tracing::debug!(subscription = self.id, "Drop monitor unsubscribed");
        } else {
            tracing::warn!(
                subscription = self.id,
                "Drop monitor busy, subscription could not be removed"
            );
        }
    }
}

impl fmt::Debug for MonitorSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorSubscription")
            .field("id", &self.id)
            .finish()
    }
}
