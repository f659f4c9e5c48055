//! Accessible announcements of moves
//!
//! The announcer is an owned service: the board initialises it when it
//! mounts and tears it down when it unmounts.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// A channel for screen reader announcements.
pub trait Announcer {
    /// Prepares the channel. Called once when the board mounts.
    fn init(&mut self) {}

    /// Announces a message.
    fn announce(&mut self, message: &str);

    /// Releases the channel. Called once when the board unmounts.
    fn teardown(&mut self) {}
}

/// Announcements a [`LiveRegion`] remembers; older ones are dropped.
pub const LIVE_REGION_HISTORY_LIMIT: usize = 32;

#[derive(Debug, Default)]
struct LiveRegionInner {
    mounted: bool,
    message: Option<String>,
    history: VecDeque<String>,
}

/// A polite live region: holds the latest announcement while mounted.
///
/// Clones share the same region, so a view can render the current message
/// while the board owns the announcer.
#[derive(Clone, Default)]
pub struct LiveRegion {
    inner: Rc<RefCell<LiveRegionInner>>,
}

impl LiveRegion {
    /// Creates an unmounted live region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the region is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    /// The message currently in the region.
    #[must_use]
    pub fn current_message(&self) -> Option<String> {
        self.inner.borrow().message.clone()
    }

    /// The most recent announcements, oldest first, at most
    /// [`LIVE_REGION_HISTORY_LIMIT`] of them.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.inner.borrow().history.iter().cloned().collect()
    }
}

impl Announcer for LiveRegion {
    fn init(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.mounted {
            inner.mounted = true;
            tracing::debug!("Live region mounted");
        }
    }

    fn announce(&mut self, message: &str) {
        let mut inner = self.inner.borrow_mut();
        // announcing before init mounts the region on demand
        if !inner.mounted {
            inner.mounted = true;
            tracing::debug!("Live region mounted on first announcement");
        }
        if inner.history.len() == LIVE_REGION_HISTORY_LIMIT {
            inner.history.pop_front();
        }
        inner.history.push_back(message.to_string());
        inner.message = Some(message.to_string());
    }

    fn teardown(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.mounted = false;
        inner.message = None;
        tracing::debug!("Live region removed");
    }
}

impl fmt::Debug for LiveRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LiveRegion")
            .field("mounted", &inner.mounted)
            .field("message", &inner.message)
            .finish()
    }
}
