//! Post-move effects: flash and live-region announcement

mod announcer;
mod dispatcher;
mod flash;

pub use announcer::{Announcer, LIVE_REGION_HISTORY_LIMIT, LiveRegion};
pub use dispatcher::{EffectsDispatcher, MoveSummary, announcement_text};
pub use flash::{FlashEffect, NoFlash};
