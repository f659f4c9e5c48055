//! Post-move highlight
//!
//! The flash itself is drawn by the view layer; the board only says which
//! handle to flash.

/// Applies a transient highlight to a UI handle. Fire-and-forget.
pub trait FlashEffect<H> {
    /// Flashes the element behind `handle`.
    fn trigger_flash(&mut self, handle: &H);
}

impl<H, F> FlashEffect<H> for F
where
    F: FnMut(&H),
{
    fn trigger_flash(&mut self, handle: &H) {
        self(handle);
    }
}

/// A flash effect that does nothing, for boards without a visual layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFlash;

impl<H> FlashEffect<H> for NoFlash {
    fn trigger_flash(&mut self, _handle: &H) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_flash_effects() {
        let mut flashed = Vec::new();
        {
            let mut effect = |handle: &u32| flashed.push(*handle);
            effect.trigger_flash(&7);
            effect.trigger_flash(&9);
        }
        assert_eq!(flashed, [7, 9]);
    }

    #[test]
    fn no_flash_accepts_any_handle() {
        let mut effect = NoFlash;
        FlashEffect::<String>::trigger_flash(&mut effect, &"column".to_string());
    }
}
