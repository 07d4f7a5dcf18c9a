/// A key with custom press and release handling.
///
/// The input layer guarantees that a press comes before the release of the same key
/// and that events of different keys never interleave.
pub trait KeyBehavior {
    type Error;

    /// Handle a key press
    async fn on_press(&mut self) -> Result<(), Self::Error>;

    /// Handle a key release
    async fn on_release(&mut self) -> Result<(), Self::Error>;
}

/// A KeyAction is the action at a keypad position, stored in the keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action
    #[default]
    No,
    /// A regular key, forwarded to the HID layer with its key code
    PassThrough(u16),
    /// Toggle the lighting mode on press, flash green on release
    ToggleLighting,
    /// Arm on press, count down and reset on release
    Restart,
}

/// Create a pass-through [`KeyAction`]
#[macro_export]
macro_rules! pt {
    ($code: expr) => {
        $crate::behavior::KeyAction::PassThrough($code)
    };
}
