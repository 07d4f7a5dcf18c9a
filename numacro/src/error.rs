/// Errors reported by the keypad router.
///
/// Behaviors have no failure of their own, every error comes from a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError<LE, DE> {
    /// The LED strip driver failed
    Led(LE),
    /// The display failed
    Display(DE),
}
