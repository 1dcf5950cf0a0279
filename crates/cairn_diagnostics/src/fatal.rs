//! The set-only flag that stops command execution after a fatal message.

/// Records that a fatal message was emitted.
///
/// Commands may only [`raise`](Self::raise) the flag; the executor checks
/// [`is_raised`](Self::is_raised) between commands and stops once it is set.
/// Nothing clears it.
#[derive(Debug, Default)]
pub struct FatalFlag {
    raised: bool,
}

impl FatalFlag {
    /// Creates a flag that has not been raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub fn raise(&mut self) {
        self.raised = true;
    }

    /// Returns `true` once the flag has been raised.
    pub fn is_raised(&self) -> bool {
        self.raised
    }
}
