//! Loop termination policy.

/// Decides whether closing a window terminates the event loop.
///
/// The policy is explicit loop configuration rather than behavior baked into
/// individual windows; a policy quit always carries exit code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuitPolicy {
    /// Quit once the last live window has closed.
    #[default]
    LastWindowClosed,
    /// Quit as soon as any window closes.
    AnyWindowClosed,
    /// Never quit on close; the loop only ends on an explicit posted quit.
    Explicit,
}

impl QuitPolicy {
    /// Called after a window was removed; `remaining` is the number of
    /// windows still live.
    pub fn quits(&self, remaining: usize) -> bool {
        match self {
            QuitPolicy::LastWindowClosed => remaining == 0,
            QuitPolicy::AnyWindowClosed => true,
            QuitPolicy::Explicit => false,
        }
    }
}
