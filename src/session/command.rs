use crate::identity::InitOptions;

/// Side effects requested by the [`Session`](super::Session) machine.
/// The caller performs them against the identity client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the single session initialization.
    Initialize(InitOptions),
    /// End the provider session (fire-and-forget).
    EndSession,
}
