/// Errors raised while setting up a bridge.
///
/// Running a bridge never fails: exhaustion is `None`, and a generator that
/// panics has its panic re-raised on the consuming side.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// The thread hosting the generator could not be spawned.
    #[error("failed to spawn generator thread: {0}")]
    Spawn(#[from] std::io::Error),
}
