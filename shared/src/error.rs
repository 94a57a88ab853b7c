/// Errors raised by the deck logic and the surfaces it drives.
///
/// Navigation itself never fails: out-of-range targets are clamped. These
/// variants cover setup problems and collaborator failures.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Deck has no slides")]
    EmptyDeck,
    #[error("Required element not found: {0}")]
    MissingElement(String),
    #[error("Chart mount point not found: {0}")]
    MountNotFound(String),
    #[error("Chart rendering failed for {mount}: {reason}")]
    Render { mount: String, reason: String },
    #[error("Fullscreen request failed: {0}")]
    Fullscreen(String),
    #[error("Invalid deck configuration: {0}")]
    Config(#[from] serde_json::Error),
}
