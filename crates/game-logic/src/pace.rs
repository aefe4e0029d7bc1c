//! Presentation pacing for round resolution

use async_trait::async_trait;

/// Suspension between a round's bookkeeping and the release of the turn
/// lock: the "opponent is choosing" animation window.
///
/// By the time the pause starts the round's result is already final; the
/// pause only delays when input re-opens, and it cannot be cancelled.
#[async_trait]
pub trait Pacer {
    async fn pause(&self);
}

/// Pacer that never waits; rounds release immediately.
///
/// The browser frontend swaps in a timer-backed implementation; native
/// embeddings and tests mostly want this one.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}
