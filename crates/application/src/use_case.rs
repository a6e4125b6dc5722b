//! Generic use-case abstraction.

use async_trait::async_trait;

/// A single-operation command handler: one input, one outcome.
///
/// Implementations hold only the collaborators they are constructed with and
/// keep no state across calls; each execute runs to completion on the
/// caller's task with no retry and no internal concurrency.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output: Send;

    async fn execute(&self, input: Self::Input) -> Self::Output;
}
