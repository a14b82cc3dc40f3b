use crate::either::{Either, Left, Right};
use std::future::Future;

/// Awaits `operation` and lifts its settled outcome into an `Either`.
pub async fn try_catch_async<T, E, Fut>(operation: Fut) -> Either<E, T>
where
    Fut: Future<Output = Result<T, E>>,
{
    operation.await.into()
}

impl<L, R> Either<L, R> {
    /// `chain` with an asynchronous continuation. On `Left` the continuation
    /// is never called, so no future is created.
    pub async fn chain_async<U, F, Fut>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, U>>,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => f(r).await,
        }
    }
}
