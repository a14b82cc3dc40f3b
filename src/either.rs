use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A value that is either a failure (`Left`) or a success (`Right`).
///
/// Combinators are right-biased: `map` and `chain` only touch the `Right`
/// value and pass a `Left` through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

pub use Either::{Left, Right};

/// Marker carried by `Left` when a nullable value turned out to be missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Absent;

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Absent")
    }
}

/// Payload of a panic caught by [`try_catch_panic`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Panicked {
    pub message: String,
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Left(l) => Some(l),
            Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Left(_) => None,
            Right(r) => Some(r),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(r),
        }
    }

    /// Applies `f` to a `Right` value. `f` is never called on a `Left`.
    pub fn map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(f(r)),
        }
    }

    pub fn map_left<M, F>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Left(l) => Left(f(l)),
            Right(r) => Right(r),
        }
    }

    /// Monadic bind. The continuation decides the variant of the result.
    pub fn chain<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Left(l) => Left(l),
            Right(r) => f(r),
        }
    }

    /// Collapses the value by calling exactly one of the two handlers.
    ///
    /// The other ways out, [`Either::left`], [`Either::right`] and
    /// [`Either::into_result`], are checked too: they hand back an `Option` or
    /// a `Result` that still has to be matched. There is no unchecked unwrap.
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Left(l) => on_left(l),
            Right(r) => on_right(r),
        }
    }

    /// Calls `f` with a reference to a `Right` value and passes `self` on.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Right(r) = &self {
            f(r);
        }
        self
    }

    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Undoes the nesting produced by passing an `Either`-returning function
    /// to `map` instead of `chain`.
    pub fn flatten(self) -> Either<L, R> {
        self.chain(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Right(r),
            Err(l) => Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Left(l) => write!(f, "Left({l})"),
            Right(r) => write!(f, "Right({r})"),
        }
    }
}

pub fn from_nullable<T>(value: Option<T>) -> Either<Absent, T> {
    match value {
        Some(value) => Right(value),
        None => Left(Absent),
    }
}

/// Runs a fallible computation and moves its outcome into an `Either`.
///
/// This is synchronous: a closure that hands back a future is `Right` as soon
/// as the future exists, whatever that future later resolves to. Use
/// [`crate::future::try_catch_async`] for asynchronous work.
pub fn try_catch<T, E, F>(f: F) -> Either<E, T>
where
    F: FnOnce() -> Result<T, E>,
{
    f().into()
}

/// Like [`try_catch`], but for computations that report failure by panicking.
pub fn try_catch_panic<T, F>(f: F) -> Either<Panicked, T>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Right(value),
        Err(payload) => Left(Panicked {
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
