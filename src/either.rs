//! Short-circuiting computations that succeed or fail with a single error.
//!
//! # Right-Biased Convention
//!
//! `Either<L, R>` holds a failure in `Left` and a success in `Right`. Chaining
//! methods such as [`map`](Either::map) and [`flat_map`](Either::flat_map) only look
//! at `Right`; a `Left` passes through every link unchanged, so a chain stops at the
//! first failure.
//!
//! Recovery is always explicit: [`get_or_else`](Either::get_or_else),
//! [`get_or_handle`](Either::get_or_handle) or [`fold`](Either::fold).
//!
//! # Examples
//!
//! ```rust
//! use quiver::Either;
//!
//! let value: Either<String, String> = Either::success("Sample value".to_string());
//! let mutated = value.flat_map(|s| Either::success(format!("{s}***{s}")));
//! assert_eq!(mutated, Either::Right("Sample value***Sample value".to_string()));
//!
//! let failed: Either<&str, i32> = Either::failure("boom");
//! let still_failed = failed.flat_map(|x| Either::success(x + 1));
//! assert_eq!(still_failed, Either::Left("boom"));
//! ```

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{Fault, Optional, Validated};

/// A value that is either a failure `Left(L)` or a success `Right(R)`.
///
/// # Example
///
/// ```rust
/// use quiver::Either;
///
/// fn halve(n: i32) -> Either<String, i32> {
///     Either::conditionally(n % 2 == 0, || format!("{n} is odd"), || n / 2)
/// }
///
/// assert_eq!(halve(8).flat_map(halve), Either::Right(2));
/// assert_eq!(
///     halve(6).flat_map(halve).flat_map(halve),
///     Either::Left("3 is odd".to_string())
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure variant
    Left(L),
    /// The success variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a success.
    #[inline]
    pub fn success(value: R) -> Self {
        Either::Right(value)
    }

    /// Create a failure.
    #[inline]
    pub fn failure(error: L) -> Self {
        Either::Left(error)
    }

    /// Create a `Left` value. Same as [`failure`](Either::failure).
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a `Right` value. Same as [`success`](Either::success).
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Succeed with `if_true()` when `predicate` holds, otherwise fail with `if_false()`.
    ///
    /// Only the selected branch is evaluated.
    ///
    /// ```rust
    /// use quiver::Either;
    ///
    /// assert_eq!(Either::conditionally(true, || "Error", || 42), Either::Right(42));
    /// assert_eq!(Either::conditionally(false, || "Error", || 42), Either::Left("Error"));
    /// ```
    pub fn conditionally<F, G>(predicate: bool, if_false: F, if_true: G) -> Self
    where
        F: FnOnce() -> L,
        G: FnOnce() -> R,
    {
        if predicate {
            Either::Right(if_true())
        } else {
            Either::Left(if_false())
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for `Left`.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extraction ==========

    /// The failure, if any.
    pub fn into_left(self) -> Optional<L> {
        match self {
            Either::Left(l) => Optional::Present(l),
            Either::Right(_) => Optional::Empty,
        }
    }

    /// The success, if any.
    pub fn into_right(self) -> Optional<R> {
        match self {
            Either::Left(_) => Optional::Empty,
            Either::Right(r) => Optional::Present(r),
        }
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// The success value, or `default()` on failure.
    ///
    /// ```rust
    /// use quiver::Either;
    ///
    /// let failed: Either<&str, i32> = Either::failure("boom");
    /// assert_eq!(failed.get_or_else(|| 0), 0);
    /// ```
    pub fn get_or_else<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Either::Left(_) => default(),
            Either::Right(r) => r,
        }
    }

    /// The success value, or `handler(error)` on failure.
    ///
    /// ```rust
    /// use quiver::Either;
    ///
    /// let failed: Either<&str, usize> = Either::failure("boom");
    /// assert_eq!(failed.get_or_handle(|e| e.len()), 4);
    /// ```
    pub fn get_or_handle<F>(self, handler: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => handler(l),
            Either::Right(r) => r,
        }
    }

    /// Collapse both variants into one type.
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    // ========== Transformation ==========

    /// Transform the success value.
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform the failure value.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform whichever side is present.
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(g(r)),
        }
    }

    /// Exchange the roles of the two sides.
    ///
    /// ```rust
    /// use quiver::Either;
    ///
    /// let e: Either<i32, &str> = Either::success("ok");
    /// assert_eq!(e.swap(), Either::Left("ok"));
    /// ```
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    // ========== Chaining ==========

    /// Chain a computation that can itself fail.
    ///
    /// `f` runs only on success and its result is returned as-is. A failure is
    /// returned unchanged and `f` is never called.
    #[inline]
    pub fn flat_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Try an alternative when this is a failure.
    pub fn or_else<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Conversion ==========

    /// Convert to a `Result`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Convert from a `Result`.
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Convert to a [`Validated`], wrapping a failure in a one-element error list.
    ///
    /// ```rust
    /// use quiver::{nel, Either, Validated};
    ///
    /// let e: Either<&str, i32> = Either::failure("bad");
    /// assert_eq!(e.into_validated(), Validated::Invalid(nel!["bad"]));
    /// ```
    pub fn into_validated(self) -> Validated<R, L> {
        match self {
            Either::Left(l) => Validated::invalid(l),
            Either::Right(r) => Validated::valid(r),
        }
    }

    /// Iterate over the success value (zero or one item).
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
        .into_iter()
    }
}

impl<R> Either<Fault, R> {
    /// Run `f`, turning a panic into a failure instead of unwinding further.
    ///
    /// ```rust
    /// use quiver::Either;
    ///
    /// let ok = Either::catching(|| 21 * 2);
    /// assert_eq!(ok.into_result().ok(), Some(42));
    ///
    /// let caught = Either::<_, i32>::catching(|| panic!("index out of range"));
    /// let fault = caught.into_left().get_or_else(|| unreachable!());
    /// assert_eq!(fault.message(), "panicked: index out of range");
    /// ```
    pub fn catching<F>(f: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Either::Right(value),
            Err(payload) => {
                let detail = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic payload".to_string());
                Either::Left(Fault::new(format!("panicked: {detail}")).trace("catching"))
            }
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Remove one level of nesting.
    pub fn flatten(self) -> Either<L, R> {
        self.flat_map(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
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
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}

/// Split an iterator of `Either`s into failures and successes, keeping order.
///
/// ```rust
/// use quiver::either::partition;
/// use quiver::Either;
///
/// let items = vec![Either::left("a"), Either::right(1), Either::left("b")];
/// let (failures, successes) = partition(items);
/// assert_eq!(failures, vec!["a", "b"]);
/// assert_eq!(successes, vec![1]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    for either in iter {
        match either {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }
    (lefts, rights)
}

/// All failures of an iterator of `Either`s.
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(|e| e.into_left().into_option())
}

/// All successes of an iterator of `Either`s.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(|e| e.into_right().into_option())
}
