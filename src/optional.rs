//! Values that may be absent
//!
//! `Optional<T>` is an explicit two-variant union: `Present(T)` or `Empty`. Absence
//! is not an error; `Empty` carries no payload. Convert from a nullable source
//! (`Option<T>`) with [`Optional::from_nullable`] and recover with
//! [`get_or_else`](Optional::get_or_else), whose fallback only runs on `Empty`.
//!
//! # Examples
//!
//! ```
//! use quiver::Optional;
//!
//! fn maybe_even(n: i32) -> Optional<&'static str> {
//!     if n % 2 == 0 { Optional::present("Even") } else { Optional::empty() }
//! }
//!
//! assert_eq!(maybe_even(2).get_or_else(|| "Nopes"), "Even");
//! assert_eq!(maybe_even(5).get_or_else(|| "Nopes"), "Nopes");
//!
//! let scaled = Optional::present(3).map(|n| n as f64 * 1.5);
//! assert_eq!(scaled, Optional::Present(4.5));
//! ```

use std::fmt;

use crate::Either;

/// Zero or one value of type `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// No value
    Empty,
    /// A value
    Present(T),
}

impl<T> Optional<T> {
    /// Wrap a value.
    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// The absent value.
    #[inline]
    pub fn empty() -> Self {
        Optional::Empty
    }

    /// `Present` for `Some`, `Empty` for `None`.
    ///
    /// ```
    /// use quiver::Optional;
    ///
    /// let name: Option<&str> = Some("Nullable string");
    /// assert_eq!(Optional::from_nullable(name), Optional::Present("Nullable string"));
    /// assert_eq!(Optional::<&str>::from_nullable(None), Optional::Empty);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(v),
            None => Optional::Empty,
        }
    }

    /// Returns `true` for `Present`.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` for `Empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Optional::Empty)
    }

    /// Borrow the contained value.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(v) => Optional::Present(v),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Transform the value if present. `Empty` stays `Empty`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(v) => Optional::Present(f(v)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Chain a computation that may itself produce nothing.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(v) => f(v),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(v) if predicate(&v) => Optional::Present(v),
            _ => Optional::Empty,
        }
    }

    /// The value, or `default()` when empty. `default` is not called otherwise.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => default(),
        }
    }

    /// The value, or an eagerly supplied default.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        self.get_or_else(|| default)
    }

    /// Collapse both variants into one type.
    pub fn fold<U, F, G>(self, on_empty: F, on_present: G) -> U
    where
        F: FnOnce() -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(v) => on_present(v),
            Optional::Empty => on_empty(),
        }
    }

    /// Convert to the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(v) => Some(v),
            Optional::Empty => None,
        }
    }

    /// Turn absence into a failure produced by `error`.
    ///
    /// ```
    /// use quiver::{Either, Optional};
    ///
    /// let missing: Optional<i32> = Optional::empty();
    /// assert_eq!(missing.to_either(|| "missing"), Either::Left("missing"));
    /// ```
    pub fn to_either<L, F>(self, error: F) -> Either<L, T>
    where
        F: FnOnce() -> L,
    {
        match self {
            Optional::Present(v) => Either::Right(v),
            Optional::Empty => Either::Left(error()),
        }
    }

    /// Iterate over the value (zero or one item).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(v) => write!(f, "Present({})", v),
            Optional::Empty => write!(f, "Empty"),
        }
    }
}

/// Serializes as a nullable value, like `Option<T>`.
///
/// Nesting is lossy for the same reason it is with `Option<Option<T>>`:
/// `Present(Empty)` and `Empty` both serialize to `null`, and `null` always
/// deserializes as the outer `Empty`.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(v) => serializer.serialize_some(v),
            Optional::Empty => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from_nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maybe_even(n: i32) -> Optional<String> {
        if n % 2 == 0 {
            Optional::present("Even".to_string())
        } else {
            Optional::empty()
        }
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Optional::present(1), Optional::Present(1));
        assert_eq!(Optional::<i32>::empty(), Optional::Empty);
        assert!(Optional::present(1).is_present());
        assert!(Optional::<i32>::empty().is_empty());
    }

    #[test]
    fn test_from_nullable() {
        assert_eq!(Optional::from_nullable(Some(3)), Optional::Present(3));
        assert_eq!(Optional::<i32>::from_nullable(None), Optional::Empty);
        let converted: Optional<i32> = Some(4).into();
        assert_eq!(converted, Optional::Present(4));
    }

    #[test]
    fn test_map_present_and_empty() {
        assert_eq!(Optional::present(3).map(|n| n as f64 * 1.5), Optional::Present(4.5));
        assert_eq!(Optional::<i32>::empty().map(|n| n as f64 * 1.5), Optional::Empty);
    }

    #[test]
    fn test_get_or_else_only_runs_default_when_empty() {
        let mut calls = 0;
        let value = maybe_even(20).get_or_else(|| {
            calls += 1;
            "Nopesss".to_string()
        });
        assert_eq!(value, "Even");
        assert_eq!(calls, 0);

        let value = maybe_even(13).get_or_else(|| {
            calls += 1;
            "Nopesss".to_string()
        });
        assert_eq!(value, "Nopesss");
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_pattern_matching() {
        let describe = |o: Optional<String>| match o {
            Optional::Present(s) => s,
            Optional::Empty => "Nopesss".to_string(),
        };
        assert_eq!(describe(maybe_even(20)), "Even");
        assert_eq!(describe(maybe_even(13)), "Nopesss");
    }

    #[test]
    fn test_flat_map_and_filter() {
        let halve = |n: i32| if n % 2 == 0 { Optional::present(n / 2) } else { Optional::empty() };
        assert_eq!(Optional::present(8).flat_map(halve), Optional::Present(4));
        assert_eq!(Optional::present(3).flat_map(halve), Optional::Empty);
        assert_eq!(Optional::present(5).filter(|n| *n > 3), Optional::Present(5));
        assert_eq!(Optional::present(2).filter(|n| *n > 3), Optional::Empty);
    }

    #[test]
    fn test_fold_and_get_or() {
        assert_eq!(Optional::present(2).fold(|| 0, |n| n * 10), 20);
        assert_eq!(Optional::<i32>::empty().fold(|| 0, |n| n * 10), 0);
        assert_eq!(Optional::<i32>::empty().get_or(7), 7);
    }

    #[test]
    fn test_to_either() {
        assert_eq!(Optional::present(1).to_either(|| "none"), Either::Right(1));
        assert_eq!(Optional::<i32>::empty().to_either(|| "none"), Either::Left("none"));
    }

    #[test]
    fn test_option_roundtrip_and_iter() {
        let o = Optional::present("x");
        assert_eq!(o.iter().count(), 1);
        let back: Option<&str> = o.into();
        assert_eq!(back, Some("x"));
        assert_eq!(Optional::<i32>::default(), Optional::Empty);
        assert_eq!(Optional::<i32>::Empty.into_iter().count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Optional::present("I'm some value").to_string(), "Present(I'm some value)");
        assert_eq!(Optional::<String>::empty().to_string(), "Empty");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_nullable() {
        assert_eq!(serde_json::to_string(&Optional::present(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Optional::<i32>::empty()).unwrap(), "null");
        let back: Optional<i32> = serde_json::from_str("null").unwrap();
        assert_eq!(back, Optional::Empty);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_nested_present_empty_reads_back_empty() {
        let nested: Optional<Optional<i32>> = Optional::present(Optional::empty());
        let json = serde_json::to_string(&nested).unwrap();
        assert_eq!(json, "null");
        let back: Optional<Optional<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Optional::Empty);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_present_map_get_or_else(v: i32) {
            let f = |x: i32| x.wrapping_mul(3);
            prop_assert_eq!(Optional::present(v).map(f).get_or_else(|| 0), f(v));
        }

        #[test]
        fn prop_empty_map_get_or_else(fallback: i32) {
            let f = |x: i32| x.wrapping_mul(3);
            prop_assert_eq!(Optional::<i32>::empty().map(f).get_or_else(|| fallback), fallback);
        }

        #[test]
        fn prop_option_roundtrip(value: Option<i32>) {
            prop_assert_eq!(Optional::from_nullable(value).into_option(), value);
        }
    }
}
