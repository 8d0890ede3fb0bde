//! Validation that accumulates every error
//!
//! `Validated<T, E>` is `Valid(T)` or `Invalid(NonEmptyList<E>)`. Unlike
//! [`Either`], combining two `Validated` values never discards errors: when both
//! sides are invalid, their error lists are concatenated, first operand first.
//! Run a batch of independent checks and the caller sees every problem at once.
//!
//! | left      | right     | result                              |
//! |-----------|-----------|-------------------------------------|
//! | `Valid`   | `Valid`   | `Valid(f(a, b))`                    |
//! | `Valid`   | `Invalid` | the right side                      |
//! | `Invalid` | `Valid`   | the left side                       |
//! | `Invalid` | `Invalid` | `Invalid(left_errors ++ right_errors)` |
//!
//! # Examples
//!
//! ```
//! use quiver::{nel, Validated};
//!
//! fn check_name(name: &str) -> Validated<String, String> {
//!     if name.is_empty() {
//!         Validated::invalid("name is empty".to_string())
//!     } else {
//!         Validated::valid(name.to_string())
//!     }
//! }
//!
//! fn check_age(age: i32) -> Validated<i32, String> {
//!     if age >= 18 {
//!         Validated::valid(age)
//!     } else {
//!         Validated::invalid(format!("{age} is under 18"))
//!     }
//! }
//!
//! let ok = check_name("Ada").combine_with(check_age(36), |name, age| format!("{name} ({age})"));
//! assert_eq!(ok, Validated::Valid("Ada (36)".to_string()));
//!
//! let bad = check_name("").and(check_age(12));
//! assert_eq!(
//!     bad,
//!     Validated::Invalid(nel!["name is empty".to_string(), "12 is under 18".to_string()])
//! );
//! ```
//!
//! ## Validating tuples
//!
//! ```
//! use quiver::{validated::ValidateAll, Validated};
//!
//! let result = (
//!     Validated::<_, &str>::valid(1),
//!     Validated::<_, &str>::valid("two"),
//!     Validated::<_, &str>::valid(3.0),
//! )
//!     .validate_all();
//!
//! assert_eq!(result, Validated::Valid((1, "two", 3.0)));
//! ```

use std::fmt;

use crate::{Either, NonEmptyList, Optional, Semigroup};

/// A value that is either valid or carries at least one error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validated<T, E> {
    /// Passed every check
    Valid(T),
    /// Failed one or more checks
    Invalid(NonEmptyList<E>),
}

impl<T, E> Validated<T, E> {
    /// Create a valid value.
    #[inline]
    pub fn valid(value: T) -> Self {
        Validated::Valid(value)
    }

    /// Create an invalid value holding a single error.
    ///
    /// ```
    /// use quiver::{nel, Validated};
    ///
    /// let v = Validated::<i32, _>::invalid("too short");
    /// assert_eq!(v, Validated::Invalid(nel!["too short"]));
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Validated::Invalid(NonEmptyList::singleton(error))
    }

    /// Create an invalid value from an existing error list.
    #[inline]
    pub fn invalid_all(errors: NonEmptyList<E>) -> Self {
        Validated::Invalid(errors)
    }

    /// Build from a `Result`, wrapping an error in a one-element list.
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::invalid(error),
        }
    }

    /// Convert to a `Result` carrying every error.
    pub fn into_result(self) -> Result<T, NonEmptyList<E>> {
        match self {
            Validated::Valid(value) => Ok(value),
            Validated::Invalid(errors) => Err(errors),
        }
    }

    /// Convert to a short-circuiting [`Either`].
    pub fn into_either(self) -> Either<NonEmptyList<E>, T> {
        Either::from_result(self.into_result())
    }

    /// Returns `true` for `Valid`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validated::Valid(_))
    }

    /// Returns `true` for `Invalid`.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validated::Invalid(_))
    }

    /// The accumulated errors, if any.
    pub fn errors(&self) -> Optional<&NonEmptyList<E>> {
        match self {
            Validated::Valid(_) => Optional::Empty,
            Validated::Invalid(errors) => Optional::Present(errors),
        }
    }

    /// Transform the valid value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(f(value)),
            Validated::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Transform each accumulated error.
    ///
    /// ```
    /// use quiver::{nel, Validated};
    ///
    /// let v = Validated::<i32, _>::invalid_all(nel!["a", "bb"]);
    /// assert_eq!(v.map_err(str::len), Validated::Invalid(nel![1, 2]));
    /// ```
    pub fn map_err<E2, F>(self, f: F) -> Validated<T, E2>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Validated::Valid(value) => Validated::Valid(value),
            Validated::Invalid(errors) => Validated::Invalid(errors.map(f)),
        }
    }

    /// Invoke exactly one branch and return its result.
    ///
    /// ```
    /// use quiver::Validated;
    ///
    /// let v = Validated::<i32, &str>::invalid("bad");
    /// let message = v.fold(|errors| format!("{} error(s)", errors.len()), |n| n.to_string());
    /// assert_eq!(message, "1 error(s)");
    /// ```
    pub fn fold<U, F, G>(self, on_invalid: F, on_valid: G) -> U
    where
        F: FnOnce(NonEmptyList<E>) -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Validated::Valid(value) => on_valid(value),
            Validated::Invalid(errors) => on_invalid(errors),
        }
    }

    /// The valid value, or `default()` when invalid.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Validated::Valid(value) => value,
            Validated::Invalid(_) => default(),
        }
    }

    /// Combine two independent validations.
    ///
    /// Both valid: `f` merges the values. Otherwise the errors of every invalid
    /// side are kept, `self`'s first.
    pub fn combine_with<U, V, F>(self, other: Validated<U, E>, f: F) -> Validated<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Validated::Valid(a), Validated::Valid(b)) => Validated::Valid(f(a, b)),
            (Validated::Invalid(e1), Validated::Invalid(e2)) => {
                Validated::Invalid(e1.concat(e2))
            }
            (Validated::Invalid(e), Validated::Valid(_)) => Validated::Invalid(e),
            (Validated::Valid(_), Validated::Invalid(e)) => Validated::Invalid(e),
        }
    }

    /// Combine two independent validations into a pair.
    pub fn and<U>(self, other: Validated<U, E>) -> Validated<(T, U), E> {
        self.combine_with(other, |a, b| (a, b))
    }

    /// Chain a validation that depends on this one's value.
    ///
    /// This short-circuits: `f` is only called when `self` is valid, so its errors
    /// can never be accumulated alongside `self`'s.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validated<U, E>
    where
        F: FnOnce(T) -> Validated<U, E>,
    {
        match self {
            Validated::Valid(value) => f(value),
            Validated::Invalid(errors) => Validated::Invalid(errors),
        }
    }

    /// Combine any number of validations, keeping every error in order.
    ///
    /// ```
    /// use quiver::{nel, Validated};
    ///
    /// let checks = vec![
    ///     Validated::<i32, &str>::invalid("first"),
    ///     Validated::valid(2),
    ///     Validated::invalid("second"),
    /// ];
    /// assert_eq!(
    ///     Validated::all_vec(checks),
    ///     Validated::Invalid(nel!["first", "second"])
    /// );
    /// ```
    pub fn all_vec(validations: Vec<Validated<T, E>>) -> Validated<Vec<T>, E> {
        let initial = Validated::Valid(Vec::with_capacity(validations.len()));
        validations.into_iter().fold(initial, |acc, next| {
            acc.combine_with(next, |mut values, value| {
                values.push(value);
                values
            })
        })
    }
}

impl<T: Semigroup, E> Semigroup for Validated<T, E> {
    fn combine(self, other: Self) -> Self {
        self.combine_with(other, T::combine)
    }
}

impl<T, E> From<Result<T, E>> for Validated<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validated::from_result(result)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Validated<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validated::Valid(value) => write!(f, "Valid({})", value),
            Validated::Invalid(errors) => write!(f, "Invalid({})", errors),
        }
    }
}

/// Combine a tuple of validations. Delegates to [`ValidateAll`].
///
/// ```
/// use quiver::{nel, validated, Validated};
///
/// let checks = (Validated::<i32, &str>::invalid("a"), Validated::<bool, &str>::invalid("b"));
/// assert_eq!(validated::all(checks), Validated::Invalid(nel!["a", "b"]));
/// ```
pub fn all<V, E>(validations: V) -> Validated<V::Output, E>
where
    V: ValidateAll<E>,
{
    validations.validate_all()
}

/// Combine a tuple of validations, accumulating every error.
pub trait ValidateAll<E> {
    /// The tuple of valid values.
    type Output;

    /// Combine all validations in order.
    fn validate_all(self) -> Validated<Self::Output, E>;
}

macro_rules! impl_validate_all {
    ($A:ident) => {
        impl<E, $A> ValidateAll<E> for (Validated<$A, E>,) {
            type Output = ($A,);

            fn validate_all(self) -> Validated<Self::Output, E> {
                self.0.map(|a| (a,))
            }
        }
    };
    ($A:ident, $B:ident) => {
        impl<E, $A, $B> ValidateAll<E> for (Validated<$A, E>, Validated<$B, E>) {
            type Output = ($A, $B);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validated<Self::Output, E> {
                let ($A, $B) = self;
                $A.and($B)
            }
        }
    };
    ($A:ident, $B:ident, $C:ident) => {
        impl<E, $A, $B, $C> ValidateAll<E>
            for (Validated<$A, E>, Validated<$B, E>, Validated<$C, E>)
        {
            type Output = ($A, $B, $C);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validated<Self::Output, E> {
                let ($A, $B, $C) = self;
                $A.and($B).combine_with($C, |(a, b), c| (a, b, c))
            }
        }
    };
    ($A:ident, $B:ident, $C:ident, $D:ident) => {
        impl<E, $A, $B, $C, $D> ValidateAll<E>
            for (
                Validated<$A, E>,
                Validated<$B, E>,
                Validated<$C, E>,
                Validated<$D, E>,
            )
        {
            type Output = ($A, $B, $C, $D);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validated<Self::Output, E> {
                let ($A, $B, $C, $D) = self;
                $A.and($B)
                    .combine_with($C, |(a, b), c| (a, b, c))
                    .combine_with($D, |(a, b, c), d| (a, b, c, d))
            }
        }
    };
    ($A:ident, $B:ident, $C:ident, $D:ident, $E:ident) => {
        impl<E, $A, $B, $C, $D, $E> ValidateAll<E>
            for (
                Validated<$A, E>,
                Validated<$B, E>,
                Validated<$C, E>,
                Validated<$D, E>,
                Validated<$E, E>,
            )
        {
            type Output = ($A, $B, $C, $D, $E);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validated<Self::Output, E> {
                let ($A, $B, $C, $D, $E) = self;
                $A.and($B)
                    .combine_with($C, |(a, b), c| (a, b, c))
                    .combine_with($D, |(a, b, c), d| (a, b, c, d))
                    .combine_with($E, |(a, b, c, d), e| (a, b, c, d, e))
            }
        }
    };
    ($A:ident, $B:ident, $C:ident, $D:ident, $E:ident, $F:ident) => {
        impl<E, $A, $B, $C, $D, $E, $F> ValidateAll<E>
            for (
                Validated<$A, E>,
                Validated<$B, E>,
                Validated<$C, E>,
                Validated<$D, E>,
                Validated<$E, E>,
                Validated<$F, E>,
            )
        {
            type Output = ($A, $B, $C, $D, $E, $F);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validated<Self::Output, E> {
                let ($A, $B, $C, $D, $E, $F) = self;
                $A.and($B)
                    .combine_with($C, |(a, b), c| (a, b, c))
                    .combine_with($D, |(a, b, c), d| (a, b, c, d))
                    .combine_with($E, |(a, b, c, d), e| (a, b, c, d, e))
                    .combine_with($F, |(a, b, c, d, e), f| (a, b, c, d, e, f))
            }
        }
    };
}

impl_validate_all!(T1);
impl_validate_all!(T1, T2);
impl_validate_all!(T1, T2, T3);
impl_validate_all!(T1, T2, T3, T4);
impl_validate_all!(T1, T2, T3, T4, T5);
impl_validate_all!(T1, T2, T3, T4, T5, T6);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nel;

    fn positive(n: i32) -> Validated<i32, String> {
        if n > 0 {
            Validated::valid(n)
        } else {
            Validated::invalid(format!("{n} is not positive"))
        }
    }

    #[test]
    fn test_constructors() {
        assert!(Validated::<_, &str>::valid(1).is_valid());
        let v = Validated::<i32, _>::invalid("e");
        assert!(v.is_invalid());
        assert_eq!(v.errors(), Optional::Present(&nel!["e"]));
    }

    #[test]
    fn test_valid_valid_applies_combiner() {
        let v = positive(2).combine_with(positive(3), |a, b| a * b);
        assert_eq!(v, Validated::Valid(6));
    }

    #[test]
    fn test_one_side_invalid_keeps_that_side() {
        let left = positive(-1).combine_with(positive(3), |a, b| a + b);
        assert_eq!(left, Validated::invalid("-1 is not positive".to_string()));

        let right = positive(1).combine_with(positive(-3), |a, b| a + b);
        assert_eq!(right, Validated::invalid("-3 is not positive".to_string()));
    }

    #[test]
    fn test_both_invalid_concatenates_in_order() {
        let v = positive(-1).and(positive(-2));
        assert_eq!(
            v,
            Validated::Invalid(nel![
                "-1 is not positive".to_string(),
                "-2 is not positive".to_string()
            ])
        );
    }

    #[test]
    fn test_independent_checks_all_reported() {
        let result = (positive(0), positive(5), positive(-7)).validate_all();
        let errors = result.errors().map(|e| e.clone().into_vec());
        assert_eq!(
            errors,
            Optional::Present(vec![
                "0 is not positive".to_string(),
                "-7 is not positive".to_string()
            ])
        );
    }

    #[test]
    fn test_validate_all_arities() {
        assert_eq!((positive(1),).validate_all(), Validated::Valid((1,)));
        assert_eq!(
            (positive(1), positive(2), positive(3), positive(4)).validate_all(),
            Validated::Valid((1, 2, 3, 4))
        );
        let six = (
            positive(1),
            positive(-2),
            positive(3),
            positive(-4),
            positive(5),
            positive(-6),
        )
            .validate_all();
        assert_eq!(six.errors().map(|e| e.len()), Optional::Present(3));
        assert_eq!(
            all((positive(1), positive(2))),
            Validated::Valid((1, 2))
        );
    }

    #[test]
    fn test_fold_invokes_one_branch() {
        let mut valid_calls = 0;
        let out = positive(-1).fold(
            |errors| errors.len(),
            |_| {
                valid_calls += 1;
                0
            },
        );
        assert_eq!(out, 1);
        assert_eq!(valid_calls, 0);
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(positive(4).get_or_else(|| 0), 4);
        assert_eq!(positive(-4).get_or_else(|| 0), 0);
    }

    #[test]
    fn test_map_and_map_err() {
        assert_eq!(positive(2).map(|n| n * 10), Validated::Valid(20));
        let lens = positive(-1).and(positive(-22)).map_err(|e| e.len());
        assert_eq!(lens, Validated::Invalid(nel![18, 19]));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let mut called = false;
        let v = positive(-1).and_then(|n| {
            called = true;
            positive(n - 5)
        });
        assert!(v.is_invalid());
        assert!(!called);
        assert_eq!(
            positive(10).and_then(|n| positive(n - 5)),
            Validated::Valid(5)
        );
    }

    #[test]
    fn test_all_vec() {
        assert_eq!(
            Validated::all_vec(vec![positive(1), positive(2)]),
            Validated::Valid(vec![1, 2])
        );
        assert_eq!(
            Validated::<i32, String>::all_vec(vec![]),
            Validated::Valid(vec![])
        );
        let result = Validated::all_vec(vec![positive(-1), positive(2), positive(-3)]);
        assert_eq!(result.errors().map(|e| e.len()), Optional::Present(2));
    }

    #[test]
    fn test_semigroup_combines_valid_values() {
        let a = Validated::<_, &str>::valid(vec![1]);
        let b = Validated::<_, &str>::valid(vec![2]);
        assert_eq!(a.combine(b), Validated::Valid(vec![1, 2]));
    }

    #[test]
    fn test_result_conversions() {
        let v: Validated<i32, &str> = Err("bad").into();
        assert_eq!(v.clone().into_result(), Err(nel!["bad"]));
        assert_eq!(v.into_either(), Either::Left(nel!["bad"]));
        assert_eq!(Validated::<_, &str>::from_result(Ok(1)), Validated::Valid(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(positive(3).to_string(), "Valid(3)");
        assert_eq!(
            positive(-1).and(positive(-2)).map(|(a, _)| a).to_string(),
            "Invalid(NonEmptyList(-1 is not positive, -2 is not positive))"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn invalid_strategy() -> impl Strategy<Value = Validated<Vec<i32>, i32>> {
        (any::<i32>(), prop::collection::vec(any::<i32>(), 0..4))
            .prop_map(|(head, tail)| Validated::invalid_all(NonEmptyList::of(head, tail)))
    }

    proptest! {
        #[test]
        fn prop_invalid_combination_associative(
            a in invalid_strategy(),
            b in invalid_strategy(),
            c in invalid_strategy(),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_error_order_is_left_to_right(x: i32, y: i32, z: i32) {
            let combined = Validated::<(), _>::invalid(x)
                .and(Validated::<(), _>::invalid(y))
                .and(Validated::<(), _>::invalid(z));
            prop_assert_eq!(combined.errors().map(|e| e.clone().into_vec()), Optional::Present(vec![x, y, z]));
        }

        #[test]
        fn prop_valid_combination_applies_function(a: i32, b: i32) {
            let v = Validated::<_, String>::valid(a).combine_with(Validated::valid(b), i32::wrapping_add);
            prop_assert_eq!(v, Validated::Valid(a.wrapping_add(b)));
        }
    }
}
