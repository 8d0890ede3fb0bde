//! Testing helpers for code built on quiver's types
//!
//! Assertion macros that print the unexpected side on failure, plus (with the
//! `proptest` feature) `Arbitrary` implementations for every data type.
//!
//! ```rust
//! use quiver::{assert_invalid, assert_right, assert_valid, Either, Validated};
//!
//! assert_valid!(Validated::<_, String>::valid(42));
//! assert_invalid!(Validated::<i32, _>::invalid("error"));
//! assert_right!(Either::<String, _>::success(1));
//! ```

/// Assert that a `Validated` is `Valid`, evaluating to the value.
///
/// ```rust
/// use quiver::{assert_valid, Validated};
///
/// let value = assert_valid!(Validated::<_, String>::valid(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Valid(value) => value,
            $crate::Validated::Invalid(errors) => {
                panic!("Expected Valid, got Invalid: {:?}", errors);
            }
        }
    };
}

/// Assert that a `Validated` is `Invalid`, evaluating to the error list.
///
/// ```rust
/// use quiver::{assert_invalid, Validated};
///
/// let errors = assert_invalid!(Validated::<i32, _>::invalid("bad"));
/// assert_eq!(errors.head(), &"bad");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validated:expr) => {
        match $validated {
            $crate::Validated::Invalid(errors) => errors,
            $crate::Validated::Valid(value) => {
                panic!("Expected Invalid, got Valid: {:?}", value);
            }
        }
    };
}

/// Assert that a `Validated` is `Invalid` with exactly these errors, in order.
///
/// ```rust
/// use quiver::{assert_invalid_errors, Validated};
///
/// let v = Validated::<i32, _>::invalid("e1").and(Validated::<i32, _>::invalid("e2"));
/// assert_invalid_errors!(v, vec!["e1", "e2"]);
/// ```
#[macro_export]
macro_rules! assert_invalid_errors {
    ($validated:expr, $expected:expr) => {
        match $validated {
            $crate::Validated::Invalid(errors) => {
                assert_eq!(errors.into_vec(), $expected);
            }
            $crate::Validated::Valid(value) => {
                panic!(
                    "Expected Invalid with errors {:?}, got Valid: {:?}",
                    $expected, value
                );
            }
        }
    };
}

/// Assert that an `Either` is `Right`, evaluating to the success value.
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(value) => value,
            $crate::Either::Left(error) => {
                panic!("Expected Right, got Left: {:?}", error);
            }
        }
    };
}

/// Assert that an `Either` is `Left`, evaluating to the failure value.
///
/// ```rust
/// use quiver::{assert_left, convert};
///
/// let fault = assert_left!(convert::parse::<i32>("xyz"));
/// assert_eq!(fault.message(), "'xyz' is not a number");
/// ```
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(error) => error,
            $crate::Either::Right(value) => {
                panic!("Expected Left, got Right: {:?}", value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;
    use proptest::strategy::LazyJust;

    use crate::{Either, NonEmptyList, Optional, Validated};

    impl<T> Arbitrary for NonEmptyList<T>
    where
        T: Arbitrary + 'static,
        T::Parameters: Clone,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            (
                any_with::<T>(args.clone()),
                prop::collection::vec(any_with::<T>(args), 0..8),
            )
                .prop_map(|(head, tail)| NonEmptyList::of(head, tail))
                .boxed()
        }
    }

    impl<T> Arbitrary for Optional<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                LazyJust::new(|| Optional::Empty),
                any_with::<T>(args).prop_map(Optional::Present),
            ]
            .boxed()
        }
    }

    impl<L, R> Arbitrary for Either<L, R>
    where
        L: Arbitrary + 'static,
        R: Arbitrary + 'static,
    {
        type Parameters = (L::Parameters, R::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (l_params, r_params) = args;
            prop_oneof![
                any_with::<L>(l_params).prop_map(Either::Left),
                any_with::<R>(r_params).prop_map(Either::Right),
            ]
            .boxed()
        }
    }

    impl<T, E> Arbitrary for Validated<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
        E::Parameters: Clone,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Validated::Valid),
                any_with::<NonEmptyList<E>>(e_params).prop_map(Validated::Invalid),
            ]
            .boxed()
        }
    }
}
