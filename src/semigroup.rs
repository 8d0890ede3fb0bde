//! Associative combination
//!
//! A `Semigroup` is a type with an associative binary operation. `quiver` uses it
//! in two places: [`NonEmptyList`](crate::NonEmptyList) concatenation, which is how
//! [`Validated`](crate::Validated) accumulates errors, and the `Valid ⊕ Valid` case
//! of `Validated`'s own `Semigroup` instance.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use quiver::Semigroup;
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!("ab".to_string().combine("cd".to_string()), "abcd");
//! assert_eq!(
//!     (vec![1], "a".to_string()).combine((vec![2], "b".to_string())),
//!     (vec![1, 2], "ab".to_string())
//! );
//! ```

/// A type that supports an associative binary operation.
///
/// `combine` takes both operands by value. Clone first if you need to keep them.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 A, 1 B);
impl_semigroup_tuple!(0 A, 1 B, 2 C);
impl_semigroup_tuple!(0 A, 1 B, 2 C, 3 D);


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_vec_associative(
            a in prop::collection::vec(any::<i32>(), 0..8),
            b in prop::collection::vec(any::<i32>(), 0..8),
            c in prop::collection::vec(any::<i32>(), 0..8),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_string_associative(a in ".{0,6}", b in ".{0,6}", c in ".{0,6}") {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
