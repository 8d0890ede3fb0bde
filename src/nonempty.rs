//! Ordered lists that always hold at least one element
//!
//! `NonEmptyList<T>` stores its first element separately from the rest, so an empty
//! instance cannot be represented and [`head`](NonEmptyList::head) needs no `Option`.
//! It is the error channel of [`Validated`](crate::Validated).
//!
//! # Examples
//!
//! ```
//! use quiver::{nel, NonEmptyList};
//!
//! let numbers = nel![1, 3, 4, 6, 2];
//! assert_eq!(numbers.head(), &1);
//! assert_eq!(numbers.fold_left(0, |acc, x| acc + x), 16);
//! assert_eq!(nel![1, 2].map(|x| x * 2), nel![2, 4]);
//!
//! let from_args = NonEmptyList::of("a", ["b", "c"]);
//! assert_eq!(from_args.len(), 3);
//! ```
//!
//! `nel![]` does not compile:
//!
//! ```compile_fail
//! let empty: quiver::NonEmptyList<i32> = quiver::nel![];
//! ```

use std::fmt;

use crate::Semigroup;

/// A list guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyList<T> {
    head: T,
    tail: Vec<T>,
}

/// Build a [`NonEmptyList`] from one or more elements.
///
/// At least one element is required; `nel![]` is a compile error.
///
/// ```
/// use quiver::nel;
///
/// let list = nel![1, 2, 3];
/// assert_eq!(list.into_vec(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! nel {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NonEmptyList::of($head, ::std::vec![$($tail),*])
    };
}

impl<T> NonEmptyList<T> {
    /// Create a list from its first element and the remaining ones.
    ///
    /// The first element is taken by value, so the list cannot come out empty.
    ///
    /// ```
    /// use quiver::NonEmptyList;
    ///
    /// let list = NonEmptyList::of(1, vec![2, 3]);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.head(), &1);
    /// ```
    pub fn of<I>(head: T, rest: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            head,
            tail: rest.into_iter().collect(),
        }
    }

    /// A one-element list.
    pub fn singleton(value: T) -> Self {
        Self {
            head: value,
            tail: Vec::new(),
        }
    }

    /// Convert a `Vec`, returning `None` when it is empty.
    ///
    /// ```
    /// use quiver::NonEmptyList;
    ///
    /// assert!(NonEmptyList::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyList::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut items = vec.into_iter();
        let head = items.next()?;
        Some(Self {
            head,
            tail: items.collect(),
        })
    }

    /// The first element. Always present.
    #[inline]
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first (possibly empty).
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element. Always present.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, never zero.
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`. Present to satisfy `clippy::len_without_is_empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element at the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Append every element of `other`, keeping order.
    ///
    /// ```
    /// use quiver::nel;
    ///
    /// assert_eq!(nel![1, 2].concat(nel![3]), nel![1, 2, 3]);
    /// ```
    pub fn concat(mut self, other: NonEmptyList<T>) -> Self {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Accumulate left to right, calling `f(acc, element)` once per element.
    ///
    /// ```
    /// use quiver::nel;
    ///
    /// let sum = nel![1, 2, 3].fold_left(0, |acc, x| acc + x);
    /// assert_eq!(sum, 6);
    ///
    /// let trail = nel!["a", "b"].fold_left(String::new(), |acc, s| acc + *s);
    /// assert_eq!(trail, "ab");
    /// ```
    pub fn fold_left<B, F>(&self, initial: B, f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(initial, f)
    }

    /// Transform every element, keeping length and order.
    pub fn map<U, F>(self, mut f: F) -> NonEmptyList<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyList { head, tail }
    }

    /// Map every element to a list and concatenate the results in order.
    ///
    /// ```
    /// use quiver::nel;
    ///
    /// let pairs = nel![1, 2].flat_map(|x| nel![x, x * 10]);
    /// assert_eq!(pairs, nel![1, 10, 2, 20]);
    /// ```
    pub fn flat_map<U, F>(self, mut f: F) -> NonEmptyList<U>
    where
        F: FnMut(T) -> NonEmptyList<U>,
    {
        let mut result = f(self.head);
        for item in self.tail {
            result = result.concat(f(item));
        }
        result
    }

    /// Reverse the element order.
    pub fn reverse(self) -> Self {
        let NonEmptyList { head, mut tail } = self;
        match tail.pop() {
            None => NonEmptyList { head, tail },
            Some(last) => {
                tail.reverse();
                tail.push(head);
                NonEmptyList { head: last, tail }
            }
        }
    }

    /// Iterate over all elements by reference.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T> Semigroup for NonEmptyList<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> std::ops::Index<usize> for NonEmptyList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index == 0 {
            &self.head
        } else {
            &self.tail[index - 1]
        }
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonEmptyList({}", self.head)?;
        for item in &self.tail {
            write!(f, ", {}", item)?;
        }
        write!(f, ")")
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptyList<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptyList::from_vec(items)
            .ok_or_else(|| serde::de::Error::custom("expected at least one element"))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn list_strategy() -> impl Strategy<Value = NonEmptyList<i32>> {
        (any::<i32>(), prop::collection::vec(any::<i32>(), 0..10))
            .prop_map(|(head, tail)| NonEmptyList::of(head, tail))
    }

    proptest! {
        #[test]
        fn prop_map_preserves_length(list in list_strategy()) {
            let len = list.len();
            prop_assert_eq!(list.map(|x| x.wrapping_mul(2)).len(), len);
        }

        #[test]
        fn prop_fold_left_matches_vec_fold(list in list_strategy()) {
            let expected = list.clone().into_vec().into_iter().fold(0i64, |acc, x| acc + x as i64);
            prop_assert_eq!(list.fold_left(0i64, |acc, x| acc + *x as i64), expected);
        }

        #[test]
        fn prop_flat_map_length_is_sum(list in list_strategy()) {
            let len = list.len();
            let doubled = list.flat_map(|x| nel![x, x]);
            prop_assert_eq!(doubled.len(), len * 2);
        }

        #[test]
        fn prop_concat_associative(a in list_strategy(), b in list_strategy(), c in list_strategy()) {
            let left = a.clone().concat(b.clone()).concat(c.clone());
            let right = a.concat(b.concat(c));
            prop_assert_eq!(left, right);
        }
    }
}
