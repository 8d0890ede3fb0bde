//! Property-based tests for the algebraic laws of every type

use proptest::prelude::*;
use quiver::{Either, NonEmptyList, Optional, Semigroup, Validated};

fn errors() -> impl Strategy<Value = NonEmptyList<String>> {
    (any::<String>(), prop::collection::vec(any::<String>(), 0..5))
        .prop_map(|(head, tail)| NonEmptyList::of(head, tail))
}

fn either_of() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::failure),
        any::<i32>().prop_map(Either::success),
    ]
}

proptest! {
    #[test]
    fn prop_optional_map_then_default(v in any::<i32>(), fallback in any::<i64>()) {
        let f = |x: i32| i64::from(x) * 3;
        prop_assert_eq!(Optional::present(v).map(f).get_or_else(|| fallback), f(v));
        prop_assert_eq!(Optional::<i32>::empty().map(f).get_or_else(|| fallback), fallback);
    }

    #[test]
    fn prop_optional_roundtrips_option(v in any::<Option<u16>>()) {
        let back: Option<u16> = Optional::from_nullable(v).into();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn prop_failure_passes_through_flat_map(e in any::<String>()) {
        let result = Either::<String, i32>::failure(e.clone())
            .flat_map(|n| Either::success(n + 1))
            .flat_map(|n| Either::success(n * 2));
        prop_assert_eq!(result, Either::failure(e));
    }

    #[test]
    fn prop_success_left_identity(v in any::<i32>()) {
        let f = |n: i32| Either::<String, i64>::conditionally(n >= 0, || "negative".to_string(), || i64::from(n));
        prop_assert_eq!(Either::<String, i32>::success(v).flat_map(f), f(v));
    }

    #[test]
    fn prop_swap_is_involution(e in either_of()) {
        prop_assert_eq!(e.clone().swap().swap(), e);
    }

    #[test]
    fn prop_conditionally_selects_branch(flag in any::<bool>(), v in any::<i32>()) {
        let result: Either<&str, i32> = Either::conditionally(flag, || "Error", || v);
        if flag {
            prop_assert_eq!(result, Either::Right(v));
        } else {
            prop_assert_eq!(result, Either::Left("Error"));
        }
    }

    #[test]
    fn prop_invalid_combination_is_associative(a in errors(), b in errors(), c in errors()) {
        let va = Validated::<Vec<i32>, String>::Invalid(a.clone());
        let vb = Validated::<Vec<i32>, String>::Invalid(b.clone());
        let vc = Validated::<Vec<i32>, String>::Invalid(c.clone());

        let left = va.clone().combine(vb.clone()).combine(vc.clone());
        let right = va.combine(vb.combine(vc));
        prop_assert_eq!(left.clone(), right);

        let expected: Vec<String> = a.into_iter().chain(b).chain(c).collect();
        prop_assert_eq!(left, Validated::Invalid(NonEmptyList::from_vec(expected).unwrap()));
    }

    #[test]
    fn prop_valid_absorbed_by_invalid(v in any::<i32>(), e in errors()) {
        let valid = Validated::<i32, String>::valid(v);
        let invalid = Validated::<i32, String>::Invalid(e.clone());
        prop_assert_eq!(valid.clone().combine_with(invalid.clone(), |a, b| a + b), Validated::Invalid(e.clone()));
        prop_assert_eq!(invalid.combine_with(valid, |a, b| a + b), Validated::Invalid(e));
    }

    #[test]
    fn prop_nonempty_map_preserves_length(head in any::<i32>(), tail in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = NonEmptyList::of(head, tail);
        let len = list.len();
        let mapped = list.map(|x| x.wrapping_mul(2));
        prop_assert_eq!(mapped.len(), len);
        prop_assert_eq!(*mapped.head(), head.wrapping_mul(2));
    }

    #[test]
    fn prop_nonempty_fold_matches_vec_sum(head in any::<i16>(), tail in prop::collection::vec(any::<i16>(), 0..20)) {
        let list = NonEmptyList::of(i64::from(head), tail.iter().map(|&x| i64::from(x)));
        let expected: i64 = list.iter().sum();
        prop_assert_eq!(list.fold_left(0, |acc, x| acc + x), expected);
    }
}

#[test]
fn test_documented_properties() {
    assert_eq!(quiver::nel![1, 3, 4, 6, 2].head(), &1);
    assert_eq!(quiver::nel![1, 2, 3].fold_left(0, |acc, x| acc + x), 6);
    assert_eq!(quiver::nel![1, 2].map(|x| x * 2), quiver::nel![2, 4]);
    assert_eq!(
        Either::<&str, i32>::conditionally(true, || "Error", || 42),
        Either::success(42)
    );
    assert_eq!(
        Either::<&str, i32>::conditionally(false, || "Error", || 42),
        Either::failure("Error")
    );
}
