//! NonEmptyList Example
//!
//! Demonstrates `NonEmptyList<T>`, a list that can never be empty.

use quiver::{nel, NonEmptyList, Semigroup};

fn main() {
    println!("# --- NonEmptyList examples ---");

    let numbers = nel![1, 3, 4, 6, 2];
    println!("list: {numbers}");
    println!("head (always present): {}", numbers.head());
    println!("last: {}", numbers.last());

    let sum = numbers.fold_left(0, |acc, n| acc + n);
    println!("fold_left sum: {sum}");

    let doubled = numbers.clone().map(|n| n * 2);
    println!("map * 2: {doubled}");

    let repeated = nel![1, 2].flat_map(|n| NonEmptyList::of(n, vec![n * 10]));
    println!("flat_map [n, n * 10]: {repeated}");

    let joined = nel!["a"].combine(nel!["b", "c"]);
    println!("combine: {joined}");

    // A Vec may be empty, so conversion is checked
    let from_empty: Option<NonEmptyList<i32>> = NonEmptyList::from_vec(Vec::new());
    let from_full = NonEmptyList::from_vec(vec![9, 8]);
    println!("from_vec([]): {from_empty:?}");
    println!("from_vec([9, 8]): {from_full:?}");

    println!("reversed: {}", numbers.reverse());
}
