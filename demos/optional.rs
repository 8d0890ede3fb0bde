//! Optional Example
//!
//! Demonstrates `Optional<T>`, a value that may be absent:
//! - Creating present and empty values
//! - Lazy defaults with `get_or_else`
//! - Converting from `Option`
//! - Matching on variants
//! - Mapping over the contained value

use quiver::Optional;

fn maybe_even_number(number: i32) -> Optional<String> {
    if number % 2 == 0 {
        Optional::present("Even".to_string())
    } else {
        Optional::empty()
    }
}

// ==================== Creation ====================

fn example_creation() {
    println!("# Present holds a value, Empty holds nothing");
    let some_value: Optional<&str> = Optional::present("I'm some value");
    let empty_value: Optional<&str> = Optional::empty();
    println!("some value : {some_value}\nempty value : {empty_value}");
}

// ==================== Defaults ====================

fn example_default_value() {
    println!("# get_or_else provides a default, evaluated only when empty");
    let result1 = maybe_even_number(2).get_or_else(|| "Nopes".to_string());
    let result2 = maybe_even_number(5).get_or_else(|| "Nopes".to_string());
    println!("result1 : {result1}\nresult2 : {result2}");
}

// ==================== Nullable sources ====================

fn example_from_nullable() {
    println!("# converting from Option");
    let my_string: Option<&str> = Some("Nullable string");
    let from_nullable = Optional::from_nullable(my_string);
    let from_none: Optional<&str> = Optional::from_nullable(None);
    println!("Some -> optional : {from_nullable}\nNone -> optional : {from_none}");
}

// ==================== Matching ====================

fn example_matching() {
    println!("# matching on the variants");
    for number in [20, 13] {
        let value = match maybe_even_number(number) {
            Optional::Present(text) => text,
            Optional::Empty => "Nopesss".to_string(),
        };
        println!("{number} matched: {value}");
    }
}

// ==================== Operations ====================

fn example_operations() {
    println!("# operations on Optional");
    let number: Optional<i32> = Optional::present(3);
    let no_number: Optional<i32> = Optional::empty();

    // Mapping transforms a present value and leaves Empty alone
    let mapped1 = number.map(|n| f64::from(n) * 1.5);
    let mapped2 = no_number.map(|n| f64::from(n) * 1.5);
    println!("map result on Optional: {mapped1} : {mapped2}");

    let filtered = number.filter(|n| *n > 10);
    println!("filter > 10: {filtered}");

    let described = number.fold(|| "nothing".to_string(), |n| format!("the number {n}"));
    println!("fold: {described}");
}

fn main() {
    println!("# --- Optional examples ---");
    example_creation();
    example_default_value();
    example_from_nullable();
    example_matching();
    example_operations();
}
