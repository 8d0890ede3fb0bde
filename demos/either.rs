//! Either Example
//!
//! Demonstrates `Either<L, R>`, a right-biased success-or-failure value:
//! - Chaining with `flat_map`, which stops at the first failure
//! - Explicit recovery with `get_or_else` and `get_or_handle`
//! - Building from a condition
//! - Converting raw parse failures at the boundary

use quiver::{convert, either, Either, Fault};

// ==================== Creation and chaining ====================

fn example_creation() {
    println!("# Either creation sample");
    let some_value: Either<String, String> = Either::success("Sample value".to_string());
    let new_value = some_value
        .clone()
        .flat_map(|it| Either::<String, _>::success(format!("{it}***{it}")));
    println!("initValue : {some_value}\nAfter transformation: {new_value}");
}

fn example_short_circuit() {
    println!("# a failure passes through every flat_map untouched");
    let failed: Either<String, i32> = Either::failure("boom".to_string());
    let chained = failed
        .flat_map(|n| Either::success(n + 1))
        .flat_map(|n| Either::success(n * 2));
    println!("chained failure: {chained}");
    println!("swapped: {}", chained.swap());
}

// ==================== Recovery ====================

fn example_recovery() {
    println!("# recovery is explicit");
    let ok: Either<String, i32> = Either::success(7);
    let bad: Either<String, i32> = Either::failure("no value".to_string());
    println!("get_or_else: {} / {}", ok.clone().get_or_else(|| 0), bad.clone().get_or_else(|| 0));
    println!(
        "get_or_handle: {}",
        bad.get_or_handle(|error| i32::try_from(error.len()).unwrap_or(i32::MAX))
    );
}

// ==================== Conditionals ====================

fn example_conditionally() {
    println!("# conditionally picks a branch and runs only that one");
    for flag in [true, false] {
        let value: Either<&str, i32> = Either::conditionally(flag, || "Error", || 42);
        println!("conditionally({flag}): {value}");
    }
}

// ==================== Boundary conversion ====================

fn example_parsing() {
    println!("# parse failures become Left(Fault)");
    let inputs = ["42", "xyz", "7"];
    let parsed: Vec<Either<Fault, i32>> = inputs.iter().map(|s| convert::parse(s)).collect();
    for (input, result) in inputs.iter().zip(&parsed) {
        let shown = result
            .as_ref()
            .fold(|fault| format!("failed: {}", fault.message()), |n| format!("ok: {n}"));
        println!("{input:>4} -> {shown}");
    }

    let (faults, numbers) = either::partition(parsed);
    println!("numbers: {numbers:?}, faults: {}", faults.len());

    let caught = Either::catching(|| -> i32 { panic!("division by zero") });
    println!("catching: {caught}");
}

fn main() {
    println!("# --- Either examples ---");
    example_creation();
    example_short_circuit();
    example_recovery();
    example_conditionally();
    example_parsing();
}
