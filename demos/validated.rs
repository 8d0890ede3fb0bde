//! Validated Example
//!
//! Demonstrates error accumulation with `Validated<T, E>`:
//! - Independent checks combined with `and` and `validated::all`
//! - Every error reported in check order
//! - Dependent checks with `and_then`
//! - Lifting boundary conversions into validation

use quiver::{convert, validated, Validated};

#[derive(Debug)]
struct Signup {
    email: String,
    age: u8,
    password: String,
}

fn validate_email(email: &str) -> Validated<String, String> {
    if email.contains('@') {
        Validated::valid(email.to_string())
    } else {
        Validated::invalid(format!("'{email}' is missing an @"))
    }
}

fn validate_age(age: &str) -> Validated<u8, String> {
    convert::parse::<u8>(age)
        .map_left(|fault| fault.into_message())
        .into_validated()
        .and_then(|age| {
            if age >= 18 {
                Validated::valid(age)
            } else {
                Validated::invalid(format!("{age} is under 18"))
            }
        })
}

fn validate_password(password: &str) -> Validated<String, String> {
    if password.len() >= 8 {
        Validated::valid(password.to_string())
    } else {
        Validated::invalid("password must be at least 8 characters".to_string())
    }
}

fn signup(email: &str, age: &str, password: &str) -> Validated<Signup, String> {
    validated::all((
        validate_email(email),
        validate_age(age),
        validate_password(password),
    ))
    .map(|(email, age, password)| Signup {
        email,
        age,
        password,
    })
}

fn report(label: &str, result: Validated<Signup, String>) {
    let text = result.fold(
        |errors| {
            errors
                .iter()
                .map(|e| format!("\n    - {e}"))
                .collect::<String>()
        },
        |s| format!(" {} ({}), {} char password", s.email, s.age, s.password.len()),
    );
    println!("{label}:{text}");
}

fn main() {
    println!("# --- Validated examples ---");

    println!("# all checks pass");
    report("ada", signup("ada@example.com", "36", "analytical"));

    println!("# every failing check is reported");
    report("nobody", signup("nobody", "xyz", "short"));
    report("kid", signup("kid@example.com", "12", "long enough"));

    println!("# combining two checks");
    let pair = validate_email("x").and(validate_password("y"));
    println!("errors: {:?}", pair.errors().map(|e| e.len()).get_or(0));

    println!("# fallback value");
    let age = validate_age("old").get_or_else(|| 18);
    println!("age defaulted to {age}");
}
