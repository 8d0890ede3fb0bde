//! Converting raw failures into [`Either`] at the boundary
//!
//! Parsers and foreign APIs report failure through their own error types (or by
//! panicking). The helpers here catch those failures where they happen and turn them
//! into `Either::Left(Fault)` with a descriptive message, so nothing raw escapes into
//! code that chains with [`Either::flat_map`].
//!
//! # Examples
//!
//! ```
//! use quiver::{convert, Either};
//!
//! assert_eq!(convert::parse::<i32>("42"), Either::Right(42));
//!
//! let failed = convert::parse::<i32>("xyz");
//! let message = failed.fold(|fault| fault.message().to_string(), |n| n.to_string());
//! assert_eq!(message, "'xyz' is not a number");
//! ```

use std::any::{type_name, Any};
use std::fmt::Display;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use crate::{Either, Fault};

/// Parse `input` into `T`.
///
/// Targets whose parser reports a `ParseIntError` or `ParseFloatError` fail with
/// `"'<input>' is not a number"`; any other target fails with
/// `"'<input>' is not a valid <type>"`, naming the type without its module path.
/// The parser's own error is kept as context.
///
/// ```
/// use quiver::convert::parse;
///
/// let fault = parse::<bool>("maybe").into_left().get_or_else(|| unreachable!());
/// assert_eq!(fault.message(), "'maybe' is not a valid bool");
/// assert_eq!(
///     fault.context_trail(),
///     &["parsing bool: provided string was not `true` or `false`"]
/// );
/// ```
pub fn parse<T>(input: &str) -> Either<Fault, T>
where
    T: FromStr,
    T::Err: Display + 'static,
{
    match input.parse::<T>() {
        Ok(value) => Either::Right(value),
        Err(err) => {
            let target = short_type_name(type_name::<T>());
            let message = if is_numeric_error(&err) {
                format!("'{input}' is not a number")
            } else {
                format!("'{input}' is not a valid {target}")
            };
            Either::Left(
                Fault::new(message)
                    .context(format!("parsing {target}: {err}"))
                    .trace("parse"),
            )
        }
    }
}

fn is_numeric_error(err: &dyn Any) -> bool {
    err.is::<ParseIntError>() || err.is::<ParseFloatError>()
}

/// Strip module paths, e.g. `core::num::nonzero::NonZero<u8>` becomes `NonZero<u8>`.
fn short_type_name(full: &str) -> String {
    fn last_segment(path: &str) -> &str {
        path.rsplit("::").next().unwrap_or(path)
    }

    let mut short = String::with_capacity(full.len());
    let mut path = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            short.push_str(last_segment(&path));
            path.clear();
            short.push(c);
        }
    }
    short.push_str(last_segment(&path));
    short
}

/// Run a fallible operation, turning its error into a [`Fault`].
///
/// ```
/// use quiver::convert::attempt;
///
/// let read = attempt(|| std::fs::read_to_string("/definitely/not/here"));
/// assert!(read.is_left());
///
/// let ok = attempt(|| "7".parse::<u8>());
/// assert_eq!(ok.get_or_else(|| 0), 7);
/// ```
pub fn attempt<T, E, F>(f: F) -> Either<Fault, T>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(value) => Either::Right(value),
        Err(err) => Either::Left(Fault::new(err.to_string()).trace("attempt")),
    }
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_parse_failure_is_traced() {
        let _ = parse::<i32>("xyz");
        assert!(logs_contain("converted raw failure into Fault"));
        assert!(logs_contain("'xyz' is not a number"));
    }

    #[traced_test]
    #[test]
    fn test_parse_success_is_silent() {
        let _ = parse::<i32>("42");
        assert!(!logs_contain("converted raw failure into Fault"));
    }
}
