//! # Quiver
//!
//! Explicit tagged unions for the everyday shapes of data: a value that may be
//! absent, a computation that may fail, a batch of checks that may fail several
//! times, and a list that is never empty.
//!
//! ## The types
//!
//! - [`Optional`]: zero or one value
//! - [`Either`]: right-biased success (`Right`) or failure (`Left`); chaining stops
//!   at the first failure
//! - [`Validated`]: a value or a [`NonEmptyList`] of errors; combining independent
//!   checks gathers every error
//! - [`NonEmptyList`]: an ordered list with at least one element, enforced at
//!   construction
//!
//! Recovery is always explicit (`get_or_else`, `get_or_handle`, `fold`) and raw
//! failures are converted into [`Fault`]s at the boundary (see [`convert`]).
//!
//! ## Quick Example
//!
//! ```rust
//! use quiver::{convert, validated, Either, Validated};
//!
//! fn validate_email(email: &str) -> Validated<String, String> {
//!     if email.contains('@') {
//!         Validated::valid(email.to_string())
//!     } else {
//!         Validated::invalid("email must contain @".to_string())
//!     }
//! }
//!
//! fn validate_age(age: &str) -> Validated<u8, String> {
//!     convert::parse::<u8>(age)
//!         .map_left(|fault| fault.into_message())
//!         .into_validated()
//! }
//!
//! // Both checks run; both errors are reported.
//! let result = validated::all((validate_email("nobody"), validate_age("old")));
//! let errors = result.fold(|errors| errors.into_vec(), |_| Vec::new());
//! assert_eq!(errors, vec!["email must contain @", "'old' is not a number"]);
//!
//! // Short-circuit chaining with Either.
//! let doubled = convert::parse::<i32>("21").flat_map(|n| Either::success(n * 2));
//! assert_eq!(doubled.get_or_else(|| 0), 42);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every data type
//! - `json`: [`record::Document`], a record encoded with `serde_json`
//! - `tracing`: debug events when raw failures are converted
//! - `proptest`: `Arbitrary` implementations (see [`testing`])

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod convert;
pub mod either;
pub mod fault;
pub mod nonempty;
pub mod optional;
pub mod record;
pub mod semigroup;
pub mod testing;
pub mod validated;

// Re-exports
pub use either::Either;
pub use fault::Fault;
pub use nonempty::NonEmptyList;
pub use optional::Optional;
pub use semigroup::Semigroup;
pub use validated::{ValidateAll, Validated};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::fault::Fault;
    pub use crate::nel;
    pub use crate::nonempty::NonEmptyList;
    pub use crate::optional::Optional;
    pub use crate::semigroup::Semigroup;
    pub use crate::validated::{ValidateAll, Validated};
}
