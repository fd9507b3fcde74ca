//! # duality
//!
//! Two small algebraic containers and the laws that tie them together.
//!
//! ## Overview
//!
//! - [`Optional<T>`](optional::Optional): a value that is present or absent.
//! - [`Outcome<T>`](outcome::Outcome): a success value or a failure message.
//!
//! Both are immutable once built. Transformations (`map`, `bind`,
//! `on_success`) return new instances and never invoke the supplied function
//! when there is no value to give it. Elimination is total: `fold` runs
//! exactly one of its two branches, and the `unwrap_or*` methods always
//! produce a value.
//!
//! The two types are independent. Conversions between them are left to the
//! caller, who decides what an absent value means as a failure (and which
//! message to attach).
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor`, `Applicative` and `Monad` implementations for
//!   both containers (enabled by default)
//! - `full`: Enable all features
//!
//! ## Thread Safety
//!
//! Neither container has interior mutability. `Optional<T>` and `Outcome<T>`
//! are `Send`/`Sync` exactly when `T` is.
//!
//! ## Example
//!
//! ```rust
//! use duality::prelude::*;
//!
//! let label = Optional::some(42).map(|x| x.to_string()).unwrap_or_else(String::new);
//! assert_eq!(label, "42");
//!
//! let failed: Outcome<i32> = Outcome::err("bad");
//! assert_eq!(failed.on_success(|x| x.to_string()).error(), Optional::some("bad"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use duality::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::Optional;
    pub use crate::outcome::Outcome;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod optional;
pub mod outcome;

#[cfg(feature = "typeclass")]
pub mod typeclass;

// =============================================================================
// Thread-safety bounds
// =============================================================================

static_assertions::assert_impl_all!(optional::Optional<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(outcome::Outcome<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(optional::Optional<u64>: Copy);
static_assertions::assert_not_impl_any!(optional::Optional<std::rc::Rc<u8>>: Send, Sync);
static_assertions::assert_not_impl_any!(outcome::Outcome<std::cell::Cell<u8>>: Sync);
