//! Enumerations with display labels and grouped choices
//!
//! Declare an enum whose members carry a machine value and a human-readable
//! label, with optional one-level grouping, then query the ordered
//! `(value, display)` presentation sequence:
//!
//! ```
//! use choices::{choices, Choice};
//!
//! choices! {
//!     pub enum Fruit: i32 {
//!         Apple = 1,
//!         Banana = (2, "Golden Banana"),
//!         group Citrus {
//!             Lemon = 3,
//!             Lime = 4,
//!         },
//!         Kiwi = 6,
//!     }
//! }
//!
//! assert_eq!(Fruit::Apple.display(), "Apple");
//! assert_eq!(Fruit::Banana.display(), "Golden Banana");
//!
//! let entries: Vec<Choice<i32>> = Fruit::choices().collect();
//! assert_eq!(entries[2], Choice::Group(
//!     "Citrus".to_string(),
//!     vec![(3, "Lemon".to_string()), (4, "Lime".to_string())],
//! ));
//! ```
//!
//! The [`choices!`] macro is sugar over the two-phase builder API
//! ([`ChoicesBuilder`] / [`GroupBuilder`]), which records bindings in
//! declaration order and validates them into an immutable [`ChoiceSet`].
//! All validation errors ([`ChoicesError`]) surface at construction;
//! queries on a built set never fail.

pub mod builder;
pub mod display;
pub mod error;
mod macros;
pub mod types;

pub use builder::{ChoicesBuilder, GroupBuilder};
pub use error::ChoicesError;
pub use types::{Choice, ChoiceSet, Choices, Group, Member};

// Runtime support for macro expansions; not public API.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
