//! Capability interface with a default method body.
//!
//! [`Named`] is the contract: a conforming type must say what its name is,
//! and may say how it greets. Types that stay silent on `greeting` inherit
//! [`default_greeting`]; types that implement it always have theirs used.
//!
//! # Entities
//!
//! - [`Host`] stores its name and greets by it.
//! - [`Person`] is defined without any knowledge of [`Named`]; its
//!   conformance lives in a separate module and computes `name` from the
//!   first and last name.
//! - [`WorldPerson`] conforms with `name` only and falls back to the default.
//! - [`Groot`] conforms and supplies its own greeting.
//!
//! # Example
//!
//! ```
//! use capability::{Groot, Named, WorldPerson, DEFAULT_GREETING};
//!
//! assert_eq!(WorldPerson::default().greeting(), DEFAULT_GREETING);
//! assert_eq!(Groot::default().greeting(), "I am Groot");
//! ```

mod conformance;
mod entities;
mod named;
mod person;

pub use entities::{Groot, Host, WorldPerson};
pub use named::{DEFAULT_GREETING, Named, default_greeting};
pub use person::Person;
