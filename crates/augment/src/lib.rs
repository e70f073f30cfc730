//! Extension traits that attach new behavior to existing types.
//!
//! Neither `str` nor `f64` is touched: the methods live on traits defined
//! here, and become available wherever the trait is in scope.
//!
//! # Example
//!
//! ```
//! use augment::{GreetExt, TemperatureExt};
//!
//! assert_eq!("Andrew".greeting(), "Hello, Andrew");
//! assert_eq!(18.0_f64.celsius(), 18.0);
//! assert_eq!(18.0_f64.kelvin(), 291.15);
//! ```

mod error;
mod greet;
mod temperature;

pub use error::{Error, Result};
pub use greet::{GREETING_PREFIX, GreetExt};
pub use temperature::{Scale, TemperatureExt};
