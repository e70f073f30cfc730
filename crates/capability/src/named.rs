//! The `Named` capability.

/// Greeting used by conforming types that do not supply their own.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Returns the shared default greeting.
///
/// [`Named::greeting`] falls back to this; implementations that want the
/// default explicitly can call it too.
pub fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

/// A type that has a name and can greet.
///
/// Only [`name`](Named::name) is required. The provided
/// [`greeting`](Named::greeting) ignores the name entirely; implement it to
/// replace that behavior.
pub trait Named {
    /// Display name of this entity.
    fn name(&self) -> String;

    /// Greeting line for this entity.
    fn greeting(&self) -> String {
        default_greeting()
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> String {
        (**self).name()
    }

    fn greeting(&self) -> String {
        (**self).greeting()
    }
}

impl<T: Named + ?Sized> Named for Box<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn greeting(&self) -> String {
        (**self).greeting()
    }
}
