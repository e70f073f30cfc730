//! Greeting method for text values.

/// Text placed before the name in every greeting.
pub const GREETING_PREFIX: &str = "Hello, ";

/// Adds a `greeting` method to string slices.
///
/// Implemented for `str`, so it is callable on `&str`, `String` and
/// anything else that derefs to `str`.
pub trait GreetExt {
    /// Greet this value as a name.
    fn greeting(&self) -> String;
}

impl GreetExt for str {
    fn greeting(&self) -> String {
        let mut out = String::with_capacity(GREETING_PREFIX.len() + self.len());
        out.push_str(GREETING_PREFIX);
        out.push_str(self);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_prefixes_name() {
        assert_eq!("Andrew".greeting(), "Hello, Andrew");
    }

    #[test]
    fn test_greeting_on_owned_string() {
        let name = String::from("Андрей");
        assert_eq!(name.greeting(), "Hello, Андрей");
    }

    #[test]
    fn test_greeting_is_plain_concatenation() {
        for name in ["", " ", "Tom Cruise", "a, b", "{name}"] {
            assert_eq!(name.greeting(), format!("Hello, {name}"));
        }
    }
}
