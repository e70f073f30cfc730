//! Conforming entities with a stored name.

use crate::Named;
use augment::GreetExt;

/// Stores its name and greets by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub name: String,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new("Elena")
    }
}

impl Named for Host {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn greeting(&self) -> String {
        self.name.greeting()
    }
}

/// Conforms with a name only, so greets with [`DEFAULT_GREETING`](crate::DEFAULT_GREETING).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldPerson {
    pub name: String,
}

impl WorldPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for WorldPerson {
    fn default() -> Self {
        Self::new("Groot")
    }
}

impl Named for WorldPerson {
    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Same name as [`WorldPerson`], but with its own greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groot {
    pub name: String,
}

impl Groot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for Groot {
    fn default() -> Self {
        Self::new("Groot")
    }
}

impl Named for Groot {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn greeting(&self) -> String {
        format!("I am {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_GREETING;

    #[test]
    fn test_host_greets_by_name() {
        assert_eq!(Host::default().greeting(), "Hello, Elena");
        assert_eq!(Host::new("Andrew").greeting(), "Hello, Andrew");
    }

    #[test]
    fn test_world_person_uses_default() {
        let groot = WorldPerson::default();
        assert_eq!(groot.name(), "Groot");
        assert_eq!(groot.greeting(), DEFAULT_GREETING);
    }

    #[test]
    fn test_world_person_default_regardless_of_name() {
        for name in ["Groot", "Rocket", ""] {
            assert_eq!(WorldPerson::new(name).greeting(), "Hello, World!");
        }
    }

    #[test]
    fn test_groot_overrides_default() {
        let groot = Groot::default();
        assert_eq!(groot.greeting(), "I am Groot");
        assert_ne!(groot.greeting(), DEFAULT_GREETING);
    }

    #[test]
    fn test_same_name_different_resolution() {
        let world = WorldPerson::new("Groot");
        let groot = Groot::new("Groot");
        assert_eq!(world.name(), groot.name());
        assert_ne!(world.greeting(), groot.greeting());
    }

    #[test]
    fn test_override_wins_behind_dyn() {
        let entities: [&dyn Named; 2] = [&WorldPerson::default(), &Groot::default()];
        let greetings: Vec<String> = entities.iter().map(|e| e.greeting()).collect();
        assert_eq!(greetings, ["Hello, World!", "I am Groot"]);
    }
}
