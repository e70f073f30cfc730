//! `Named` conformance for types defined elsewhere.

use crate::{Named, Person};
use augment::GreetExt;

impl Named for Person {
    fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn greeting(&self) -> String {
        self.name().greeting()
    }
}
