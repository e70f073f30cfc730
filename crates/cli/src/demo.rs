//! The demonstrations the playground can run.

use crate::config::Config;
use augment::GreetExt;
use capability::{Groot, Host, Named, WorldPerson};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// One self-contained demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    /// Greeting method added to text values.
    StringGreeting,
    /// Computed temperature views added to numbers.
    Temperature,
    /// A type conforming to the capability with its own greeting.
    Protocol,
    /// Conformance declared apart from the type's definition.
    ExtensionConformance,
    /// Conformance relying on the default greeting.
    DefaultGreeting,
    /// Conformance overriding the default greeting.
    OverrideGreeting,
}

/// Output of a single demonstration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub demo: Demo,
    pub lines: Vec<String>,
}

impl Demo {
    /// All demonstrations, in the order they are run.
    pub const ALL: [Demo; 6] = [
        Demo::StringGreeting,
        Demo::Temperature,
        Demo::Protocol,
        Demo::ExtensionConformance,
        Demo::DefaultGreeting,
        Demo::OverrideGreeting,
    ];

    /// Identifier used on the command line and in JSON output.
    pub fn id(self) -> &'static str {
        match self {
            Demo::StringGreeting => "string-greeting",
            Demo::Temperature => "temperature",
            Demo::Protocol => "protocol",
            Demo::ExtensionConformance => "extension-conformance",
            Demo::DefaultGreeting => "default-greeting",
            Demo::OverrideGreeting => "override-greeting",
        }
    }

    /// One-line summary shown by `list`.
    pub fn description(self) -> &'static str {
        match self {
            Demo::StringGreeting => "greeting method added to strings",
            Demo::Temperature => "celsius, fahrenheit and kelvin views added to f64",
            Demo::Protocol => "type implementing Named with its own greeting",
            Demo::ExtensionConformance => "Named implemented for Person outside its definition",
            Demo::DefaultGreeting => "Named without greeting falls back to the default",
            Demo::OverrideGreeting => "Named with greeting wins over the default",
        }
    }

    /// Run this demonstration against `config`.
    pub fn run(self, config: &Config) -> Transcript {
        let lines = match self {
            Demo::StringGreeting => vec![config.names.greeting.greeting()],
            Demo::Temperature => {
                let value = config.temperature.value;
                config
                    .temperature
                    .scales
                    .iter()
                    .map(|scale| format!("{:?}", scale.convert(value)))
                    .collect()
            }
            Demo::Protocol => vec![Host::new(&config.names.host).greeting()],
            Demo::ExtensionConformance => vec![config.person.greeting()],
            Demo::DefaultGreeting => vec![WorldPerson::new(&config.names.world_person).greeting()],
            Demo::OverrideGreeting => vec![Groot::new(&config.names.groot).greeting()],
        };
        tracing::debug!(demo = self.id(), lines = lines.len(), "ran demo");
        Transcript { demo: self, lines }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Demos to run for a selection, in canonical order without repeats.
///
/// An empty selection means all of them.
pub fn select(requested: &[Demo]) -> Vec<Demo> {
    Demo::ALL
        .into_iter()
        .filter(|demo| requested.is_empty() || requested.contains(demo))
        .collect()
}
