//! Generator lookup by name

use crate::footprints::{FootprintGenerator, RatBite, Text};
use crate::Placement;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static GENERATORS: LazyLock<BTreeMap<&'static str, &'static dyn FootprintGenerator>> =
    LazyLock::new(|| {
        let all: [&'static dyn FootprintGenerator; 2] = [&RatBite, &Text];
        all.into_iter().map(|g| (g.name(), g)).collect()
    });

/// Find a generator by its registered name (e.g., "rat_bite", "text")
pub fn lookup(name: &str) -> Option<&'static dyn FootprintGenerator> {
    GENERATORS.get(name).copied()
}

/// Names of all registered generators, sorted
pub fn available() -> Vec<&'static str> {
    GENERATORS.keys().copied().collect()
}

/// Render the named footprint for a placement and parameter overrides
pub fn generate(name: &str, placement: &Placement, overrides: &Map<String, Value>) -> Result<String> {
    let generator = lookup(name).with_context(|| {
        format!(
            "Unknown footprint '{}' (available: {})",
            name,
            available().join(", ")
        )
    })?;

    generator
        .render(placement, overrides)
        .with_context(|| format!("Invalid parameters for footprint '{}'", name))
}
