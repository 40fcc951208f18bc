//! Footprint instances declared in JSON or TOML

use crate::footprints::emit_resolved;
use crate::params::resolve;
use crate::registry::lookup;
use crate::Placement;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

const DEFAULT_AT: &str = "(at 0 0 0)";

/// A single footprint instance: which generator, where, and with what options
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FootprintConfig {
    /// Generator name (e.g., "text")
    pub what: String,
    /// Position token; defaults to the origin
    #[serde(default)]
    pub at: Option<String>,
    /// Reference label; defaults to the resolved `designator`
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub ref_hide: bool,
    /// Overrides merged into the generator's defaults
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl FootprintConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse footprint JSON")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse footprint TOML")
    }

    /// Render this instance to a footprint fragment
    pub fn render(&self) -> Result<String> {
        let generator = lookup(&self.what)
            .with_context(|| format!("Unknown footprint '{}'", self.what))?;
        let params = resolve(generator.params(), &self.params)
            .with_context(|| format!("Invalid parameters for footprint '{}'", self.what))?;

        let reference = match &self.reference {
            Some(r) => r.clone(),
            None => params
                .text("designator")
                .unwrap_or(generator.name())
                .to_string(),
        };

        let placement = Placement {
            at: self.at.clone().unwrap_or_else(|| DEFAULT_AT.to_string()),
            reference,
            ref_hide: self.ref_hide,
        };

        Ok(emit_resolved(generator, &placement, &params))
    }
}

/// An ordered list of footprint instances
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FootprintSet {
    #[serde(default)]
    pub footprints: Vec<FootprintConfig>,
}

impl FootprintSet {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse footprint set JSON")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse footprint set TOML")
    }

    /// Render every instance and concatenate the fragments in declaration order
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();

        for (i, fp) in self.footprints.iter().enumerate() {
            let fragment = fp
                .render()
                .with_context(|| format!("Failed to render footprint #{} ({})", i, fp.what))?;
            out.push_str(&fragment);
        }

        Ok(out)
    }
}
