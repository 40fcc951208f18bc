//! Footprint generators

mod rat_bite;
mod text;

pub use rat_bite::RatBite;
pub use text::{Text, TextParams};

use crate::params::{resolve, ParamError, ParamSpec, ResolvedParams};
use crate::Placement;
use serde_json::{Map, Value};

/// A stateless generator of one kind of footprint fragment
pub trait FootprintGenerator: Send + Sync {
    /// Name the generator is registered under
    fn name(&self) -> &'static str;

    /// Parameter schema with default values
    fn params(&self) -> &'static [ParamSpec];

    /// Emit the fragment for already-resolved parameters
    fn body(&self, placement: &Placement, params: &ResolvedParams) -> String;

    /// Resolve `overrides` against the schema and emit the fragment
    fn render(
        &self,
        placement: &Placement,
        overrides: &Map<String, Value>,
    ) -> Result<String, ParamError> {
        let params = resolve(self.params(), overrides)?;
        Ok(emit_resolved(self, placement, &params))
    }
}

/// Emit a fragment from parameters that were resolved by the caller
pub(crate) fn emit_resolved<G>(generator: &G, placement: &Placement, params: &ResolvedParams) -> String
where
    G: FootprintGenerator + ?Sized,
{
    log::debug!(
        "Rendering {} {} {}",
        generator.name(),
        placement.reference,
        placement.at
    );
    generator.body(placement, params)
}
