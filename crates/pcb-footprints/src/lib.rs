//! KiCad footprint generators for keyboard PCBs
//!
//! Each generator turns a parameter set plus caller-supplied placement tokens
//! into a fragment of KiCad s-expression text. Fragments are meant to be
//! concatenated into a larger footprint or board file by the caller.

pub mod config;
pub mod footprints;
pub mod params;
pub mod registry;
pub mod sexpr;

pub use config::{FootprintConfig, FootprintSet};
pub use footprints::{FootprintGenerator, RatBite, Text, TextParams};
pub use params::{
    resolve, ParamDefault, ParamError, ParamKind, ParamSpec, ParamValue, ParseSideError,
    ResolvedParams, Side,
};
pub use registry::{available, generate, lookup};

/// Placement tokens supplied by the caller for a single footprint instance
///
/// None of these are validated: a malformed `at` token ends up verbatim in
/// the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Position/rotation token, e.g. `(at 10 20 90)`
    pub at: String,
    /// Reference label, e.g. `RB1`
    pub reference: String,
    /// Hide the reference label on the silkscreen
    pub ref_hide: bool,
}

impl Placement {
    pub fn new(at: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            at: at.into(),
            reference: reference.into(),
            ref_hide: false,
        }
    }

    /// Build a placement from board coordinates, producing `(at x y r)`
    pub fn at_point(x: f64, y: f64, rotation: f64, reference: impl Into<String>) -> Self {
        Self::new(sexpr::at_token(x, y, rotation), reference)
    }

    pub fn hidden(mut self) -> Self {
        self.ref_hide = true;
        self
    }
}
