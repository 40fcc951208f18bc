//! Silkscreen text, optionally mirrored onto the opposite side

use super::FootprintGenerator;
use crate::params::{ParamDefault, ParamSpec, ResolvedParams, Side};
use crate::sexpr::{format_number, quoted};
use crate::Placement;
use std::fmt::Write;

static PARAMS: &[ParamSpec] = &[
    ParamSpec::new("designator", ParamDefault::Text("TXT")),
    ParamSpec::new("side", ParamDefault::Side(Side::F)),
    ParamSpec::new("reversible", ParamDefault::Boolean(false)),
    ParamSpec::new("thickness", ParamDefault::Number(0.15)),
    ParamSpec::new("size", ParamDefault::Number(1.0)),
    ParamSpec::new("text", ParamDefault::Text("")),
];

/// Resolved options of the text footprint
#[derive(Debug, Clone, PartialEq)]
pub struct TextParams {
    pub designator: String,
    /// Side the primary copy is placed on
    pub side: Side,
    /// Also emit a mirrored copy on the opposite side
    pub reversible: bool,
    pub thickness: f64,
    /// Font height and width
    pub size: f64,
    pub text: String,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            designator: "TXT".to_string(),
            side: Side::F,
            reversible: false,
            thickness: 0.15,
            size: 1.0,
            text: String::new(),
        }
    }
}

impl TextParams {
    pub fn from_resolved(params: &ResolvedParams) -> Self {
        let defaults = Self::default();
        Self {
            designator: params
                .text("designator")
                .map(str::to_string)
                .unwrap_or(defaults.designator),
            side: params.side("side").unwrap_or(defaults.side),
            reversible: params.boolean("reversible").unwrap_or(defaults.reversible),
            thickness: params.number("thickness").unwrap_or(defaults.thickness),
            size: params.number("size").unwrap_or(defaults.size),
            text: params
                .text("text")
                .map(str::to_string)
                .unwrap_or(defaults.text),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Text {
    /// Emit the primary text element, followed by its mirrored copy when reversible
    pub fn emit(placement: &Placement, params: &TextParams) -> String {
        let mut out = String::new();

        emit_text(&mut out, placement, params, params.side, false);
        if params.reversible {
            emit_text(&mut out, placement, params, params.side.flip(), true);
        }

        out
    }
}

impl FootprintGenerator for Text {
    fn name(&self) -> &'static str {
        "text"
    }

    fn params(&self) -> &'static [ParamSpec] {
        PARAMS
    }

    fn body(&self, placement: &Placement, params: &ResolvedParams) -> String {
        Text::emit(placement, &TextParams::from_resolved(params))
    }
}

fn emit_text(out: &mut String, placement: &Placement, params: &TextParams, side: Side, mirror: bool) {
    // Only a copy moved off the configured side reads backwards
    let justify = if mirror && side != params.side {
        " (justify mirror)"
    } else {
        ""
    };
    let size = format_number(params.size);

    writeln!(
        out,
        "(gr_text {} {} (layer {})",
        quoted(&params.text),
        placement.at,
        side.silk_layer()
    )
    .unwrap();
    writeln!(
        out,
        "  (effects (font (size {size} {size}) (thickness {})){})",
        format_number(params.thickness),
        justify,
        size = size,
    )
    .unwrap();
    writeln!(out, ")").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::resolve;
    use serde_json::{json, Map};

    fn placement() -> Placement {
        Placement::new("(at 1 2 0)", "TXT1")
    }

    #[test]
    fn test_single_front_element() {
        let params = TextParams {
            text: "Hi".to_string(),
            ..TextParams::default()
        };
        assert_eq!(
            Text::emit(&placement(), &params),
            "(gr_text \"Hi\" (at 1 2 0) (layer F.SilkS)\n  (effects (font (size 1 1) (thickness 0.15)))\n)\n"
        );
    }

    #[test]
    fn test_reversible_back_side() {
        let params = TextParams {
            side: Side::B,
            reversible: true,
            text: "rev".to_string(),
            ..TextParams::default()
        };
        let out = Text::emit(&placement(), &params);
        let back = out.find("(layer B.SilkS)").unwrap();
        let front = out.find("(layer F.SilkS)").unwrap();
        assert!(back < front);
        assert_eq!(out.matches("(justify mirror)").count(), 1);
        assert!(out.find("(justify mirror)").unwrap() > front);
    }

    #[test]
    fn test_numbers_verbatim() {
        let params = TextParams {
            thickness: 0.2,
            size: 1.27,
            text: "x".to_string(),
            ..TextParams::default()
        };
        let out = Text::emit(&placement(), &params);
        assert!(out.contains("(effects (font (size 1.27 1.27) (thickness 0.2)))"));
    }

    #[test]
    fn test_from_resolved() {
        let overrides = json!({"side": "B", "reversible": true, "size": 2, "text": "ok"});
        let resolved = resolve(PARAMS, overrides.as_object().unwrap()).unwrap();
        let params = TextParams::from_resolved(&resolved);
        assert_eq!(params.side, Side::B);
        assert!(params.reversible);
        assert_eq!(params.size, 2.0);
        assert_eq!(params.thickness, 0.15);
        assert_eq!(params.text, "ok");
        assert_eq!(params.designator, "TXT");

        let defaults = TextParams::from_resolved(&resolve(PARAMS, &Map::new()).unwrap());
        assert_eq!(defaults, TextParams::default());
    }
}
