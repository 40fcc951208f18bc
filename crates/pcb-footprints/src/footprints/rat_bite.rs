//! Rat-bite breakaway tab: a row of non-plated holes between two guide lines

use super::FootprintGenerator;
use crate::params::{ParamDefault, ParamSpec, ResolvedParams};
use crate::sexpr::{format_number, quoted};
use crate::Placement;
use std::fmt::Write;

const LIBRARY_ID: &str = "keyboard:rat_bite";

const HOLE_COUNT: usize = 9;
const HOLE_PITCH: f64 = 0.59375;
const HOLE_DIAMETER: f64 = 0.3;

const GUIDE_HALF_LENGTH: f64 = 3.0;
const GUIDE_OFFSET: f64 = 0.5;

static PARAMS: &[ParamSpec] = &[ParamSpec::new("designator", ParamDefault::Text("RB"))];

#[derive(Debug, Clone, Copy, Default)]
pub struct RatBite;

impl RatBite {
    /// Emit the footprint block for a placement
    pub fn emit(placement: &Placement) -> String {
        let mut out = String::new();

        writeln!(out, "(module {} (layer F.Cu)", LIBRARY_ID).unwrap();
        writeln!(out, "  {}", placement.at).unwrap();
        emit_reference(&mut out, placement);
        writeln!(out, "  (attr virtual)").unwrap();

        for y in [-GUIDE_OFFSET, GUIDE_OFFSET] {
            writeln!(
                out,
                "  (fp_line (start {} {y}) (end {} {y}) (layer Dwgs.User) (width 0.12))",
                format_number(-GUIDE_HALF_LENGTH),
                format_number(GUIDE_HALF_LENGTH),
                y = format_number(y),
            )
            .unwrap();
        }

        let diameter = format_number(HOLE_DIAMETER);
        for x in hole_positions() {
            writeln!(
                out,
                "  (pad \"\" np_thru_hole circle (at {} 0 90) (size {d} {d}) (drill {d}) (layers *.Cu *.Mask))",
                format_number(x),
                d = diameter,
            )
            .unwrap();
        }

        writeln!(out, ")").unwrap();
        out
    }
}

impl FootprintGenerator for RatBite {
    fn name(&self) -> &'static str {
        "rat_bite"
    }

    fn params(&self) -> &'static [ParamSpec] {
        PARAMS
    }

    fn body(&self, placement: &Placement, _params: &ResolvedParams) -> String {
        RatBite::emit(placement)
    }
}

fn emit_reference(out: &mut String, placement: &Placement) {
    let hide = if placement.ref_hide { " hide" } else { "" };
    writeln!(
        out,
        "  (fp_text reference {} (at 0 0) (layer F.SilkS){} (effects (font (size 1.27 1.27) (thickness 0.15))))",
        quoted(&placement.reference),
        hide
    )
    .unwrap();
}

/// Hole centres along x, symmetric about the origin
fn hole_positions() -> impl Iterator<Item = f64> {
    let middle = (HOLE_COUNT / 2) as f64;
    (0..HOLE_COUNT).map(move |i| (i as f64 - middle) * HOLE_PITCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::resolve;
    use serde_json::Map;

    #[test]
    fn test_hole_positions() {
        let xs: Vec<_> = hole_positions().map(format_number).collect();
        assert_eq!(
            xs,
            [
                "-2.375", "-1.78125", "-1.1875", "-0.59375", "0", "0.59375", "1.1875", "1.78125",
                "2.375"
            ]
        );
    }

    #[test]
    fn test_header_and_attrs() {
        let out = RatBite::emit(&Placement::new("(at 5 5 0)", "RB1"));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "(module keyboard:rat_bite (layer F.Cu)");
        assert_eq!(lines[1], "  (at 5 5 0)");
        assert_eq!(
            lines[2],
            "  (fp_text reference \"RB1\" (at 0 0) (layer F.SilkS) (effects (font (size 1.27 1.27) (thickness 0.15))))"
        );
        assert_eq!(lines[3], "  (attr virtual)");
        assert_eq!(
            lines[4],
            "  (fp_line (start -3 -0.5) (end 3 -0.5) (layer Dwgs.User) (width 0.12))"
        );
        assert_eq!(
            lines[5],
            "  (fp_line (start -3 0.5) (end 3 0.5) (layer Dwgs.User) (width 0.12))"
        );
        assert_eq!(lines.last(), Some(&")"));
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn test_hide_marker() {
        let out = RatBite::emit(&Placement::new("(at 0 0 0)", "RB2").hidden());
        assert!(out.contains("(layer F.SilkS) hide (effects"));
    }

    #[test]
    fn test_malformed_placement_passes_through() {
        let out = RatBite::emit(&Placement::new("", ""));
        assert!(out.contains("\n  \n"));
        assert!(out.contains("(fp_text reference \"\" (at 0 0)"));
        assert_eq!(out.matches("np_thru_hole").count(), HOLE_COUNT);
    }

    #[test]
    fn test_params_designator() {
        let params = resolve(RatBite.params(), &Map::new()).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.text("designator"), Some("RB"));
        assert_eq!(RatBite.name(), "rat_bite");
    }
}
