//! Parameter schemas and resolution of caller overrides

use crate::sexpr::format_number;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Board side a graphic element is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    F,
    B,
}

impl Side {
    /// The opposite side of the board
    pub fn flip(self) -> Self {
        match self {
            Side::F => Side::B,
            Side::B => Side::F,
        }
    }

    /// Silkscreen layer name for this side (e.g., "F.SilkS")
    pub fn silk_layer(self) -> &'static str {
        match self {
            Side::F => "F.SilkS",
            Side::B => "B.SilkS",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::F => f.write_str("F"),
            Side::B => f.write_str("B"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid side `{0}` (expected F or B)")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "F" | "f" => Ok(Side::F),
            "B" | "b" => Ok(Side::B),
            other => Err(ParseSideError(other.to_string())),
        }
    }
}

/// Kind of a parameter, derived from the kind of its default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    Number,
    Boolean,
    Side,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamKind::Text => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Side => "side",
        };
        f.write_str(name)
    }
}

/// A resolved parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Side(Side),
}

/// Default value of a schema entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Text(&'static str),
    Number(f64),
    Boolean(bool),
    Side(Side),
}

impl ParamDefault {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamDefault::Text(_) => ParamKind::Text,
            ParamDefault::Number(_) => ParamKind::Number,
            ParamDefault::Boolean(_) => ParamKind::Boolean,
            ParamDefault::Side(_) => ParamKind::Side,
        }
    }

    fn to_value(self) -> ParamValue {
        match self {
            ParamDefault::Text(s) => ParamValue::Text(s.to_string()),
            ParamDefault::Number(n) => ParamValue::Number(n),
            ParamDefault::Boolean(b) => ParamValue::Boolean(b),
            ParamDefault::Side(s) => ParamValue::Side(s),
        }
    }
}

/// One entry of a generator's parameter schema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: ParamDefault,
}

impl ParamSpec {
    pub const fn new(name: &'static str, default: ParamDefault) -> Self {
        Self { name, default }
    }

    pub fn kind(&self) -> ParamKind {
        self.default.kind()
    }
}

/// Errors raised while merging caller overrides into a schema
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("parameter `{name}` expects a {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: ParamKind,
        found: &'static str,
    },

    #[error("parameter `{name}`: {source}")]
    InvalidSide {
        name: String,
        #[source]
        source: ParseSideError,
    },
}

/// Parameters after defaults and overrides have been merged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedParams {
    values: BTreeMap<&'static str, ParamValue>,
}

impl ResolvedParams {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParamValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(ParamValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(ParamValue::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn side(&self, name: &str) -> Option<Side> {
        match self.values.get(name) {
            Some(ParamValue::Side(s)) => Some(*s),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Merge caller overrides into a schema's defaults
///
/// Overrides are coerced to the kind of the default they replace. Names the
/// schema does not declare are skipped, since callers commonly pass the same
/// option map to every footprint.
pub fn resolve(
    schema: &[ParamSpec],
    overrides: &Map<String, Value>,
) -> Result<ResolvedParams, ParamError> {
    let mut values = BTreeMap::new();

    for spec in schema {
        let value = match overrides.get(spec.name) {
            Some(raw) => coerce(spec, raw)?,
            None => spec.default.to_value(),
        };
        values.insert(spec.name, value);
    }

    for name in overrides.keys() {
        if !schema.iter().any(|s| s.name == name) {
            log::warn!("Ignoring unknown footprint parameter `{}`", name);
        }
    }

    Ok(ResolvedParams { values })
}

fn coerce(spec: &ParamSpec, raw: &Value) -> Result<ParamValue, ParamError> {
    let mismatch = || ParamError::TypeMismatch {
        name: spec.name.to_string(),
        expected: spec.kind(),
        found: json_kind(raw),
    };

    match spec.kind() {
        ParamKind::Text => match raw {
            Value::String(s) => Ok(ParamValue::Text(s.clone())),
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(ParamValue::Text(n.to_string())),
            Value::Number(n) => Ok(ParamValue::Text(
                n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
            )),
            Value::Bool(b) => Ok(ParamValue::Text(b.to_string())),
            _ => Err(mismatch()),
        },
        ParamKind::Number => raw.as_f64().map(ParamValue::Number).ok_or_else(mismatch),
        ParamKind::Boolean => raw.as_bool().map(ParamValue::Boolean).ok_or_else(mismatch),
        ParamKind::Side => {
            let s = raw.as_str().ok_or_else(mismatch)?;
            s.parse::<Side>()
                .map(ParamValue::Side)
                .map_err(|source| ParamError::InvalidSide {
                    name: spec.name.to_string(),
                    source,
                })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
