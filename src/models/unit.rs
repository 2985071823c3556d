use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CostError;

/// Measurement family a unit belongs to. Conversion only happens within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    Mass,
    Volume,
    Count,
}

/// Purchase and recipe units.
///
/// Catalog text is parsed case-insensitively; `Display` always yields the
/// canonical spelling (`un`, `g`, `kg`, `mL`, `L`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    #[default]
    Un,
    G,
    Kg,
    Ml,
    L,
}

impl Unit {
    pub const ALL: [Unit; 5] = [Unit::Un, Unit::G, Unit::Kg, Unit::Ml, Unit::L];

    pub fn family(self) -> UnitFamily {
        match self {
            Unit::G | Unit::Kg => UnitFamily::Mass,
            Unit::Ml | Unit::L => UnitFamily::Volume,
            Unit::Un => UnitFamily::Count,
        }
    }

    /// Whether a quantity in `self` can be expressed in `other`.
    #[inline]
    pub fn is_compatible_with(self, other: Unit) -> bool {
        self.family() == other.family()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Un => "un",
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "mL",
            Unit::L => "L",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "un" => Ok(Unit::Un),
            "g" => Ok(Unit::G),
            "kg" => Ok(Unit::Kg),
            "ml" => Ok(Unit::Ml),
            "l" => Ok(Unit::L),
            _ => Err(CostError::UnknownUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = CostError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}
