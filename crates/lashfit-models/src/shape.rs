//! Eye-shape labels.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categorical eye-shape label produced by the classifier.
///
/// `Unknown` is never emitted by the classifier itself (its final rule is a
/// catch-all) but keeps the recommender total over externally supplied
/// labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum EyeShape {
    /// Elongated eyes with a width/height ratio in the almond band.
    #[serde(rename = "Almond Eyes")]
    Almond,

    /// Wide-open eyes with a low width/height ratio.
    #[serde(rename = "Round Eyes")]
    Round,

    /// No dominant trait; the classifier's catch-all.
    #[default]
    #[serde(rename = "Balanced Eyes")]
    Balanced,

    /// Little visible lid space above the lash line.
    #[serde(rename = "Monolid (Low Eyelid Crease)")]
    Monolid,

    /// Pronounced canthal tilt, in either direction.
    #[serde(rename = "Downturned / Upturned Eyes")]
    Tilted,

    /// Fallback for labels the recommender does not recognize.
    Unknown,
}

impl EyeShape {
    /// All defined eye shapes.
    pub const ALL: &'static [EyeShape] = &[
        EyeShape::Almond,
        EyeShape::Round,
        EyeShape::Balanced,
        EyeShape::Monolid,
        EyeShape::Tilted,
        EyeShape::Unknown,
    ];

    /// Returns the label string used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            EyeShape::Almond => "Almond Eyes",
            EyeShape::Round => "Round Eyes",
            EyeShape::Balanced => "Balanced Eyes",
            EyeShape::Monolid => "Monolid (Low Eyelid Crease)",
            EyeShape::Tilted => "Downturned / Upturned Eyes",
            EyeShape::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EyeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EyeShape {
    type Err = EyeShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Almond Eyes" => Ok(EyeShape::Almond),
            "Round Eyes" => Ok(EyeShape::Round),
            "Balanced Eyes" => Ok(EyeShape::Balanced),
            "Monolid (Low Eyelid Crease)" => Ok(EyeShape::Monolid),
            "Downturned / Upturned Eyes" => Ok(EyeShape::Tilted),
            "Unknown" => Ok(EyeShape::Unknown),
            _ => Err(EyeShapeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown eye shape label: {0}")]
pub struct EyeShapeParseError(String);
