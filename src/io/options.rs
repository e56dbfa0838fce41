use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::array::CoordType;
use crate::error::{PathError, Result};

/// Type tag recorded next to a packed path. Both kinds share the packed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PathKind {
    #[default]
    #[serde(rename = "2D Path")]
    Path2D,

    #[serde(rename = "1D Plot")]
    Plot1D,
}

impl PathKind {
    /// The type string written to the `Seq_` slot.
    pub fn type_name(&self) -> &'static str {
        match self {
            PathKind::Path2D => "2D Path",
            PathKind::Plot1D => "1D Plot",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for PathKind {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "2D Path" | "Path2D" => Ok(PathKind::Path2D),
            "1D Plot" => Ok(PathKind::Plot1D),
            other => Err(PathError::IncorrectType(
                format!("unknown path type {other:?}").into(),
            )),
        }
    }
}

/// Options controlling how a path is written to a [`SlotStore`][crate::storage::SlotStore].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteOptions {
    /// Type tag written to `Seq_{name}`.
    pub kind: PathKind,

    /// Arrow layout of the packed slot.
    pub coord_type: CoordType,

    /// Write `{name}_bbox2D` with `[xmin, xmax, ymin, ymax]`.
    pub bounding_box: bool,

    /// Write the type tag so the variable is visible to consumers that list typed slots.
    pub register_type: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            kind: PathKind::Path2D,
            coord_type: CoordType::Separated,
            bounding_box: true,
            register_type: true,
        }
    }
}

impl WriteOptions {
    pub fn with_kind(self, kind: PathKind) -> Self {
        Self { kind, ..self }
    }

    pub fn with_coord_type(self, coord_type: CoordType) -> Self {
        Self { coord_type, ..self }
    }

    pub fn with_bounding_box(self, bounding_box: bool) -> Self {
        Self {
            bounding_box,
            ..self
        }
    }

    pub fn with_register_type(self, register_type: bool) -> Self {
        Self {
            register_type,
            ..self
        }
    }
}

/// Parse options from a JSON object; missing keys take their default.
impl FromStr for WriteOptions {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
