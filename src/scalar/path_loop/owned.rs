use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

use crate::array::offsets::check_lengths;
use crate::error::{PathError, Result};
use crate::scalar::Loop;

/// An owned loop: two equal-length coordinate vectors with no header slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawLoop")]
pub struct OwnedLoop {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Deserialize)]
struct RawLoop {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<RawLoop> for OwnedLoop {
    type Error = PathError;

    fn try_from(value: RawLoop) -> Result<Self> {
        Self::try_new(value.x, value.y)
    }
}

impl OwnedLoop {
    /// # Errors
    ///
    /// - if `x` and `y` have different lengths
    pub fn try_new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        check_lengths(&x, &y)?;
        Ok(Self { x, y })
    }

    pub(crate) fn new_unchecked(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn as_loop(&self) -> Loop<'_> {
        Loop::new_unchecked(&self.x, &self.y)
    }

    pub fn is_closed(&self) -> bool {
        self.as_loop().is_closed()
    }

    pub fn into_inner(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}

impl From<&LineString> for OwnedLoop {
    fn from(value: &LineString) -> Self {
        let (x, y) = value.coords().map(|c| (c.x, c.y)).unzip();
        Self { x, y }
    }
}

impl From<LineString> for OwnedLoop {
    fn from(value: LineString) -> Self {
        (&value).into()
    }
}

impl From<OwnedLoop> for LineString {
    fn from(value: OwnedLoop) -> Self {
        value
            .x
            .into_iter()
            .zip(value.y)
            .map(|(x, y)| Coord { x, y })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::path::square;

    #[test]
    fn geo_roundtrip() {
        let owned = OwnedLoop::from(square());
        assert_eq!(owned.len(), 5);
        assert!(owned.is_closed());
        assert_eq!(LineString::from(owned), square());
    }

    #[test]
    fn deserialize_validates_lengths() {
        let ok: OwnedLoop = serde_json::from_str(r#"{"x": [1.0, 2.0], "y": [3.0, 4.0]}"#).unwrap();
        assert_eq!(ok.y(), &[3., 4.]);

        let bad = serde_json::from_str::<OwnedLoop>(r#"{"x": [1.0], "y": []}"#);
        assert!(bad.is_err());
    }
}
