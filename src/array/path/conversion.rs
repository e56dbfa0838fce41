use std::sync::Arc;

use arrow_array::cast::AsArray;
use arrow_array::types::Float64Type;
use arrow_array::{Array, ArrayRef, FixedSizeListArray, Float64Array, StructArray};
use arrow_buffer::ScalarBuffer;
use arrow_schema::{DataType, Field, Fields};
use geo::{LineString, MultiLineString};
use itertools::Itertools;

use crate::array::{CoordType, Path2D};
use crate::error::{PathError, Result};
use crate::scalar::OwnedLoop;

fn separated_fields() -> Fields {
    vec![
        Field::new("x", DataType::Float64, false),
        Field::new("y", DataType::Float64, false),
    ]
    .into()
}

fn interleaved_field() -> Arc<Field> {
    Arc::new(Field::new("xy", DataType::Float64, false))
}

fn float64_values<'a>(array: &'a dyn Array, name: &str) -> Result<&'a Float64Array> {
    let values = array.as_primitive_opt::<Float64Type>().ok_or_else(|| {
        PathError::IncorrectType(
            format!("expected Float64 {name} values, got {}", array.data_type()).into(),
        )
    })?;
    if values.null_count() > 0 {
        return Err(PathError::General(format!(
            "{name} values of a packed path cannot contain nulls"
        )));
    }
    Ok(values)
}

impl Path2D {
    /// Export the packed buffers, headers included, as an Arrow array.
    ///
    /// [`CoordType::Separated`] produces a struct array with `x` and `y` Float64 children;
    /// [`CoordType::Interleaved`] produces a fixed-size list of `[x, y]` pairs.
    pub fn to_arrow(&self, coord_type: CoordType) -> Result<ArrayRef> {
        let (x, y) = self.to_packed_arrays();
        let array: ArrayRef = match coord_type {
            CoordType::Separated => {
                let children: Vec<ArrayRef> = vec![
                    Arc::new(Float64Array::new(ScalarBuffer::from(x.to_vec()), None)),
                    Arc::new(Float64Array::new(ScalarBuffer::from(y.to_vec()), None)),
                ];
                Arc::new(StructArray::try_new(separated_fields(), children, None)?)
            }
            CoordType::Interleaved => {
                let values: Vec<f64> = x.iter().interleave(y).copied().collect();
                Arc::new(FixedSizeListArray::try_new(
                    interleaved_field(),
                    2,
                    Arc::new(Float64Array::from(values)),
                    None,
                )?)
            }
        };
        Ok(array)
    }
}

impl TryFrom<&dyn Array> for Path2D {
    type Error = PathError;

    fn try_from(value: &dyn Array) -> Result<Self> {
        if value.null_count() > 0 {
            return Err(PathError::General(
                "a packed path array cannot contain nulls".to_string(),
            ));
        }
        match value.data_type() {
            DataType::Struct(_) => {
                let arr = value.as_struct();
                if arr.num_columns() != 2 {
                    return Err(PathError::IncorrectType(
                        format!("expected two child arrays, got {}", arr.num_columns()).into(),
                    ));
                }
                // children are matched by name; unnamed layouts are read as (x, y)
                let (x, y) = match (arr.column_by_name("x"), arr.column_by_name("y")) {
                    (Some(x), Some(y)) => (x, y),
                    _ => (arr.column(0), arr.column(1)),
                };
                let x = float64_values(x.as_ref(), "x")?;
                let y = float64_values(y.as_ref(), "y")?;
                Path2D::from_packed_arrays(x.values().to_vec(), y.values().to_vec())
            }
            DataType::FixedSizeList(_, 2) => {
                let arr = value.as_fixed_size_list();
                let values = float64_values(arr.values().as_ref(), "xy")?;
                let start = if arr.is_empty() {
                    0
                } else {
                    arr.value_offset(0) as usize
                };
                let pairs = &values.values()[start..start + 2 * arr.len()];
                let (x, y) = pairs.chunks_exact(2).map(|c| (c[0], c[1])).unzip();
                Path2D::from_packed_arrays(x, y)
            }
            other => Err(PathError::IncorrectType(
                format!("expected a struct or fixed-size list of Float64, got {other}").into(),
            )),
        }
    }
}

impl TryFrom<ArrayRef> for Path2D {
    type Error = PathError;

    fn try_from(value: ArrayRef) -> Result<Self> {
        value.as_ref().try_into()
    }
}

impl TryFrom<&[LineString]> for Path2D {
    type Error = PathError;

    fn try_from(value: &[LineString]) -> Result<Self> {
        let loops: Vec<OwnedLoop> = value.iter().map(OwnedLoop::from).collect();
        Path2D::try_from_loops(loops.iter().map(|l| (l.x(), l.y())))
    }
}

impl TryFrom<LineString> for Path2D {
    type Error = PathError;

    fn try_from(value: LineString) -> Result<Self> {
        std::slice::from_ref(&value).try_into()
    }
}

impl TryFrom<&MultiLineString> for Path2D {
    type Error = PathError;

    fn try_from(value: &MultiLineString) -> Result<Self> {
        value.0.as_slice().try_into()
    }
}

impl From<&Path2D> for MultiLineString {
    fn from(value: &Path2D) -> Self {
        MultiLineString::new(value.loops().map(|ring| ring.to_line_string()).collect())
    }
}
