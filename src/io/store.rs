use std::sync::Arc;

use arrow_array::cast::AsArray;
use arrow_array::{Array, Float64Array, StringArray};
use log::debug;

use crate::algorithm::TotalBounds;
use crate::array::Path2D;
use crate::error::{PathError, Result};
use crate::io::options::{PathKind, WriteOptions};
use crate::storage::SlotStore;

/// Name of the slot holding the bounding box of the variable `name`.
pub fn bbox_slot(name: &str) -> String {
    format!("{name}_bbox2D")
}

/// Name of the slot holding the type tag of the variable `name`.
pub fn type_slot(name: &str) -> String {
    format!("Seq_{name}")
}

/// Write `path` under `name`.
///
/// Depending on `options`, this also writes the bounding box to `{name}_bbox2D` and the type
/// tag to `Seq_{name}`.
pub fn write_path<S: SlotStore + ?Sized>(
    store: &mut S,
    name: &str,
    path: &Path2D,
    options: &WriteOptions,
) -> Result<()> {
    debug!(
        "writing {} {name:?}: {} loops, {} packed slots",
        options.kind,
        path.number_of_loops(),
        path.packed_len()
    );
    if options.bounding_box {
        let bbox = path.total_bounds().bbox_values();
        store.write(&bbox_slot(name), Arc::new(Float64Array::from(bbox.to_vec())))?;
    }
    store.write(name, path.to_arrow(options.coord_type)?)?;
    if options.register_type {
        store.write(
            &type_slot(name),
            Arc::new(StringArray::from(vec![options.kind.type_name()])),
        )?;
    }
    Ok(())
}

/// Read the packed path stored under `name`.
///
/// # Errors
///
/// - if there is no slot named `name`
/// - if the slot does not hold Float64 packed buffers
/// - if the buffers are not valid packed data
pub fn read_path<S: SlotStore + ?Sized>(store: &S, name: &str) -> Result<Path2D> {
    let array = store
        .read(name)?
        .ok_or_else(|| PathError::MissingSlot(name.to_string()))?;
    let path = Path2D::try_from(array)?;
    debug!(
        "read {name:?}: {} loops, {} packed slots",
        path.number_of_loops(),
        path.packed_len()
    );
    Ok(path)
}

/// Read the type tag recorded for `name`, if any.
///
/// # Errors
///
/// - if the tag slot does not hold a single string
/// - if the tag is not a known [`PathKind`]
pub fn read_kind<S: SlotStore + ?Sized>(store: &S, name: &str) -> Result<Option<PathKind>> {
    let Some(array) = store.read(&type_slot(name))? else {
        return Ok(None);
    };
    let tag = array.as_string_opt::<i32>().ok_or_else(|| {
        PathError::IncorrectType(
            format!("expected a string type tag, got {}", array.data_type()).into(),
        )
    })?;
    if tag.len() != 1 || tag.is_null(0) {
        return Err(PathError::IncorrectType(
            "expected exactly one type tag".into(),
        ));
    }
    tag.value(0).parse().map(Some)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::array::CoordType;
    use crate::storage::MemoryStore;
    use crate::test::path::{square_path, two_squares};

    #[test]
    fn write_read_roundtrip() {
        let mut store = MemoryStore::new();
        let path = two_squares();
        write_path(&mut store, "My Path", &path, &WriteOptions::default()).unwrap();

        assert_eq!(
            store.names().collect::<Vec<_>>(),
            vec!["My Path_bbox2D", "My Path", "Seq_My Path"]
        );
        assert_eq!(read_path(&store, "My Path").unwrap(), path);
        assert_eq!(read_kind(&store, "My Path").unwrap(), Some(PathKind::Path2D));

        let bbox = store.read("My Path_bbox2D").unwrap().unwrap();
        let bbox = bbox.as_primitive::<arrow_array::types::Float64Type>();
        assert_eq!(bbox.values().as_ref(), &[0.5, 2., 0.5, 2.]);
    }

    #[test]
    fn packed_arrays_are_bit_exact() {
        let mut store = MemoryStore::new();
        let path = Path2D::construct(&[7., 0.1, 0.2], &[2., 1e-300, -0.0], false).unwrap();
        let options = WriteOptions::default().with_coord_type(CoordType::Interleaved);
        write_path(&mut store, "p", &path, &options).unwrap();

        let read = read_path(&store, "p").unwrap();
        let (x, y) = read.to_packed_arrays();
        let (ox, oy) = path.to_packed_arrays();
        assert!(x.iter().zip(ox).all(|(a, b)| a.to_bits() == b.to_bits()));
        assert!(y.iter().zip(oy).all(|(a, b)| a.to_bits() == b.to_bits()));
    }

    #[test]
    fn plot_without_extras() {
        let mut store = MemoryStore::new();
        let options = WriteOptions::default()
            .with_kind(PathKind::Plot1D)
            .with_bounding_box(false)
            .with_register_type(false);
        write_path(&mut store, "Plot 1", &square_path(), &options).unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["Plot 1"]);
        assert_eq!(read_kind(&store, "Plot 1").unwrap(), None);
    }

    #[test]
    fn missing_slot() {
        let store = MemoryStore::new();
        assert!(matches!(
            read_path(&store, "nope"),
            Err(PathError::MissingSlot(name)) if name == "nope"
        ));
    }

    #[test]
    fn unknown_type_tag() {
        let mut store = MemoryStore::new();
        store
            .write("Seq_x", Arc::new(StringArray::from(vec!["2D Mesh"])))
            .unwrap();
        assert!(matches!(
            read_kind(&store, "x"),
            Err(PathError::IncorrectType(_))
        ));
    }
}
