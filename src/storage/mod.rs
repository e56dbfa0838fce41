//! The named-slot array store that packed paths are written to and read from.
//!
//! A store maps names to Arrow arrays. Opening files, resolving names and encoding arrays on
//! disk are left to implementations; this crate only reads and writes whole arrays by name.

use arrow_array::ArrayRef;
use indexmap::IndexMap;

use crate::error::Result;

/// Read and write arrays by name.
pub trait SlotStore {
    /// Read the array stored under `name`, or `None` if there is none.
    fn read(&self, name: &str) -> Result<Option<ArrayRef>>;

    /// Store `array` under `name`, replacing any previous array with that name.
    fn write(&mut self, name: &str, array: ArrayRef) -> Result<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for &mut S {
    fn read(&self, name: &str) -> Result<Option<ArrayRef>> {
        (**self).read(name)
    }

    fn write(&mut self, name: &str, array: ArrayRef) -> Result<()> {
        (**self).write(name, array)
    }
}

/// An in-memory [`SlotStore`] that remembers the order in which names were first written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: IndexMap<String, ArrayRef>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot names, in the order they were first written.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, name: &str) -> Result<Option<ArrayRef>> {
        Ok(self.slots.get(name).cloned())
    }

    fn write(&mut self, name: &str, array: ArrayRef) -> Result<()> {
        self.slots.insert(name.to_string(), array);
        Ok(())
    }
}
