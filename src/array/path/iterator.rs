use crate::array::offsets::LoopOffset;
use crate::array::Path2D;
use crate::scalar::Loop;

/// Iterator of the [`LoopOffset`]s of a [`Path2D`].
///
/// Offsets are read from the headers on every step rather than cached, so a new iterator always
/// reflects the current contents of the path.
#[derive(Clone, Debug)]
pub struct LoopOffsetIter<'a> {
    y: &'a [f64],
    pos: usize,
}

impl<'a> LoopOffsetIter<'a> {
    #[inline]
    pub fn new(path: &'a Path2D) -> Self {
        let (_, y) = path.to_packed_arrays();
        Self { y, pos: 0 }
    }
}

impl<'a> Iterator for LoopOffsetIter<'a> {
    type Item = LoopOffset;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.y.len() {
            return None;
        }
        // Headers were validated when the buffers were built or last extended, so every header
        // holds a positive integer that fits in the remaining slots.
        let length = self.y[self.pos] as usize;
        let offset = LoopOffset::new(self.pos + 1, length);
        self.pos = offset.end();
        Some(offset)
    }
}

impl<'a> std::iter::FusedIterator for LoopOffsetIter<'a> {}

/// Iterator of the loops of a [`Path2D`], as borrowed [`Loop`] views.
#[derive(Clone, Debug)]
pub struct LoopIter<'a> {
    x: &'a [f64],
    y: &'a [f64],
    offsets: LoopOffsetIter<'a>,
}

impl<'a> LoopIter<'a> {
    #[inline]
    pub fn new(path: &'a Path2D) -> Self {
        let (x, y) = path.to_packed_arrays();
        Self {
            x,
            y,
            offsets: LoopOffsetIter::new(path),
        }
    }
}

impl<'a> Iterator for LoopIter<'a> {
    type Item = Loop<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offsets.next()?;
        Some(Loop::new_unchecked(
            &self.x[offset.range()],
            &self.y[offset.range()],
        ))
    }
}

impl<'a> std::iter::FusedIterator for LoopIter<'a> {}

/// Iterator of the loops of a [`Path2D`], each re-wrapped as a self-contained single-loop path.
#[derive(Clone, Debug)]
pub struct SubpathIter<'a> {
    loops: LoopIter<'a>,
}

impl<'a> Iterator for SubpathIter<'a> {
    type Item = Path2D;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.loops.next().map(Path2D::from_loop_unchecked)
    }
}

impl<'a> std::iter::FusedIterator for SubpathIter<'a> {}

impl<'a> IntoIterator for &'a Path2D {
    type Item = Path2D;
    type IntoIter = SubpathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Path2D {
    pub(crate) fn offsets_iter(&self) -> LoopOffsetIter<'_> {
        LoopOffsetIter::new(self)
    }

    /// Returns an iterator of [`Loop`] views, in storage order.
    pub fn loops(&self) -> LoopIter<'_> {
        LoopIter::new(self)
    }

    /// Returns an iterator of single-loop sub-paths, in storage order.
    pub fn iter(&self) -> SubpathIter<'_> {
        SubpathIter {
            loops: self.loops(),
        }
    }
}
