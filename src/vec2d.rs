use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Square grid stored in a single vector, row by row.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    size: u8,
}

impl<T: Copy> Vec2d<T> {
    pub(crate) fn new(size: u8, default: T) -> Self {
        let size_usize = usize::from(size);
        Vec2d {
            data: vec![default; size_usize * size_usize],
            size,
        }
    }

    pub(crate) fn create_scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d::new(self.size, default)
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Pos::new(x, y)))
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.size.into()) {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = usize::from(index.y) * usize::from(self.size) + usize::from(index.x);
        // unchecked indexing is only marginally faster (if at all) to justify unsafe
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = usize::from(index.y) * usize::from(self.size) + usize::from(index.x);
        &mut self.data[index]
    }
}
