/// Row-major flat storage for a `width` x `height` lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T> Grid<T> {
    /// Builds the grid by calling `init(x, y)` for every coordinate in row-major order.
    pub fn from_fn(width: u16, height: u16, mut init: impl FnMut(u16, u16) -> T) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| init(x, y))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub fn ravel_index(&self, coord: (u16, u16)) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Inverse of [`Grid::ravel_index`].
    pub fn unravel_index(&self, index: usize) -> (u16, u16) {
        let width = self.width as usize;
        ((index % width) as u16, (index / width) as u16)
    }

    pub fn get(&self, coord: (u16, u16)) -> Option<&T> {
        if self.is_in_bounds(coord) {
            Some(&self.data[self.ravel_index(coord)])
        } else {
            None
        }
    }

    /// Mutable access to two distinct cells at once.
    ///
    /// Panics if either coordinate is out of bounds or both are equal.
    pub fn pair_mut(&mut self, a: (u16, u16), b: (u16, u16)) -> (&mut T, &mut T) {
        let (ia, ib) = (self.ravel_index(a), self.ravel_index(b));
        assert_ne!(ia, ib, "pair_mut needs two distinct cells");
        if ia < ib {
            let (lo, hi) = self.data.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.data.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> std::ops::Index<(u16, u16)> for Grid<T> {
    type Output = T;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<(u16, u16)> for Grid<T> {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
