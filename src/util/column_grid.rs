/// Column-major storage of one value per column and corner.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnGrid<T> {
    len: usize,
    data: Box<[T]>,
}

impl<T: Copy> ColumnGrid<T> {
    pub fn new(n_columns: usize, len: usize, value: T) -> Self {
        Self {
            len,
            data: vec![value; n_columns * len].into_boxed_slice(),
        }
    }

    /// The amount of corners per column.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn n_columns(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.data.len() / self.len
        }
    }

    pub fn column(&self, column: usize) -> &[T] {
        &self.data[column * self.len..(column + 1) * self.len]
    }

    pub fn column_mut(&mut self, column: usize) -> &mut [T] {
        &mut self.data[column * self.len..(column + 1) * self.len]
    }

    pub fn at(&self, column: usize, idx: usize) -> T {
        self.data[column * self.len + idx]
    }
}
