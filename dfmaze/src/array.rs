use std::ops;

use crate::dims::{Dims, Pos};

/// Row-major 2D buffer with explicit width and height.
///
/// Unlike nested `Vec`s, rows can never end up with different lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Builds the array from rows, returns `Err((row, expected_len, found_len))` for the first row
    /// whose length differs from the first one.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, (usize, usize, usize)>
    where
        R: IntoIterator<Item = T>,
    {
        let mut buf = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (i, row) in rows.into_iter().enumerate() {
            let before = buf.len();
            buf.extend(row);
            let len = buf.len() - before;

            match width {
                None => width = Some(len),
                Some(w) if w != len => return Err((i, w, len)),
                Some(_) => {}
            }
            height += 1;
        }

        Ok(Self {
            buf,
            width: width.unwrap_or(0),
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pos_to_idx(&self, pos: Pos) -> Option<usize> {
        let Pos(row, col) = pos;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }

        Some(row * self.width + col)
    }

    pub fn idx_to_pos(&self, idx: usize) -> Option<Pos> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Pos((idx / self.width) as i32, (idx % self.width) as i32))
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.pos_to_idx(pos).is_some()
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.pos_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_pos(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks` panics on zero, an empty array has no rows anyway
        self.buf.chunks(self.width.max(1))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Array2D<U> {
        Array2D {
            buf: self.buf.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Pos> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        self.get(index).expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Pos> for Array2D<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds")
    }
}

// Logical positions are `(x, y)`, so they land on `(row = y, col = x)`.
impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        &self[Pos(index.1, index.0)]
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        &mut self[Pos(index.1, index.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let arr = Array2D::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(arr.width(), 3);
        assert_eq!(arr.height(), 2);
        assert_eq!(arr[Pos(1, 0)], 4);
        assert_eq!(arr[Dims(2, 0)], 3);
        assert_eq!(arr.idx_to_pos(4), Some(Pos(1, 1)));
        assert_eq!(arr.pos_to_idx(Pos(1, 2)), Some(5));
    }

    #[test]
    fn out_of_bounds() {
        let arr = Array2D::new(0u8, 3, 3);
        assert_eq!(arr.get(Pos(-1, 0)), None);
        assert_eq!(arr.get(Pos(0, 3)), None);
        assert_eq!(arr.get(Pos(3, 0)), None);
        assert!(arr.contains(Pos(2, 2)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let res = Array2D::from_rows(vec![vec![1, 2], vec![3], vec![4, 5]]);
        assert_eq!(res.unwrap_err(), (1, 2, 1));
    }

    #[test]
    fn rows_roundtrip() {
        let arr = Array2D::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        let rows: Vec<&[char]> = arr.rows().collect();
        assert_eq!(rows, vec![&['a', 'b'][..], &['c', 'd'][..]]);
        assert_eq!(arr.iter_pos().count(), 4);
    }
}
