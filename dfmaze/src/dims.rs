use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use num_traits::Zero;
use paste::paste;

/// Position in logical maze space, `(x, y)`.
///
/// One logical cell corresponds to one chamber of the [`Grid`](crate::grid::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dims(pub i32, pub i32);

/// Position in grid space, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos(pub i32, pub i32);

/// Component-wise arithmetic shared by [`Dims`] and [`Pos`].
pub trait DimsTrait<const SIZE: usize>:
    Sized
    + Copy
    + Into<[Self::Item; SIZE]>
    + From<[Self::Item; SIZE]>
    + Add
    + Add<Self::Item>
    + AddAssign
    + Sub
    + Mul<Self::Item>
{
    type Item: std::fmt::Debug;

    fn sum(&self) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item> + Zero + Copy,
    {
        self.to_arr()
            .iter()
            .fold(Self::Item::zero(), |acc, &x| acc + x)
    }

    fn abs(self) -> Self
    where
        Self::Item: Neg<Output = Self::Item> + PartialOrd + Zero + Copy,
    {
        self.op_unary(|a| if *a < Self::Item::zero() { -*a } else { *a })
    }

    /// Manhattan length of the vector.
    fn abs_sum(&self) -> Self::Item
    where
        Self::Item: Neg<Output = Self::Item> + PartialOrd + Zero + Add<Output = Self::Item> + Copy,
    {
        self.abs().sum()
    }

    fn to_arr(self) -> [Self::Item; SIZE] {
        self.into()
    }

    fn from_arr(arr: [Self::Item; SIZE]) -> Self {
        arr.into()
    }

    fn op_unary(&self, op: impl Fn(&Self::Item) -> Self::Item) -> Self {
        Self::from_arr(self.to_arr().map(|x| op(&x)))
    }

    fn op_binary(&self, other: &Self, op: impl Fn(&Self::Item, &Self::Item) -> Self::Item) -> Self {
        let other = other.to_arr();
        let mut i = 0;
        Self::from_arr(self.to_arr().map(|a| {
            let res = op(&a, &other[i]);
            i += 1;
            res
        }))
    }
}

// Dims
impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// West, south, east, north; the order in which carving lists neighbors.
    pub const NEIGHBORS: [Dims; 4] = [Dims(-1, 0), Dims(0, 1), Dims(1, 0), Dims(0, -1)];

    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }
}

impl From<[i32; 2]> for Dims {
    fn from(arr: [i32; 2]) -> Self {
        Dims(arr[0], arr[1])
    }
}

impl From<Dims> for [i32; 2] {
    fn from(dims: Dims) -> Self {
        [dims.0, dims.1]
    }
}

impl DimsTrait<2> for Dims {
    type Item = i32;
}

// Pos
impl Pos {
    /// Right, left, down, up; the order in which path search pushes neighbors.
    pub const NEIGHBORS: [Pos; 4] = [Pos(0, 1), Pos(0, -1), Pos(1, 0), Pos(-1, 0)];

    /// Whether `other` is exactly one step away along exactly one axis.
    pub fn is_adjacent(self, other: Pos) -> bool {
        (other - self).abs_sum() == 1
    }
}

impl From<[i32; 2]> for Pos {
    fn from(arr: [i32; 2]) -> Self {
        Pos(arr[0], arr[1])
    }
}

impl From<Pos> for [i32; 2] {
    fn from(pos: Pos) -> Self {
        [pos.0, pos.1]
    }
}

impl DimsTrait<2> for Pos {
    type Item = i32;
}

macro_rules! impl_op {
    ($trait:ident, $op:ident, $dims:ident) => {
        impl $trait for $dims {
            type Output = $dims;

            #[inline(always)]
            fn $op(self, other: $dims) -> $dims {
                self.op_binary(&other, |a, b| a.$op(b))
            }
        }
    };
    ($trait:ident, $op:ident, $dims:ident, $item:ident) => {
        impl $trait<$item> for $dims {
            type Output = $dims;

            #[inline(always)]
            fn $op(self, other: $item) -> $dims {
                self.op_unary(|a| a.$op(other))
            }
        }
    };
}

macro_rules! impl_assign_op {
    ($trait:ident, $op:ident, $dims:ident) => {
        paste! {
            impl [<$trait Assign>] for $dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: $dims) {
                    *self = self.$op(other);
                }
            }
        }
    };
}

macro_rules! impl_ops {
    ( $(($dims:ident, $item:ident)),* ) => {
        $(
            impl_op!(Add, add, $dims);
            impl_op!(Add, add, $dims, $item);
            impl_assign_op!(Add, add, $dims);
            impl_op!(Sub, sub, $dims);
            impl_op!(Mul, mul, $dims, $item);
        )*
    };
}

impl_ops![(Dims, i32), (Pos, i32)];
