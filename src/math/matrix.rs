//! Compile-time sized matrices
//!
//! `FixedMatrix<T, W, H>` stores `W` columns of `H` rows each, column-major,
//! so the flat element `i` lives at `(row = i % H, col = i / H)`. Vectors are
//! single-column matrices (`FixedMatrix<T, 1, N>`).
//!
//! Everything here is a plain value: no heap, no shared ownership, `Copy`
//! whenever the scalar is.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use num_traits::{Float, Num, One, Zero};

/// A `W`×`H` matrix of `T` with column-major storage
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMatrix<T, const W: usize, const H: usize> {
    cols: [[T; H]; W],
}

pub type Mat2 = FixedMatrix<f32, 2, 2>;
pub type Mat3 = FixedMatrix<f32, 3, 3>;
pub type Mat4 = FixedMatrix<f32, 4, 4>;

pub type Vec2 = FixedMatrix<f32, 1, 2>;
pub type Vec3 = FixedMatrix<f32, 1, 3>;
pub type Vec4 = FixedMatrix<f32, 1, 4>;

// SAFETY: `repr(transparent)` over a nested array of `T`; arrays carry no padding.
unsafe impl<T: Zeroable, const W: usize, const H: usize> Zeroable for FixedMatrix<T, W, H> {}
// SAFETY: as above, every bit pattern valid for `T` is valid for the matrix.
unsafe impl<T: Pod, const W: usize, const H: usize> Pod for FixedMatrix<T, W, H> {}

const _: () = assert!(std::mem::size_of::<Vec2>() == 8);
const _: () = assert!(std::mem::size_of::<Mat4>() == 64);
const _: () = assert!(std::mem::align_of::<Mat4>() == std::mem::align_of::<f32>());

impl<T, const W: usize, const H: usize> FixedMatrix<T, W, H> {
    /// Wrap column-major storage directly
    pub const fn from_cols(cols: [[T; H]; W]) -> Self {
        Self { cols }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        W
    }

    #[inline]
    pub const fn height(&self) -> usize {
        H
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        W == H
    }

    #[inline]
    pub const fn elem_count(&self) -> usize {
        W * H
    }

    /// Flat column-major view of the elements
    #[inline]
    pub fn data(&self) -> &[T] {
        self.cols.as_flattened()
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.cols.as_flattened_mut()
    }

    /// Mutable element at `row`, `col`
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.cols[col][row]
    }

    pub fn cols(&self) -> &[[T; H]; W] {
        &self.cols
    }
}

impl<T: Copy, const W: usize, const H: usize> FixedMatrix<T, W, H> {
    /// Element at `row`, `col`
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cols[col][row]
    }

    /// Build a matrix from a function of `(row, col)`
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            cols: std::array::from_fn(|c| std::array::from_fn(|r| f(r, c))),
        }
    }

    /// Build a matrix from a column-major literal of exactly `W * H` elements.
    ///
    /// # Panics
    ///
    /// If `values.len() != W * H`.
    pub fn from_slice(values: &[T]) -> Self {
        assert_eq!(
            values.len(),
            W * H,
            "matrix literal must have exactly {}x{} elements",
            W,
            H
        );
        Self::from_fn(|r, c| values[c * H + r])
    }

    /// Apply `f` to every element
    pub fn map(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_fn(|r, c| f(self.cols[c][r]))
    }

    /// Combine two matrices element by element
    pub fn zip_map(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|r, c| f(self.cols[c][r], other.cols[c][r]))
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for col in self.cols.iter_mut() {
            col.swap(a, b);
        }
    }
}

impl<T: Zero + Copy, const W: usize, const H: usize> FixedMatrix<T, W, H> {
    pub fn zeros() -> Self {
        Self {
            cols: [[T::zero(); H]; W],
        }
    }
}

impl<T: Zero + Copy, const W: usize, const H: usize> Default for FixedMatrix<T, W, H> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Copy + Mul<Output = T>, const W: usize, const H: usize> FixedMatrix<T, W, H> {
    /// Multiply every element by `scalar`
    pub fn scale(&self, scalar: T) -> Self {
        self.map(|v| v * scalar)
    }
}

impl<T: Float, const W: usize, const H: usize> FixedMatrix<T, W, H> {
    /// Sum of squares of all elements, whatever the shape
    pub fn length_sqr(&self) -> T {
        self.data().iter().fold(T::zero(), |acc, &v| acc + v * v)
    }

    /// Euclidean norm of all elements, whatever the shape
    pub fn length(&self) -> T {
        self.length_sqr().sqrt()
    }

    /// Scale to unit length.
    ///
    /// A zero-length input divides by zero and yields infinities or NaN;
    /// callers guard degenerate vectors themselves.
    pub fn normalized(&self) -> Self {
        let coef = T::one() / self.length();
        self.scale(coef)
    }
}

impl<T: Zero + One + Copy, const N: usize> FixedMatrix<T, N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
    }
}

impl<T: Num + Copy, const N: usize> FixedMatrix<T, N, N> {
    /// Gauss-Jordan inverse, or `None` when no nonzero pivot can be found.
    ///
    /// Rows are swapped only when a pivot is exactly zero, taking the first
    /// nonzero row below it. There is no pivoting for stability, so badly
    /// conditioned input amplifies rounding error.
    pub fn try_invert(&self) -> Option<Self> {
        let mut work = *self;
        let mut inv = Self::identity();

        for r in 0..N {
            if work.at(r, r) == T::zero() {
                let swap_r = (r + 1..N).find(|&s| work.at(s, r) != T::zero())?;
                work.swap_rows(r, swap_r);
                inv.swap_rows(r, swap_r);
            }

            let divider = work.at(r, r);
            for c in 0..N {
                work.cols[c][r] = work.cols[c][r] / divider;
                inv.cols[c][r] = inv.cols[c][r] / divider;
            }

            for other in (0..N).filter(|&o| o != r) {
                let multiplier = work.at(other, r);
                for c in 0..N {
                    work.cols[c][other] = work.cols[c][other] - multiplier * work.cols[c][r];
                    inv.cols[c][other] = inv.cols[c][other] - multiplier * inv.cols[c][r];
                }
            }
        }

        Some(inv)
    }

    /// Gauss-Jordan inverse.
    ///
    /// # Panics
    ///
    /// If the matrix is singular. Use [`FixedMatrix::try_invert`] when that
    /// cannot be ruled out up front.
    pub fn invert(&self) -> Self {
        match self.try_invert() {
            Some(inv) => inv,
            None => panic!("cannot invert singular {}x{} matrix: no nonzero pivot", N, N),
        }
    }
}

impl<T: Copy, const N: usize> FixedMatrix<T, 1, N> {
    #[inline]
    pub fn x(&self) -> T {
        self.cols[0][0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.cols[0][1]
    }
}

impl<T> FixedMatrix<T, 1, 2> {
    pub const fn new(x: T, y: T) -> Self {
        Self { cols: [[x, y]] }
    }
}

impl<T> FixedMatrix<T, 1, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { cols: [[x, y, z]] }
    }
}

impl<T> FixedMatrix<T, 1, 4> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { cols: [[x, y, z, w]] }
    }
}

impl<T, const W: usize, const H: usize> From<[[T; H]; W]> for FixedMatrix<T, W, H> {
    fn from(cols: [[T; H]; W]) -> Self {
        Self { cols }
    }
}

impl<T, const W: usize, const H: usize> Index<usize> for FixedMatrix<T, W, H> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.cols[i / H][i % H]
    }
}

impl<T, const W: usize, const H: usize> IndexMut<usize> for FixedMatrix<T, W, H> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.cols[i / H][i % H]
    }
}

impl<T: Copy + Add<Output = T>, const W: usize, const H: usize> Add for FixedMatrix<T, W, H> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a + b)
    }
}

impl<T: Copy + Sub<Output = T>, const W: usize, const H: usize> Sub for FixedMatrix<T, W, H> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_map(&rhs, |a, b| a - b)
    }
}

impl<T: Copy + Neg<Output = T>, const W: usize, const H: usize> Neg for FixedMatrix<T, W, H> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

/// Matrix product. The inner dimension (our width, their height) is part of
/// the type, so mismatched operands do not compile.
impl<T, const W: usize, const H: usize, const W2: usize> Mul<FixedMatrix<T, W2, W>>
    for FixedMatrix<T, W, H>
where
    T: Zero + Copy + Mul<Output = T>,
{
    type Output = FixedMatrix<T, W2, H>;

    fn mul(self, rhs: FixedMatrix<T, W2, W>) -> FixedMatrix<T, W2, H> {
        FixedMatrix::from_fn(|r, c| {
            (0..W).fold(T::zero(), |acc, i| acc + self.cols[i][r] * rhs.cols[c][i])
        })
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {$(
        impl<const W: usize, const H: usize> Mul<$t> for FixedMatrix<$t, W, H> {
            type Output = Self;

            fn mul(self, scalar: $t) -> Self {
                self.scale(scalar)
            }
        }

        impl<const W: usize, const H: usize> Mul<FixedMatrix<$t, W, H>> for $t {
            type Output = FixedMatrix<$t, W, H>;

            fn mul(self, m: FixedMatrix<$t, W, H>) -> FixedMatrix<$t, W, H> {
                m.scale(self)
            }
        }
    )*};
}

impl_scalar_mul!(f32, f64, i32, i64);

impl<T: fmt::Display, const W: usize, const H: usize> fmt::Display for FixedMatrix<T, W, H> {
    /// One line per row, entries separated by `", "`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..H {
            for c in 0..W {
                write!(f, "{}", self.cols[c][r])?;
                f.write_str(if c + 1 < W { ", " } else { "\n" })?;
            }
        }
        Ok(())
    }
}

impl<T: Pod, const W: usize, const H: usize> FixedMatrix<T, W, H> {
    /// Raw bytes in column-major order, ready for a uniform buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
