//! Directional step costs for grid path propagation.
//!
//! A [`StepCost`] oracle prices single-pixel steps: `step_cost(i, dir)` is
//! the cost of the step that leaves pixel `i` in direction `dir`, entering
//! the neighbor at `i + dir.offset(stride)`. The oracle is oblivious to
//! bounds, masks, and foreground membership; those checks belong to the
//! transform. Costs must be nonnegative and stable over one transform call.

use serde::{Deserialize, Serialize};

use crate::image::Image;

/// Unit step directions on the 8-connected pixel grid.
///
/// `y` grows downward, so `Up` is one full stride backward in linear
/// index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Dir {
    /// The four axial directions (4-connectivity).
    pub const AXIAL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

    /// All eight directions (8-connectivity).
    pub const ALL: [Dir; 8] = [
        Dir::Left,
        Dir::Right,
        Dir::Up,
        Dir::Down,
        Dir::UpLeft,
        Dir::UpRight,
        Dir::DownLeft,
        Dir::DownRight,
    ];

    /// Horizontal component of the step, in `{-1, 0, 1}`.
    #[inline]
    pub fn dx(self) -> isize {
        match self {
            Dir::Left | Dir::UpLeft | Dir::DownLeft => -1,
            Dir::Right | Dir::UpRight | Dir::DownRight => 1,
            Dir::Up | Dir::Down => 0,
        }
    }

    /// Vertical component of the step, in `{-1, 0, 1}`.
    #[inline]
    pub fn dy(self) -> isize {
        match self {
            Dir::Up | Dir::UpLeft | Dir::UpRight => -1,
            Dir::Down | Dir::DownLeft | Dir::DownRight => 1,
            Dir::Left | Dir::Right => 0,
        }
    }

    /// Linear-index offset of one step for the given row stride.
    #[inline]
    pub fn offset(self, stride: usize) -> isize {
        self.dy() * stride as isize + self.dx()
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::UpLeft => Dir::DownRight,
            Dir::UpRight => Dir::DownLeft,
            Dir::DownLeft => Dir::UpRight,
            Dir::DownRight => Dir::UpLeft,
        }
    }

    /// `true` for the four diagonal directions.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Dir::UpLeft | Dir::UpRight | Dir::DownLeft | Dir::DownRight
        )
    }
}

/// Scalar type usable as an accumulated path cost.
///
/// Implemented for `f32` and `f64`. The sentinel for unreached and excluded
/// pixels is IEEE `+∞`; [`CostValue::MAX_FINITE`] is the "no bound" limit.
pub trait CostValue:
    Copy
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::fmt::Debug
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity; the unit axial step length.
    const ONE: Self;
    /// The unit diagonal step length.
    const SQRT_2: Self;
    /// Largest finite value.
    const MAX_FINITE: Self;
    /// Sentinel for unreached and excluded pixels.
    const INFINITY: Self;
}

impl CostValue for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const SQRT_2: Self = std::f32::consts::SQRT_2;
    const MAX_FINITE: Self = f32::MAX;
    const INFINITY: Self = f32::INFINITY;
}

impl CostValue for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const SQRT_2: Self = std::f64::consts::SQRT_2;
    const MAX_FINITE: Self = f64::MAX;
    const INFINITY: Self = f64::INFINITY;
}

/// Directional edge-cost oracle.
///
/// `step_cost(i, dir)` is the cost of the step leaving pixel `i` in
/// direction `dir`. The transform queries it for the foreground neighbor
/// during seeding and for the popped pixel during relaxation; in both cases
/// `i` is the source of the step. Returned costs must be nonnegative and
/// must not change during one transform invocation.
pub trait StepCost<T> {
    /// Cost of the step leaving pixel `i` in direction `dir`.
    fn step_cost(&self, i: usize, dir: Dir) -> T;
}

/// Chamfer metric: 1 per axial step, √2 per diagonal step.
///
/// Position-independent; with this oracle the transform degenerates to a
/// chamfer distance field.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCost;

impl<T: CostValue> StepCost<T> for UnitCost {
    #[inline]
    fn step_cost(&self, _i: usize, dir: Dir) -> T {
        if dir.is_diagonal() {
            T::SQRT_2
        } else {
            T::ONE
        }
    }
}

/// Per-pixel weights scaled by step length.
///
/// A step leaving pixel `i` costs `w[i]` axially and `√2 · w[i]`
/// diagonally, where `w` is the wrapped weight image. Weights must be
/// nonnegative.
#[derive(Debug, Clone, Copy)]
pub struct WeightedCost<'a, T> {
    weights: &'a Image<T>,
}

impl<'a, T> WeightedCost<'a, T> {
    /// Wrap a weight image.
    pub fn new(weights: &'a Image<T>) -> Self {
        Self { weights }
    }
}

impl<T: CostValue> StepCost<T> for WeightedCost<'_, T> {
    #[inline]
    fn step_cost(&self, i: usize, dir: Dir) -> T {
        let w = self.weights[i];
        if dir.is_diagonal() {
            T::SQRT_2 * w
        } else {
            w
        }
    }
}
