//! costgrid — weighted distance transforms for dense 2D scalar grids.
//!
//! For every background pixel of a masked grid, computes the minimum
//! accumulated cost of a path to the nearest foreground pixel under 4- or
//! 8-connectivity, subject to an exclusive upper cost bound. The intended
//! consumer is a touch-contact pipeline that turns heatmap samples into
//! contact blobs, but nothing here is specific to touch data.
//!
//! The components:
//!
//! 1. **Image** – owned row-major grid with strided linear indexing and
//!    `(x, y) ↔ index` conversion.
//! 2. **Cost** – direction-tagged step-cost oracles over pixel indices;
//!    [`UnitCost`] gives the chamfer metric, [`WeightedCost`] scales
//!    per-pixel weights by step length.
//! 3. **Queue** – reusable min-priority queue of relaxation candidates.
//! 4. **Transform** – the two-phase engine: boundary-aware seeding from
//!    the foreground margin, then Dijkstra relaxation with lazy duplicate
//!    handling.
//!
//! The transform holds no state between calls; callers own every buffer
//! and may run independent `(out, queue)` pairs on separate threads.
//!
//! # Example
//! ```
//! use costgrid::{weighted_distance_transform, CostQueue, Image, UnitCost};
//!
//! // 3×3 grid with a single source in the middle.
//! let mut out = Image::<f32>::new(3, 3);
//! let mut queue = CostQueue::new();
//! weighted_distance_transform::<8, _, _, _, _>(
//!     &mut out,
//!     &|i| i == 4,
//!     &|_| true,
//!     &UnitCost,
//!     &mut queue,
//!     f32::INFINITY,
//! );
//!
//! assert_eq!(out[4], 0.0);
//! assert_eq!(out[1], 1.0);
//! assert_eq!(out[0], std::f32::consts::SQRT_2);
//! ```

mod cost;
mod image;
mod queue;
mod transform;

#[cfg(test)]
mod test_utils;

pub use cost::{CostValue, Dir, StepCost, UnitCost, WeightedCost};
pub use image::{GridSize, Image, ImageError};
pub use queue::{CostQueue, QueueItem};
pub use transform::weighted_distance_transform;
