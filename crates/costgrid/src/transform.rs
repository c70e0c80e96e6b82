//! Weighted distance transform over a masked 2D grid.
//!
//! Dijkstra-style single-source-multiple-target propagation. Given a
//! foreground predicate (path origins, cost 0), an inclusion mask, and a
//! directional [`StepCost`] oracle, the transform writes into `out` the
//! minimum accumulated path cost from the foreground to every reachable
//! background pixel, under 4- or 8-connectivity. Two phases:
//!
//! 1. **Seeding** – one row-major pass. Foreground pixels are written 0,
//!    everything else starts at the `INFINITY` sentinel. Each included
//!    background pixel that touches the foreground enqueues the cheapest
//!    single-step entry cost. Seeding at the boundary of the foreground
//!    (already one step in) keeps foreground pixels out of the queue
//!    entirely and halves the pop count.
//! 2. **Relaxation** – pop the cheapest candidate, discard it if a prior
//!    pop already committed a cost at least as good, otherwise commit and
//!    enqueue improved candidates for the included background neighbors.
//!    Duplicate queue entries per pixel are reconciled by the pop-time
//!    check alone; there is no decrease-key.
//!
//! Notes
//! - Edge costs must be nonnegative; the first commit of a pixel is then
//!   optimal by the standard Dijkstra argument.
//! - `limit` is an exclusive bound checked at every enqueue, so costs `≥
//!   limit` never enter the queue and beyond-limit pixels keep the
//!   sentinel. With float scalars nothing non-finite is ever enqueued.
//! - Excluded pixels (mask returns `false`) are neither seeded nor
//!   relaxed into; they keep the sentinel unless they are foreground,
//!   which takes precedence.

use crate::cost::{CostValue, Dir, StepCost};
use crate::image::Image;
use crate::queue::CostQueue;

/// `true` when pixel `i` participates in propagation.
#[inline]
fn is_compute<B, M>(bin: &B, mask: &M, i: usize) -> bool
where
    B: Fn(usize) -> bool,
    M: Fn(usize) -> bool,
{
    !bin(i) && mask(i)
}

/// Fold one candidate foreground neighbor into the running seed cost.
///
/// `dir` points from the seeded pixel toward the neighbor, which the
/// caller guarantees is in bounds; the step that enters the seeded pixel
/// leaves the neighbor in the opposite direction.
#[inline]
fn seed_step<T, B, C>(bin: &B, cost: &C, i: usize, dir: Dir, stride: usize, acc: T) -> T
where
    T: CostValue,
    B: Fn(usize) -> bool,
    C: StepCost<T>,
{
    let j = i.wrapping_add_signed(dir.offset(stride));
    if !bin(j) {
        return acc;
    }
    let c = cost.step_cost(j, dir.opposite());
    if c < acc {
        c
    } else {
        acc
    }
}

/// Seed one pixel, pruning neighbors against all four borders.
///
/// Returns `true` when a candidate was enqueued.
#[inline]
fn seed_pixel<const N: usize, T, B, M, C>(
    out: &mut Image<T>,
    queue: &mut CostQueue<T>,
    bin: &B,
    mask: &M,
    cost: &C,
    i: usize,
    x: usize,
    y: usize,
    limit: T,
) -> bool
where
    T: CostValue,
    B: Fn(usize) -> bool,
    M: Fn(usize) -> bool,
    C: StepCost<T>,
{
    if bin(i) {
        out[i] = T::ZERO;
        return false;
    }
    out[i] = T::INFINITY;
    if !mask(i) {
        return false;
    }

    let size = out.size();
    let stride = out.stride();
    let left = x > 0;
    let right = x + 1 < size.x;

    let mut c = T::INFINITY;
    if left {
        c = seed_step(bin, cost, i, Dir::Left, stride, c);
    }
    if right {
        c = seed_step(bin, cost, i, Dir::Right, stride, c);
    }
    if y > 0 {
        if N == 8 && left {
            c = seed_step(bin, cost, i, Dir::UpLeft, stride, c);
        }
        c = seed_step(bin, cost, i, Dir::Up, stride, c);
        if N == 8 && right {
            c = seed_step(bin, cost, i, Dir::UpRight, stride, c);
        }
    }
    if y + 1 < size.y {
        if N == 8 && left {
            c = seed_step(bin, cost, i, Dir::DownLeft, stride, c);
        }
        c = seed_step(bin, cost, i, Dir::Down, stride, c);
        if N == 8 && right {
            c = seed_step(bin, cost, i, Dir::DownRight, stride, c);
        }
    }

    if c < limit {
        queue.push(i, c);
        true
    } else {
        false
    }
}

/// Seed one row-interior pixel of an interior row; every neighbor is in
/// bounds, so no coordinate checks are needed.
#[inline]
fn seed_pixel_interior<const N: usize, T, B, M, C>(
    out: &mut Image<T>,
    queue: &mut CostQueue<T>,
    bin: &B,
    mask: &M,
    cost: &C,
    i: usize,
    limit: T,
) -> bool
where
    T: CostValue,
    B: Fn(usize) -> bool,
    M: Fn(usize) -> bool,
    C: StepCost<T>,
{
    if bin(i) {
        out[i] = T::ZERO;
        return false;
    }
    out[i] = T::INFINITY;
    if !mask(i) {
        return false;
    }

    let stride = out.stride();
    let mut c = T::INFINITY;
    c = seed_step(bin, cost, i, Dir::Left, stride, c);
    c = seed_step(bin, cost, i, Dir::Right, stride, c);
    if N == 8 {
        c = seed_step(bin, cost, i, Dir::UpLeft, stride, c);
    }
    c = seed_step(bin, cost, i, Dir::Up, stride, c);
    if N == 8 {
        c = seed_step(bin, cost, i, Dir::UpRight, stride, c);
    }
    if N == 8 {
        c = seed_step(bin, cost, i, Dir::DownLeft, stride, c);
    }
    c = seed_step(bin, cost, i, Dir::Down, stride, c);
    if N == 8 {
        c = seed_step(bin, cost, i, Dir::DownRight, stride, c);
    }

    if c < limit {
        queue.push(i, c);
        true
    } else {
        false
    }
}

/// Relax one in-bounds neighbor of a freshly committed pixel.
#[inline]
fn relax<T, B, M, C>(
    out: &mut Image<T>,
    queue: &mut CostQueue<T>,
    bin: &B,
    mask: &M,
    cost: &C,
    i: usize,
    dir: Dir,
    limit: T,
) where
    T: CostValue,
    B: Fn(usize) -> bool,
    M: Fn(usize) -> bool,
    C: StepCost<T>,
{
    let k = i.wrapping_add_signed(dir.offset(out.stride()));
    if !is_compute(bin, mask, k) {
        return;
    }
    let step = cost.step_cost(i, dir);
    debug_assert!(step >= T::ZERO, "edge costs must be nonnegative");
    let c = out[i] + step;
    if c < out[k] && c < limit {
        queue.push(k, c);
    }
}

/// Compute the weighted distance transform of the foreground into `out`.
///
/// `N` selects connectivity and must be 4 or 8. On return:
/// - `out[i] == T::ZERO` for every foreground pixel;
/// - `out[i] == T::INFINITY` for every excluded pixel and every background
///   pixel with no path of cost `< limit`;
/// - otherwise `out[i]` is the minimum accumulated step cost from the
///   foreground, and `out[i] < limit`.
///
/// `bin` marks path origins, `mask` returns `false` for pixels excluded
/// from propagation, and `limit` is an exclusive cost bound (pass
/// [`CostValue::MAX_FINITE`] or `T::INFINITY` for no bound). The queue is
/// scratch: it must arrive empty and is drained before returning, so one
/// instance can be reused across frames.
///
/// The grid must be at least 2×2 and edge costs nonnegative; both are
/// debug-asserted, not checked in release builds.
pub fn weighted_distance_transform<const N: usize, T, B, M, C>(
    out: &mut Image<T>,
    bin: &B,
    mask: &M,
    cost: &C,
    queue: &mut CostQueue<T>,
    limit: T,
) where
    T: CostValue,
    B: Fn(usize) -> bool,
    M: Fn(usize) -> bool,
    C: StepCost<T>,
{
    assert!(N == 4 || N == 8, "connectivity must be 4 or 8");
    let size = out.size();
    let (w, h) = (size.x, size.y);
    debug_assert!(w >= 2 && h >= 2, "grid must be at least 2x2");
    debug_assert!(queue.is_empty(), "queue must arrive empty");

    // Phase 1: seed background pixels adjacent to the foreground.
    let mut seeded = 0usize;
    let mut i = 0usize;

    for x in 0..w {
        seeded += seed_pixel::<N, _, _, _, _>(out, queue, bin, mask, cost, i, x, 0, limit) as usize;
        i += 1;
    }
    for y in 1..h - 1 {
        seeded += seed_pixel::<N, _, _, _, _>(out, queue, bin, mask, cost, i, 0, y, limit) as usize;
        i += 1;
        let row_end = i + w - 2;
        while i < row_end {
            seeded +=
                seed_pixel_interior::<N, _, _, _, _>(out, queue, bin, mask, cost, i, limit) as usize;
            i += 1;
        }
        seeded +=
            seed_pixel::<N, _, _, _, _>(out, queue, bin, mask, cost, i, w - 1, y, limit) as usize;
        i += 1;
    }
    for x in 0..w {
        seeded +=
            seed_pixel::<N, _, _, _, _>(out, queue, bin, mask, cost, i, x, h - 1, limit) as usize;
        i += 1;
    }

    // Phase 2: relax outward until the queue drains.
    let mut pops = 0usize;
    let mut stale = 0usize;
    while let Some(item) = queue.pop() {
        pops += 1;

        // A prior pop already committed a cost at least as good.
        if out[item.idx] <= item.cost {
            stale += 1;
            continue;
        }
        out[item.idx] = item.cost;

        let i = item.idx;
        let (x, y) = size.unravel(i);

        if x > 0 {
            relax(out, queue, bin, mask, cost, i, Dir::Left, limit);
        }
        if x + 1 < w {
            relax(out, queue, bin, mask, cost, i, Dir::Right, limit);
        }
        if y > 0 {
            if N == 8 && x > 0 {
                relax(out, queue, bin, mask, cost, i, Dir::UpLeft, limit);
            }
            relax(out, queue, bin, mask, cost, i, Dir::Up, limit);
            if N == 8 && x + 1 < w {
                relax(out, queue, bin, mask, cost, i, Dir::UpRight, limit);
            }
        }
        if y + 1 < h {
            if N == 8 && x > 0 {
                relax(out, queue, bin, mask, cost, i, Dir::DownLeft, limit);
            }
            relax(out, queue, bin, mask, cost, i, Dir::Down, limit);
            if N == 8 && x + 1 < w {
                relax(out, queue, bin, mask, cost, i, Dir::DownRight, limit);
            }
        }
    }

    tracing::debug!(
        seeded,
        pops,
        stale,
        committed = pops - stale,
        "weighted distance transform complete"
    );
}
