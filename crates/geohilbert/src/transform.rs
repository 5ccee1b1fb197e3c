//! Point to Hilbert index mapping.

use log::trace;

use crate::{
    bounds::Bounds,
    cell::Cell,
    error::{Error, Result},
    orientation::Orientation,
    point::Point,
};

/// Largest supported order. An order-`n` index needs `2n` bits, so 32 is the
/// last order whose indices fit in a `u64`.
pub const MAX_ORDER: u32 = 32;

/// Fail unless `1 <= order <= MAX_ORDER`.
pub fn check_order(order: u32) -> Result<()> {
    if order == 0 || order > MAX_ORDER {
        return Err(Error::InvalidOrder { order });
    }
    Ok(())
}

/// Index of `p` along the order-`order` Hilbert curve laid over the box from
/// `lower_left` to `upper_right`, starting in `orientation`.
///
/// The result lies in `0..4^order`. Points that share a leaf cell share an
/// index. Fails if the order is out of range or `p` is outside the box.
pub fn transform(
    p: &Point,
    lower_left: &Point,
    upper_right: &Point,
    order: u32,
    orientation: Orientation,
) -> Result<u64> {
    check_order(order)?;
    index_in(
        Cell::new(Bounds::new(*lower_left, *upper_right), orientation),
        order,
        p,
    )
}

/// Walk `order` levels down from `cell`, appending two bits per level.
///
/// Each level narrows to the geometric quadrant holding `p` and carries the
/// rank-selected orientation forward. The caller validates `order`.
pub(crate) fn index_in(mut cell: Cell, order: u32, p: &Point) -> Result<u64> {
    let mut index_acc: u64 = 0;
    for step in 0..order {
        let (rank, child) = cell.locate(p)?;
        trace!(
            "level {}: {} rank {rank} -> {}",
            order - step,
            cell.orientation,
            child.orientation
        );
        index_acc = (index_acc << 2) | u64::from(rank);
        cell = child;
    }
    Ok(index_acc)
}
