use std::collections::BTreeMap;

use crate::domain::catalogue::area::{Coordinate, CoordinateRow};

/// Regroups flat coordinate rows into rings: rows are bucketed by
/// `sub_area_id` (NULL collapses into the implicit ring 0) and each ring is
/// sorted by `n_order` ascending. The result does not depend on the input
/// row order.
pub fn group_rings(rows: &[CoordinateRow]) -> Vec<Vec<Coordinate>> {
    let mut rings: BTreeMap<i64, Vec<CoordinateRow>> = BTreeMap::new();
    for row in rows {
        rings
            .entry(row.sub_area_id.unwrap_or(0))
            .or_default()
            .push(*row);
    }
    rings
        .into_values()
        .map(|mut ring| {
            ring.sort_by_key(|r| r.n_order.unwrap_or(0));
            ring.into_iter().map(|r| r.coordinate()).collect()
        })
        .collect()
}
