// Flat index <-> (row, col) mapping with non-wrapping moves (pure functions)

use crate::library::types::CarouselPartition;

/// Row and column of a flat index
///
/// Indices past the end clamp to the last game; an empty partition maps
/// everything to (0, 0).
pub fn flat_to_row_col(partition: &CarouselPartition, index: usize) -> (usize, usize) {
    if partition.is_empty() {
        return (0, 0);
    }
    let index = index.min(partition.len() - 1);
    // Rows are ordered by offset, so the owner is the last row starting at or before index
    let row = partition
        .rows()
        .partition_point(|r| r.offset <= index)
        .saturating_sub(1);
    (row, index - partition.rows()[row].offset)
}

/// Flat index of (row, col), clamping both to the partition
pub fn row_col_to_flat(partition: &CarouselPartition, row: usize, col: usize) -> usize {
    match partition.row(row.min(partition.last_row())) {
        Some(r) => r.offset + col.min(r.last_col()),
        None => 0,
    }
}

/// Column after moving `dx` within a row; stops at both ends
pub fn move_within_row(partition: &CarouselPartition, row: usize, col: usize, dx: i32) -> usize {
    let Some(r) = partition.row(row) else {
        return 0;
    };
    let col = col.min(r.last_col());
    apply_index_delta(col, dx, r.len())
}

/// (row, col) after moving `dy` rows from (row, col)
///
/// Past the first or last row nothing changes. Entering a shorter row clamps
/// the column to that row's last game.
pub fn move_across_rows(partition: &CarouselPartition, row: usize, col: usize, dy: i32) -> (usize, usize) {
    if partition.row_count() == 0 {
        return (0, 0);
    }
    let row = row.min(partition.last_row());
    let target = apply_index_delta(row, dy, partition.row_count());
    let last_col = partition.rows()[target].last_col();
    (target, col.min(last_col))
}

/// Apply a delta to an index, clamping to [0, max-1]
pub fn apply_index_delta(current: usize, delta: i32, max: usize) -> usize {
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        (current + delta as usize).min(max.saturating_sub(1))
    }
}
