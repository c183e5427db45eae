//! Game library and carousel layout
//!
//! The flat game list is partitioned into carousel rows; the mapper converts
//! between the flat active index and (row, column) without wrapping.

pub mod operations;
pub mod pure;
pub mod types;

// Re-exports
pub use operations::{load_library, LibraryError};
pub use pure::{
    apply_filter, apply_index_delta, flat_to_row_col, move_across_rows, move_within_row, partition, partition_chunked,
    row_col_to_flat,
};
pub use types::{CarouselPartition, CarouselRow, CarouselRule, Game, LibraryFilter};
