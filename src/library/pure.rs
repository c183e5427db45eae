pub mod filter;
pub mod mapper;
pub mod partition;

// Re-exports
pub use filter::apply_filter;
pub use mapper::{apply_index_delta, flat_to_row_col, move_across_rows, move_within_row, row_col_to_flat};
pub use partition::{partition, partition_chunked};
