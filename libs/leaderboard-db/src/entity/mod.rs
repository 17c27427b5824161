// Indexer tables (read-only from this workspace)
pub mod swap;
pub mod transfer;

// Re-exports for convenience
pub use swap::{Swap, SwapRecord};
pub use transfer::{Transfer, TransferRecord};
