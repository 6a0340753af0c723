pub mod build;
pub mod stats;
pub mod store;

pub use stats::IndexStats;
pub use store::Index;
