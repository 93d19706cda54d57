pub mod checksum;
pub mod discovery;
pub mod executor;
pub mod plan;
pub mod reconcile;
