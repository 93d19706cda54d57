pub mod applied;
pub mod migration;

pub use applied::AppliedRecord;
pub use migration::Migration;
