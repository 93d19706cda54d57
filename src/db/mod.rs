pub mod history;
pub mod pool;
