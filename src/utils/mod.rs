pub mod files;
pub mod path;
pub mod table;
pub mod time;
