pub mod list;
pub mod seed;
pub mod show;
