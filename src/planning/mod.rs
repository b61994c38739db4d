pub mod filter;
pub mod schedule;
pub mod status_update;
pub mod summary;
