pub mod backup;
pub mod log;
pub mod summary;
pub mod validate;
