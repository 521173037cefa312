pub mod summary;
pub mod video;
