pub mod export;
pub mod validate;
pub mod video_id;
