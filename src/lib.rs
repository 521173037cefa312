pub mod api;
pub mod core;
pub mod error;
pub mod models;

pub use crate::api::YouTubeClient;
pub use crate::core::export::{to_csv, to_pretty_json};
pub use crate::core::validate::validate_lookup;
pub use crate::core::video_id::extract_video_id;
pub use crate::error::{ErrorKind, LookupError, LookupResult, Result};
pub use crate::models::summary::VideoSummary;
pub use crate::models::video::{
    Thumbnail, ThumbnailSet, VideoId, VideoListResponse, VideoRecord, VideoSnippet,
};

/// Installs a formatting tracing subscriber for binaries embedding the
/// crate. Filterable via `RUST_LOG`; defaults to info-level crate events.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("metatube_core=info")),
        )
        .init();
}
