//! Shared constants for tables, storage folders, and time-to-live values.

/// Published posts table, visible to end users.
pub const POSTS_TABLE: &str = "posts";

/// Approval-queue table for bot-submitted posts awaiting review.
pub const PENDING_POSTS_TABLE: &str = "twitter_posts";

/// Read-only mapping of Twitter usernames to platform user ids.
pub const USER_MAP_TABLE: &str = "twitter_id_map";

/// Storage folder for post images.
pub const POST_IMAGES_FOLDER: &str = "post-images";

/// Storage folder for post videos.
pub const POST_VIDEOS_FOLDER: &str = "post-videos";

/// Storage folder for user avatars (one fixed key per user).
pub const AVATARS_FOLDER: &str = "avatars";

/// Presigned upload URLs expire after 5 minutes.
pub const UPLOAD_URL_TTL_SECS: u64 = 300;

/// Cap on how long a cached bot token is trusted, regardless of what the
/// provider reports.
pub const TOKEN_TTL_SECS: i64 = 3600;

pub const DEFAULT_POST_TYPE: &str = "text";
pub const DEFAULT_POST_SOURCE: &str = "twitter";
pub const STATUS_ACCEPTED: &str = "accepted";
