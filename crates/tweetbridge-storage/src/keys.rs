//! Shared key derivation and public-URL construction.
//!
//! Public URLs must stay an invertible function of bucket and key: cleanup
//! recovers keys from the URLs stored on post records.

use tweetbridge_core::constants::{AVATARS_FOLDER, POST_IMAGES_FOLDER, POST_VIDEOS_FOLDER};

/// Lowercased extension of a filename, `bin` when it has none.
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .filter(|ext| !ext.is_empty() && ext.len() < file_name.len())
        .unwrap_or("bin")
        .to_lowercase()
}

/// Storage key for a post media upload.
///
/// The millisecond timestamp makes keys unique per request; the folder is
/// chosen by `file_type == "image"`, everything else counts as video.
pub fn post_media_key(
    file_type: &str,
    user_id: &str,
    timestamp_millis: i64,
    file_name: &str,
) -> String {
    let folder = if file_type == "image" {
        POST_IMAGES_FOLDER
    } else {
        POST_VIDEOS_FOLDER
    };
    format!(
        "{}/{}/{}.{}",
        folder,
        user_id,
        timestamp_millis,
        file_extension(file_name)
    )
}

/// Storage key for a user avatar. Fixed per user and extension, so a later
/// upload overwrites the previous avatar object.
pub fn avatar_key(user_id: &str, file_name: &str) -> String {
    format!(
        "{}/{}/avatar.{}",
        AVATARS_FOLDER,
        user_id,
        file_extension(file_name)
    )
}

/// Public URL for an object.
///
/// For AWS S3 the virtual-hosted format `https://{bucket}.s3.{region}.amazonaws.com/{key}`;
/// for S3-compatible providers the path-style `{endpoint}/{bucket}/{key}`.
pub fn public_url(bucket: &str, region: &str, endpoint: Option<&str>, key: &str) -> String {
    if let Some(endpoint) = endpoint {
        format!("{}/{}/{}", endpoint.trim_end_matches('/'), bucket, key)
    } else {
        format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
    }
}

/// Recover a storage key from a public URL. Accepts both the regioned form
/// produced by `public_url` and the legacy `{bucket}.s3.amazonaws.com/{key}`
/// form found on older records. Returns `None` for URLs outside the bucket.
pub fn key_for_public_url(bucket: &str, endpoint: Option<&str>, url: &str) -> Option<String> {
    if let Some(endpoint) = endpoint {
        let prefix = format!("{}/{}/", endpoint.trim_end_matches('/'), bucket);
        return match url.strip_prefix(&prefix) {
            Some(key) if !key.is_empty() => Some(key.to_string()),
            _ => None,
        };
    }

    let marker = format!("{}.s3.", bucket);
    let start = url.find(&marker)?;
    let after_host = &url[start..];
    let sep = ".amazonaws.com/";
    let key = &after_host[after_host.find(sep)? + sep.len()..];
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("photo.JPG"), "jpg");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("noext"), "bin");
        assert_eq!(file_extension(".hidden"), "hidden");
    }

    #[test]
    fn test_post_media_key_folders() {
        let image = post_media_key("image", "u1", 1700000000000, "a.png");
        assert_eq!(image, "post-images/u1/1700000000000.png");

        let video = post_media_key("video", "u1", 1700000000000, "a.mp4");
        assert_eq!(video, "post-videos/u1/1700000000000.mp4");
    }

    #[test]
    fn test_post_media_key_timestamps_never_collide() {
        let first = post_media_key("image", "u1", 1700000000000, "a.png");
        let second = post_media_key("image", "u1", 1700000000001, "a.png");
        assert_ne!(first, second);
    }

    #[test]
    fn test_avatar_key_is_pure_in_user_and_extension() {
        let first = avatar_key("u1", "selfie.png");
        let second = avatar_key("u1", "other-picture.png");
        assert_eq!(first, second);
        assert_eq!(first, "avatars/u1/avatar.png");

        assert_ne!(avatar_key("u1", "a.png"), avatar_key("u2", "a.png"));
        assert_ne!(avatar_key("u1", "a.png"), avatar_key("u1", "a.webp"));
    }

    #[test]
    fn test_public_url_roundtrip() {
        let key = "post-images/u1/1700000000000.png";
        let url = public_url("tweets-media", "us-east-1", None, key);
        assert_eq!(
            url,
            "https://tweets-media.s3.us-east-1.amazonaws.com/post-images/u1/1700000000000.png"
        );
        assert_eq!(
            key_for_public_url("tweets-media", None, &url).as_deref(),
            Some(key)
        );
    }

    #[test]
    fn test_key_for_legacy_url_without_region() {
        let url = "https://tweets-media.s3.amazonaws.com/avatars/u1/avatar.png";
        assert_eq!(
            key_for_public_url("tweets-media", None, url).as_deref(),
            Some("avatars/u1/avatar.png")
        );
    }

    #[test]
    fn test_key_for_foreign_url_is_none() {
        assert!(key_for_public_url("tweets-media", None, "https://example.com/a.png").is_none());
        assert!(key_for_public_url(
            "tweets-media",
            None,
            "https://other-bucket.s3.amazonaws.com/a.png"
        )
        .is_none());
        assert!(
            key_for_public_url("tweets-media", None, "https://tweets-media.s3.amazonaws.com/")
                .is_none()
        );
    }

    #[test]
    fn test_custom_endpoint_roundtrip() {
        let endpoint = Some("http://localhost:9000");
        let key = "post-videos/u2/1700000000000.mp4";
        let url = public_url("tweets-media", "us-east-1", endpoint, key);
        assert_eq!(
            url,
            "http://localhost:9000/tweets-media/post-videos/u2/1700000000000.mp4"
        );
        assert_eq!(
            key_for_public_url("tweets-media", endpoint, &url).as_deref(),
            Some(key)
        );
        assert!(key_for_public_url("tweets-media", endpoint, "http://localhost:9000/other/a.png")
            .is_none());
    }
}
