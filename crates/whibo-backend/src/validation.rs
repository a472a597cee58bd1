use std::sync::LazyLock;

use regex::Regex;

/// Optional scheme and `www.`, a known host and top-level token, an optional
/// path prefix, then the 11-character video identifier.
static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?(youtube|youtu|youtube-nocookie)\.(com|be)/(watch\?v=|embed/|v/|.+\?v=)?([^&=%\?]{11})",
    )
    .expect("video URL pattern should compile")
});

/// Returns whether `text` looks like a link to a single video.
///
/// Purely syntactic; nothing is fetched. Anything after the identifier is
/// ignored.
pub fn is_valid_video_url(text: &str) -> bool {
    VIDEO_URL_RE.is_match(text)
}
