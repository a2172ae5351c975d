//! Looping background video behind the page content.

/// Class of the injected background container; its presence marks the page
/// as already set up.
pub const VIDEO_BACKGROUND_CLASS: &str = "video-background";
/// Class of the wrapper the header, main and footer are moved into.
pub const CONTENT_WRAPPER_CLASS: &str = "content-wrapper";
/// Shown by browsers that cannot play the video.
pub const VIDEO_FALLBACK_TEXT: &str = "您的浏览器不支持视频标签。";

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner markup of the background container: a muted, looping, inline video
/// followed by the overlay and pattern layers.
pub fn video_markup(src: &str) -> String {
    format!(
        r#"<video autoplay muted loop playsinline><source src="{}" type="video/mp4">{}</video><div class="video-overlay"></div><div class="chinese-pattern"></div>"#,
        escape_attr(src),
        VIDEO_FALLBACK_TEXT
    )
}
