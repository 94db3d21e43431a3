// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! YouTube link handling for project records

use serde::Serialize;
use url::Url;

use crate::projects::ProjectRecord;

/// Extract a YouTube video ID, or `""` when the URL has none.
///
/// Handles `youtu.be/<id>`, `watch?v=<id>`, `/shorts/<id>` and `/embed/<id>`.
pub fn youtube_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => return String::new(),
    };

    if url.host_str().is_some_and(|h| h.contains("youtu.be")) {
        return url.path().trim_start_matches('/').to_string();
    }

    if let Some((_, v)) = url.query_pairs().find(|(k, v)| k == "v" && !v.is_empty()) {
        return v.into_owned();
    }

    if let Some(segments) = url.path_segments() {
        let segments: Vec<&str> = segments.collect();
        if let Some(idx) = segments.iter().position(|s| *s == "shorts" || *s == "embed") {
            if let Some(id) = segments.get(idx + 1).filter(|s| !s.is_empty()) {
                return id.to_string();
            }
        }
    }

    String::new()
}

pub fn thumbnail_url(id: &str) -> String {
    format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id)
}

pub fn player_url(id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{}?rel=0&modestbranding=1", id)
}

/// How a project's video is presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VideoLink {
    /// Inline player with a thumbnail
    Embed { id: String, thumbnail: String, player: String },
    /// Local video file, opened externally
    File { path: String },
    /// Non-YouTube URL, opened externally
    External { url: String },
    None,
}

impl VideoLink {
    pub fn resolve(record: &ProjectRecord) -> Self {
        let id = youtube_id(&record.video_url);
        if !id.is_empty() {
            return VideoLink::Embed {
                thumbnail: thumbnail_url(&id),
                player: player_url(&id),
                id,
            };
        }

        if !record.video_file.is_empty() {
            VideoLink::File { path: record.video_file.clone() }
        } else if !record.video_url.is_empty() {
            VideoLink::External { url: record.video_url.clone() }
        } else {
            VideoLink::None
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, VideoLink::Embed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::parse_project;

    #[test]
    fn test_short_link() {
        assert_eq!(youtube_id("https://youtu.be/abc123"), "abc123");
        assert_eq!(youtube_id("https://youtu.be/abc123?t=42"), "abc123");
    }

    #[test]
    fn test_watch_query() {
        assert_eq!(youtube_id("https://www.youtube.com/watch?v=xyz789"), "xyz789");
        assert_eq!(youtube_id("https://www.youtube.com/watch?feature=share&v=xyz789"), "xyz789");
    }

    #[test]
    fn test_shorts_and_embed() {
        assert_eq!(youtube_id("https://www.youtube.com/shorts/qq11"), "qq11");
        assert_eq!(youtube_id("https://www.youtube.com/embed/ee22"), "ee22");
    }

    #[test]
    fn test_no_id() {
        assert_eq!(youtube_id("https://example.com/video"), "");
        assert_eq!(youtube_id("https://www.youtube.com/shorts/"), "");
        assert_eq!(youtube_id("https://www.youtube.com/watch?v="), "");
        assert_eq!(youtube_id("not a url"), "");
        assert_eq!(youtube_id(""), "");
    }

    #[test]
    fn test_templates() {
        assert_eq!(thumbnail_url("abc"), "https://i.ytimg.com/vi/abc/hqdefault.jpg");
        assert_eq!(player_url("abc"), "https://www.youtube-nocookie.com/embed/abc?rel=0&modestbranding=1");
    }

    #[test]
    fn test_resolve_prefers_embed() {
        let record = parse_project("Youtube: https://youtu.be/abc\nVideoFile: clip.mp4", "a");
        let link = VideoLink::resolve(&record);
        assert!(link.is_inline());
        assert_eq!(
            link,
            VideoLink::Embed {
                id: "abc".into(),
                thumbnail: thumbnail_url("abc"),
                player: player_url("abc"),
            }
        );
    }

    #[test]
    fn test_resolve_fallbacks() {
        let file = parse_project("Url: https://vimeo.com/1\nArquivo: clip.mp4", "a");
        assert_eq!(VideoLink::resolve(&file), VideoLink::File { path: "clip.mp4".into() });

        let external = parse_project("Url: https://vimeo.com/1", "a");
        assert_eq!(VideoLink::resolve(&external), VideoLink::External { url: "https://vimeo.com/1".into() });

        let none = parse_project("Title: T", "a");
        assert_eq!(VideoLink::resolve(&none), VideoLink::None);
    }
}
