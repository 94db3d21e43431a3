// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Project records parsed from `Key: Value` text files
//!
//! The format is a best-effort scrape, not a validating grammar:
//!
//! ```text
//! Título: Curta experimental
//! Descrição: Primeira linha
//! continua aqui
//! Youtube: https://youtu.be/abc123
//! Função: Direção de fotografia
//! Ano: 2024
//! ```
//!
//! Any input parses. Keys are matched case-insensitively with accents
//! folded, so `Descrição`, `descricao` and `DESCRICAO` are the same key.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::{debug, warn};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::assets::TextAsset;
use crate::ParseFailure;

/// Title used when a file has none
pub const UNTITLED_PROJECT: &str = "Projeto sem título";

/// A project or video the photographer took part in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub video_file: String,
    pub role: String,
    pub year: String,
}

/// Field a recognized key writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    VideoUrl,
    VideoFile,
    Role,
    Year,
}

impl Field {
    /// Look up an already normalized key
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "titulo" | "title" => Some(Field::Title),
            "descricao" | "description" => Some(Field::Description),
            "youtube" | "link" | "url" => Some(Field::VideoUrl),
            "videofile" | "arquivo" | "arquivo de video" => Some(Field::VideoFile),
            "funcao" | "role" => Some(Field::Role),
            "ano" | "year" => Some(Field::Year),
            _ => None,
        }
    }
}

fn line_pattern() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    LINE_RE.get_or_init(|| {
        Regex::new(r"^\s*([\p{L}_ ]+)\s*:\s*(.*)$").expect("valid project line regex")
    })
}

/// Lowercase, trim and strip diacritics from a key
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Parse one project text. Never fails.
pub fn parse_project(raw: &str, id: &str) -> ProjectRecord {
    let mut title = String::new();
    let mut video_url = String::new();
    let mut video_file = String::new();
    let mut role = String::new();
    let mut year = String::new();

    let mut collecting_description = false;
    let mut description: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let Some(caps) = line_pattern().captures(line) else {
            if collecting_description {
                description.push(line);
            }
            continue;
        };

        let key = normalize_key(&caps[1]);
        let value = caps.get(2).map_or("", |m| m.as_str().trim());

        // any key line ends the description, known or not
        collecting_description = false;
        let Some(field) = Field::from_key(&key) else {
            debug!("{}: ignoring unknown key '{}'", id, key);
            continue;
        };

        match field {
            Field::Title => title = value.to_string(),
            Field::Description => {
                collecting_description = true;
                description.clear();
                if !value.is_empty() {
                    description.push(value);
                }
            }
            Field::VideoUrl => video_url = value.to_string(),
            Field::VideoFile => video_file = value.to_string(),
            Field::Role => role = value.to_string(),
            Field::Year => year = value.to_string(),
        }
    }

    if title.is_empty() {
        title = UNTITLED_PROJECT.to_string();
    }

    ProjectRecord {
        id: id.to_string(),
        title,
        description: description.join("\n").trim().to_string(),
        video_url,
        video_file,
        role,
        year,
    }
}

/// Decode and parse a raw text asset
pub fn parse_project_bytes(bytes: &[u8], id: &str) -> Result<ProjectRecord, ParseFailure> {
    let raw = std::str::from_utf8(bytes).map_err(|e| ParseFailure::InvalidUtf8 {
        id: id.to_string(),
        valid_up_to: e.valid_up_to(),
    })?;
    // Editors on Windows like to leave a BOM
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    Ok(parse_project(raw, id))
}

/// Parse every text asset, dropping the ones that fail.
///
/// Order of the surviving records follows the input order.
pub fn ingest_projects(texts: &[TextAsset]) -> Vec<ProjectRecord> {
    texts
        .iter()
        .map(|t| parse_project_bytes(&t.bytes, &t.id))
        .filter_map(|result| match result {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Dropping project file: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn test_full_record() {
        let raw = "Título: X\nDescrição: line1\nline2\nYoutube: https://youtu.be/abc123";
        let record = parse_project(raw, "projects/x.txt");

        assert_eq!(record.id, "projects/x.txt");
        assert_eq!(record.title, "X");
        assert_eq!(record.description, "line1\nline2");
        assert_eq!(record.video_url, "https://youtu.be/abc123");
        assert_eq!(record.role, "");
    }

    #[test]
    fn test_all_key_aliases() {
        let raw = "TITLE: A\nlink: L\nArquivo de vídeo: clip.mp4\nFUNÇÃO: Câmera\nyear: 2023";
        let record = parse_project(raw, "a");

        assert_eq!(record.title, "A");
        assert_eq!(record.video_url, "L");
        assert_eq!(record.video_file, "clip.mp4");
        assert_eq!(record.role, "Câmera");
        assert_eq!(record.year, "2023");
    }

    #[test]
    fn test_missing_title_uses_placeholder() {
        assert_eq!(parse_project("", "a").title, UNTITLED_PROJECT);
        assert_eq!(parse_project("Titulo:   ", "a").title, UNTITLED_PROJECT);
    }

    #[test]
    fn test_description_ends_at_next_key() {
        let raw = "Descricao:\n  first\n\nsecond  \nAno: 2021\nstray line";
        let record = parse_project(raw, "a");

        assert_eq!(record.description, "first\n\nsecond");
        assert_eq!(record.year, "2021");
    }

    #[test]
    fn test_unknown_key_ends_description() {
        let raw = "Description: one\nNota: ignored\ntwo";
        assert_eq!(parse_project(raw, "a").description, "one");

        let raw = "Descrição: primeira\nObs: gravado em 16mm\nlinha solta\nAno: 2024";
        let record = parse_project(raw, "a");
        assert_eq!(record.description, "primeira");
        assert_eq!(record.year, "2024");
    }

    #[test]
    fn test_second_description_restarts_buffer() {
        let raw = "Description: old\nmore\nDescrição: new";
        assert_eq!(parse_project(raw, "a").description, "new");
    }

    #[test]
    fn test_lines_outside_description_discarded() {
        let raw = "just some text\nTitle: T\nmore text without a key";
        let record = parse_project(raw, "a");

        assert_eq!(record.title, "T");
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_crlf_input() {
        let raw = "Title: T\r\nDescription: a\r\nb\r\n";
        let record = parse_project(raw, "a");

        assert_eq!(record.title, "T");
        assert_eq!(record.description, "a\nb");
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let record = parse_project("url: https://www.youtube.com/watch?v=xyz789", "a");
        assert_eq!(record.video_url, "https://www.youtube.com/watch?v=xyz789");
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  Descrição "), "descricao");
        assert_eq!(normalize_key("FUNÇÃO"), "funcao");
        assert_eq!(normalize_key("Arquivo de Vídeo"), "arquivo de video");
    }

    #[test]
    fn test_bom_is_stripped() {
        let record = parse_project_bytes("\u{feff}Title: T".as_bytes(), "a").unwrap();
        assert_eq!(record.title, "T");
    }

    #[test]
    fn test_invalid_utf8_is_isolated() {
        let texts = vec![
            TextAsset { id: "projects/a.txt".into(), path: PathBuf::from("a.txt"), bytes: b"Title: A".to_vec() },
            TextAsset { id: "projects/bad.txt".into(), path: PathBuf::from("bad.txt"), bytes: vec![0x54, 0xff, 0xfe] },
            TextAsset { id: "projects/c.txt".into(), path: PathBuf::from("c.txt"), bytes: b"Title: C".to_vec() },
        ];

        let records = ingest_projects(&texts);
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);

        let err = parse_project_bytes(&texts[1].bytes, &texts[1].id).unwrap_err();
        assert_eq!(err, ParseFailure::InvalidUtf8 { id: "projects/bad.txt".into(), valid_up_to: 1 });
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = parse_project("Youtube: u\nVideoFile: f", "a");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["videoUrl"], "u");
        assert_eq!(json["videoFile"], "f");
    }

    proptest! {
        #[test]
        fn prop_parse_never_panics_and_has_title(raw in "\\PC*(\n\\PC*){0,8}") {
            let record = parse_project(&raw, "p");
            prop_assert!(!record.title.is_empty());
            prop_assert_eq!(record.description.trim(), record.description.as_str());
        }

        #[test]
        fn prop_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let _ = parse_project_bytes(&bytes, "p");
        }
    }
}
