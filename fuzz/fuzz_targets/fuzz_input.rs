// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use folio::classify::{classify, Category};
use folio::projects::parse_project_bytes;
use folio::video::youtube_id;

#[derive(Arbitrary, Debug)]
struct Input {
    project: Vec<u8>,
    filename: String,
    url: String,
}

fuzz_target!(|input: Input| {
    if let Ok(record) = parse_project_bytes(&input.project, "fuzz") {
        assert!(!record.title.is_empty());
        assert_eq!(record.description.trim(), record.description);
    }

    assert!(Category::ALL.contains(&classify(&input.filename)));

    let _ = youtube_id(&input.url);
});
