//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// A forum post mixing BBCode tags with Markdown block markers and links.
pub const RELEASE_POST: &str = "# Release notes\n\n- fixed [b]crash on start[/b]\n- see the \
                                [docs](https://example.com/docs) for [i]more detail[/i]\n\n\
                                Thanks, [color=red]everyone[/color]!";

/// Keep only the letters and digits of `text`.
pub fn alphanumerics(text: &str) -> String {
    text.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).expect("failed to create temporary file");
    f.write_all(contents.as_bytes())
        .expect("failed to write temporary file");
    f.flush().expect("failed to flush file");
    path
}
