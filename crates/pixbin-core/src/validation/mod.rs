//! Filename and content-type validation helpers
//!
//! `clean_path` performs a purely textual canonicalization of a client
//! supplied filename, and `probe_mime` guesses the content type from the
//! filename extension. Both run before anything touches the filesystem.

use crate::error::AppError;

/// Textually canonicalize a path: normalize separators, drop `.` segments,
/// and resolve `..` against preceding segments. Leading `..` segments that
/// cannot be resolved are kept, so a later traversal check still sees them.
///
/// This never consults the filesystem.
pub fn clean_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let mut cleaned: Vec<&str> = Vec::new();
    // Count of unresolvable leading ".." segments.
    let mut top_levels = 0usize;

    for segment in normalized.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if cleaned.is_empty() {
                    top_levels += 1;
                } else {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other),
        }
    }

    let mut out: Vec<&str> = Vec::with_capacity(top_levels + cleaned.len());
    for _ in 0..top_levels {
        out.push("..");
    }
    out.extend(cleaned);
    out.join("/")
}

/// Guess the MIME type from the filename extension and split it into
/// `(type, subtype)`, e.g. `("image", "png")`.
///
/// An extension with no known MIME mapping is a storage error: without a
/// content type the upload cannot be classified at all.
pub fn probe_mime(filename: &str) -> Result<(String, String), AppError> {
    let guess = mime_guess::from_path(filename).first().ok_or_else(|| {
        AppError::storage(format!("Could not determine content type of {}", filename))
    })?;

    Ok((guess.type_().to_string(), guess.subtype().to_string()))
}
