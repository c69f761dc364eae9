use once_cell::sync::Lazy;
use regex::Regex;

/// File-id segment of a Drive sharing URL
/// (`https://drive.google.com/file/d/<id>/view?usp=sharing`).
static FILE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"drive\.google\.com/file/d/([A-Za-z0-9_-]+)").unwrap());

/// Extract the file id from a Drive sharing URL.
///
/// Returns `None` for anything that does not carry the `/file/d/` segment.
/// No network call.
pub fn extract_file_id(url: &str) -> Option<String> {
    FILE_ID_RE.captures(url).map(|caps| caps[1].to_string())
}

/// Direct-view image URL for a Drive file id, usable as an `<img>` source
/// without bouncing through the sharing page. Pure string template.
pub fn direct_image_url(file_id: &str) -> String {
    format!("https://lh3.googleusercontent.com/d/{file_id}=s800?authuser=0")
}
