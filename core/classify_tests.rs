use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn trusted_extension_is_text_even_with_null_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("embedded.rs");
    fs::write(&path, b"fn main() {}\x00\x00").unwrap();
    assert!(is_text_file(&path));
}

#[test]
fn trusted_extension_check_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("SCRIPT.PY");
    fs::write(&path, b"\x00").unwrap();
    assert!(is_text_file(&path));
}

#[test]
fn unknown_extension_without_null_bytes_is_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.xyz");
    fs::write(&path, "plain text content").unwrap();
    assert!(is_text_file(&path));
}

#[test]
fn null_byte_in_sample_is_binary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.xyz");
    fs::write(&path, b"looks fine until\x00here").unwrap();
    assert!(!is_text_file(&path));
}

#[test]
fn null_byte_past_the_sample_window_is_not_seen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tail.xyz");
    let mut content = vec![b'a'; 2048];
    content.push(0);
    fs::write(&path, &content).unwrap();
    assert!(is_text_file(&path));
}

#[test]
fn zero_byte_file_with_unknown_extension_is_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.unknownext");
    fs::write(&path, "").unwrap();
    assert!(is_text_file(&path));
}

#[test]
fn known_binary_media_type_is_rejected_without_sampling() {
    let dir = tempdir().unwrap();
    // Content is pure text; the media type alone decides.
    let path = dir.path().join("image.png");
    fs::write(&path, "not actually an image").unwrap();
    assert!(!is_text_file(&path));
}

#[test]
fn text_media_type_still_goes_through_the_null_byte_check() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fake.txt");
    fs::write(&path, b"text type, binary body\x00").unwrap();
    assert!(!is_text_file(&path));
}

#[test]
fn unreadable_file_is_classified_as_not_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vanished.xyz");
    assert!(!is_text_file(&path));
}

#[test]
fn no_extension_falls_through_to_sampling() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Makefile");
    fs::write(&path, "all:\n\techo ok\n").unwrap();
    assert!(is_text_file(&path));
}

#[test]
fn media_type_lookup_uses_the_static_table() {
    assert_eq!(media_type_for(Path::new("a.png")), Some("image/png"));
    assert_eq!(media_type_for(Path::new("a.md")), Some("text/markdown"));
    assert_eq!(media_type_for(Path::new("a.xyz")), None);
    assert_eq!(media_type_for(Path::new("noext")), None);
}
