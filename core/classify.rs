use log;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extensions whose files are inlined without any content inspection.
/// Media-type tables are unreliable or missing for these on many platforms,
/// and files of these kinds are never binary in practice.
pub const TRUSTED_EXTENSIONS: &[&str] = &["rs", "py", "json", "toml"];

/// Number of bytes sampled from the head of a file for the binary check.
const SAMPLE_LEN: u64 = 1024;

// Crate-owned extension -> media type table, versioned with the crate so
// classification does not depend on the host's mime registry.
static MEDIA_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Text
        ("txt", "text/plain"),
        ("md", "text/markdown"),
        ("html", "text/html"),
        ("htm", "text/html"),
        ("css", "text/css"),
        ("csv", "text/csv"),
        ("xml", "text/xml"),
        ("js", "text/javascript"),
        // Images
        ("png", "image/png"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("gif", "image/gif"),
        ("bmp", "image/bmp"),
        ("ico", "image/vnd.microsoft.icon"),
        ("svg", "image/svg+xml"),
        ("webp", "image/webp"),
        // Archives and executables
        ("zip", "application/zip"),
        ("gz", "application/gzip"),
        ("tar", "application/x-tar"),
        ("7z", "application/x-7z-compressed"),
        ("pdf", "application/pdf"),
        ("exe", "application/octet-stream"),
        ("bin", "application/octet-stream"),
        ("so", "application/octet-stream"),
        ("dll", "application/octet-stream"),
        ("class", "application/java-vm"),
        ("wasm", "application/wasm"),
        // Audio / video
        ("mp3", "audio/mpeg"),
        ("wav", "audio/wav"),
        ("ogg", "audio/ogg"),
        ("mp4", "video/mp4"),
        ("avi", "video/x-msvideo"),
        ("mkv", "video/x-matroska"),
        // Fonts
        ("ttf", "font/ttf"),
        ("otf", "font/otf"),
        ("woff", "font/woff"),
        ("woff2", "font/woff2"),
    ])
});

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Media type inferred from the file's extension, if the table knows it.
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    extension_of(path).and_then(|ext| MEDIA_TYPES.get(ext.as_str()).copied())
}

/// Decides whether a file's content should be inlined as text.
///
/// A trusted extension classifies as text unconditionally, before the media
/// type or the content is consulted. A known non-text media type classifies
/// as binary without reading. Everything else is sampled: a null byte within
/// the first 1024 bytes means binary. Read failures are logged and classified
/// as binary so the file is excluded rather than aborting the scan.
pub fn is_text_file(path: &Path) -> bool {
    if let Some(ext) = extension_of(path) {
        if TRUSTED_EXTENSIONS.contains(&ext.as_str()) {
            log::trace!("Trusted extension '{}': {}", ext, path.display());
            return true;
        }
    }

    if let Some(media_type) = media_type_for(path) {
        if !media_type.starts_with("text/") {
            log::trace!(
                "Non-text media type '{}': {}",
                media_type,
                path.display()
            );
            return false;
        }
    }

    let mut sample = Vec::with_capacity(SAMPLE_LEN as usize);
    let sampled =
        File::open(path).and_then(|file| file.take(SAMPLE_LEN).read_to_end(&mut sample));
    if let Err(e) = sampled {
        log::warn!("Error reading file {}: {}", path.display(), e);
        return false;
    }

    if sample.contains(&0) {
        log::trace!("Null byte in sample: {}", path.display());
        return false;
    }
    true
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
