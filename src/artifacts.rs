// Artifact access
//
// Every input to the dashboard is a pre-generated file in one directory:
// PNG charts and plain-text reports written by the analysis pipeline. This
// module owns the read side: existence checks, text decoding with a
// single-byte fallback, and PNG validation for inline embedding. Nothing
// here is allowed to fail the render pass; each problem degrades to exactly
// one warning-level notice and a missing/empty outcome.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Ordered collection of the warning notices raised during a render pass.
///
/// Each notice is logged through `tracing::warn!` as it happens and kept so
/// the finished page and the CLI summary can surface it.
#[derive(Debug, Default)]
pub struct Warnings {
    entries: Vec<String>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one warning notice.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

/// A PNG artifact validated and prepared for inline embedding.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    /// `data:image/png;base64,...` URI carrying the original file bytes
    pub data_uri: String,
}

/// Read-only view of the artifact directory.
///
/// Artifacts are addressed by exact file name; existence is checked at read
/// time, never cached.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a named artifact.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Does the named artifact currently exist?
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Read a text report.
    ///
    /// Returns `None` (with one warning) when the file is absent — the
    /// "not found" outcome. Content is decoded as UTF-8 first and as
    /// Latin-1 when the bytes are not valid UTF-8; Latin-1 is total over
    /// bytes, so no content is ever lost to the fallback. An I/O failure
    /// after the existence check degrades to an empty string plus one
    /// warning.
    pub fn read_text(&self, name: &str, warnings: &mut Warnings) -> Option<String> {
        let path = self.path(name);
        if !path.is_file() {
            warnings.push(format!("Report not found: {}", path.display()));
            return None;
        }

        match fs::read(&path) {
            Ok(bytes) => Some(decode_text(bytes, &path)),
            Err(err) => {
                warnings.push(format!("Could not read file {}: {err}", path.display()));
                Some(String::new())
            }
        }
    }

    /// Read and validate a PNG artifact for embedding.
    ///
    /// Returns `None` (with one warning) when the file is absent, unreadable,
    /// or not decodable as an image — the caller shows a placeholder or a
    /// "could not load" indicator instead.
    pub fn read_image(&self, name: &str, warnings: &mut Warnings) -> Option<EmbeddedImage> {
        let path = self.path(name);
        if !path.is_file() {
            warnings.push(format!("Image not found: {}", path.display()));
            return None;
        }

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                warnings.push(format!("Error loading image {}: {err}", path.display()));
                return None;
            }
        };

        match image::load_from_memory(&bytes) {
            Ok(decoded) => {
                let (width, height) = decoded.dimensions();
                Some(EmbeddedImage {
                    width,
                    height,
                    data_uri: format!("data:image/png;base64,{}", STANDARD.encode(&bytes)),
                })
            }
            Err(err) => {
                warnings.push(format!("Error loading image {}: {err}", path.display()));
                None
            }
        }
    }
}

/// Decode report bytes: UTF-8, then Latin-1.
fn decode_text(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("{} is not valid UTF-8, decoding as Latin-1", path.display());
            latin1(&err.into_bytes())
        }
    }
}

// Latin-1: each byte maps to the code point of the same value
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // 1x1 transparent PNG, the smallest well-formed test image
    const TINY_PNG_B64: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    fn tiny_png() -> Vec<u8> {
        STANDARD.decode(TINY_PNG_B64).expect("test image decodes")
    }

    #[test]
    fn missing_report_is_not_found_with_one_warning() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let mut warnings = Warnings::new();

        assert!(store.read_text("absent.txt", &mut warnings).is_none());
        assert_eq!(warnings.len(), 1);
        assert!(warnings.entries()[0].contains("absent.txt"));
    }

    #[test]
    fn utf8_text_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let body = "Wettest month: May\nTotal précipitation: 1083 mm (47,3 % humidité)\n";
        fs::write(dir.path().join("report.txt"), body).unwrap();

        let store = ArtifactStore::new(dir.path());
        let mut warnings = Warnings::new();
        let text = store.read_text("report.txt", &mut warnings).unwrap();

        assert_eq!(text, body);
        assert!(warnings.is_empty());
    }

    #[test]
    fn invalid_utf8_is_recovered_via_latin1() {
        let dir = tempfile::tempdir().unwrap();
        // "café" in Latin-1: 0xE9 is not valid UTF-8
        fs::write(dir.path().join("report.txt"), b"caf\xe9 0.041").unwrap();

        let store = ArtifactStore::new(dir.path());
        let mut warnings = Warnings::new();
        let text = store.read_text("report.txt", &mut warnings).unwrap();

        assert_eq!(text, "café 0.041");
        assert!(warnings.is_empty(), "fallback decode is not a warning");
    }

    #[test]
    fn every_byte_survives_the_latin1_fallback() {
        let all_bytes: Vec<u8> = (0u8..=255).collect();
        let text = latin1(&all_bytes);
        let back: Vec<u8> = text.chars().map(|c| c as u32 as u8).collect();
        assert_eq!(back, all_bytes);
    }

    #[test]
    fn missing_image_is_not_found_with_one_warning() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let mut warnings = Warnings::new();

        assert!(store.read_image("absent.png", &mut warnings).is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn valid_png_embeds_with_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("map.png"), tiny_png()).unwrap();

        let store = ArtifactStore::new(dir.path());
        let mut warnings = Warnings::new();
        let img = store.read_image("map.png", &mut warnings).unwrap();

        assert_eq!((img.width, img.height), (1, 1));
        assert!(img.data_uri.starts_with("data:image/png;base64,"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn corrupt_image_degrades_to_one_warning() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("map.png"), b"not a png at all").unwrap();

        let store = ArtifactStore::new(dir.path());
        let mut warnings = Warnings::new();

        assert!(store.read_image("map.png", &mut warnings).is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn exists_reflects_the_filesystem_at_call_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        assert!(!store.exists("late.txt"));
        fs::write(dir.path().join("late.txt"), "now").unwrap();
        assert!(store.exists("late.txt"));
    }
}
