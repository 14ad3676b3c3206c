// src/infrastructure/cover_image.rs
//
// Cover art loading and fingerprinting
//
// Covers are stored as raw bytes next to the entry. Clients receive a SHA-256
// digest instead of the blob so they can cache covers by content.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Largest cover accepted, in bytes
pub const MAX_COVER_BYTES: u64 = 10 * 1024 * 1024;

/// Leading bytes of the image formats accepted as covers
const IMAGE_SIGNATURES: [(&str, &[u8]); 4] = [
    ("png", b"\x89PNG\r\n\x1a\n"),
    ("jpeg", b"\xff\xd8\xff"),
    ("gif", b"GIF8"),
    ("bmp", b"BM"),
];

/// Image format of `bytes`, from its magic number
pub fn sniff_image_format(bytes: &[u8]) -> Option<&'static str> {
    // RIFF....WEBP
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("webp");
    }

    IMAGE_SIGNATURES
        .iter()
        .find(|(_, magic)| bytes.starts_with(magic))
        .map(|(format, _)| *format)
}

/// Read a cover image from disk, enforcing the size limit and an image type
pub fn load_cover(path: &Path) -> AppResult<Vec<u8>> {
    let metadata = fs::metadata(path)?;

    if !metadata.is_file() {
        return Err(AppError::Validation(format!(
            "Cover path is not a file: {}",
            path.display()
        )));
    }

    if metadata.len() > MAX_COVER_BYTES {
        return Err(AppError::Validation(format!(
            "Cover image is {} bytes, limit is {}",
            metadata.len(),
            MAX_COVER_BYTES
        )));
    }

    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Cover image is empty".to_string()));
    }

    if sniff_image_format(&bytes).is_none() {
        return Err(AppError::Validation(format!(
            "Cover is not a PNG, JPEG, GIF, WebP or BMP image: {}",
            path.display()
        )));
    }

    Ok(bytes)
}

/// Lowercase hex SHA-256 of the cover bytes
pub fn cover_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable_hex() {
        let digest = cover_digest(b"abc");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_load_cover_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();

        assert_eq!(load_cover(&path).unwrap().len(), 16);
    }

    #[test]
    fn test_load_cover_rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        fs::write(&path, b"just some text").unwrap();

        assert!(matches!(load_cover(&path), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_sniff_image_format() {
        assert_eq!(sniff_image_format(b"\xff\xd8\xff\xe0\0\x10JFIF"), Some("jpeg"));
        assert_eq!(sniff_image_format(b"GIF89a"), Some("gif"));
        assert_eq!(sniff_image_format(b"RIFF\x24\0\0\0WEBPVP8 "), Some("webp"));
        assert_eq!(sniff_image_format(b"RIFF\x24\0\0\0WAVEfmt "), None);
        assert_eq!(sniff_image_format(b"\x89PNG"), None);
        assert_eq!(sniff_image_format(b"%PDF-1.7"), None);
    }

    #[test]
    fn test_load_cover_rejects_empty_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.jpg");
        fs::write(&empty, b"").unwrap();

        assert!(matches!(load_cover(&empty), Err(AppError::Validation(_))));
        assert!(matches!(
            load_cover(&dir.path().join("nope.jpg")),
            Err(AppError::Io(_))
        ));
        assert!(matches!(load_cover(dir.path()), Err(AppError::Validation(_))));
    }
}
