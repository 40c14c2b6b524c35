// crates/core/src/detect.rs
//! Guess the character set of a text file, using the registry to validate
//! and normalize names.
//!
//! Steps, first hit wins: an in-file `coding:`/`charset=`/`codepage:`
//! declaration naming a registered charset, a Unicode byte order mark,
//! well-formed UTF-8, then [`FALLBACK_CHARSET`]. The result is replaced by
//! the primary name of the matching registry record when there is one.

use std::path::Path;
use std::sync::OnceLock;

use regex::bytes::Regex;
use serde::Serialize;

use crate::error::{RegistryError, Result};
use crate::model::Registry;

/// Charset assumed when nothing else matches.
pub const FALLBACK_CHARSET: &str = "ISO-8859-1";

fn declaration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)(coding|charset|codepage)\s*[:=]\s*["']?\s*([^'"\s]+)\s*["']?"#).unwrap()
    })
}

/// Which step produced the charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionSource {
    Declaration,
    ByteOrderMark,
    Utf8,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub charset: String,
    pub source: DetectionSource,
}

/// Detect the charset of `bytes`.
pub fn detect(registry: &Registry, bytes: &[u8]) -> Detection {
    let (charset, source) = if let Some(declared) = declared_charset(registry, bytes) {
        (declared, DetectionSource::Declaration)
    } else if let Some(bom) = scan_bom(bytes) {
        (bom.to_string(), DetectionSource::ByteOrderMark)
    } else if std::str::from_utf8(bytes).is_ok() {
        ("UTF-8".to_string(), DetectionSource::Utf8)
    } else {
        (FALLBACK_CHARSET.to_string(), DetectionSource::Fallback)
    };

    Detection {
        charset: normalize(registry, charset),
        source,
    }
}

/// Read the file at `path` and [`detect`] its charset.
///
/// # Errors
///
/// Returns [`RegistryError::FileRead`] if the file cannot be read.
pub fn detect_file(registry: &Registry, path: &Path) -> Result<Detection> {
    let bytes = std::fs::read(path).map_err(|e| RegistryError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let detection = detect(registry, &bytes);
    log::debug!(
        "{}: {} ({:?})",
        path.display(),
        detection.charset,
        detection.source
    );
    Ok(detection)
}

/// Primary registry name for `charset`, or `charset` unchanged when unregistered.
pub fn normalize(registry: &Registry, charset: String) -> String {
    registry
        .lookup(&charset)
        .map_or(charset, |record| record.name.clone())
}

// Only the first declaration in the file counts.
fn declared_charset(registry: &Registry, bytes: &[u8]) -> Option<String> {
    let caps = declaration_re().captures(bytes)?;
    let name = std::str::from_utf8(caps.get(2)?.as_bytes()).ok()?;
    if name.chars().count() == 1 {
        return None;
    }
    if !registry.contains(name) {
        log::warn!("declared charset '{name}' is not registered, ignoring it");
        return None;
    }
    Some(name.to_string())
}

fn scan_bom(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xEF, 0xBB, 0xBF, ..] => Some("UTF-8"),
        [0x00, 0x00, 0xFE, 0xFF, ..] => Some("UTF-32BE"),
        [0xFF, 0xFE, 0x00, 0x00, ..] => Some("UTF-32LE"),
        [0x2B, 0x2F, 0x76, 0x38 | 0x39 | 0x2B | 0x2F, ..] => Some("UTF-7"),
        [0xFE, 0xFF, ..] => Some("UTF-16BE"),
        [0xFF, 0xFE, ..] => Some("UTF-16LE"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REGISTRY: &str = "\
Name: ISO_8859-1:1987
MIBenum: 4
Alias: ISO-8859-1 (preferred MIME name)
Alias: latin1

Name: UTF-8
MIBenum: 106
Alias: csUTF8

Name: UTF-16LE
MIBenum: 1014

Name: KOI8-R (preferred MIME name)
MIBenum: 2084
Alias: csKOI8R
";

    fn registry() -> Registry {
        parse_str(REGISTRY).unwrap()
    }

    #[test]
    fn declaration_is_normalized_to_primary_name() {
        let detection = detect(&registry(), b"# -*- coding: latin1 -*-\nx = 1\n");
        assert_eq!(detection.charset, "ISO_8859-1:1987");
        assert_eq!(detection.source, DetectionSource::Declaration);
    }

    #[test]
    fn declaration_forms() {
        let registry = registry();
        for text in [
            "<meta charset=\"koi8-r\">",
            "<?xml version='1.0' CHARSET = 'KOI8-R' ?>",
            "rem codepage: cskoi8r",
        ] {
            let detection = detect(&registry, text.as_bytes());
            assert_eq!(detection.charset, "KOI8-R", "{text}");
            assert_eq!(detection.source, DetectionSource::Declaration, "{text}");
        }
    }

    #[test]
    fn declaration_wins_over_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"charset=KOI8-R");
        assert_eq!(detect(&registry(), &bytes).charset, "KOI8-R");
    }

    #[test]
    fn unknown_or_single_char_declaration_falls_through() {
        let registry = registry();
        let unknown = detect(&registry, b"coding: klingon\n");
        assert_eq!(unknown.source, DetectionSource::Utf8);
        assert_eq!(unknown.charset, "UTF-8");

        let short = detect(&registry, b"charset=x\n");
        assert_eq!(short.source, DetectionSource::Utf8);
    }

    #[test]
    fn bom_detection() {
        let registry = registry();
        let cases: [(&[u8], &str); 6] = [
            (&[0xEF, 0xBB, 0xBF, b'a'], "UTF-8"),
            (&[0x00, 0x00, 0xFE, 0xFF], "UTF-32BE"),
            (&[0xFF, 0xFE, 0x00, 0x00], "UTF-32LE"),
            (&[0x2B, 0x2F, 0x76, 0x38, 0x2D], "UTF-7"),
            (&[0xFE, 0xFF, 0x00, 0x41], "UTF-16BE"),
            (&[0xFF, 0xFE, 0x41, 0x00], "UTF-16LE"),
        ];
        for (bytes, expected) in cases {
            let detection = detect(&registry, bytes);
            assert_eq!(detection.charset, expected);
            assert_eq!(detection.source, DetectionSource::ByteOrderMark);
        }
    }

    #[test]
    fn valid_utf8_without_bom() {
        let detection = detect(&registry(), "naïve café\n".as_bytes());
        assert_eq!(detection.charset, "UTF-8");
        assert_eq!(detection.source, DetectionSource::Utf8);
    }

    #[test]
    fn invalid_utf8_falls_back_to_latin1() {
        let detection = detect(&registry(), b"caf\xE9\n");
        assert_eq!(detection.source, DetectionSource::Fallback);
        assert_eq!(detection.charset, "ISO_8859-1:1987");
    }

    #[test]
    fn unregistered_result_is_kept_verbatim() {
        let detection = detect(&Registry::default(), b"caf\xE9\n");
        assert_eq!(detection.charset, FALLBACK_CHARSET);
    }

    #[test]
    fn detect_file_reads_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'h', 0x00]).unwrap();

        let detection = detect_file(&registry(), file.path()).unwrap();
        assert_eq!(detection.charset, "UTF-16LE");
        assert!(matches!(
            detect_file(&registry(), Path::new("/nonexistent/file.txt")),
            Err(RegistryError::FileRead { .. })
        ));
    }
}
