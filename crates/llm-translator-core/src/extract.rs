//! Best-effort text extraction from uploaded documents.
//!
//! Plain-text formats pass through verbatim; RTF gets a rough tag-stripping
//! pass. Binary document formats are not parsed: they yield a fixed
//! instructional placeholder (a successful result, not an error) so the UI
//! can tell the user to paste the text manually.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Placeholder returned for PDF uploads until real extraction lands.
pub const PDF_PLACEHOLDER: &str = "PDF parsing is not implemented yet. \
     Please copy the document text into the text translation area.";

/// Placeholder returned for Word uploads until real extraction lands.
pub const WORD_PLACEHOLDER: &str = "Word document parsing is not implemented yet. \
     Please copy the document text into the text translation area.";

#[allow(clippy::expect_used)]
fn rtf_control_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\[a-z]+\d*\s?").expect("valid regex"))
}

/// Extract translatable text from an uploaded file, dispatching on its
/// extension.
///
/// Returns [`Error::UnsupportedFile`] for extensions we do not recognize at
/// all; recognized-but-unparseable binary formats return their placeholder.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String> {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "txt" | "md" => Ok(String::from_utf8_lossy(data).trim().to_string()),
        "pdf" => Ok(PDF_PLACEHOLDER.to_string()),
        "doc" | "docx" => Ok(WORD_PLACEHOLDER.to_string()),
        "rtf" => Ok(strip_rtf(&String::from_utf8_lossy(data))),
        _ => Err(Error::UnsupportedFile(extension)),
    }
}

/// Rough RTF cleanup: drop control words and group braces, keep the text.
fn strip_rtf(content: &str) -> String {
    let without_controls = rtf_control_re().replace_all(content, "");
    without_controls
        .replace(['{', '}'], "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_passes_through_trimmed() {
        let content = extract_text("notes.txt", b"  hello \n").unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn md_passes_through() {
        let content = extract_text("README.md", b"# Title\n\nBody text").unwrap();
        assert_eq!(content, "# Title\n\nBody text");
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        let content = extract_text("NOTES.TXT", b"hello").unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn pdf_returns_placeholder_not_error() {
        let content = extract_text("paper.pdf", b"%PDF-1.7 binary junk").unwrap();
        assert_eq!(content, PDF_PLACEHOLDER);
    }

    #[test]
    fn word_documents_return_placeholder() {
        assert_eq!(extract_text("a.doc", b"").unwrap(), WORD_PLACEHOLDER);
        assert_eq!(extract_text("a.docx", b"").unwrap(), WORD_PLACEHOLDER);
    }

    #[test]
    fn rtf_strips_control_words_and_braces() {
        let rtf = br"{\rtf1\ansi\deff0 Hello {\b World}}";
        let content = extract_text("doc.rtf", rtf).unwrap();
        assert_eq!(content, "Hello World");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = extract_text("setup.exe", b"MZ").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFile(ext) if ext == "exe"));
    }

    #[test]
    fn filename_without_extension_is_rejected() {
        assert!(extract_text("Makefile", b"all:").is_err());
    }
}
