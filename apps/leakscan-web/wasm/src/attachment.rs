//! Pre-upload validation of the attached document.
//!
//! The analysis service only extracts text from a handful of formats;
//! checking the extension here avoids a doomed round-trip and surfaces the
//! problem before anything is sent.

/// File extensions the analysis service can extract text from.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "xlsx", "xls", "txt"];

/// Lowercased extension of a filename, without the dot.
pub fn extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Whether the service supports this file type.
pub fn is_supported(name: &str) -> bool {
    match extension(name) {
        Some(ext) => SUPPORTED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extension_lowercases() {
        assert_eq!(extension("Rapport.PDF"), Some("pdf".to_string()));
        assert_eq!(extension("notes.txt"), Some("txt".to_string()));
    }

    #[test]
    fn test_extension_handles_dotless_names() {
        assert_eq!(extension("README"), None);
        assert_eq!(extension("archive."), None);
    }

    #[test]
    fn test_extension_takes_last_component() {
        assert_eq!(extension("export.2024.xlsx"), Some("xlsx".to_string()));
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("contrat.docx"));
        assert!(is_supported("salaires.XLS"));
        assert!(!is_supported("photo.png"));
        assert!(!is_supported("binaire"));
    }
}
