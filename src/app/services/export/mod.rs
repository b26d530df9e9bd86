//! Document export formats.
//!
//! Each [`ExportFormat`] owns a file extension and a rendering rule. Saving
//! fixes up the extension, renders the content and writes it in one go.

pub mod html;
pub mod rtf;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Word-compatible rich text.
    #[default]
    Rtf,
    Html,
}

/// Knobs that affect how a document is written, not which format is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Relative filenames are placed here. `None` means the working directory.
    pub export_dir: Option<PathBuf>,
    /// Escape `<`, `>`, `&` and quotes in HTML content instead of embedding it raw.
    pub escape_html_content: bool,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Rtf, ExportFormat::Html];

    /// Extension including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Rtf => ".rtf",
            ExportFormat::Html => ".html",
        }
    }

    /// Human readable name, as shown in the format selector.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Rtf => "WORD FORMAT (.rtf)",
            ExportFormat::Html => "HTML FORMAT (.html)",
        }
    }

    /// Append this format's extension unless `filename` already ends with it.
    pub fn with_extension(self, filename: &str) -> String {
        let ext = self.extension();
        if filename.ends_with(ext) {
            filename.to_string()
        } else {
            format!("{}{}", filename, ext)
        }
    }

    /// Serialize `content`. `filename` is only used by formats that embed it.
    pub fn render(self, content: &str, filename: &str, options: &ExportOptions) -> String {
        match self {
            ExportFormat::Rtf => rtf::render(content),
            ExportFormat::Html => html::render(content, filename, options.escape_html_content),
        }
    }

    /// Write `content` to `filename` in this format and return the path written.
    pub fn save(self, content: &str, filename: &str, options: &ExportOptions) -> Result<PathBuf> {
        let filename = self.with_extension(filename);
        let path = resolve_path(&filename, options.export_dir.as_deref());
        let rendered = self.render(content, &filename, options);

        match fs::write(&path, rendered) {
            Ok(()) => {
                log::info!("Saved {} file: {}", self.label(), path.display());
                Ok(path)
            }
            Err(source) => {
                log::warn!("Export to {} failed: {}", path.display(), source);
                Err(AppError::Export { path, source })
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filename typed by the user, or `None` when it is blank. Non-blank input is
/// kept exactly as typed, surrounding spaces included.
pub fn requested_filename(input: &str) -> Option<&str> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input)
    }
}

fn resolve_path(filename: &str, export_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(filename);
    match export_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_in(dir: &Path) -> ExportOptions {
        ExportOptions {
            export_dir: Some(dir.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_extension_appended_once() {
        assert_eq!(ExportFormat::Rtf.with_extension("report"), "report.rtf");
        assert_eq!(ExportFormat::Rtf.with_extension("report.rtf"), "report.rtf");
        assert_eq!(ExportFormat::Html.with_extension("report"), "report.html");
        assert_eq!(ExportFormat::Html.with_extension("report.html"), "report.html");
    }

    #[test]
    fn test_extension_check_is_suffix_only() {
        assert_eq!(ExportFormat::Rtf.with_extension("report.rtf.bak"), "report.rtf.bak.rtf");
        assert_eq!(ExportFormat::Html.with_extension("page.htm"), "page.htm.html");
        assert_eq!(ExportFormat::Rtf.with_extension("REPORT.RTF"), "REPORT.RTF.rtf");
    }

    #[test]
    fn test_requested_filename() {
        assert_eq!(requested_filename(""), None);
        assert_eq!(requested_filename("   \t"), None);
        assert_eq!(requested_filename("report"), Some("report"));
        assert_eq!(requested_filename(" report "), Some(" report "));
    }

    #[test]
    fn test_save_keeps_untrimmed_name() {
        let dir = tempfile::tempdir().unwrap();
        let name = requested_filename("notes ").unwrap();
        let written = ExportFormat::Rtf.save("x", name, &options_in(dir.path())).unwrap();
        assert_eq!(written, dir.path().join("notes .rtf"));
    }

    #[test]
    fn test_default_is_rtf() {
        assert_eq!(ExportFormat::default(), ExportFormat::Rtf);
    }

    #[test]
    fn test_save_rtf_writes_suffixed_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(dir.path());

        let written = ExportFormat::Rtf.save("hello", "report", &options).unwrap();
        assert_eq!(written, dir.path().join("report.rtf"));
        let text = fs::read_to_string(&written).unwrap();
        assert!(text.starts_with(rtf::HEADER));
        assert!(text.ends_with("hello}"));

        let again = ExportFormat::Rtf.save("hello", "report.rtf", &options).unwrap();
        assert_eq!(again, written);
        assert!(!dir.path().join("report.rtf.rtf").exists());
    }

    #[test]
    fn test_save_html_writes_suffixed_file() {
        let dir = tempfile::tempdir().unwrap();
        let written = ExportFormat::Html.save("body", "page", &options_in(dir.path())).unwrap();
        assert_eq!(written, dir.path().join("page.html"));

        let text = fs::read_to_string(&written).unwrap();
        assert!(text.contains("<title>page.html</title>"));
        assert!(text.contains(">body</p>"));
    }

    #[test]
    fn test_save_empty_content() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(dir.path());
        for format in ExportFormat::ALL {
            let written = format.save("", "empty", &options).unwrap();
            let text = fs::read_to_string(written).unwrap();
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn test_save_into_missing_directory_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(&dir.path().join("does").join("not").join("exist"));

        let err = ExportFormat::Rtf.save("text", "report", &options).unwrap_err();
        match err {
            AppError::Export { path, .. } => assert!(path.ends_with("report.rtf")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_absolute_filename_ignores_export_dir() {
        let target = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let absolute = target.path().join("abs");

        let written = ExportFormat::Html
            .save("x", absolute.to_str().unwrap(), &options_in(elsewhere.path()))
            .unwrap();
        assert_eq!(written, target.path().join("abs.html"));
    }

    #[test]
    fn test_switching_format_does_not_touch_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(dir.path());
        let rtf_path = ExportFormat::Rtf.save("first", "doc", &options).unwrap();
        let before = fs::read_to_string(&rtf_path).unwrap();

        ExportFormat::Html.save("second", "doc", &options).unwrap();
        assert_eq!(fs::read_to_string(&rtf_path).unwrap(), before);
    }

    #[test]
    fn test_format_serialization() {
        let json = serde_json::to_string(&ExportFormat::Html).unwrap();
        assert_eq!(json, "\"Html\"");
        let parsed: ExportFormat = serde_json::from_str("\"Rtf\"").unwrap();
        assert_eq!(parsed, ExportFormat::Rtf);
    }
}
