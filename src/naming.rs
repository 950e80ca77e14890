use std::ffi::{OsStr, OsString};
use std::path::Path;

pub const PDF_EXTENSION: &str = "pdf";

/// Case-sensitive: `paper.PDF` is not picked up.
///
/// Works on the raw file name, so non-UTF-8 names are matched exactly.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(PDF_EXTENSION))
}

/// Trims, drops leading dots and lowercases; `None` if nothing is left.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().trim_start_matches('.').to_lowercase();
    if ext.is_empty() { None } else { Some(ext) }
}

/// `dir/paper.pdf` + `png` -> `paper.png`.
///
/// Only a trailing `.pdf` is replaced. Any other name keeps its full text
/// and gets the extension appended. The stem is kept byte for byte, so
/// distinct inputs never share an output name.
pub fn output_file_name(source: &Path, extension: &str) -> OsString {
    let stem = if is_pdf_path(source) {
        source.file_stem()
    } else {
        source.file_name()
    };

    let mut name = stem.unwrap_or_default().to_os_string();
    name.push(".");
    name.push(extension);
    name
}
