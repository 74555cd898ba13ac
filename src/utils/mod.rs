pub mod file_utils;
pub mod html_utils;
pub mod log_utils;
pub mod url_utils;

pub use file_utils::{ensure_dir, sanitize_filename, save_json, save_text};
pub use html_utils::{
    count_elements, css, element_selector, element_text, escape_html, extract_title,
    parse_document, select, visible_text,
};
pub use log_utils::{Diagnostic, DiagnosticLevel, DiagnosticSink, FileSink, LogSink, MemorySink};
pub use url_utils::{host_of, is_https, normalize_url};
