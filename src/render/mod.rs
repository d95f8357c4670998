//! Rendering module for turning normalized documents into output formats.

mod json;
mod menu;
mod options;
mod wrap;

pub use json::{to_json, JsonFormat};
pub use menu::{bad_content_page, bad_request_page, error_page, to_menu, MenuRenderer};
pub use options::{RenderOptions, DEFAULT_WIDTH};
pub use wrap::{wrap_line, wrap_text};
