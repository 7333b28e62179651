//! Helpers shared by page scripts and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure string and file helpers live beside the browser-only page helpers so
//! the JS bindings and Leptos components call one implementation. Everything
//! except `page` runs natively and is unit tested without a browser.

pub mod api_error;
pub mod file_size;
pub mod file_type;
pub mod html;
pub mod page;
pub mod random;
pub mod text;

pub use api_error::{ApiFailure, DEFAULT_API_ERROR, api_error_message, handle_api_error};
pub use file_size::format_file_size;
pub use file_type::{AllowedTypes, FileDescriptor, validate_file_type};
pub use html::{escape_html, sanitize_html};
pub use page::csrf_token;
#[cfg(feature = "hydrate")]
pub use page::preview_image;
pub use random::{DEFAULT_RANDOM_LEN, generate_random_string, generate_random_string_with};
pub use text::{DEFAULT_TRUNCATE_LEN, capitalize_first, truncate_text};
