pub mod assets;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use assets::stylesheet_response;
pub use html::html_response;
pub use json::json_response;
