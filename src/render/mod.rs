mod html;
mod markdown;

pub use html::render_html;
pub use markdown::render_markdown;
