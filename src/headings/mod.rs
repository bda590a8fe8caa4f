mod extract;
mod rank;

pub use extract::extract_headings;
pub use rank::HeadingTag;
