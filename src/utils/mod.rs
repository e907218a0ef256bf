pub mod slug;

pub use slug::{is_valid_slug, slugify};
