pub mod sort;
pub mod summary;

pub use sort::{SortOrder, SortStrategy};
pub use summary::{Summary, TagGroup};
