pub mod error;
pub mod list;
pub mod source;

pub use error::Error;
pub use list::{PAGE_SIZE_ALL, PagedList};
pub use source::{PageSource, Paginate};
