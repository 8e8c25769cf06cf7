// Server-side HTML for the search page.

pub mod html;
pub mod page;

pub use page::{render_page, PageBody, SearchResults};
