//! Request handlers, one per [`crate::api::dispatch::Route`] variant.
//!
//! Handlers take the already-classified pieces of the request rather than
//! axum extractors; [`crate::api::dispatch::dispatch`] does the extraction.

pub mod create;
pub mod delete;
pub mod index;
pub mod list;
pub mod redirect;

pub use create::create_link_handler;
pub use delete::delete_link_handler;
pub use index::index_handler;
pub use list::list_links_handler;
pub use redirect::redirect_handler;
