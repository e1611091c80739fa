//! Service layer for the movie catalog.
//! - `store` owns the in-memory collection and id assignment.
//! - `catalog` is the business-facing facade the HTTP layer talks to.

pub mod catalog;
pub mod store;

pub use catalog::MovieService;
pub use store::{InMemoryMovieStore, MovieRepository};
