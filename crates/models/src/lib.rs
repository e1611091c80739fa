//! Domain types for the movie catalog.
//!
//! `MovieInput` is what clients send, `NewMovie` is a candidate that passed
//! validation, and `Movie` is a stored record with its assigned id.

pub mod errors;
pub mod movie;
pub mod seed;

pub use errors::{FieldViolation, ValidationErrors};
pub use movie::{Movie, MovieInput, NewMovie};
pub use seed::seed_movies;
