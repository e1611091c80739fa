use std::sync::Arc;

use models::{Movie, NewMovie};
use tracing::{debug, instrument};

use crate::store::MovieRepository;

/// Business-facing facade over a movie repository.
///
/// Carries no state of its own; every call maps to exactly one store call.
pub struct MovieService<R: MovieRepository> {
    repo: Arc<R>,
}

impl<R: MovieRepository> Clone for MovieService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: MovieRepository> MovieService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a validated movie and return it with its assigned id.
    #[instrument(skip_all, fields(name = %movie.name()))]
    pub async fn add_movie(&self, movie: NewMovie) -> Movie {
        let stored = self.repo.insert(movie).await;
        debug!(id = stored.id, "movie_added");
        stored
    }

    pub async fn get_movie_by_id(&self, id: i64) -> Option<Movie> { self.repo.find_by_id(id).await }

    pub async fn get_all_movies(&self) -> Vec<Movie> { self.repo.find_all().await }
}
