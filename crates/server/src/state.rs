use std::sync::Arc;

use service::{InMemoryMovieStore, MovieService};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub movies: MovieService<InMemoryMovieStore>,
    /// Base URL advertised by the info endpoint, without trailing slash.
    pub public_url: Arc<str>,
}

impl ServerState {
    /// State backed by a freshly seeded in-memory catalog.
    pub fn seeded(public_url: impl Into<Arc<str>>) -> Self {
        Self {
            movies: MovieService::new(Arc::new(InMemoryMovieStore::seeded())),
            public_url: public_url.into(),
        }
    }
}
