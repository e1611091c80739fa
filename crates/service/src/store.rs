use async_trait::async_trait;
use models::{seed_movies, Movie, NewMovie};
use tokio::sync::RwLock;

/// Storage abstraction for movie records.
///
/// Absence is a normal outcome: lookups return `None`, never an error.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Assign the next id, append, and return the stored record.
    async fn insert(&self, candidate: NewMovie) -> Movie;
    async fn find_by_id(&self, id: i64) -> Option<Movie>;
    /// Snapshot of every record in insertion order.
    async fn find_all(&self) -> Vec<Movie>;
    async fn exists_by_id(&self, id: i64) -> bool;
}

struct Catalog {
    next_id: i64,
    movies: Vec<Movie>,
}

impl Catalog {
    fn empty() -> Self {
        Self { next_id: 1, movies: Vec::new() }
    }

    fn push(&mut self, candidate: NewMovie) -> Movie {
        let movie = candidate.into_movie(self.next_id);
        self.next_id += 1;
        self.movies.push(movie.clone());
        movie
    }
}

/// In-memory store. One lock guards both the id counter and the list, so
/// ids are unique and follow append order even under concurrent inserts.
pub struct InMemoryMovieStore {
    inner: RwLock<Catalog>,
}

impl InMemoryMovieStore {
    /// Empty store whose first insert receives id 1.
    pub fn new() -> Self {
        Self { inner: RwLock::new(Catalog::empty()) }
    }

    /// Store preloaded with the startup catalog (ids 1..=3).
    pub fn seeded() -> Self {
        let mut catalog = Catalog::empty();
        for movie in seed_movies() {
            catalog.push(movie);
        }
        Self { inner: RwLock::new(catalog) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.movies.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieStore {
    async fn insert(&self, candidate: NewMovie) -> Movie {
        let mut catalog = self.inner.write().await;
        catalog.push(candidate)
    }

    async fn find_by_id(&self, id: i64) -> Option<Movie> {
        let catalog = self.inner.read().await;
        catalog.movies.iter().find(|m| m.id == id).cloned()
    }

    async fn find_all(&self) -> Vec<Movie> {
        let catalog = self.inner.read().await;
        catalog.movies.clone()
    }

    async fn exists_by_id(&self, id: i64) -> bool {
        let catalog = self.inner.read().await;
        catalog.movies.iter().any(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use models::MovieInput;

    use super::*;

    fn candidate(name: &str) -> NewMovie {
        MovieInput {
            name: Some(name.into()),
            description: Some("desc".into()),
            genre: Some("Drama".into()),
            release_year: Some(2001),
            rating: None,
        }
        .validate()
        .expect("valid candidate")
    }

    #[tokio::test]
    async fn seeded_store_holds_three_fixed_records() {
        let store = InMemoryMovieStore::seeded();
        let all = store.find_all().await;
        let ids: Vec<i64> = all.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[0].name, "The Shawshank Redemption");
        assert_eq!(all[1].genre, "Crime");
        assert_eq!(all[2].release_year, 2010);
        assert_eq!(all[2].rating, Some(8.8));
    }

    #[tokio::test]
    async fn empty_store_starts_ids_at_one() {
        let store = InMemoryMovieStore::new();
        assert!(store.is_empty().await);
        let first = store.insert(candidate("First")).await;
        assert_eq!(first.id, 1);
    }

    #[tokio::test]
    async fn inserts_assign_strictly_increasing_ids() {
        let store = InMemoryMovieStore::seeded();
        let mut last = 3;
        for i in 0..10 {
            let stored = store.insert(candidate(&format!("movie-{i}"))).await;
            assert!(stored.id > last);
            last = stored.id;
        }
        assert_eq!(last, 13);
        assert_eq!(store.len().await, 13);
    }

    #[tokio::test]
    async fn find_by_id_returns_stored_record() {
        let store = InMemoryMovieStore::seeded();
        let stored = store.insert(candidate("Alien")).await;
        let found = store.find_by_id(stored.id).await.expect("found");
        assert_eq!(found, stored);
        assert!(store.find_by_id(999_999).await.is_none());
    }

    #[tokio::test]
    async fn exists_by_id_tracks_membership() {
        let store = InMemoryMovieStore::seeded();
        assert!(store.exists_by_id(1).await);
        assert!(!store.exists_by_id(4).await);
        store.insert(candidate("Fourth")).await;
        assert!(store.exists_by_id(4).await);
        assert!(!store.exists_by_id(0).await);
    }

    #[tokio::test]
    async fn find_all_returns_detached_snapshot() {
        let store = InMemoryMovieStore::seeded();
        store.insert(candidate("Extra")).await;

        let mut snapshot = store.find_all().await;
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot[3].name, "Extra");

        snapshot.clear();
        assert_eq!(store.find_all().await.len(), 4);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_never_share_an_id() {
        let store = Arc::new(InMemoryMovieStore::seeded());
        let mut handles = Vec::new();
        for i in 0..64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert(candidate(&format!("concurrent-{i}"))).await.id
            }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await.expect("join"));
        }
        ids.sort_unstable();
        let expected: Vec<i64> = (4..68).collect();
        assert_eq!(ids, expected);

        let all = store.find_all().await;
        assert_eq!(all.len(), 67);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }
}
