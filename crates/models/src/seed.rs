//! Records present in the catalog before any client request is served.

use crate::movie::NewMovie;

/// The three startup records, in the order they receive ids 1..=3.
pub fn seed_movies() -> Vec<NewMovie> {
    vec![
        NewMovie::fixed(
            "The Shawshank Redemption",
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "Drama",
            1994,
            9.3,
        ),
        NewMovie::fixed(
            "The Godfather",
            "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
            "Crime",
            1972,
            9.2,
        ),
        NewMovie::fixed(
            "Inception",
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea.",
            "Sci-Fi",
            2010,
            8.8,
        ),
    ]
}
