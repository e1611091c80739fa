use serde::{Deserialize, Serialize};

use crate::errors::{FieldViolation, ValidationErrors};

pub const MIN_RELEASE_YEAR: i32 = 1900;
pub const MAX_RELEASE_YEAR: i32 = 2100;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// A movie record as held by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub genre: String,
    pub release_year: i32,
    pub rating: Option<f64>,
}

/// Create request body. Every field is optional here so that a missing
/// field surfaces as a violation instead of a deserialisation failure.
/// A client-supplied `id` is not part of the shape and is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// A candidate record that passed validation and is waiting for an id.
///
/// Only `MovieInput::validate` and the built-in seed catalog produce one.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMovie {
    name: String,
    description: String,
    genre: String,
    release_year: i32,
    rating: Option<f64>,
}

impl MovieInput {
    /// Check every field constraint and collect all violations.
    pub fn validate(self) -> Result<NewMovie, ValidationErrors> {
        let mut violations = Vec::new();

        let name = required_text(self.name, "name", "Movie name is required", &mut violations);
        let description =
            required_text(self.description, "description", "Description is required", &mut violations);
        let genre = required_text(self.genre, "genre", "Genre is required", &mut violations);

        let release_year = match self.release_year {
            None => {
                violations.push(FieldViolation::new("releaseYear", "Release year is required"));
                None
            }
            Some(y) if y < MIN_RELEASE_YEAR => {
                violations.push(FieldViolation::new("releaseYear", "Release year must be after 1900"));
                None
            }
            Some(y) if y > MAX_RELEASE_YEAR => {
                violations.push(FieldViolation::new("releaseYear", "Release year must be before 2100"));
                None
            }
            Some(y) => Some(y),
        };

        if let Some(r) = self.rating {
            if !r.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&r) {
                violations.push(FieldViolation::new("rating", "Rating must be between 0 and 10"));
            }
        }

        match (name, description, genre, release_year) {
            (Some(name), Some(description), Some(genre), Some(release_year)) if violations.is_empty() => {
                Ok(NewMovie { name, description, genre, release_year, rating: self.rating })
            }
            _ => Err(ValidationErrors(violations)),
        }
    }
}

fn required_text(
    value: Option<String>,
    field: &str,
    message: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            violations.push(FieldViolation::new(field, message));
            None
        }
    }
}

impl NewMovie {
    /// Fixed records known to satisfy every constraint.
    pub(crate) fn fixed(name: &str, description: &str, genre: &str, release_year: i32, rating: f64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            genre: genre.to_string(),
            release_year,
            rating: Some(rating),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// Attach the id assigned by the store.
    pub fn into_movie(self, id: i64) -> Movie {
        Movie {
            id,
            name: self.name,
            description: self.description,
            genre: self.genre,
            release_year: self.release_year,
            rating: self.rating,
        }
    }
}
