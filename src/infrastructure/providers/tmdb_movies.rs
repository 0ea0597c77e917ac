//! The Movie Database search adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::http::{endpoint, fetch_json, settle};
use crate::domain::entities::MovieSummary;
use crate::domain::entities::movie::poster_url;
use crate::domain::outcome::Outcome;
use crate::domain::providers::MovieProvider;

const PROVIDER: &str = "movies";

/// Default host for The Movie Database API.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org";

#[derive(Debug, Deserialize)]
pub struct MovieSearchResponse {
    #[serde(default)]
    pub results: Vec<MovieResult>,
}

/// One upstream movie. TMDB sends `null` for several of these on sparse entries.
#[derive(Debug, Deserialize)]
pub struct MovieResult {
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<i64>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl From<MovieResult> for MovieSummary {
    fn from(m: MovieResult) -> Self {
        Self {
            image_url: poster_url(m.poster_path.as_deref().unwrap_or_default()),
            title: m.title,
            overview: m.overview.unwrap_or_default(),
            average_votes: m.vote_average.unwrap_or_default(),
            total_votes: m.vote_count.unwrap_or_default(),
            popularity: m.popularity.unwrap_or_default(),
            released_on: m.release_date.unwrap_or_default(),
        }
    }
}

pub fn map_movie_response(response: MovieSearchResponse) -> Outcome<Vec<MovieSummary>> {
    Outcome::from_items(response.results.into_iter().map(MovieSummary::from).collect())
}

/// Searches movies by title text.
pub struct TmdbMovies {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TmdbMovies {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl MovieProvider for TmdbMovies {
    async fn search(&self, query: &str) -> Outcome<Vec<MovieSummary>> {
        let request = self
            .http
            .get(endpoint(&self.base_url, "/3/search/movie"))
            .query(&[("api_key", self.api_key.as_str()), ("query", query)]);

        let outcome = match fetch_json::<MovieSearchResponse>(PROVIDER, request).await {
            Ok(response) => map_movie_response(response),
            Err(err) => Outcome::Failed(err),
        };

        settle(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::movie::POSTER_BASE_URL;

    #[test]
    fn test_maps_movie_fields() {
        let response: MovieSearchResponse = serde_json::from_str(
            r#"{
                "page": 1,
                "results": [ {
                    "title": "Sleepless in Seattle",
                    "overview": "A recently widowed man's son calls a radio talk-show...",
                    "vote_average": 6.6,
                    "vote_count": 881,
                    "poster_path": "/afkYP15OeUOD0tFEmj6VvejuOcz.jpg",
                    "popularity": 8.2,
                    "release_date": "1993-06-24"
                } ]
            }"#,
        )
        .unwrap();

        let movies = match map_movie_response(response) {
            Outcome::Found(movies) => movies,
            other => panic!("expected movies, got {other:?}"),
        };

        let movie = &movies[0];
        assert_eq!(movie.title, "Sleepless in Seattle");
        assert_eq!(movie.average_votes, 6.6);
        assert_eq!(movie.total_votes, 881);
        assert_eq!(movie.released_on, "1993-06-24");
        assert_eq!(
            movie.image_url,
            format!("{POSTER_BASE_URL}/afkYP15OeUOD0tFEmj6VvejuOcz.jpg")
        );
    }

    #[test]
    fn test_image_url_with_empty_or_null_poster() {
        let response: MovieSearchResponse = serde_json::from_str(
            r#"{ "results": [
                { "title": "Empty", "poster_path": "" },
                { "title": "Null", "poster_path": null }
            ] }"#,
        )
        .unwrap();

        let movies = map_movie_response(response).into_list().unwrap();
        assert_eq!(movies[0].image_url, POSTER_BASE_URL);
        assert_eq!(movies[1].image_url, POSTER_BASE_URL);
    }

    #[test]
    fn test_null_fields_keep_the_movie() {
        let response: MovieSearchResponse = serde_json::from_str(
            r#"{ "results": [
                { "title": "T", "overview": null, "release_date": null,
                  "vote_average": null, "vote_count": null, "popularity": null }
            ] }"#,
        )
        .unwrap();

        let movies = map_movie_response(response).into_list().unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "T");
        assert_eq!(movies[0].overview, "");
        assert_eq!(movies[0].released_on, "");
        assert_eq!(movies[0].total_votes, 0);
        assert_eq!(movies[0].image_url, POSTER_BASE_URL);
    }

    #[test]
    fn test_no_results_is_empty() {
        let response: MovieSearchResponse = serde_json::from_str(r#"{ "results": [] }"#).unwrap();
        assert_eq!(map_movie_response(response), Outcome::Empty);
    }
}
