use super::{format_currency, format_percent, DirectorSummary};
use crate::dataset::MovieRecord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MovieInfo {
    pub title: String,
    pub release_date: String,
    #[serde(rename = "return")]
    pub return_pct: String,
    pub budget: String,
    pub revenue: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct DirectorResponse {
    pub director_name: String,
    pub total_revenue: String,
    pub average_return: String,
    pub average_return_non_zero: String,
    pub total_movies: usize,
    pub total_zero_return: usize,
    pub movies: Vec<MovieInfo>,
}

impl From<&MovieRecord> for MovieInfo {
    fn from(movie: &MovieRecord) -> Self {
        MovieInfo {
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            return_pct: format_percent(movie.return_pct),
            budget: format_currency(movie.budget),
            revenue: format_currency(movie.revenue),
        }
    }
}

impl From<&DirectorSummary<'_>> for DirectorResponse {
    fn from(summary: &DirectorSummary<'_>) -> Self {
        DirectorResponse {
            director_name: summary.director_name.clone(),
            total_revenue: format_currency(summary.total_revenue),
            average_return: format_percent(summary.average_return),
            average_return_non_zero: format_percent(summary.average_return_non_zero),
            total_movies: summary.total_movies,
            total_zero_return: summary.total_zero_return,
            movies: summary.movies.iter().map(|m| MovieInfo::from(*m)).collect(),
        }
    }
}
