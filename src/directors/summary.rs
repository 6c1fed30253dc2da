//! Per-director aggregation over the crew ⋈ movies join.

use super::DirectorError;
use crate::dataset::{Dataset, MovieRecord};

/// Numeric aggregates for one director. Formatting into strings happens only
/// when building the response, see [`super::DirectorResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorSummary<'a> {
    pub director_name: String,
    pub total_revenue: f64,
    pub average_return: f64,
    /// Mean return over movies with a strictly positive return.
    pub average_return_non_zero: f64,
    pub total_movies: usize,
    /// Movies whose return is exactly zero.
    pub total_zero_return: usize,
    /// Joined movie rows, in crew-table order.
    pub movies: Vec<&'a MovieRecord>,
}

fn mean<I: Iterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Inner join of the crew rows credited to `director_name` (case-insensitive)
/// with the movies table. A crew row matching several movie rows yields one
/// joined row per match.
pub fn get_director_summary<'a>(
    dataset: &'a Dataset,
    director_name: &str,
) -> Result<DirectorSummary<'a>, DirectorError> {
    let wanted = director_name.to_lowercase();

    let mut matched_any = false;
    let mut movies: Vec<&MovieRecord> = Vec::new();
    for crew in dataset
        .crew()
        .iter()
        .filter(|c| c.name.to_lowercase() == wanted)
    {
        matched_any = true;
        movies.extend(dataset.movies_for(crew.movie_id));
    }

    if !matched_any {
        return Err(DirectorError::NotFound(director_name.to_owned()));
    }

    // Summing an empty f64 iterator yields -0.0, start from +0.0 instead.
    let total_revenue = movies.iter().fold(0.0, |acc, m| acc + m.revenue);
    let average_return = mean(movies.iter().map(|m| m.return_pct));
    let average_return_non_zero = mean(
        movies
            .iter()
            .map(|m| m.return_pct)
            .filter(|r| *r > 0.0),
    );
    let total_zero_return = movies.iter().filter(|m| m.return_pct == 0.0).count();

    Ok(DirectorSummary {
        director_name: director_name.to_owned(),
        total_revenue,
        average_return,
        average_return_non_zero,
        total_movies: movies.len(),
        total_zero_return,
        movies,
    })
}
