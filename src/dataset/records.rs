use serde::Deserialize;

pub type MovieId = u64;

/// One row of the crew table. The table only carries directors.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct CrewRecord {
    pub movie_id: MovieId,
    pub name: String,
}

/// One row of the movies metadata table.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub release_date: String,
    /// Precomputed return, in percentage points.
    #[serde(rename = "return")]
    pub return_pct: f64,
    pub budget: f64,
    pub revenue: f64,
}
