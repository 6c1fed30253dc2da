use super::{CrewRecord, MovieId, MovieRecord};
use std::collections::{HashMap, HashSet};

/// The two tables the API reads from, loaded once and never mutated.
#[derive(Debug, Default)]
pub struct Dataset {
    crew: Vec<CrewRecord>,
    movies: Vec<MovieRecord>,
    // movie id -> positions in `movies`, in table order
    movies_by_id: HashMap<MovieId, Vec<usize>>,
}

impl Dataset {
    pub fn new(crew: Vec<CrewRecord>, movies: Vec<MovieRecord>) -> Dataset {
        let mut movies_by_id: HashMap<MovieId, Vec<usize>> = HashMap::new();
        for (index, movie) in movies.iter().enumerate() {
            movies_by_id.entry(movie.id).or_default().push(index);
        }
        Dataset {
            crew,
            movies,
            movies_by_id,
        }
    }

    pub fn empty() -> Dataset {
        Dataset::default()
    }

    pub fn crew(&self) -> &[CrewRecord] {
        &self.crew
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// All metadata rows sharing `id`, in movies-table order.
    pub fn movies_for(&self, id: MovieId) -> impl Iterator<Item = &MovieRecord> + '_ {
        self.movies_by_id
            .get(&id)
            .into_iter()
            .flatten()
            .map(move |index| &self.movies[*index])
    }

    pub fn crew_count(&self) -> usize {
        self.crew.len()
    }

    pub fn movies_count(&self) -> usize {
        self.movies.len()
    }

    pub fn directors_count(&self) -> usize {
        self.crew
            .iter()
            .map(|c| c.name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Crew rows that the join will drop because no metadata row matches.
    pub fn unmatched_crew_count(&self) -> usize {
        self.crew
            .iter()
            .filter(|c| !self.movies_by_id.contains_key(&c.movie_id))
            .count()
    }
}
