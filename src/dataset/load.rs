//! Dataset loading functionality

use super::{CrewRecord, Dataset, MovieRecord};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{info, warn};

fn read_table<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open table {}", path.display()))?;

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<T>().enumerate() {
        // +2: 1-based, and the header takes the first line.
        let row = result.with_context(|| {
            format!("Malformed record {} in {}", index + 2, path.display())
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Loads both tables fully into memory. Any failure aborts the whole load,
/// there is no partially loaded dataset.
pub fn load_dataset<P: AsRef<Path>, Q: AsRef<Path>>(crew_path: P, movies_path: Q) -> Result<Dataset> {
    info!("Loading crew table from {:?}...", crew_path.as_ref());
    let crew: Vec<CrewRecord> = read_table(crew_path)?;

    info!("Loading movies table from {:?}...", movies_path.as_ref());
    let movies: Vec<MovieRecord> = read_table(movies_path)?;

    let dataset = Dataset::new(crew, movies);

    info!(
        "Dataset has:\n{} crew rows\n{} movies\n{} directors",
        dataset.crew_count(),
        dataset.movies_count(),
        dataset.directors_count()
    );
    let unmatched = dataset.unmatched_crew_count();
    if unmatched > 0 {
        warn!(
            "{} crew rows reference movies missing from the movies table, they will be ignored.",
            unmatched
        );
    }

    Ok(dataset)
}
