//! Test fixture creation for the crew and movies tables

use super::constants::*;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates temporary crew and movies CSV files.
/// Returns (temp_dir, crew_path, movies_path)
pub fn create_test_tables() -> Result<(TempDir, PathBuf, PathBuf)> {
    let dir = TempDir::new()?;

    let crew_path = dir.path().join("resultado_crew.csv");
    let crew = format!(
        "movie_id,name\n\
         1,{d1}\n\
         3,{d2}\n\
         2,{d1}\n\
         {unjoined},{d1}\n\
         {unjoined},{d3}\n",
        d1 = DIRECTOR_1_NAME,
        d2 = DIRECTOR_2_NAME,
        d3 = DIRECTOR_3_NAME,
        unjoined = UNJOINED_MOVIE_ID,
    );
    fs::write(&crew_path, crew)?;

    let movies_path = dir.path().join("FuncionDirector.csv");
    let movies = format!(
        "id,title,release_date,return,budget,revenue\n\
         1,{m1},2001-02-03,150.0,1000000,4000000\n\
         2,{m2},2003-04-05,0.0,500000,0\n\
         3,{m3},1999-12-31,12.345,2500000.5,1234567.8\n",
        m1 = MOVIE_1_TITLE,
        m2 = MOVIE_2_TITLE,
        m3 = MOVIE_3_TITLE,
    );
    fs::write(&movies_path, movies)?;

    Ok((dir, crew_path, movies_path))
}
