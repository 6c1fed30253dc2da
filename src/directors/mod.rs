mod error;
mod format;
mod listing;
mod response;
mod summary;

pub use error::DirectorError;
pub use format::{format_currency, format_percent};
pub use listing::list_directors;
pub use response::{DirectorResponse, MovieInfo};
pub use summary::{get_director_summary, DirectorSummary};
