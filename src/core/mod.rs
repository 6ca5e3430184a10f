pub mod csv_output;
pub mod etl;
pub mod fetcher;
pub mod resolver;

pub use crate::domain::model::{CompanyDirectory, CompanyRecord, ReviewRecord, RunOutcome};
pub use crate::domain::ports::{Pipeline, PlacesSource, Storage};
pub use crate::utils::error::Result;
