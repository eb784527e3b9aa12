pub mod cronjobs;
pub mod search;

pub use cronjobs::{Cronjob, CronjobPatch, CronjobService, NewCronjob, RunStatus};
pub use search::{SearchHit, SearchQuery, SearchResults, SearchService};
