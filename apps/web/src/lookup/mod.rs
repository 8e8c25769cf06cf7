// Lookups behind both the HTML page and the JSON API.
// "Not found" is an outcome here, not an error.

pub mod profile;
pub mod recommendations;

pub use profile::{find_profile, CandidateProfile, ProfileLookup};
pub use recommendations::{recommend, RecommendationList, RecommendationLookup};
