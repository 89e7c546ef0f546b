use std::collections::HashMap;

use serde::Deserialize;

/// Aggregate dataset statistics returned by `GET /visualizations`, fetched
/// once per program run
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DatasetStats {
    pub genre_distribution: HashMap<String, u64>,
    pub type_distribution: HashMap<String, u64>,
    pub top_countries: HashMap<String, u64>,
}
