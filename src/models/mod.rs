mod recommendation;
mod visualization;

pub use recommendation::{ApiMessage, Recommendation, RecommendResponse};
pub use visualization::DatasetStats;
