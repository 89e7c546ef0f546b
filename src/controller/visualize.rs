use std::collections::HashMap;

use crate::models::DatasetStats;

/// Generic message for transport or decode failures
pub const VIZ_ERROR_MESSAGE: &str = "Error loading visualizations.";

/// How a chart is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    HorizontalBar,
}

/// A renderable chart: a titled, ordered set of labeled counts
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Ordered by descending count
    pub entries: Vec<(String, u64)>,
}

/// State of the charts region, loaded exactly once per run
#[derive(Debug, Clone, PartialEq)]
pub enum ChartsState {
    Idle,
    Loading,
    Ready(Vec<ChartSpec>),
    Failed { message: String },
}

/// Charts region controller
#[derive(Debug)]
pub struct ChartsPane {
    state: ChartsState,
}

impl Default for ChartsPane {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartsPane {
    pub fn new() -> Self {
        Self {
            state: ChartsState::Idle,
        }
    }

    pub fn state(&self) -> &ChartsState {
        &self.state
    }

    pub fn begin(&mut self) {
        self.state = ChartsState::Loading;
    }

    pub fn resolve(&mut self, stats: &DatasetStats) {
        self.state = ChartsState::Ready(build_charts(stats));
    }

    /// Backend-reported failure; `message` is surfaced verbatim
    pub fn fail(&mut self, message: String) {
        self.state = ChartsState::Failed { message };
    }

    pub fn fail_generic(&mut self) {
        self.state = ChartsState::Failed {
            message: VIZ_ERROR_MESSAGE.to_string(),
        };
    }
}

/// Shape the aggregate statistics into the three dashboard charts
pub fn build_charts(stats: &DatasetStats) -> Vec<ChartSpec> {
    vec![
        ChartSpec {
            kind: ChartKind::Bar,
            title: "Genres".to_string(),
            entries: sorted_entries(&stats.genre_distribution),
        },
        ChartSpec {
            kind: ChartKind::Pie,
            title: "Types".to_string(),
            entries: sorted_entries(&stats.type_distribution),
        },
        ChartSpec {
            kind: ChartKind::HorizontalBar,
            title: "Top Countries".to_string(),
            entries: sorted_entries(&stats.top_countries),
        },
    ]
}

/// Descending by count, ties broken by label so the order is stable across
/// runs (the wire format is an unordered JSON object)
fn sorted_entries(distribution: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = distribution
        .iter()
        .map(|(label, count)| (label.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
