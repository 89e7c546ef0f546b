//! Chart rendering for the dataset dashboard.
//!
//! Genre counts draw as a vertical bar chart, type counts as a proportional
//! share breakdown (the terminal stand-in for a pie chart), and country
//! counts as horizontal bars.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::controller::{ChartKind, ChartSpec};

/// Swatch colors for share breakdowns, cycled when there are more entries
const SHARE_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
];

pub fn render(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    match spec.kind {
        ChartKind::Bar => render_bar(frame, area, spec),
        ChartKind::Pie => render_shares(frame, area, spec),
        ChartKind::HorizontalBar => render_horizontal(frame, area, spec),
    }
}

fn render_bar(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let data: Vec<(&str, u64)> = spec
        .entries
        .iter()
        .take(8)
        .map(|(label, count)| (label.as_str(), *count))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(spec.title.as_str()),
        )
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .data(&data);

    frame.render_widget(chart, area);
}

fn render_shares(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let total: u64 = spec.entries.iter().map(|(_, count)| count).sum();

    let lines: Vec<Line> = spec
        .entries
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            let color = SHARE_COLORS[i % SHARE_COLORS.len()];
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!(
                    "{label}: {count} ({:.1}%)",
                    share_percent(*count, total)
                )),
            ])
        })
        .collect();

    let chart = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(spec.title.as_str()),
    );
    frame.render_widget(chart, area);
}

fn render_horizontal(frame: &mut Frame, area: Rect, spec: &ChartSpec) {
    let max = spec.entries.iter().map(|(_, count)| *count).max().unwrap_or(0);
    // Label column, bar, and the count readout have to share the inner width
    let bar_budget = area.width.saturating_sub(22);

    let lines: Vec<Line> = spec
        .entries
        .iter()
        .take(usize::from(area.height.saturating_sub(2)))
        .map(|(label, count)| {
            let filled = bar_width(*count, max, bar_budget);
            Line::from(vec![
                Span::raw(format!("{:<12.12} ", label)),
                Span::styled(
                    "█".repeat(usize::from(filled)),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let chart = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(spec.title.as_str()),
    );
    frame.render_widget(chart, area);
}

/// Width of the filled portion of a horizontal bar, scaled to the widest one
fn bar_width(count: u64, max: u64, budget: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    ((count as f64 / max as f64) * f64::from(budget)).round() as u16
}

/// Percentage share of `count` in `total`
fn share_percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
