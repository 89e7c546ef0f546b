use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::AppCore;
use crate::controller::{similarity_percent, ChartsState, ResultsState};

use super::charts;

/// Most dropdown rows shown at once
const MAX_VISIBLE_SUGGESTIONS: usize = 6;

pub fn draw(frame: &mut Frame, core: &AppCore) {
    let suggestion_rows = core
        .search
        .suggestions()
        .len()
        .min(MAX_VISIBLE_SUGGESTIONS) as u16;
    let dropdown_height = if suggestion_rows == 0 {
        0
    } else {
        suggestion_rows + 2
    };

    let areas = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(dropdown_height),
        Constraint::Min(8),
        Constraint::Length(12),
        Constraint::Length(1),
    ])
    .split(frame.area());

    draw_input(frame, areas[0], core);
    if dropdown_height > 0 {
        draw_suggestions(frame, areas[1], core);
    }
    draw_results(frame, areas[2], core);
    draw_charts(frame, areas[3], core);
    draw_hints(frame, areas[4]);
}

fn draw_input(frame: &mut Frame, area: Rect, core: &AppCore) {
    let input = Paragraph::new(core.search.query()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search a movie or TV title"),
    );
    frame.render_widget(input, area);

    let cursor_x = area.x + 1 + core.search.query().chars().count() as u16;
    frame.set_cursor_position(Position::new(cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn draw_suggestions(frame: &mut Frame, area: Rect, core: &AppCore) {
    let items: Vec<ListItem> = core
        .search
        .suggestions()
        .iter()
        .map(|title| ListItem::new(title.as_str()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Suggestions"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(core.search.selected());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_results(frame: &mut Frame, area: Rect, core: &AppCore) {
    let block = Block::default().borders(Borders::ALL).title("Recommendations");

    let lines: Vec<Line> = match core.results.state() {
        ResultsState::Idle => vec![Line::styled(
            "Type a title and press Enter to get recommendations.",
            Style::default().fg(Color::DarkGray),
        )],
        ResultsState::Loading { title } => vec![Line::styled(
            format!("Loading recommendations for '{title}'..."),
            Style::default().fg(Color::Yellow),
        )],
        ResultsState::NoMatches { title } => vec![Line::raw(format!(
            "No recommendations found for '{title}'."
        ))],
        ResultsState::Failed { message } => vec![Line::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )],
        ResultsState::Loaded { message, items } => {
            let mut lines = vec![
                Line::styled(message.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::raw(""),
            ];
            for item in items {
                let mut spans = vec![
                    Span::styled(
                        item.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        similarity_percent(item.similarity),
                        Style::default().fg(Color::Cyan),
                    ),
                ];
                if let Some(genre) = &item.genre {
                    spans.push(Span::styled(
                        format!("  {genre}"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                lines.push(Line::from(spans));
            }
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_charts(frame: &mut Frame, area: Rect, core: &AppCore) {
    match core.charts.state() {
        ChartsState::Idle => {}
        ChartsState::Loading => {
            let notice = Paragraph::new(Line::styled(
                "Loading visualizations...",
                Style::default().fg(Color::Yellow),
            ))
            .block(Block::default().borders(Borders::ALL).title("Data Insights"));
            frame.render_widget(notice, area);
        }
        ChartsState::Failed { message } => {
            let notice = Paragraph::new(Line::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))
            .block(Block::default().borders(Borders::ALL).title("Data Insights"));
            frame.render_widget(notice, area);
        }
        ChartsState::Ready(specs) => {
            let slots = Layout::horizontal([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

            for (spec, slot) in specs.iter().zip(slots.iter()) {
                charts::render(frame, *slot, spec);
            }
        }
    }
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::styled(
        "Enter: recommend   Up/Down: suggestions   Esc: quit",
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(Paragraph::new(hints), area);
}
