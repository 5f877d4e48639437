use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::centered_rect;
use crate::App;

pub fn render_search_overlay(app: &App, f: &mut Frame) {
    let palette = app.config.theme.palette();
    let area = centered_rect(60, 60, f.area());

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Search")
        .style(Style::default().fg(palette.text));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // input line
            Constraint::Min(1),    // results
            Constraint::Length(1), // hint
        ])
        .split(inner);

    let input_line = if app.search.query.is_empty() {
        Line::from(Span::styled(
            "Search topics, units, questions...",
            Style::default().fg(palette.dim),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                app.search.query.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(palette.accent)),
        ])
    };
    f.render_widget(
        Paragraph::new(input_line).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    if !app.search.query.trim().is_empty() && app.search.results.is_empty() {
        f.render_widget(
            Paragraph::new("No results found").style(Style::default().fg(palette.dim)),
            chunks[1],
        );
    } else {
        let lines: Vec<Line> = app
            .search
            .results
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut style = Style::default().fg(palette.text);
                if i == app.search.selected {
                    style = style
                        .bg(palette.highlight_bg)
                        .add_modifier(Modifier::BOLD);
                }
                Line::from(Span::styled(format!(" {} ", entry.title), style))
            })
            .collect();
        f.render_widget(Paragraph::new(lines), chunks[1]);
    }

    let hint = Paragraph::new("(↑/↓) select  (Enter) open  ·  Press ESC to close").style(
        Style::default()
            .fg(palette.dim)
            .add_modifier(Modifier::ITALIC),
    );
    f.render_widget(hint, chunks[2]);
}
