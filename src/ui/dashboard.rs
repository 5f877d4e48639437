use chrono::Local;
use itertools::Itertools;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};
use time_humanize::{Accuracy, HumanTime, Tense};

use crate::content::PAGES;
use crate::history::TopicHistory;
use crate::theme::Palette;
use crate::App;

/// Everything one dashboard row needs, pre-joined from the progress
/// record and the answer history
pub struct TopicRowData {
    pub title: String,
    pub visited: bool,
    pub last_score: Option<(u32, u32, u8)>,
    pub taken: Option<String>,
    pub attempts: i64,
    pub miss_rate: Option<f64>,
}

/// Pure presenter for a single dashboard row
pub fn present_row(data: &TopicRowData, palette: &Palette) -> Row<'static> {
    let visited_display = if data.visited { "✓" } else { " " };

    let (score_display, score_color) = match data.last_score {
        Some((score, total, pct)) => {
            let color = if pct >= 80 {
                palette.correct
            } else if pct >= 50 {
                Color::Yellow
            } else {
                palette.incorrect
            };
            (format!("{score}/{total} ({pct}%)"), color)
        }
        None => ("—".to_string(), palette.dim),
    };

    let taken_display = data.taken.clone().unwrap_or_else(|| "—".to_string());

    let attempts_display = if data.attempts > 0 {
        data.attempts.to_string()
    } else {
        "—".to_string()
    };

    let (miss_display, miss_color) = match data.miss_rate {
        Some(rate) => {
            let color = if rate == 0.0 {
                palette.correct
            } else if rate < 25.0 {
                Color::Yellow
            } else {
                palette.incorrect
            };
            (format!("{rate:.1}%"), color)
        }
        None => ("—".to_string(), palette.dim),
    };

    Row::new(vec![
        Cell::from(visited_display),
        Cell::from(data.title.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(score_display).style(Style::default().fg(score_color)),
        Cell::from(taken_display),
        Cell::from(attempts_display),
        Cell::from(miss_display).style(Style::default().fg(miss_color)),
    ])
}

fn humanize(recorded_at: chrono::DateTime<Local>) -> String {
    let secs = (Local::now() - recorded_at).num_seconds().max(0) as u64;
    HumanTime::from(std::time::Duration::from_secs(secs)).to_text_en(Accuracy::Rough, Tense::Past)
}

pub fn render_dashboard(app: &App, f: &mut Frame) {
    let palette = app.config.theme.palette();
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Length(3), // completion gauge
            Constraint::Min(0),    // topic table
            Constraint::Length(3), // instructions
        ])
        .split(area);

    let title = Paragraph::new("Progress Dashboard")
        .block(Block::default().borders(Borders::ALL).title("swot"))
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let completion = app.tracker.completion_percentage();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Completion"))
        .gauge_style(Style::default().fg(palette.accent))
        .percent(completion as u16)
        .label(app.tracker.indicator_line());
    f.render_widget(gauge, chunks[1]);

    let history: Vec<TopicHistory> = app
        .history
        .as_ref()
        .and_then(|db| db.topic_summary().ok())
        .unwrap_or_default();

    let rows: Vec<Row> = PAGES
        .iter()
        .filter_map(|page| page.topic.map(|t| (page, t)))
        .sorted_by_key(|(page, _)| page.title)
        .map(|(page, topic)| {
            let entry = app.tracker.score_for(topic);
            let topic_history = history.iter().find(|h| h.topic == topic);

            let data = TopicRowData {
                title: page.title.to_string(),
                visited: app.tracker.has_visited(page.page),
                last_score: entry.map(|s| (s.score, s.total, s.percentage)),
                taken: entry.map(|s| humanize(s.recorded_at)),
                attempts: topic_history.map(|h| h.attempts).unwrap_or(0),
                miss_rate: topic_history.map(|h| h.miss_rate),
            };
            present_row(&data, &palette)
        })
        .collect();

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Topic"),
        Cell::from("Last Score"),
        Cell::from("Taken"),
        Cell::from("Answers"),
        Cell::from("Miss Rate"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(
        rows,
        &[
            Constraint::Length(2),
            Constraint::Length(30),
            Constraint::Length(14),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Quiz Topics"));
    f.render_widget(table, chunks[2]);

    let instructions = Paragraph::new(
        "Latest score per topic; answers and miss rate cover your full history\n(b)ack (esc)ape",
    )
    .block(Block::default().borders(Borders::ALL))
    .style(
        Style::default()
            .fg(palette.dim)
            .add_modifier(Modifier::ITALIC),
    )
    .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[3]);
}
