use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use ratatui::widgets::Paragraph;

use crate::quiz::Tier;
use crate::ui::render_confetti;
use crate::App;

pub fn render_results(app: &App, f: &mut Frame) {
    let palette = app.config.theme.palette();
    let Some(outcome) = app.outcome else {
        return;
    };

    let tier_color = match outcome.tier {
        Tier::Excellent => palette.correct,
        Tier::Good => palette.accent,
        Tier::Average => ratatui::style::Color::Yellow,
        Tier::NeedsReview => palette.incorrect,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // top padding
            Constraint::Length(8), // result card
            Constraint::Min(1),    // bottom padding
            Constraint::Length(2), // key hints
        ])
        .split(f.area());

    let incorrect = outcome.total - outcome.score;
    let card = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}  {}", outcome.tier.icon(), outcome.tier.message()),
            Style::default().fg(tier_color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{}%", outcome.percentage),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("{} correct", outcome.score),
                Style::default().fg(palette.correct),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{incorrect} incorrect"),
                Style::default().fg(palette.incorrect),
            ),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(card, chunks[1]);

    let hints =
        Paragraph::new("(r) try again  (v) review answers  (d) dashboard  (o) open page  (esc) home")
            .style(
                Style::default()
                    .fg(palette.dim)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center);
    f.render_widget(hints, chunks[3]);

    let area = f.area();
    render_confetti(&app.confetti, area, f.buffer_mut());
}
