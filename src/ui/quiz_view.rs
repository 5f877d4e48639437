use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::content::PAGES;
use crate::ui::{HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::util::option_letter;
use crate::App;

pub fn render_quiz(app: &App, f: &mut Frame) {
    let palette = app.config.theme.palette();
    let Some(ref session) = app.session else {
        return;
    };

    let question = session.current_question();
    let chosen = session.answer(session.current_index);
    // answered questions, and everything in review mode, render revealed
    let revealed = chosen.is_some() || session.review_mode;

    let area = f.area();
    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let prompt_lines =
        ((question.prompt.width() as f64 / max_chars_per_line as f64).ceil() as u16).max(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),                                // topic + progress text
            Constraint::Length(1),                                // progress gauge
            Constraint::Length(prompt_lines + 2),                 // question prompt
            Constraint::Length(question.options.len() as u16 + 1), // options
            Constraint::Min(3),                                   // explanation
            Constraint::Length(2),                                // key hints
        ])
        .split(area);

    let topic_title = PAGES
        .iter()
        .find(|p| p.topic == Some(session.topic.as_str()))
        .map(|p| p.title)
        .unwrap_or(session.topic.as_str());
    let review_tag = if session.review_mode { "  [review]" } else { "" };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{topic_title}{review_tag}"),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Question {} / {}",
                session.current_index + 1,
                session.total()
            ),
            Style::default().fg(palette.dim),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent))
        .ratio((session.current_index + 1) as f64 / session.total() as f64)
        .label("");
    f.render_widget(gauge, chunks[1]);

    let prompt = Paragraph::new(Span::styled(
        question.prompt.clone(),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::NONE).padding(
        ratatui::widgets::Padding::new(0, 0, 1, 0),
    ));
    f.render_widget(prompt, chunks[2]);

    let option_lines: Vec<Line> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let letter = option_letter(i);

            let (style, marker) = if revealed {
                if i == question.correct {
                    (
                        Style::default()
                            .fg(palette.correct)
                            .add_modifier(Modifier::BOLD),
                        " ✓",
                    )
                } else if chosen == Some(i) {
                    (
                        Style::default()
                            .fg(palette.incorrect)
                            .add_modifier(Modifier::BOLD),
                        " ✗",
                    )
                } else {
                    (Style::default().fg(palette.dim), "")
                }
            } else {
                (Style::default().fg(palette.text), "")
            };

            Line::from(vec![
                Span::styled(format!("  {letter}) "), Style::default().fg(palette.accent)),
                Span::styled(format!("{option}{marker}"), style),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(option_lines), chunks[3]);

    if revealed && app.config.show_explanations {
        let explanation = Paragraph::new(question.explanation.clone())
            .style(
                Style::default()
                    .fg(palette.dim)
                    .add_modifier(Modifier::ITALIC),
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).title("Explanation"));
        f.render_widget(explanation, chunks[4]);
    }

    let hint_text = if session.review_mode {
        "(←/→) walk answers  (Enter) back to results  (esc) home"
    } else if session.is_last() {
        "(a-d) answer  (←/→) navigate  (Enter) view results  (esc) home"
    } else {
        "(a-d) answer  (←/→) navigate  (esc) home"
    };
    let hints = Paragraph::new(hint_text)
        .style(
            Style::default()
                .fg(palette.dim)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(hints, chunks[5]);
}
