pub mod dashboard;
pub mod quiz_view;
pub mod results_view;
pub mod search_view;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::celebration::ConfettiAnimation;
use crate::content::PAGES;
use crate::App;

pub(crate) const HORIZONTAL_MARGIN: u16 = 5;
pub(crate) const VERTICAL_MARGIN: u16 = 2;

/// Colors the confetti pieces cycle through
const CONFETTI_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Yellow,
    Color::Green,
    Color::Red,
    Color::Cyan,
    Color::Magenta,
];

pub fn render_home(app: &App, f: &mut Frame) {
    let palette = app.config.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(3), // header + progress indicator
            Constraint::Min(1),    // page list
            Constraint::Length(2), // key hints
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "swot · Python Learning Hub",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.tracker.indicator_line(),
            Style::default().fg(palette.dim),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let lines: Vec<Line> = PAGES
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let visited = if app.tracker.has_visited(page.page) {
                "✓"
            } else {
                " "
            };
            let score = page
                .topic
                .and_then(|t| app.tracker.score_for(t))
                .map(|s| format!("  {}/{} ({}%)", s.score, s.total, s.percentage))
                .unwrap_or_default();
            let tag = if page.topic.is_some() { "  [quiz]" } else { "" };

            let mut style = Style::default().fg(palette.text);
            if i == app.home.selected {
                style = style
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD);
            }

            Line::from(Span::styled(
                format!(" {} {}{}{}", visited, page.title, tag, score),
                style,
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), chunks[1]);

    let hints = Paragraph::new(
        "(↑/↓) select  (Enter) open  (/) search  (d) dashboard  (o) open in browser  (t) theme  (esc) quit",
    )
    .style(
        Style::default()
            .fg(palette.dim)
            .add_modifier(Modifier::ITALIC),
    )
    .alignment(Alignment::Center);
    f.render_widget(hints, chunks[2]);
}

/// Draw the active confetti pieces over whatever is already rendered
pub(crate) fn render_confetti(confetti: &ConfettiAnimation, area: Rect, buf: &mut Buffer) {
    if !confetti.is_active {
        return;
    }

    for piece in confetti.pieces.iter().filter(|p| p.is_falling()) {
        if piece.x < 0.0 || piece.y < 0.0 {
            continue;
        }
        let x = piece.x as u16;
        let y = piece.y as u16;
        if x >= area.width || y >= area.height {
            continue;
        }

        let color = CONFETTI_COLORS[piece.color_index % CONFETTI_COLORS.len()];

        // Fade pieces out as they age
        let alpha = 1.0 - (piece.age / piece.max_age);
        let style = if alpha > 0.6 {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else if alpha > 0.3 {
            Style::default().fg(color)
        } else {
            Style::default().fg(color).add_modifier(Modifier::DIM)
        };

        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_symbol(&piece.symbol.to_string());
            cell.set_style(style);
        }
    }
}

/// Rect centered in `area`, sized as percentages of it
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
