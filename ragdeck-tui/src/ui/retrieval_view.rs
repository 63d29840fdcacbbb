//! The retrieval view — example-query palette, similarity ranking, and the
//! cited response. Shared by the walkthrough's retrieval step and the demo
//! slide.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use ragdeck_core::content::protocol::chunk;
use ragdeck_core::retrieval::{ranking, respond, ExampleQuery};

use crate::app::{AppState, Focus};
use crate::theme;

const BAR_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_palette(f, columns[0], app);

    match app.nav.query {
        Some(query) => render_result(f, columns[1], query),
        None => render_idle(f, columns[1]),
    }
}

fn render_palette(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Example Queries ")
        .title_style(theme::accent());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let under_cursor = matches!(app.focus(), Focus::Queries(_)).then_some(app.cursor);

    let mut lines: Vec<Line> = Vec::new();
    for (i, query) in ExampleQuery::ALL.iter().enumerate() {
        let active = app.nav.query == Some(*query);
        let marker = if active { "● " } else { "  " };
        let style = if under_cursor == Some(i) {
            theme::cursor()
        } else if active {
            theme::accent_bold()
        } else {
            theme::text()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::positive()),
            Span::styled(query.text(), style),
        ]));
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_idle(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Select a query with j/k and Enter to run the simulated retrieval.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Every score and answer is a lookup into static tables; nothing is",
            theme::text_dim(),
        )),
        Line::from(Span::styled(
            "embedded or generated live.",
            theme::text_dim(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_result(f: &mut Frame, area: Rect, query: ExampleQuery) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_ranking(f, rows[0], query);
    render_response(f, rows[1], query);
}

/// One bar per chunk, ordered by descending similarity.
fn render_ranking(f: &mut Frame, area: Rect, query: ExampleQuery) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Similarity Ranking ")
        .title_style(theme::accent());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for row in ranking(query) {
        let filled = (row.score * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(filled.min(BAR_WIDTH)),
            "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
        );
        lines.push(Line::from(vec![
            Span::styled(format!("Chunk {}  ", row.chunk.0), theme::text()),
            Span::styled(bar, theme::score_style(row.score)),
            Span::styled(format!("  {:.2}  ", row.score), theme::score_style(row.score)),
            Span::styled(
                format!("{:<8}", row.relevance.label()),
                theme::relevance_style(row.relevance),
            ),
            Span::styled(
                row.reasons.first().copied().unwrap_or_default(),
                theme::text_dim(),
            ),
        ]));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_response(f: &mut Frame, area: Rect, query: ExampleQuery) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Response ")
        .title_style(theme::accent());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bundle = respond(query.text());

    let mut lines: Vec<Line> = Vec::new();
    for text_line in bundle.answer.lines() {
        lines.push(Line::from(Span::styled(text_line.to_string(), theme::text())));
    }

    if !bundle.cited.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Sources", theme::accent_bold())));
        let rows = ranking(query);
        for &id in bundle.cited {
            let tags = chunk(id)
                .map(|c| c.tags.join(", "))
                .unwrap_or_default();
            let score = rows
                .iter()
                .find(|r| r.chunk == id)
                .map(|r| format!("{:.2}", r.score))
                .unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(format!("  Chunk {} ", id.0), theme::positive()),
                Span::styled(format!("({tags}) "), theme::warning()),
                Span::styled(format!("similarity {score}"), theme::text_dim()),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
