//! Walkthrough step 2 — the six chunk cards in a 2x3 grid.
//!
//! Front face: chunk text and tags. Back face: the illustrative embedding
//! vector and what the embedding emphasizes.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use ragdeck_core::content::protocol::{Chunk, CHUNKS};

use crate::app::{AppState, Focus};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let under_cursor = matches!(app.focus(), Focus::Chunks(_)).then_some(app.cursor);

    for (row, pair) in CHUNKS.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        for (col, chunk) in pair.iter().enumerate() {
            let index = row * 2 + col;
            render_card(f, cols[col], app, chunk, under_cursor == Some(index));
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, app: &AppState, chunk: &Chunk, selected: bool) {
    let flipped = app.nav.chunk_flipped(chunk.id);

    let border = if selected { theme::accent_bold() } else { theme::muted() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" Chunk {} ", chunk.id.0))
        .title_style(if flipped { theme::positive() } else { theme::accent() })
        .title_bottom(Line::from(Span::styled(
            if flipped { " embedding " } else { " text " },
            theme::text_dim(),
        )));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if flipped {
        let v = chunk.vector;
        lines.push(Line::from(Span::styled(
            format!(
                "[{:+.2}, {:+.2}, {:+.2}, {:+.2}, {:+.2}, ...]",
                v[0], v[1], v[2], v[3], v[4]
            ),
            theme::neutral(),
        )));
        lines.push(Line::from(Span::styled(
            chunk.embedding_note.to_string(),
            theme::text_dim(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            chunk
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" "),
            theme::warning(),
        )));
        lines.push(Line::from(Span::styled(
            chunk.text.to_string(),
            theme::text(),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
