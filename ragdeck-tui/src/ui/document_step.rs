//! Walkthrough step 1 — the protocol excerpt beside the RAG-variant cards
//! and the flippable research-paper cards.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use ragdeck_core::deck::{InfoCard, PaperCard};

use crate::app::{AppState, Focus};
use crate::theme;

pub fn render(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    excerpt: &str,
    variants: &[InfoCard],
    papers: &[PaperCard],
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_excerpt(f, columns[0], excerpt);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(columns[1]);

    render_variants(f, rows[0], variants);
    render_papers(f, rows[1], app, papers);
}

fn render_excerpt(f: &mut Frame, area: Rect, excerpt: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" XYZ-1001 Protocol (excerpt) ")
        .title_style(theme::accent());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = excerpt
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), theme::text())))
        .collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_variants(f: &mut Frame, area: Rect, variants: &[InfoCard]) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled("RAG Variants", theme::accent_bold())));
    for card in variants {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", card.title), theme::neutral()),
            Span::styled(card.body.to_string(), theme::text_dim()),
        ]));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Paper cards stack vertically; the flipped face shows the key innovation.
fn render_papers(f: &mut Frame, area: Rect, app: &AppState, papers: &[PaperCard]) {
    if papers.is_empty() {
        return;
    }
    let per_card = 100 / papers.len() as u16;
    let constraints: Vec<Constraint> =
        papers.iter().map(|_| Constraint::Percentage(per_card)).collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let under_cursor = matches!(app.focus(), Focus::Papers(_)).then_some(app.cursor);

    for (i, paper) in papers.iter().enumerate() {
        let flipped = app.nav.paper_flipped(paper.id);
        let selected = under_cursor == Some(i);

        let border = if selected { theme::accent_bold() } else { theme::muted() };
        let face = if flipped { " back " } else { " front " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", paper.title))
            .title_style(if flipped { theme::positive() } else { theme::accent() })
            .title_bottom(Line::from(Span::styled(face, theme::text_dim())));
        let inner = block.inner(slots[i]);
        f.render_widget(block, slots[i]);

        let body = if flipped { paper.back } else { paper.front };
        let style = if flipped { theme::text() } else { theme::text_dim() };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(body.to_string(), style)))
                .wrap(Wrap { trim: false }),
            inner,
        );
    }
}
