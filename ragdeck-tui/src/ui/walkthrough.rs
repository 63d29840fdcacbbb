//! The four-step RAG walkthrough slide — step indicator, caption, and the
//! active step's body.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use ragdeck_core::deck::{StepBody, WalkStep};

use crate::app::AppState;
use crate::theme;

use super::{chunks_step, document_step, retrieval_view, vector_step};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, steps: &[WalkStep]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // step indicator
            Constraint::Length(2), // caption
            Constraint::Min(0),    // step body
        ])
        .split(area);

    render_indicator(f, chunks[0], app.nav.step, steps);

    let Some(step) = steps.get(app.nav.step) else {
        return;
    };

    let caption = Paragraph::new(Line::from(Span::styled(
        step.caption.to_string(),
        theme::text_dim(),
    )))
    .wrap(Wrap { trim: false });
    f.render_widget(caption, chunks[1]);

    match step.body {
        StepBody::Document {
            excerpt,
            variants,
            papers,
        } => document_step::render(f, chunks[2], app, excerpt, variants, papers),
        StepBody::ChunkGallery => chunks_step::render(f, chunks[2], app),
        StepBody::VectorStore {
            clusters,
            features,
            note,
        } => vector_step::render(f, chunks[2], clusters, features, note),
        StepBody::Retrieval => retrieval_view::render(f, chunks[2], app),
    }
}

/// One segment per step: "1 Original Document  2 Chunk & Embed ...", with
/// the active step highlighted.
fn render_indicator(f: &mut Frame, area: Rect, active: usize, steps: &[WalkStep]) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, step) in steps.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ▸  ", theme::muted()));
        }
        let style = if i == active {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!("{} {}", i + 1, step.title), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
