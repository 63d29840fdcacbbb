//! The closing demo slide — a prompt line above the shared retrieval view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;

use super::retrieval_view;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, prompt: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let para = Paragraph::new(Line::from(Span::styled(
        prompt.to_string(),
        theme::text_dim(),
    )))
    .wrap(Wrap { trim: false });
    f.render_widget(para, rows[0]);

    retrieval_view::render(f, rows[1], app);
}
