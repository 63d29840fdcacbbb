//! Bottom status bar — position in the deck plus key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(" Slide {}/{}", app.nav.slide + 1, app.deck.len()),
        theme::accent(),
    ));

    let steps = app.current_slide().step_count();
    if steps > 1 {
        spans.push(Span::styled(
            format!(" · Step {}/{}", app.nav.step + 1, steps),
            theme::accent(),
        ));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        "←/→ slides  Tab steps  j/k cursor  Enter flip/select  ? help  q quit",
        theme::muted(),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
