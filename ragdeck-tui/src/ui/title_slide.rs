//! The opening slide — subtitle, presenter, simulation footnote.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, subtitle: &str, presenter: &str, footnote: &str) {
    let top_pad = (area.height / 3).saturating_sub(1);

    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..top_pad {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        subtitle.to_string(),
        theme::accent_bold(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(presenter.to_string(), theme::text())));
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        footnote.to_string(),
        theme::text_dim(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ? for keys, → for the next slide",
        theme::muted(),
    )));

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
