//! Sectioned bullet slides.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use ragdeck_core::deck::Section;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, intro: &str, sections: &[Section]) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(intro.to_string(), theme::text())));
    lines.push(Line::from(""));

    for section in sections {
        lines.push(Line::from(Span::styled(
            section.heading.to_string(),
            theme::accent_bold(),
        )));
        for item in section.items {
            lines.push(Line::from(vec![
                Span::styled("  • ", theme::accent()),
                Span::styled(item.to_string(), theme::text()),
            ]));
        }
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
