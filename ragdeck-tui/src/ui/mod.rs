//! Top-level UI layout — one slide per screen with a status bar.

pub mod bullets_slide;
pub mod chunks_step;
pub mod demo_slide;
pub mod document_step;
pub mod help_overlay;
pub mod retrieval_view;
pub mod status_bar;
pub mod title_slide;
pub mod vector_step;
pub mod walkthrough;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use ragdeck_core::SlideBody;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: slide area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let slide_area = chunks[0];
    let status_area = chunks[1];

    draw_slide(f, slide_area, app);
    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::Help {
        help_overlay::render(f, slide_area);
    }
}

/// Draw the current slide with its titled border.
fn draw_slide(f: &mut Frame, area: Rect, app: &AppState) {
    let slide = app.current_slide();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" {} ", slide.title))
        .title_style(theme::accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match slide.body {
        SlideBody::Title {
            subtitle,
            presenter,
            footnote,
        } => title_slide::render(f, inner, subtitle, presenter, footnote),
        SlideBody::Bullets { intro, sections } => bullets_slide::render(f, inner, intro, sections),
        SlideBody::Walkthrough { steps } => walkthrough::render(f, inner, app, steps),
        SlideBody::Demo { prompt } => demo_slide::render(f, inner, app, prompt),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}
