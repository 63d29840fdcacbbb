//! Walkthrough step 3 — the vector store: a 2-D scatter of the chunk
//! embeddings grouped by cluster, plus the feature cards.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap};

use ragdeck_core::content::protocol::chunk;
use ragdeck_core::deck::{Cluster, InfoCard};

use crate::theme;

const CLUSTER_COLORS: [ratatui::style::Color; 3] = [theme::ACCENT, theme::WARNING, theme::POSITIVE];

pub fn render(
    f: &mut Frame,
    area: Rect,
    clusters: &[Cluster],
    features: &[InfoCard],
    note: &str,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_scatter(f, columns[0], clusters, note);
    render_features(f, columns[1], features);
}

fn render_scatter(f: &mut Frame, area: Rect, clusters: &[Cluster], note: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Embedding Space (2D projection) ")
        .title_style(theme::accent())
        .title_bottom(Line::from(Span::styled(note.to_string(), theme::text_dim())));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Project each chunk onto its first two vector components.
    let points: Vec<Vec<(f64, f64)>> = clusters
        .iter()
        .map(|cluster| {
            cluster
                .chunks
                .iter()
                .filter_map(|&id| chunk(id))
                .map(|c| (c.vector[0], c.vector[1]))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = clusters
        .iter()
        .zip(&points)
        .enumerate()
        .map(|(i, (cluster, data))| {
            Dataset::default()
                .name(cluster.label)
                .marker(symbols::Marker::Dot)
                .style(Style::default().fg(CLUSTER_COLORS[i % CLUSTER_COLORS.len()]))
                .graph_type(GraphType::Scatter)
                .data(data)
        })
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([-1.0, 1.0])
                .labels(vec![
                    Span::styled("-1.0", theme::muted()),
                    Span::styled("0", theme::muted()),
                    Span::styled("1.0", theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([-1.0, 1.0])
                .labels(vec![
                    Span::styled("-1.0", theme::muted()),
                    Span::styled("0", theme::muted()),
                    Span::styled("1.0", theme::muted()),
                ]),
        );
    f.render_widget(chart, inner);
}

fn render_features(f: &mut Frame, area: Rect, features: &[InfoCard]) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Why a vector database",
        theme::accent_bold(),
    )));
    lines.push(Line::from(""));
    for card in features {
        lines.push(Line::from(Span::styled(card.title, theme::neutral())));
        lines.push(Line::from(Span::styled(
            format!("  {}", card.body),
            theme::text(),
        )));
        if let Some(cite) = card.cite {
            lines.push(Line::from(Span::styled(
                format!("  {cite}"),
                theme::text_dim(),
            )));
        }
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
