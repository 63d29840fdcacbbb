//! Color tokens and style helpers for the deck.
//!
//! Neon-on-dark terminal palette: cyan for focus and headings, green for
//! retrieved/high-relevance content, orange and pink for the lower relevance
//! tiers, steel blue for secondary text.

use ratatui::style::{Color, Modifier, Style};

use ragdeck_core::retrieval::Relevance;

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT: Color = Color::White;
pub const TEXT_DIM: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Border style for the active element (card cursor, selected query).
pub fn cursor() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
}

/// Similarity-score tinting, same thresholds the bar chart uses:
/// >0.9 retrieved-green, >0.6 info, >0.3 warning, else error.
pub fn score_style(score: f64) -> Style {
    let color = if score > 0.9 {
        POSITIVE
    } else if score > 0.6 {
        ACCENT
    } else if score > 0.3 {
        WARNING
    } else {
        NEGATIVE
    };
    Style::default().fg(color)
}

pub fn relevance_style(relevance: Relevance) -> Style {
    let color = match relevance {
        Relevance::High => POSITIVE,
        Relevance::Medium => ACCENT,
        Relevance::Low => WARNING,
        Relevance::VeryLow => NEGATIVE,
    };
    Style::default().fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_tiers() {
        assert_eq!(score_style(0.94), positive());
        assert_eq!(score_style(0.71), accent());
        assert_eq!(score_style(0.41), warning());
        assert_eq!(score_style(0.12), negative());
    }

    #[test]
    fn relevance_matches_score_tiers() {
        assert_eq!(relevance_style(Relevance::High), positive());
        assert_eq!(relevance_style(Relevance::VeryLow), negative());
    }
}
