//! Deck model — slides, walkthrough steps, and card identifiers.
//!
//! A deck is an ordered, immutable sequence of slides fixed at startup.
//! Slide content is represented as tagged variants rather than dispatch on
//! renderer identity, so the navigation layer can be tested without any
//! rendering code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for a flippable chunk card. Chunk ids match the chunk numbers
/// shown on screen (1-based, as in the protocol excerpt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChunkId(pub u8);

/// Identifier for a flippable research-paper card. Separate identifier space
/// from [`ChunkId`]; paper 1 and chunk 1 are unrelated cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaperId(pub u8);

/// Deck construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck has no slides")]
    Empty,
    #[error("walkthrough slide {0} has no steps")]
    NoSteps(usize),
}

/// A small titled text card (RAG variants, vector-store features).
#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
    /// Citation footer, when the card references published work.
    pub cite: Option<&'static str>,
}

/// A flippable research-paper card: front shows the citation, back shows the
/// key innovation.
#[derive(Debug, Clone, Copy)]
pub struct PaperCard {
    pub id: PaperId,
    pub title: &'static str,
    pub front: &'static str,
    pub back: &'static str,
}

/// A named cluster of chunks in the vector-space view.
#[derive(Debug, Clone, Copy)]
pub struct Cluster {
    pub label: &'static str,
    pub chunks: &'static [ChunkId],
}

/// A heading plus bullet items on a bullets slide.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

/// One stage of the walkthrough slide.
#[derive(Debug, Clone, Copy)]
pub struct WalkStep {
    pub title: &'static str,
    pub caption: &'static str,
    pub body: StepBody,
}

/// Content payload of a walkthrough step.
#[derive(Debug, Clone, Copy)]
pub enum StepBody {
    /// The source document, RAG-variant cards, and flippable paper cards.
    Document {
        excerpt: &'static str,
        variants: &'static [InfoCard],
        papers: &'static [PaperCard],
    },
    /// Flippable chunk cards (front: text + tags, back: vector + strategy).
    ChunkGallery,
    /// Vector database view: 2-D projection clusters and feature cards.
    VectorStore {
        clusters: &'static [Cluster],
        features: &'static [InfoCard],
        note: &'static str,
    },
    /// Query palette, similarity ranking, and the cited response.
    Retrieval,
}

/// Content payload of a slide.
#[derive(Debug, Clone, Copy)]
pub enum SlideBody {
    Title {
        subtitle: &'static str,
        presenter: &'static str,
        footnote: &'static str,
    },
    Bullets {
        intro: &'static str,
        sections: &'static [Section],
    },
    Walkthrough {
        steps: &'static [WalkStep],
    },
    /// Full-screen interactive query demo (same machinery as the
    /// retrieval step, without the walkthrough chrome).
    Demo {
        prompt: &'static str,
    },
}

/// One top-level screen of the deck.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub title: &'static str,
    pub body: SlideBody,
}

impl Slide {
    /// Number of sub-steps. Non-walkthrough slides are a single step.
    pub fn step_count(&self) -> usize {
        match self.body {
            SlideBody::Walkthrough { steps } => steps.len(),
            _ => 1,
        }
    }

    /// Walkthrough steps, or an empty slice for single-step slides.
    pub fn steps(&self) -> &'static [WalkStep] {
        match self.body {
            SlideBody::Walkthrough { steps } => steps,
            _ => &[],
        }
    }
}

/// Ordered, immutable sequence of slides.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Validate and build a deck. A deck must have at least one slide and
    /// every walkthrough slide must have at least one step.
    pub fn new(slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        for (i, slide) in slides.iter().enumerate() {
            if slide.step_count() == 0 {
                return Err(DeckError::NoSteps(i));
            }
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
