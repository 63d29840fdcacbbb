//! Presentation navigator — a pure reducer over two bounded counters plus
//! flip and query-selection sets.
//!
//! No transition can fail: out-of-range requests are silently ignored and
//! boundary moves saturate. Rendering layers own no state of their own; they
//! draw whatever [`NavState`] says.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::deck::{ChunkId, Deck, PaperId};
use crate::retrieval::ExampleQuery;

/// Navigator behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Restore a slide's step progress when navigating away and back.
    /// Off by default: leaving a slide resets its step to 0.
    pub preserve_step_progress: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            preserve_step_progress: false,
        }
    }
}

/// Everything the deck UI can ask the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    NextSlide,
    PrevSlide,
    GoToSlide(usize),
    NextStep,
    PrevStep,
    FlipPaper(PaperId),
    FlipChunk(ChunkId),
    SelectQuery(ExampleQuery),
    ClearQuery,
}

/// Navigation, flip, and query-selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// Current slide, in `[0, deck.len())`.
    pub slide: usize,
    /// Current step within the current slide, in `[0, step_count)`.
    pub step: usize,
    /// Per-slide step progress, used only when
    /// [`NavigatorConfig::preserve_step_progress`] is set.
    step_memory: Vec<usize>,
    /// Flipped research-paper cards.
    pub flipped_papers: BTreeSet<PaperId>,
    /// Flipped chunk cards.
    pub flipped_chunks: BTreeSet<ChunkId>,
    /// Active example query, if any.
    pub query: Option<ExampleQuery>,
}

impl NavState {
    /// Initial state: slide 0, step 0, nothing flipped, no query.
    pub fn new(deck: &Deck) -> Self {
        Self {
            slide: 0,
            step: 0,
            step_memory: vec![0; deck.len()],
            flipped_papers: BTreeSet::new(),
            flipped_chunks: BTreeSet::new(),
            query: None,
        }
    }

    pub fn paper_flipped(&self, id: PaperId) -> bool {
        self.flipped_papers.contains(&id)
    }

    pub fn chunk_flipped(&self, id: ChunkId) -> bool {
        self.flipped_chunks.contains(&id)
    }
}

/// Apply one action to the state, producing the next state.
///
/// Invariants upheld:
/// - `slide` stays in `[0, deck.len())`, `step` in `[0, step_count)`.
/// - Any change to `slide` or `step` clears the query selection.
/// - Without `preserve_step_progress`, any slide change lands on step 0.
pub fn reduce(deck: &Deck, config: &NavigatorConfig, state: &NavState, action: NavAction) -> NavState {
    let mut next = state.clone();
    match action {
        NavAction::GoToSlide(target) => {
            if target < deck.len() {
                enter_slide(deck, config, &mut next, target);
            }
        }
        NavAction::NextSlide => {
            if state.slide + 1 < deck.len() {
                enter_slide(deck, config, &mut next, state.slide + 1);
            }
        }
        NavAction::PrevSlide => {
            if state.slide > 0 {
                enter_slide(deck, config, &mut next, state.slide - 1);
            }
        }
        NavAction::NextStep => {
            let steps = step_count(deck, state.slide);
            if state.step + 1 < steps {
                next.step = state.step + 1;
                next.query = None;
            }
        }
        NavAction::PrevStep => {
            if state.step > 0 {
                next.step = state.step - 1;
                next.query = None;
            }
        }
        NavAction::FlipPaper(id) => {
            if !next.flipped_papers.remove(&id) {
                next.flipped_papers.insert(id);
            }
        }
        NavAction::FlipChunk(id) => {
            if !next.flipped_chunks.remove(&id) {
                next.flipped_chunks.insert(id);
            }
        }
        NavAction::SelectQuery(query) => {
            next.query = Some(query);
        }
        NavAction::ClearQuery => {
            next.query = None;
        }
    }
    next
}

fn enter_slide(deck: &Deck, config: &NavigatorConfig, state: &mut NavState, target: usize) {
    if config.preserve_step_progress {
        if let Some(slot) = state.step_memory.get_mut(state.slide) {
            *slot = state.step;
        }
        let remembered = state.step_memory.get(target).copied().unwrap_or(0);
        state.step = remembered.min(step_count(deck, target).saturating_sub(1));
    } else {
        state.step = 0;
    }
    state.slide = target;
    state.query = None;
}

fn step_count(deck: &Deck, slide: usize) -> usize {
    deck.slide(slide).map_or(1, |s| s.step_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Slide, SlideBody, StepBody, WalkStep};

    const STEPS: [WalkStep; 4] = [
        WalkStep {
            title: "a",
            caption: "",
            body: StepBody::ChunkGallery,
        },
        WalkStep {
            title: "b",
            caption: "",
            body: StepBody::ChunkGallery,
        },
        WalkStep {
            title: "c",
            caption: "",
            body: StepBody::Retrieval,
        },
        WalkStep {
            title: "d",
            caption: "",
            body: StepBody::Retrieval,
        },
    ];

    /// Three slides; the middle one is a four-step walkthrough.
    fn test_deck() -> Deck {
        Deck::new(vec![
            Slide {
                title: "one",
                body: SlideBody::Bullets {
                    intro: "",
                    sections: &[],
                },
            },
            Slide {
                title: "two",
                body: SlideBody::Walkthrough { steps: &STEPS },
            },
            Slide {
                title: "three",
                body: SlideBody::Demo { prompt: "" },
            },
        ])
        .unwrap()
    }

    fn apply(deck: &Deck, state: NavState, actions: &[NavAction]) -> NavState {
        let config = NavigatorConfig::default();
        actions
            .iter()
            .fold(state, |s, &a| reduce(deck, &config, &s, a))
    }

    #[test]
    fn initial_state() {
        let deck = test_deck();
        let state = NavState::new(&deck);
        assert_eq!(state.slide, 0);
        assert_eq!(state.step, 0);
        assert!(state.flipped_papers.is_empty());
        assert!(state.flipped_chunks.is_empty());
        assert!(state.query.is_none());
    }

    #[test]
    fn goto_out_of_range_is_a_no_op() {
        let deck = test_deck();
        let state = apply(&deck, NavState::new(&deck), &[NavAction::GoToSlide(1)]);
        let after = apply(&deck, state.clone(), &[NavAction::GoToSlide(3)]);
        assert_eq!(after, state);
        let after = apply(&deck, state.clone(), &[NavAction::GoToSlide(usize::MAX)]);
        assert_eq!(after, state);
    }

    #[test]
    fn slides_saturate_at_boundaries() {
        let deck = test_deck();
        let config = NavigatorConfig::default();
        let start = NavState::new(&deck);

        let at_start = reduce(&deck, &config, &start, NavAction::PrevSlide);
        assert_eq!(at_start.slide, 0);

        let last = apply(&deck, start, &[NavAction::GoToSlide(2), NavAction::NextSlide]);
        assert_eq!(last.slide, 2);
    }

    #[test]
    fn step_saturates_within_slide() {
        let deck = test_deck();
        let state = apply(
            &deck,
            NavState::new(&deck),
            &[
                NavAction::GoToSlide(1),
                NavAction::NextStep,
                NavAction::NextStep,
                NavAction::NextStep,
            ],
        );
        assert_eq!(state.step, 3);

        let saturated = apply(&deck, state.clone(), &[NavAction::NextStep]);
        assert_eq!(saturated.step, 3);

        let back_to_zero = apply(
            &deck,
            saturated,
            &[
                NavAction::PrevStep,
                NavAction::PrevStep,
                NavAction::PrevStep,
                NavAction::PrevStep,
            ],
        );
        assert_eq!(back_to_zero.step, 0);
    }

    #[test]
    fn slide_change_resets_step_to_zero() {
        let deck = test_deck();
        let state = apply(
            &deck,
            NavState::new(&deck),
            &[
                NavAction::GoToSlide(1),
                NavAction::NextStep,
                NavAction::NextStep,
                NavAction::NextSlide,
                NavAction::PrevSlide,
            ],
        );
        assert_eq!(state.slide, 1);
        assert_eq!(state.step, 0);
    }

    #[test]
    fn preserve_step_progress_restores_saved_step() {
        let deck = test_deck();
        let config = NavigatorConfig {
            preserve_step_progress: true,
        };
        let mut state = NavState::new(&deck);
        for action in [
            NavAction::GoToSlide(1),
            NavAction::NextStep,
            NavAction::NextStep,
            NavAction::GoToSlide(0),
            NavAction::GoToSlide(1),
        ] {
            state = reduce(&deck, &config, &state, action);
        }
        assert_eq!(state.slide, 1);
        assert_eq!(state.step, 2);
    }

    #[test]
    fn preserve_step_progress_clamps_oversized_memory() {
        let deck = test_deck();
        let config = NavigatorConfig {
            preserve_step_progress: true,
        };
        let mut state = NavState::new(&deck);
        state.step_memory[1] = 99;

        state = reduce(&deck, &config, &state, NavAction::GoToSlide(1));
        assert_eq!(state.slide, 1);
        assert_eq!(state.step, 3);
    }

    #[test]
    fn step_change_clears_query() {
        let deck = test_deck();
        let state = apply(
            &deck,
            NavState::new(&deck),
            &[
                NavAction::GoToSlide(1),
                NavAction::NextStep,
                NavAction::NextStep,
                NavAction::SelectQuery(ExampleQuery::AdverseEvents),
            ],
        );
        assert_eq!(state.query, Some(ExampleQuery::AdverseEvents));

        let stepped = apply(&deck, state.clone(), &[NavAction::NextStep]);
        assert!(stepped.query.is_none());

        let moved = apply(&deck, state, &[NavAction::NextSlide]);
        assert!(moved.query.is_none());
    }

    #[test]
    fn saturated_step_keeps_query() {
        // A NextStep at the last step changes nothing, so the selection stays.
        let deck = test_deck();
        let state = apply(
            &deck,
            NavState::new(&deck),
            &[
                NavAction::GoToSlide(1),
                NavAction::NextStep,
                NavAction::NextStep,
                NavAction::NextStep,
                NavAction::SelectQuery(ExampleQuery::InclusionCriteria),
                NavAction::NextStep,
            ],
        );
        assert_eq!(state.step, 3);
        assert_eq!(state.query, Some(ExampleQuery::InclusionCriteria));
    }

    #[test]
    fn flip_twice_restores_prior_state() {
        let deck = test_deck();
        let start = NavState::new(&deck);
        let once = apply(&deck, start.clone(), &[NavAction::FlipChunk(ChunkId(3))]);
        assert!(once.chunk_flipped(ChunkId(3)));
        let twice = apply(&deck, once, &[NavAction::FlipChunk(ChunkId(3))]);
        assert_eq!(twice, start);
    }

    #[test]
    fn paper_and_chunk_flip_sets_are_independent() {
        let deck = test_deck();
        let state = apply(
            &deck,
            NavState::new(&deck),
            &[NavAction::FlipPaper(PaperId(2)), NavAction::FlipChunk(ChunkId(2))],
        );
        assert!(state.paper_flipped(PaperId(2)));
        assert!(state.chunk_flipped(ChunkId(2)));

        let unflipped = apply(&deck, state, &[NavAction::FlipPaper(PaperId(2))]);
        assert!(!unflipped.paper_flipped(PaperId(2)));
        assert!(unflipped.chunk_flipped(ChunkId(2)));
    }

    #[test]
    fn flips_survive_navigation() {
        let deck = test_deck();
        let state = apply(
            &deck,
            NavState::new(&deck),
            &[
                NavAction::GoToSlide(1),
                NavAction::FlipChunk(ChunkId(1)),
                NavAction::GoToSlide(2),
                NavAction::GoToSlide(1),
            ],
        );
        assert!(state.chunk_flipped(ChunkId(1)));
    }
}
