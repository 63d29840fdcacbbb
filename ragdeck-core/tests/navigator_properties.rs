//! Property tests for navigator invariants.
//!
//! Uses proptest to verify:
//! 1. Bounds — slide and step indices stay in range under any action sequence
//! 2. Saturation — boundary moves are no-ops, never wraparound
//! 3. Reset — any slide change lands on step 0 (default config)
//! 4. Involution — toggling the same card twice restores the flip set

use proptest::prelude::*;
use ragdeck_core::deck::{ChunkId, PaperId};
use ragdeck_core::navigator::{reduce, NavAction, NavState, NavigatorConfig};
use ragdeck_core::retrieval::ExampleQuery;
use ragdeck_core::{content, Deck};

fn demo_deck() -> Deck {
    content::deck().expect("authored deck is valid")
}

fn arb_action() -> impl Strategy<Value = NavAction> {
    prop_oneof![
        Just(NavAction::NextSlide),
        Just(NavAction::PrevSlide),
        (0usize..16).prop_map(NavAction::GoToSlide),
        Just(NavAction::NextStep),
        Just(NavAction::PrevStep),
        (0u8..8).prop_map(|n| NavAction::FlipPaper(PaperId(n))),
        (0u8..8).prop_map(|n| NavAction::FlipChunk(ChunkId(n))),
        prop::sample::select(&ExampleQuery::ALL[..]).prop_map(NavAction::SelectQuery),
        Just(NavAction::ClearQuery),
    ]
}

proptest! {
    /// Slide and step indices never leave their bounds, whatever the input.
    #[test]
    fn indices_stay_in_bounds(actions in prop::collection::vec(arb_action(), 0..64)) {
        let deck = demo_deck();
        let config = NavigatorConfig::default();
        let mut state = NavState::new(&deck);
        for action in actions {
            state = reduce(&deck, &config, &state, action);
            prop_assert!(state.slide < deck.len());
            let steps = deck.slide(state.slide).unwrap().step_count();
            prop_assert!(state.step < steps);
        }
    }

    /// Same invariant with step preservation enabled.
    #[test]
    fn indices_stay_in_bounds_when_preserving(
        actions in prop::collection::vec(arb_action(), 0..64),
    ) {
        let deck = demo_deck();
        let config = NavigatorConfig { preserve_step_progress: true };
        let mut state = NavState::new(&deck);
        for action in actions {
            state = reduce(&deck, &config, &state, action);
            prop_assert!(state.slide < deck.len());
            let steps = deck.slide(state.slide).unwrap().step_count();
            prop_assert!(state.step < steps);
        }
    }

    /// An out-of-range jump leaves the state untouched.
    #[test]
    fn out_of_range_jump_is_identity(
        actions in prop::collection::vec(arb_action(), 0..32),
        offset in 0usize..1000,
    ) {
        let deck = demo_deck();
        let config = NavigatorConfig::default();
        let mut state = NavState::new(&deck);
        for action in actions {
            state = reduce(&deck, &config, &state, action);
        }
        let jumped = reduce(&deck, &config, &state, NavAction::GoToSlide(deck.len() + offset));
        prop_assert_eq!(jumped, state);
    }

    /// Repeated NextSlide saturates at the last slide; PrevSlide at 0.
    #[test]
    fn slide_navigation_saturates(extra in 0usize..32) {
        let deck = demo_deck();
        let config = NavigatorConfig::default();
        let mut state = NavState::new(&deck);
        for _ in 0..deck.len() + extra {
            state = reduce(&deck, &config, &state, NavAction::NextSlide);
        }
        prop_assert_eq!(state.slide, deck.len() - 1);
        for _ in 0..deck.len() + extra {
            state = reduce(&deck, &config, &state, NavAction::PrevSlide);
        }
        prop_assert_eq!(state.slide, 0);
    }

    /// With the default config, every slide change lands on step 0.
    #[test]
    fn slide_change_implies_step_zero(actions in prop::collection::vec(arb_action(), 0..64)) {
        let deck = demo_deck();
        let config = NavigatorConfig::default();
        let mut state = NavState::new(&deck);
        for action in actions {
            let next = reduce(&deck, &config, &state, action);
            if next.slide != state.slide {
                prop_assert_eq!(next.step, 0);
                prop_assert!(next.query.is_none());
            }
            state = next;
        }
    }

    /// Toggling one chunk card twice is the identity on the whole state.
    #[test]
    fn chunk_flip_is_an_involution(
        actions in prop::collection::vec(arb_action(), 0..32),
        id in 0u8..8,
    ) {
        let deck = demo_deck();
        let config = NavigatorConfig::default();
        let mut state = NavState::new(&deck);
        for action in actions {
            state = reduce(&deck, &config, &state, action);
        }
        let once = reduce(&deck, &config, &state, NavAction::FlipChunk(ChunkId(id)));
        prop_assert_ne!(&once, &state);
        let twice = reduce(&deck, &config, &once, NavAction::FlipChunk(ChunkId(id)));
        prop_assert_eq!(twice, state);
    }

    /// Paper flips never touch chunk flips and vice versa.
    #[test]
    fn flip_categories_are_independent(id in 0u8..8) {
        let deck = demo_deck();
        let config = NavigatorConfig::default();
        let state = NavState::new(&deck);
        let flipped = reduce(&deck, &config, &state, NavAction::FlipPaper(PaperId(id)));
        prop_assert!(flipped.paper_flipped(PaperId(id)));
        prop_assert!(!flipped.chunk_flipped(ChunkId(id)));
    }
}
