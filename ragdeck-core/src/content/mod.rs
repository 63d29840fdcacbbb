//! Static content tables — the protocol sample and the authored deck.

pub mod protocol;
mod slides;

use crate::deck::{Deck, DeckError};

/// Build the full deck. Fails only if the authored content violates deck
/// invariants, which the tests pin down.
pub fn deck() -> Result<Deck, DeckError> {
    Deck::new(slides::slides())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::SlideBody;

    #[test]
    fn deck_builds_and_validates() {
        let deck = deck().unwrap();
        assert_eq!(deck.len(), 10);
    }

    #[test]
    fn walkthrough_has_four_steps() {
        let deck = deck().unwrap();
        let walkthrough = deck
            .slides()
            .iter()
            .find(|s| matches!(s.body, SlideBody::Walkthrough { .. }))
            .unwrap();
        assert_eq!(walkthrough.step_count(), 4);
        let titles: Vec<&str> = walkthrough.steps().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![
                "Original Document",
                "Chunk & Embed",
                "Store in Vector DB",
                "Retrieve Relevant Content",
            ]
        );
    }

    #[test]
    fn demo_is_the_last_slide() {
        let deck = deck().unwrap();
        let last = deck.slide(deck.len() - 1).unwrap();
        assert!(matches!(last.body, SlideBody::Demo { .. }));
        assert_eq!(last.step_count(), 1);
    }
}
