//! Application state — single-owner, main-thread only.
//!
//! Deck semantics (slide, step, flips, query) live in the core reducer; this
//! struct adds only view concerns: the running flag, the help overlay, and a
//! cursor over whatever the current step lets the user interact with.

use ragdeck_core::deck::{Slide, StepBody, WalkStep};
use ragdeck_core::navigator::{reduce, NavAction, NavState, NavigatorConfig};
use ragdeck_core::retrieval::ExampleQuery;
use ragdeck_core::{Deck, SlideBody};

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// What j/k and Space/Enter act on in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Nothing interactive on this view.
    Static,
    /// Paper cards on the document step.
    Papers(usize),
    /// Chunk cards on the chunk gallery step.
    Chunks(usize),
    /// The example-query palette.
    Queries(usize),
}

impl Focus {
    pub fn len(self) -> usize {
        match self {
            Focus::Static => 0,
            Focus::Papers(n) | Focus::Chunks(n) | Focus::Queries(n) => n,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub deck: Deck,
    pub config: NavigatorConfig,
    pub nav: NavState,
    pub running: bool,
    pub overlay: Overlay,
    /// Cursor into the current view's interactive items; reset on any
    /// slide or step change.
    pub cursor: usize,
}

impl AppState {
    pub fn new(deck: Deck, config: NavigatorConfig) -> Self {
        let nav = NavState::new(&deck);
        Self {
            deck,
            config,
            nav,
            running: true,
            overlay: Overlay::None,
            cursor: 0,
        }
    }

    /// Route an action through the pure reducer. The cursor belongs to the
    /// view, so it resets whenever the view changes.
    pub fn dispatch(&mut self, action: NavAction) {
        let before = (self.nav.slide, self.nav.step);
        self.nav = reduce(&self.deck, &self.config, &self.nav, action);
        if (self.nav.slide, self.nav.step) != before {
            self.cursor = 0;
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn current_slide(&self) -> &Slide {
        // nav.slide is kept in range by the reducer.
        self.deck
            .slide(self.nav.slide)
            .unwrap_or_else(|| &self.deck.slides()[0])
    }

    /// The active walkthrough step, if the current slide has steps.
    pub fn current_step(&self) -> Option<&WalkStep> {
        self.current_slide().steps().get(self.nav.step)
    }

    /// Interactive focus of the current view.
    pub fn focus(&self) -> Focus {
        match self.current_slide().body {
            SlideBody::Demo { .. } => Focus::Queries(ExampleQuery::ALL.len()),
            SlideBody::Walkthrough { .. } => match self.current_step().map(|s| s.body) {
                Some(StepBody::Document { papers, .. }) => Focus::Papers(papers.len()),
                Some(StepBody::ChunkGallery) => {
                    Focus::Chunks(ragdeck_core::content::protocol::CHUNKS.len())
                }
                Some(StepBody::Retrieval) => Focus::Queries(ExampleQuery::ALL.len()),
                _ => Focus::Static,
            },
            _ => Focus::Static,
        }
    }

    pub fn cursor_down(&mut self) {
        let len = self.focus().len();
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Flip or select the item under the cursor.
    pub fn activate(&mut self) {
        match self.focus() {
            Focus::Static => {}
            Focus::Papers(_) => {
                if let Some(StepBody::Document { papers, .. }) = self.current_step().map(|s| s.body)
                {
                    if let Some(paper) = papers.get(self.cursor) {
                        self.dispatch(NavAction::FlipPaper(paper.id));
                    }
                }
            }
            Focus::Chunks(_) => {
                let chunks = &ragdeck_core::content::protocol::CHUNKS;
                if let Some(chunk) = chunks.get(self.cursor) {
                    self.dispatch(NavAction::FlipChunk(chunk.id));
                }
            }
            Focus::Queries(_) => {
                if let Some(query) = ExampleQuery::ALL.get(self.cursor) {
                    self.dispatch(NavAction::SelectQuery(*query));
                }
            }
        }
    }
}

/// Fresh app over the authored deck, for tests here and in `input`.
#[cfg(test)]
pub(crate) fn test_app() -> AppState {
    AppState::new(
        ragdeck_core::content::deck().unwrap(),
        NavigatorConfig::default(),
    )
}

/// Index of the walkthrough slide in the authored deck.
#[cfg(test)]
pub(crate) const WALKTHROUGH_SLIDE: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;
    use ragdeck_core::deck::ChunkId;

    const WALKTHROUGH: usize = WALKTHROUGH_SLIDE;

    #[test]
    fn focus_follows_the_view() {
        let mut app = test_app();
        assert_eq!(app.focus(), Focus::Static);

        app.dispatch(NavAction::GoToSlide(WALKTHROUGH));
        assert_eq!(app.focus(), Focus::Papers(3));

        app.dispatch(NavAction::NextStep);
        assert_eq!(app.focus(), Focus::Chunks(6));

        app.dispatch(NavAction::NextStep);
        assert_eq!(app.focus(), Focus::Static);

        app.dispatch(NavAction::NextStep);
        assert_eq!(app.focus(), Focus::Queries(5));
    }

    #[test]
    fn cursor_resets_on_view_change() {
        let mut app = test_app();
        app.dispatch(NavAction::GoToSlide(WALKTHROUGH));
        app.dispatch(NavAction::NextStep);
        app.cursor_down();
        app.cursor_down();
        assert_eq!(app.cursor, 2);

        app.dispatch(NavAction::NextStep);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cursor_saturates_at_focus_bounds() {
        let mut app = test_app();
        app.dispatch(NavAction::GoToSlide(WALKTHROUGH));
        app.dispatch(NavAction::NextStep); // chunk gallery, 6 items
        for _ in 0..10 {
            app.cursor_down();
        }
        assert_eq!(app.cursor, 5);
        for _ in 0..10 {
            app.cursor_up();
        }
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn activate_flips_the_chunk_under_the_cursor() {
        let mut app = test_app();
        app.dispatch(NavAction::GoToSlide(WALKTHROUGH));
        app.dispatch(NavAction::NextStep);
        app.cursor_down();
        app.activate();
        assert!(app.nav.chunk_flipped(ChunkId(2)));
        app.activate();
        assert!(!app.nav.chunk_flipped(ChunkId(2)));
    }

    #[test]
    fn activate_selects_query_on_demo_slide() {
        let mut app = test_app();
        let last = app.deck.len() - 1;
        app.dispatch(NavAction::GoToSlide(last));
        app.cursor_down();
        app.cursor_down();
        app.activate();
        assert_eq!(app.nav.query, Some(ExampleQuery::AdverseEvents));
    }

    #[test]
    fn cursor_noop_on_static_views() {
        let mut app = test_app();
        app.cursor_down();
        assert_eq!(app.cursor, 0);
        app.activate();
        assert!(app.nav.query.is_none());
    }
}
