//! ragdeck core — deck model, navigation state machine, and static content.
//!
//! This crate contains everything that is not rendering:
//! - Deck/slide/step data model with tagged content variants
//! - The presentation navigator as a pure reducer (`reduce(state, action)`)
//! - The static retrieval tables: example queries, keyword dispatch,
//!   precomputed similarity rankings, and fixed response bundles
//! - The authored deck content, including the sample protocol and chunks
//!
//! There is no live retrieval, embedding, or model inference anywhere; every
//! "result" is a lookup into data fixed at authoring time.

pub mod content;
pub mod deck;
pub mod navigator;
pub mod retrieval;

pub use deck::{ChunkId, Deck, DeckError, PaperId, Slide, SlideBody, StepBody};
pub use navigator::{reduce, NavAction, NavState, NavigatorConfig};
pub use retrieval::{respond, ExampleQuery, ResponseBundle};
