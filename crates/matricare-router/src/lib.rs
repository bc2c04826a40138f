// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent routing for the Matricare pregnancy assistant.
//!
//! The core of the service: a single-hop classifier whose output selects
//! one of five handlers, plus the hand-coded fallback chains that keep
//! every request answerable. Handlers are reached through the adapter
//! traits in `matricare-core`, so the whole crate tests against mocks.

pub mod classifier;
pub mod general;
pub mod router;

pub use classifier::{IntentClassifier, classification_prompt, parse_intent};
pub use general::GeneralAnswerer;
pub use router::QueryRouter;
