// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fact-check adapter for the Matricare query router.
//!
//! Implements [`matricare_core::traits::FactCheck`] against the Google
//! Fact Check Tools `claims:search` API: queries claims for a question,
//! prefers an English-language review, and formats the fixed five-line
//! claim summary.

pub mod client;
pub mod types;

pub use client::{FactCheckClient, NO_CLAIMS_MESSAGE, format_claim, select_claim};
