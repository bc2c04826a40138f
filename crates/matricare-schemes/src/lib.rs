// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Government-scheme lookup for the Matricare query router.
//!
//! Two pieces: [`FirecrawlClient`] implements the [`WebSearch`] adapter
//! against the Firecrawl search API (markdown scraping), and
//! [`SchemeFormatter`] turns the raw output into a plain-text numbered
//! scheme list through the text-generation provider.
//!
//! [`WebSearch`]: matricare_core::traits::WebSearch

pub mod client;
pub mod formatter;

pub use client::FirecrawlClient;
pub use formatter::SchemeFormatter;
