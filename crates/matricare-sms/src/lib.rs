// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Twilio SMS alert adapter for the Matricare query router.
//!
//! Implements [`matricare_core::traits::AlertChannel`] against the Twilio
//! Messages API: emergency alerts go to a fixed configured recipient from a
//! fixed configured sender.

pub mod client;

pub use client::TwilioClient;
