// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scheme formatter: raw scraped text -> plain-text numbered scheme list.
//!
//! Sends the raw search output through the text-generation provider with a
//! fixed instruction forbidding markdown decoration, then normalizes
//! escaped newline sequences the model sometimes emits.

use std::sync::Arc;

use matricare_core::MatricareError;
use matricare_core::traits::TextGenerator;
use matricare_core::types::GenerationRequest;

/// Normalizes raw scheme-search output into a readable numbered list.
pub struct SchemeFormatter {
    generator: Arc<dyn TextGenerator>,
    max_output_tokens: u32,
}

impl SchemeFormatter {
    /// Creates a formatter over the given generation provider.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            max_output_tokens: 2048,
        }
    }

    /// Format raw scraped text into a plain-text numbered scheme list.
    ///
    /// Failures surface as typed errors; the router renders them distinctly
    /// from search errors. Search-error text is accepted as input like any
    /// other raw text and passed through the model untouched.
    pub async fn format(&self, raw_text: &str) -> Result<String, MatricareError> {
        let request = GenerationRequest {
            prompt: formatting_prompt(raw_text),
            max_output_tokens: self.max_output_tokens,
            temperature: None,
        };

        let response = self.generator.generate(request).await?;

        Ok(normalize_newlines(response.text.trim()))
    }
}

/// The fixed formatting instruction wrapped around the raw text.
fn formatting_prompt(raw_text: &str) -> String {
    format!(
        r#"You are a helpful assistant specialized in summarizing government schemes for pregnant women.

Given the raw scraped text below, extract and clearly format the important information in simple plain text.

Format the info as a numbered list like this, without any emojis, asterisks (*), bullets, or markdown syntax:

1. Scheme Name: ...
Eligibility Criteria: ...
How to Apply: ...
Other Details: ...

Use real line breaks (actual newlines) and blank lines between sections for clarity.

Raw text:
"""
{raw_text}
"""
"#
    )
}

/// Replace literal `\n` escape sequences with real line breaks.
fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use matricare_test_utils::MockGenerator;

    #[tokio::test]
    async fn format_embeds_raw_text_in_prompt() {
        let generator = Arc::new(MockGenerator::with_replies(vec![
            "1. Scheme Name: PMMVY\nEligibility Criteria: first pregnancy",
        ]));
        let formatter = SchemeFormatter::new(generator.clone());

        let result = formatter.format("scraped scheme text").await.unwrap();
        assert!(result.starts_with("1. Scheme Name: PMMVY"));

        let prompts = generator.prompts().await;
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("scraped scheme text"));
        assert!(prompts[0].contains("numbered list"));
    }

    #[tokio::test]
    async fn format_normalizes_escaped_newlines() {
        let generator = Arc::new(MockGenerator::with_replies(vec![
            "1. Scheme Name: JSY\\nEligibility Criteria: BPL households\\n\\n2. Scheme Name: PMMVY",
        ]));
        let formatter = SchemeFormatter::new(generator);

        let result = formatter.format("raw").await.unwrap();
        assert!(result.contains("JSY\nEligibility Criteria"));
        assert!(result.contains("\n\n2. Scheme Name: PMMVY"));
        assert!(!result.contains("\\n"));
    }

    #[tokio::test]
    async fn format_trims_model_output() {
        let generator = Arc::new(MockGenerator::with_replies(vec![
            "  \n1. Scheme Name: JSY\n  ",
        ]));
        let formatter = SchemeFormatter::new(generator);

        let result = formatter.format("raw").await.unwrap();
        assert_eq!(result, "1. Scheme Name: JSY");
    }

    #[tokio::test]
    async fn format_propagates_provider_failure() {
        let generator = Arc::new(MockGenerator::new());
        generator.push_error("model offline").await;
        let formatter = SchemeFormatter::new(generator);

        let err = formatter.format("raw").await.unwrap_err();
        assert!(err.to_string().contains("model offline"));
    }

    #[tokio::test]
    async fn search_error_text_passes_through_as_input() {
        // The router feeds search-error strings through the formatter; the
        // formatter must treat them as ordinary raw text.
        let generator = Arc::new(MockGenerator::with_replies(vec!["No schemes found."]));
        let formatter = SchemeFormatter::new(generator.clone());

        let result = formatter
            .format("Firecrawl search error: connection refused")
            .await
            .unwrap();
        assert_eq!(result, "No schemes found.");
        assert!(generator.prompts().await[0].contains("connection refused"));
    }
}
