// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! General advisory answers: the default handler and the fallback target.

use std::sync::Arc;

use matricare_core::MatricareError;
use matricare_core::traits::TextGenerator;
use matricare_core::types::GenerationRequest;

/// Produces concise general pregnancy advice through the generation provider.
pub struct GeneralAnswerer {
    generator: Arc<dyn TextGenerator>,
}

impl GeneralAnswerer {
    /// Creates an answerer over the given generation provider.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Answer a question with the fixed advisory instruction.
    pub async fn answer(&self, question: &str) -> Result<String, MatricareError> {
        let request = GenerationRequest::from_prompt(general_prompt(question));
        let response = self.generator.generate(request).await?;
        Ok(response.text.trim().to_string())
    }
}

/// The fixed advisory prompt embedding the question.
fn general_prompt(question: &str) -> String {
    format!(
        r#"You are a helpful pregnancy assistant. Answer this question clearly and concisely in 2-3 paragraphs.
Always mention consulting healthcare providers for personalized advice.

Question: {question}"#
    )
}
