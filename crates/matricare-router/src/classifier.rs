// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification via a single text-generation call.
//!
//! The classification prompt enumerates the five intents with one-line
//! disambiguation criteria and asks for the bare action name. The reply is
//! parsed by substring presence in a fixed priority order; EMERGENCY is
//! checked first so an ambiguous reply that mentions emergency language can
//! never be masked by another match.

use std::sync::Arc;

use matricare_core::MatricareError;
use matricare_core::traits::TextGenerator;
use matricare_core::types::{GenerationRequest, Intent};
use tracing::debug;

/// Output budget for the classification call; the reply is a single token.
const CLASSIFY_MAX_TOKENS: u32 = 32;

/// Classifies questions into routing intents through the generation provider.
pub struct IntentClassifier {
    generator: Arc<dyn TextGenerator>,
}

impl IntentClassifier {
    /// Creates a classifier over the given generation provider.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Classify one question.
    ///
    /// Transport or provider failures propagate as errors; the router maps
    /// them to the default LLM path.
    pub async fn classify(&self, question: &str) -> Result<Intent, MatricareError> {
        let request = GenerationRequest {
            prompt: classification_prompt(question),
            max_output_tokens: CLASSIFY_MAX_TOKENS,
            temperature: None,
        };

        let response = self.generator.generate(request).await?;
        let intent = parse_intent(&response.text);
        debug!(reply = %response.text.trim(), ?intent, "question classified");
        Ok(intent)
    }
}

/// The fixed classification prompt embedding the question.
pub fn classification_prompt(question: &str) -> String {
    format!(
        r#"You are a smart pregnancy assistant router. Analyze this question and decide what action to take:

Question: "{question}"

Choose ONE action:
1. EMERGENCY - If mentions severe symptoms (severe headache, chest pain, severe bleeding, unconscious, can't breathe, severe pain)
2. FACT_CHECK - If asking about safety, claims, or "is it true" about foods/activities during pregnancy
3. SCHEMES - If asking about government benefits, schemes, maternity leave, financial help
4. RAG - If asking normal pregnancy questions that might be in documents
5. LLM - If general pregnancy advice, tips, normal information

Respond with ONLY the action name: EMERGENCY, FACT_CHECK, SCHEMES, RAG, or LLM"#
    )
}

/// Parse a classifier reply into an [`Intent`] by substring presence.
///
/// Priority order is a safety policy, not an optimization: EMERGENCY wins
/// over any other token in the same reply, then FACT_CHECK, SCHEMES, RAG.
/// Anything unrecognized (or empty) falls through to LLM.
pub fn parse_intent(reply: &str) -> Intent {
    let normalized = reply.trim().to_uppercase();

    if normalized.contains("EMERGENCY") {
        Intent::Emergency
    } else if normalized.contains("FACT_CHECK") {
        Intent::FactCheck
    } else if normalized.contains("SCHEMES") {
        Intent::Schemes
    } else if normalized.contains("RAG") {
        Intent::Rag
    } else {
        Intent::Llm
    }
}
