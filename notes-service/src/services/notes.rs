//! Invoice note drafting with guaranteed fallback text.
//!
//! Every operation yields a [`NoteOutcome`]; none of them return errors. When
//! text generation is disabled no provider is consulted at all.

use super::metrics;
use super::prompts::{self, PaymentTiming};
use super::providers::gemini::{GeminiConfig, GeminiTextProvider};
use super::providers::{
    FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider,
};
use crate::config::NotesConfig;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Whether AI-backed text generation is available, decided once at startup.
#[derive(Clone)]
pub enum TextGeneration {
    Enabled(Arc<dyn TextProvider>),
    Disabled,
}

impl TextGeneration {
    /// Resolve the capability from configuration. A missing credential disables
    /// generation; it is not an error.
    pub fn from_config(config: &NotesConfig) -> Result<Self, ProviderError> {
        let Some(api_key) = config.google.api_key() else {
            tracing::warn!("No Gemini API key configured - notes will use fallback text");
            return Ok(TextGeneration::Disabled);
        };

        let provider = GeminiTextProvider::new(GeminiConfig {
            api_key: api_key.clone(),
            model: config.models.text_model.clone(),
            api_base: config.models.api_base.clone(),
            timeout: config.models.request_timeout(),
        })?;

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        Ok(TextGeneration::Enabled(Arc::new(provider)))
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, TextGeneration::Enabled(_))
    }
}

impl std::fmt::Debug for TextGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextGeneration::Enabled(provider) => {
                f.debug_tuple("Enabled").field(&provider.model()).finish()
            }
            TextGeneration::Disabled => f.write_str("Disabled"),
        }
    }
}

/// Why fallback text was used instead of generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum DegradedReason {
    NotConfigured,
    ProviderFailed(String),
    NoText,
}

impl DegradedReason {
    pub fn kind(&self) -> &'static str {
        match self {
            DegradedReason::NotConfigured => "not_configured",
            DegradedReason::ProviderFailed(_) => "provider_failed",
            DegradedReason::NoText => "no_text",
        }
    }
}

/// Text produced by a notes operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    Generated(String),
    Degraded { text: String, reason: DegradedReason },
}

impl NoteOutcome {
    pub fn text(&self) -> &str {
        match self {
            NoteOutcome::Generated(text) => text,
            NoteOutcome::Degraded { text, .. } => text,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, NoteOutcome::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&DegradedReason> {
        match self {
            NoteOutcome::Generated(_) => None,
            NoteOutcome::Degraded { reason, .. } => Some(reason),
        }
    }
}

/// The two static texts of an operation.
struct Fallbacks {
    not_configured: String,
    failed: String,
}

impl Fallbacks {
    fn same(text: &str) -> Self {
        Self {
            not_configured: text.to_string(),
            failed: text.to_string(),
        }
    }
}

/// Drafts invoice-related prose.
#[derive(Debug, Clone)]
pub struct NotesGenerator {
    generation: TextGeneration,
    params: GenerationParams,
}

impl NotesGenerator {
    pub fn new(generation: TextGeneration) -> Self {
        Self {
            generation,
            params: GenerationParams::default(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(TextGeneration::Disabled)
    }

    pub fn with_provider(provider: Arc<dyn TextProvider>) -> Self {
        Self::new(TextGeneration::Enabled(provider))
    }

    pub fn is_enabled(&self) -> bool {
        self.generation.is_enabled()
    }

    /// Thank-you, payment terms, warranty and payment instructions in 4-6 sentences.
    pub async fn generate_invoice_notes(
        &self,
        customer_name: &str,
        items_description: &str,
    ) -> NoteOutcome {
        let fallbacks = Fallbacks {
            not_configured: prompts::INVOICE_NOTES_NOT_CONFIGURED.to_string(),
            failed: prompts::INVOICE_NOTES_FAILED.to_string(),
        };

        self.draft(
            "invoice_notes",
            || prompts::invoice_notes_prompt(customer_name, items_description),
            fallbacks,
        )
        .await
    }

    /// Reminder whose tone depends on how far `days_difference` is from the due date.
    pub async fn generate_reminder_message(
        &self,
        customer_name: &str,
        invoice_num: &str,
        balance: Decimal,
        days_difference: i64,
    ) -> NoteOutcome {
        let fallbacks = Fallbacks {
            not_configured: prompts::reminder_not_configured(invoice_num),
            failed: prompts::reminder_failed(invoice_num, balance),
        };
        let timing = PaymentTiming::from_days(days_difference);

        self.draft(
            "reminder",
            || prompts::reminder_prompt(customer_name, invoice_num, balance, timing),
            fallbacks,
        )
        .await
    }

    /// Short product blurb. Empty text means no description is available.
    pub async fn generate_product_description(&self, product_name: &str) -> NoteOutcome {
        self.draft(
            "product_description",
            || prompts::product_description_prompt(product_name),
            Fallbacks::same(""),
        )
        .await
    }

    pub async fn analyze_invoice_trends(&self, summary_text: &str) -> NoteOutcome {
        self.draft(
            "invoice_trends",
            || prompts::trends_prompt(summary_text),
            Fallbacks::same(prompts::NO_INSIGHTS),
        )
        .await
    }

    async fn draft(
        &self,
        operation: &'static str,
        prompt: impl FnOnce() -> String,
        fallbacks: Fallbacks,
    ) -> NoteOutcome {
        let outcome = self.attempt(operation, prompt, fallbacks).await;

        match outcome.reason() {
            None => metrics::record_note(operation, "generated", ""),
            Some(reason) => metrics::record_note(operation, "fallback", reason.kind()),
        }

        outcome
    }

    async fn attempt(
        &self,
        operation: &'static str,
        prompt: impl FnOnce() -> String,
        fallbacks: Fallbacks,
    ) -> NoteOutcome {
        let provider = match &self.generation {
            TextGeneration::Enabled(provider) => provider,
            TextGeneration::Disabled => {
                tracing::debug!(operation, "Text generation disabled, using fallback");
                return NoteOutcome::Degraded {
                    text: fallbacks.not_configured,
                    reason: DegradedReason::NotConfigured,
                };
            }
        };

        let start = Instant::now();
        let result = provider.generate(&prompt(), &self.params).await;
        metrics::record_provider_latency(provider.model(), start.elapsed().as_secs_f64());

        match result {
            Ok(ProviderResponse {
                text,
                input_tokens,
                output_tokens,
                finish_reason,
            }) => {
                metrics::record_tokens(provider.model(), input_tokens, output_tokens);
                if finish_reason == FinishReason::Length {
                    tracing::warn!(operation, output_tokens, "Generated note hit the token limit");
                }

                match text {
                    Some(text) => {
                        tracing::debug!(operation, input_tokens, output_tokens, "Generated note");
                        NoteOutcome::Generated(text)
                    }
                    None => {
                        tracing::warn!(operation, "Provider returned no text, using fallback");
                        NoteOutcome::Degraded {
                            text: fallbacks.failed,
                            reason: DegradedReason::NoText,
                        }
                    }
                }
            }
            Err(e) => {
                metrics::record_provider_error(e.kind());
                tracing::warn!(operation, error = %e, "Text generation failed, using fallback");
                NoteOutcome::Degraded {
                    text: fallbacks.failed,
                    reason: DegradedReason::ProviderFailed(e.to_string()),
                }
            }
        }
    }
}
