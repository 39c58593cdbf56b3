//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{case_mix_section, digit_section, length_section, symbol_section};
use crate::strength::{StrengthEvaluation, StrengthScore};

/// Delay applied by [`evaluate_password_strength_tx`] before evaluating,
/// so keystroke bursts collapse into a single evaluation.
#[cfg(feature = "async")]
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Scores a password from 0 (empty) to 4 (strong).
///
/// Passwords shorter than 8 characters always score 1, whatever their
/// character variety.
pub fn evaluate(password: &str) -> StrengthScore {
    let password = SecretString::new(password.to_string().into());
    evaluate_password_strength(&password).score
}

/// Evaluates password strength and returns the score with every unmet criterion.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthEvaluation` whose `reasons` follow criterion order:
/// length, case mix, digit, symbol. Empty input yields score 0 and no reasons.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthEvaluation {
    if password.expose_secret().is_empty() {
        return StrengthEvaluation::default();
    }

    let length = length_section(password);
    let length_met = length.is_none();

    // Orchestrator: execute sections in sequence
    let variety: [(&str, fn(&SecretString) -> Option<String>); 3] = [
        ("case mix", case_mix_section),
        ("digit", digit_section),
        ("symbol", symbol_section),
    ];

    let mut reasons: Vec<String> = length.into_iter().collect();
    let mut score: u8 = u8::from(length_met);

    for (_section_name, section_fn) in variety {
        let result = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, met = result.is_none());

        match result {
            Some(reason) => reasons.push(reason),
            None => score += 1,
        }
    }

    // Short passwords are capped at Weak
    if !length_met {
        score = 1;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(score, unmet = reasons.len(), "password evaluated");

    StrengthEvaluation {
        score: StrengthScore::new(score),
        reasons,
    }
}

/// Async version that debounces, then sends the evaluation via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce delay.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEFAULT_DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
