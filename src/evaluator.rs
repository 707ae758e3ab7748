//! Password strength evaluator - scoring, feedback and orchestration.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::analyzer::Analyzer;
use crate::sections::{
    blacklist_section, breach_section, character_variety_section, length_section,
    pattern_analysis_section, Section,
};
use crate::types::{PasswordAttributes, PasswordEvaluation, Rating, ScoreResult};

const STRONG_FEEDBACK: &str = "Password is strong - great job!";
const CANCELLED_REASON: &str = "Evaluation cancelled";

/// Sections that contribute points, in evaluation order.
const SCORING_SECTIONS: [Section; 3] = [
    length_section,
    character_variety_section,
    pattern_analysis_section,
];

/// Sections whose hints are shown for passwords that are not yet strong.
const IMPROVEMENT_SECTIONS: [Section; 4] = [
    length_section,
    character_variety_section,
    pattern_analysis_section,
    blacklist_section,
];

/// Maps attributes to a clamped score and rating.
///
/// Common passwords always score zero. The breach count carries no weight.
pub fn score(attributes: &PasswordAttributes) -> ScoreResult {
    if attributes.is_common {
        return ScoreResult::from_points(0);
    }
    let points: i32 = SCORING_SECTIONS
        .iter()
        .map(|section| section(attributes).points)
        .sum();
    ScoreResult::from_points(points)
}

/// Improvement hints for `attributes` at the given rating.
///
/// Never empty.
pub fn feedback(attributes: &PasswordAttributes, rating: Rating) -> Vec<String> {
    let mut hints: Vec<String> = Vec::new();

    if rating != Rating::Strong {
        for section in IMPROVEMENT_SECTIONS {
            hints.extend(section(attributes).hints);
        }
    }
    hints.extend(breach_section(attributes).hints);

    if hints.is_empty() {
        hints.push(STRONG_FEEDBACK.to_string());
    }
    hints
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// # Arguments
/// * `analyzer` - Analyzer holding the common list and breach checker
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only), checked
///   before the breach lookup and before scoring
pub fn evaluate_password_strength(
    analyzer: &Analyzer,
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    #[cfg(feature = "async")]
    let is_cancelled = || token.as_ref().is_some_and(|t| t.is_cancelled());
    #[cfg(not(feature = "async"))]
    let is_cancelled = || false;

    let mut attributes = analyzer.analyze_local(password);

    if is_cancelled() {
        return cancelled();
    }
    attributes.breach_count = analyzer.breach_count(password);

    if is_cancelled() {
        return cancelled();
    }
    let result = score(&attributes);
    let reasons = feedback(&attributes, result.rating);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = result.score, rating = %result.rating, "password evaluated");

    PasswordEvaluation {
        attributes: Some(attributes),
        score: Some(result),
        reasons,
    }
}

fn cancelled() -> PasswordEvaluation {
    PasswordEvaluation {
        attributes: None,
        score: None,
        reasons: vec![CANCELLED_REASON.to_string()],
    }
}

/// Async version that sends evaluation result via channel.
///
/// Waits a short debounce, then runs the evaluation on a blocking task since
/// the breach lookup performs blocking I/O. Nothing is sent if the token is
/// cancelled during the debounce.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    analyzer: Arc<Analyzer>,
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        return;
    }

    let evaluation = match tokio::task::spawn_blocking(move || {
        evaluate_password_strength(&analyzer, &password, Some(token))
    })
    .await
    {
        Ok(evaluation) => evaluation,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Password evaluation task failed: {}", _e);
            return;
        }
    };

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
