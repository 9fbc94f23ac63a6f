//! The scoring engine: a deterministic, pure, total function from a set of
//! responses to an [`AssessmentResult`].
//!
//! Missing or partial responses degrade scores rather than error, so an
//! abandoned session still produces a result.

use std::collections::HashMap;

use crate::bank::QuestionBank;
use crate::feedback;
use crate::model::{AnswerKind, Response, SCALE_MAX};
use crate::results::{AssessmentResult, Dimension, Recommendation, ScoreBreakdown};

/// Weight of the personality cluster in the overall confidence.
pub const PERSONALITY_WEIGHT: f64 = 0.35;
/// Weight of the technical cluster in the overall confidence.
pub const TECHNICAL_WEIGHT: f64 = 0.35;
/// Weight of the holistic cluster in the overall confidence.
pub const HOLISTIC_WEIGHT: f64 = 0.30;

/// Score assigned to a chosen option with no choice_scores table entry.
pub const DEFAULT_CHOICE_SCORE: u8 = 50;

/// Score a response set against a bank.
///
/// Responses are upserted by question id before aggregation, so a later entry
/// for the same question replaces an earlier one. Unanswered questions are
/// excluded from their subcategory's weighted mean entirely; they do not
/// count as zero.
pub fn score(bank: &QuestionBank, responses: &[Response]) -> AssessmentResult {
    // Last write wins per question id.
    let by_question: HashMap<&str, u8> = responses
        .iter()
        .map(|r| (r.question_id.as_str(), r.value))
        .collect();

    let breakdown = compute_breakdown(bank, &by_question);

    let personality_score = mean_of(&[
        breakdown.interest,
        breakdown.personality_fit,
        breakdown.motivation,
        breakdown.cognitive_style,
    ]);
    let technical_score = mean_of(&[
        breakdown.general_aptitude,
        breakdown.prerequisite_knowledge,
        breakdown.domain_knowledge,
    ]);
    let holistic_score = mean_of(&[
        breakdown.will,
        breakdown.skill,
        breakdown.cognitive_readiness,
        breakdown.ability_to_learn,
        breakdown.real_world_alignment,
    ]);

    let overall_confidence = (f64::from(personality_score) * PERSONALITY_WEIGHT
        + f64::from(technical_score) * TECHNICAL_WEIGHT
        + f64::from(holistic_score) * HOLISTIC_WEIGHT)
        .round() as u8;

    let recommendation = Recommendation::from_confidence(overall_confidence);

    AssessmentResult {
        overall_confidence,
        recommendation,
        personality_score,
        technical_score,
        holistic_score,
        insights: feedback::insights(&breakdown),
        next_steps: feedback::next_steps(recommendation, &breakdown),
        career_paths: feedback::career_paths(recommendation),
        breakdown,
    }
}

fn compute_breakdown(bank: &QuestionBank, by_question: &HashMap<&str, u8>) -> ScoreBreakdown {
    let dim = |d: Dimension| -> u8 {
        match (d.fixed_score(), d.selector()) {
            (Some(fixed), _) => fixed,
            (None, Some((category, subcategory))) => {
                subcategory_score(bank, by_question, category, subcategory)
            }
            // Unreachable: every dimension is either fixed or selectable.
            (None, None) => 0,
        }
    };

    ScoreBreakdown {
        interest: dim(Dimension::Interest),
        personality_fit: dim(Dimension::PersonalityFit),
        motivation: dim(Dimension::Motivation),
        cognitive_style: dim(Dimension::CognitiveStyle),
        general_aptitude: dim(Dimension::GeneralAptitude),
        prerequisite_knowledge: dim(Dimension::PrerequisiteKnowledge),
        domain_knowledge: dim(Dimension::DomainKnowledge),
        will: dim(Dimension::Will),
        skill: dim(Dimension::Skill),
        cognitive_readiness: dim(Dimension::CognitiveReadiness),
        ability_to_learn: dim(Dimension::AbilityToLearn),
        real_world_alignment: dim(Dimension::RealWorldAlignment),
    }
}

/// Weighted mean of the answered questions in one subcategory, rounded to the
/// nearest integer percentage. Zero answered questions yield 0.
fn subcategory_score(
    bank: &QuestionBank,
    by_question: &HashMap<&str, u8>,
    category: crate::model::Category,
    subcategory: &str,
) -> u8 {
    let questions = bank.questions_in(category, subcategory);
    if questions.is_empty() {
        return 0;
    }

    let mut total_weighted = 0.0;
    let mut total_weight = 0.0;

    for question in questions {
        let Some(&value) = by_question.get(question.id.as_str()) else {
            continue;
        };

        let normalized = match &question.kind {
            AnswerKind::Scale => f64::from(value) / f64::from(SCALE_MAX) * 100.0,
            AnswerKind::Choice { .. } => f64::from(
                bank.choice_score(&question.id, value as usize)
                    .unwrap_or(DEFAULT_CHOICE_SCORE),
            ),
        };

        total_weighted += normalized * question.weight;
        total_weight += question.weight;
    }

    if total_weight > 0.0 {
        (total_weighted / total_weight).round() as u8
    } else {
        0
    }
}

/// Unweighted mean of cluster dimension scores, rounded to nearest integer.
fn mean_of(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|&s| u32::from(s)).sum();
    (sum as f64 / scores.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Response;
    use crate::results::Recommendation;

    fn bank() -> &'static QuestionBank {
        QuestionBank::builtin()
    }

    /// Every scale question answered with `value`, every choice question with
    /// its highest-scoring option.
    fn full_responses(scale_value: u8) -> Vec<Response> {
        bank()
            .questions
            .iter()
            .map(|q| {
                let value = match &q.kind {
                    AnswerKind::Scale => scale_value,
                    AnswerKind::Choice { options } => (0..options.len())
                        .max_by_key(|&i| bank().choice_score(&q.id, i).unwrap_or(0))
                        .unwrap_or(0) as u8,
                };
                Response::new(q.id.clone(), value)
            })
            .collect()
    }

    #[test]
    fn scale_endpoints_normalize_to_0_and_100() {
        let bottom = score(bank(), &full_responses(0));
        let top = score(bank(), &full_responses(SCALE_MAX));

        // Scale-only subcategories hit the exact endpoints.
        assert_eq!(bottom.breakdown.interest, 0);
        assert_eq!(bottom.breakdown.will, 0);
        assert_eq!(top.breakdown.interest, 100);
        assert_eq!(top.breakdown.will, 100);
        assert_eq!(top.breakdown.real_world_alignment, 100);
    }

    #[test]
    fn empty_responses_give_no_recommendation() {
        let result = score(bank(), &[]);
        assert_eq!(result.overall_confidence, 0);
        assert_eq!(result.recommendation, Recommendation::No);
        assert_eq!(result.breakdown.interest, 0);
        assert_eq!(result.breakdown.general_aptitude, 0);
        // Fixed baselines survive even with no input.
        assert_eq!(result.breakdown.cognitive_style, 75);
        assert_eq!(result.breakdown.domain_knowledge, 70);
    }

    #[test]
    fn maximum_attainable_confidence() {
        let result = score(bank(), &full_responses(SCALE_MAX));

        // personality = mean(100, 100, 100, 75) = 94 (rounded)
        // technical   = mean(93, 100, 70) = 88; best aptitude options score 90
        //               or 95, weighted mean 92.6 rounds to 93
        // holistic    = 100
        // confidence  = round(94*0.35 + 88*0.35 + 100*0.30) = round(93.7) = 94
        assert_eq!(result.personality_score, 94);
        assert_eq!(result.technical_score, 88);
        assert_eq!(result.holistic_score, 100);
        assert_eq!(result.overall_confidence, 94);
        assert_eq!(result.recommendation, Recommendation::Yes);
    }

    #[test]
    fn scoring_is_order_invariant() {
        let responses = full_responses(3);
        let mut reversed = responses.clone();
        reversed.reverse();

        let a = score(bank(), &responses);
        let b = score(bank(), &reversed);
        assert_eq!(a.breakdown, b.breakdown);
        assert_eq!(a.overall_confidence, b.overall_confidence);
    }

    #[test]
    fn later_response_replaces_earlier() {
        let responses = vec![Response::new("p1", 0), Response::new("p1", 4)];
        let result = score(bank(), &responses);
        // Only p1 answered in interest, last write wins.
        assert_eq!(result.breakdown.interest, 100);
    }

    #[test]
    fn unanswered_questions_are_excluded_not_zero() {
        // Answer only p1 (weight 1.2) with the top value; the other four
        // interest questions must not drag the mean down.
        let result = score(bank(), &[Response::new("p1", 4)]);
        assert_eq!(result.breakdown.interest, 100);
    }

    #[test]
    fn unanswered_subcategory_does_not_perturb_others() {
        let with_will = score(
            bank(),
            &[Response::new("p1", 4), Response::new("w1", 2)],
        );
        let without_will = score(bank(), &[Response::new("p1", 4)]);

        assert_eq!(with_will.breakdown.interest, without_will.breakdown.interest);
        assert_eq!(
            with_will.breakdown.general_aptitude,
            without_will.breakdown.general_aptitude
        );
        assert_ne!(with_will.breakdown.will, without_will.breakdown.will);
    }

    #[test]
    fn choice_scores_come_from_the_table() {
        // t2 option 0 scores 95, option 3 scores 30.
        let best = score(bank(), &[Response::new("t2", 0)]);
        let worst = score(bank(), &[Response::new("t2", 3)]);
        assert_eq!(best.breakdown.general_aptitude, 95);
        assert_eq!(worst.breakdown.general_aptitude, 30);
    }

    #[test]
    fn missing_choice_table_entry_defaults_to_50() {
        let mut bank = QuestionBank::builtin().clone();
        bank.choice_scores.remove("t1");
        let result = score(&bank, &[Response::new("t1", 2)]);
        assert_eq!(result.breakdown.general_aptitude, DEFAULT_CHOICE_SCORE);
    }

    #[test]
    fn weighted_mean_respects_weights() {
        // interest: p1 weight 1.2 at 100, p3 weight 0.8 at 0
        // -> 120 / 2.0 = 60
        let result = score(
            bank(),
            &[Response::new("p1", 4), Response::new("p3", 0)],
        );
        assert_eq!(result.breakdown.interest, 60);
    }

    #[test]
    fn confidence_weights_sum_to_one() {
        assert!((PERSONALITY_WEIGHT + TECHNICAL_WEIGHT + HOLISTIC_WEIGHT - 1.0).abs() < 1e-9);
    }

    #[test]
    fn feedback_attached_to_result() {
        let result = score(bank(), &full_responses(SCALE_MAX));
        assert_eq!(result.career_paths.len(), 4);
        assert!(!result.next_steps.is_empty());
        assert!(result
            .insights
            .iter()
            .any(|s| s.contains("strong passion")));
    }
}
