//! Threshold-driven feedback text: next steps, career paths, and insights.
//!
//! The thresholds and strings here are content decisions for the Corporate
//! Trainer bank, pinned by tests. Pure functions of the recommendation and
//! the score breakdown.
//!
//! TODO: move the copy into the bank file once a second role bank exists, so
//! feedback evolves with the bank instead of with this crate.

use crate::results::{Recommendation, ScoreBreakdown};

/// Suggested actions for the verdict tier: a base list of three, plus one
/// conditional extra when a named score threshold is crossed.
pub fn next_steps(recommendation: Recommendation, scores: &ScoreBreakdown) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();

    match recommendation {
        Recommendation::Yes => {
            steps.push(
                "Explore formal training in instructional design (ADDIE, SAM methodologies)"
                    .into(),
            );
            steps.push("Practice delivering presentations to build confidence".into());
            steps.push("Create a sample training module as a portfolio piece".into());

            if scores.prerequisite_knowledge < 70 {
                steps.push(
                    "Learn about Learning Management Systems (LMS) and e-learning tools".into(),
                );
            }
        }
        Recommendation::Maybe => {
            steps.push("Consider taking a course in adult learning principles".into());
            steps.push("Volunteer to facilitate workshops or training sessions".into());
            steps.push("Develop your public speaking and presentation skills".into());

            if scores.skill < 60 {
                steps.push(
                    "Practice facilitation skills through community groups or volunteer work"
                        .into(),
                );
            }
        }
        Recommendation::No => {
            steps.push(
                "Consider related roles like Instructional Designer or Learning Coordinator"
                    .into(),
            );
            steps.push("Develop foundational skills in communication and presentation".into());
            steps.push("Explore whether one-on-one coaching might be a better fit".into());
        }
    }

    steps
}

/// Fixed four-item role list per verdict tier. No score sensitivity.
pub fn career_paths(recommendation: Recommendation) -> Vec<String> {
    let paths: [&str; 4] = match recommendation {
        Recommendation::Yes => [
            "Corporate Trainer",
            "Learning & Development Specialist",
            "Training Consultant",
            "Leadership Development Coach",
        ],
        Recommendation::Maybe => [
            "Training Coordinator",
            "Instructional Designer",
            "Learning Content Creator",
            "Employee Development Associate",
        ],
        Recommendation::No => [
            "Instructional Designer",
            "Learning Content Creator",
            "Training Administrator",
            "Internal Communications Specialist",
        ],
    };

    paths.iter().map(|s| (*s).into()).collect()
}

/// Independent threshold checks against five dimensions. Each appends zero or
/// one string; the list may be empty.
pub fn insights(scores: &ScoreBreakdown) -> Vec<String> {
    let mut insights: Vec<String> = Vec::new();

    if scores.interest >= 80 {
        insights
            .push("You show strong passion for helping others learn and grow professionally.".into());
    }

    if scores.personality_fit >= 80 {
        insights.push(
            "Your communication style and personality are well-suited for training roles.".into(),
        );
    } else if scores.personality_fit < 60 {
        insights
            .push("Consider developing your public speaking and group facilitation skills.".into());
    }

    if scores.skill >= 70 {
        insights.push(
            "Your existing experience with presentations and facilitation is a strong foundation."
                .into(),
        );
    }

    if scores.prerequisite_knowledge < 60 {
        insights.push(
            "Learning about instructional design principles would significantly boost your readiness."
                .into(),
        );
    }

    if scores.real_world_alignment >= 80 {
        insights.push(
            "You have a clear vision of what corporate training work involves and find it appealing."
                .into(),
        );
    }

    insights
}
