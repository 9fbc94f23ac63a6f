//! Output-side types: scored dimensions, the breakdown, and the final result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::Category;

/// The twelve scored sub-dimensions of an assessment.
///
/// Ten are computed from responses; `CognitiveStyle` and `DomainKnowledge`
/// are fixed baseline constants (see [`Dimension::fixed_score`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Interest,
    PersonalityFit,
    Motivation,
    CognitiveStyle,
    GeneralAptitude,
    PrerequisiteKnowledge,
    DomainKnowledge,
    Will,
    Skill,
    CognitiveReadiness,
    AbilityToLearn,
    RealWorldAlignment,
}

impl Dimension {
    /// All dimensions in breakdown order.
    pub const ALL: [Dimension; 12] = [
        Dimension::Interest,
        Dimension::PersonalityFit,
        Dimension::Motivation,
        Dimension::CognitiveStyle,
        Dimension::GeneralAptitude,
        Dimension::PrerequisiteKnowledge,
        Dimension::DomainKnowledge,
        Dimension::Will,
        Dimension::Skill,
        Dimension::CognitiveReadiness,
        Dimension::AbilityToLearn,
        Dimension::RealWorldAlignment,
    ];

    /// Display label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Interest => "Interest Level",
            Dimension::PersonalityFit => "Personality Fit",
            Dimension::Motivation => "Motivation",
            Dimension::CognitiveStyle => "Cognitive Style",
            Dimension::GeneralAptitude => "General Aptitude",
            Dimension::PrerequisiteKnowledge => "Technical Knowledge",
            Dimension::DomainKnowledge => "Domain Knowledge",
            Dimension::Will => "Persistence",
            Dimension::Skill => "Current Skills",
            Dimension::CognitiveReadiness => "Cognitive Readiness",
            Dimension::AbilityToLearn => "Learning Readiness",
            Dimension::RealWorldAlignment => "Role Alignment",
        }
    }

    /// The `(category, subcategory)` selector for computed dimensions, or
    /// `None` for the fixed-constant ones.
    pub fn selector(&self) -> Option<(Category, &'static str)> {
        match self {
            Dimension::Interest => Some((Category::Personality, "interest")),
            Dimension::PersonalityFit => Some((Category::Personality, "personality")),
            Dimension::Motivation => Some((Category::Personality, "motivation")),
            Dimension::CognitiveStyle => None,
            Dimension::GeneralAptitude => Some((Category::Technical, "aptitude")),
            Dimension::PrerequisiteKnowledge => Some((Category::Technical, "prerequisite")),
            Dimension::DomainKnowledge => None,
            Dimension::Will => Some((Category::Holistic, "will")),
            Dimension::Skill => Some((Category::Holistic, "skill")),
            Dimension::CognitiveReadiness => Some((Category::Holistic, "cognitive")),
            Dimension::AbilityToLearn => Some((Category::Holistic, "ability_to_learn")),
            Dimension::RealWorldAlignment => Some((Category::Holistic, "real_world")),
        }
    }

    /// Fixed baseline score for dimensions not derived from responses.
    ///
    /// `cognitive_style` and `domain_knowledge` ship as constants (75 and 70)
    /// rather than being computed; the values are pinned by the scoring tests.
    pub fn fixed_score(&self) -> Option<u8> {
        match self {
            Dimension::CognitiveStyle => Some(75),
            Dimension::DomainKnowledge => Some(70),
            _ => None,
        }
    }

    /// The category whose roll-up this dimension feeds.
    pub fn category(&self) -> Category {
        match self {
            Dimension::Interest
            | Dimension::PersonalityFit
            | Dimension::Motivation
            | Dimension::CognitiveStyle => Category::Personality,
            Dimension::GeneralAptitude
            | Dimension::PrerequisiteKnowledge
            | Dimension::DomainKnowledge => Category::Technical,
            Dimension::Will
            | Dimension::Skill
            | Dimension::CognitiveReadiness
            | Dimension::AbilityToLearn
            | Dimension::RealWorldAlignment => Category::Holistic,
        }
    }
}

/// Per-dimension integer percentages in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub interest: u8,
    pub personality_fit: u8,
    pub motivation: u8,
    pub cognitive_style: u8,
    pub general_aptitude: u8,
    pub prerequisite_knowledge: u8,
    pub domain_knowledge: u8,
    pub will: u8,
    pub skill: u8,
    pub cognitive_readiness: u8,
    pub ability_to_learn: u8,
    pub real_world_alignment: u8,
}

impl ScoreBreakdown {
    /// Score for a single dimension.
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Interest => self.interest,
            Dimension::PersonalityFit => self.personality_fit,
            Dimension::Motivation => self.motivation,
            Dimension::CognitiveStyle => self.cognitive_style,
            Dimension::GeneralAptitude => self.general_aptitude,
            Dimension::PrerequisiteKnowledge => self.prerequisite_knowledge,
            Dimension::DomainKnowledge => self.domain_knowledge,
            Dimension::Will => self.will,
            Dimension::Skill => self.skill,
            Dimension::CognitiveReadiness => self.cognitive_readiness,
            Dimension::AbilityToLearn => self.ability_to_learn,
            Dimension::RealWorldAlignment => self.real_world_alignment,
        }
    }

    /// Iterate `(dimension, score)` pairs in breakdown order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }
}

/// The final verdict tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// Map an overall confidence percentage to a tier.
    ///
    /// Inclusive lower bounds, evaluated high to low: 80 for Yes, 60 for Maybe.
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence >= 80 {
            Recommendation::Yes
        } else if confidence >= 60 {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    /// Headline message shown with the verdict.
    pub fn headline(&self) -> &'static str {
        match self {
            Recommendation::Yes => {
                "You show strong potential for a career as a Corporate Trainer!"
            }
            Recommendation::Maybe => {
                "You have good potential but may benefit from additional development."
            }
            Recommendation::No => {
                "Consider exploring related roles that might be a better fit."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Yes => write!(f, "Yes"),
            Recommendation::Maybe => write!(f, "Maybe"),
            Recommendation::No => write!(f, "No"),
        }
    }
}

impl FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(Recommendation::Yes),
            "maybe" => Ok(Recommendation::Maybe),
            "no" => Ok(Recommendation::No),
            other => Err(format!("unknown recommendation: {other}")),
        }
    }
}

/// The complete outcome of one assessment pass.
///
/// Constructed exactly once per completed pass and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Weighted blend of the three category scores.
    pub overall_confidence: u8,
    /// Verdict tier derived from the confidence.
    pub recommendation: Recommendation,
    /// Personality-cluster roll-up.
    pub personality_score: u8,
    /// Technical-cluster roll-up.
    pub technical_score: u8,
    /// Holistic-cluster roll-up.
    pub holistic_score: u8,
    /// Per-dimension scores.
    pub breakdown: ScoreBreakdown,
    /// Threshold-triggered observations. May be empty.
    pub insights: Vec<String>,
    /// Suggested actions for the verdict tier.
    pub next_steps: Vec<String>,
    /// Suggested roles for the verdict tier.
    pub career_paths: Vec<String>,
}

impl AssessmentResult {
    /// Category roll-up by category.
    pub fn category_score(&self, category: Category) -> u8 {
        match category {
            Category::Personality => self.personality_score,
            Category::Technical => self.technical_score,
            Category::Holistic => self.holistic_score,
        }
    }
}
