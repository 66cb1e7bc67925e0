//! Career Classifier: deterministic skill-to-career mapping used whenever the
//! remote completion is unavailable or unparsable.
//!
//! Selection is a cascade of independent steps evaluated in a fixed order.
//! Every step that matches replaces the current selection, so the LAST
//! matching step wins regardless of how relevant earlier matches were.
//! A user with both React and Premiere Pro is therefore a Video Editor.

use tracing::debug;

use crate::career::models::{CareerPlan, RoadmapStep, SkillGap};
use crate::career::rules::{rule, CareerRule, RuleTag};

/// Upper bound on the fallback placement probability.
pub const PROBABILITY_CEILING: i64 = 75;

const FRONTEND_SIGNALS: &[&str] = &["html", "css", "javascript", "react"];
const BACKEND_SIGNALS: &[&str] = &["python", "java", "node.js", "sql"];
const DATA_SIGNALS: &[&str] = &["excel", "sql", "data analysis", "python"];
const DATA_EXCLUDES: &[&str] = &["html", "css", "react"];
const MARKETING_SIGNALS: &[&str] = &["digital marketing", "content writing", "seo", "social media"];
const DESIGN_SIGNALS: &[&str] = &["ui/ux design", "graphic design", "figma"];
const CONTENT_SIGNALS: &[&str] = &["content writing", "communication"];
const CONTENT_EXCLUDES: &[&str] = &["javascript", "python", "java"];
const VIDEO_SIGNALS: &[&str] = &["video editing", "premiere pro", "after effects"];

/// One cascade step: inspects the case-folded skills and optionally proposes a rule.
type CascadeStep = fn(&[String]) -> Option<RuleTag>;

/// Evaluated in order; later matches override earlier ones.
const CASCADE: &[CascadeStep] = &[
    frontend_step,
    backend_step,
    data_step,
    marketing_step,
    design_step,
    content_step,
    video_step,
];

// ────────────────────────────────────────────────────────────────────────────
// Cascade steps
// ────────────────────────────────────────────────────────────────────────────

/// Exact membership test on already case-folded skills.
fn any_of(skills: &[String], set: &[&str]) -> bool {
    skills.iter().any(|s| set.contains(&s.as_str()))
}

fn has(skills: &[String], skill: &str) -> bool {
    skills.iter().any(|s| s == skill)
}

fn frontend_step(skills: &[String]) -> Option<RuleTag> {
    any_of(skills, FRONTEND_SIGNALS).then_some(RuleTag::Frontend)
}

fn backend_step(skills: &[String]) -> Option<RuleTag> {
    if !any_of(skills, BACKEND_SIGNALS) {
        return None;
    }
    if any_of(skills, FRONTEND_SIGNALS) {
        return Some(RuleTag::Fullstack);
    }
    Some(backend_specialisation(skills))
}

/// python beats java beats generic backend.
fn backend_specialisation(skills: &[String]) -> RuleTag {
    if has(skills, "python") {
        RuleTag::Python
    } else if has(skills, "java") {
        RuleTag::Java
    } else {
        RuleTag::Backend
    }
}

fn data_step(skills: &[String]) -> Option<RuleTag> {
    (any_of(skills, DATA_SIGNALS) && !any_of(skills, DATA_EXCLUDES)).then_some(RuleTag::Data)
}

fn marketing_step(skills: &[String]) -> Option<RuleTag> {
    any_of(skills, MARKETING_SIGNALS).then_some(RuleTag::Marketing)
}

fn design_step(skills: &[String]) -> Option<RuleTag> {
    any_of(skills, DESIGN_SIGNALS).then_some(RuleTag::Design)
}

fn content_step(skills: &[String]) -> Option<RuleTag> {
    (any_of(skills, CONTENT_SIGNALS) && !any_of(skills, CONTENT_EXCLUDES))
        .then_some(RuleTag::Content)
}

fn video_step(skills: &[String]) -> Option<RuleTag> {
    any_of(skills, VIDEO_SIGNALS).then_some(RuleTag::Video)
}

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

fn fold(skills: &[String]) -> Vec<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

fn select_tag(folded: &[String]) -> RuleTag {
    CASCADE
        .iter()
        .filter_map(|step| step(folded))
        .last()
        .unwrap_or(RuleTag::Default)
}

/// Required skills not covered by any user skill.
///
/// A required skill counts as covered when either string contains the other
/// after case-folding. There is no punctuation normalisation: "nodejs" does
/// not cover "Node.js", but "node" does.
pub fn missing_skills(required: &[&str], folded_skills: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|req| {
            let req_lower = req.to_lowercase();
            !folded_skills
                .iter()
                .any(|s| req_lower.contains(s.as_str()) || s.contains(req_lower.as_str()))
        })
        .map(|req| req.to_string())
        .collect()
}

/// `round(base × (0.5 + ratio × 0.5))` capped at `PROBABILITY_CEILING`.
///
/// The result never drops below half the base probability (rounded).
pub fn adjusted_probability(base: u32, required: usize, missing: usize) -> i64 {
    let match_ratio = if required == 0 {
        0.0
    } else {
        (required - missing) as f64 / required as f64
    };
    let adjusted = (base as f64 * (0.5 + match_ratio * 0.5)).round() as i64;
    adjusted.min(PROBABILITY_CEILING)
}

/// The fixed four-step roadmap. Step 1 names the first two required skills.
pub fn roadmap(rule: &CareerRule) -> Vec<RoadmapStep> {
    let core = rule
        .required_skills
        .iter()
        .take(2)
        .copied()
        .collect::<Vec<_>>()
        .join(" and ");

    vec![
        RoadmapStep {
            step: 1,
            title: "Improve Core Skills".to_string(),
            description: format!("Master {core} fundamentals"),
        },
        RoadmapStep {
            step: 2,
            title: "Build 2 Projects".to_string(),
            description: "Create portfolio projects to showcase your skills".to_string(),
        },
        RoadmapStep {
            step: 3,
            title: "Internship / Freelance".to_string(),
            description: "Gain real-world experience through internships".to_string(),
        },
        RoadmapStep {
            step: 4,
            title: "Apply Smartly".to_string(),
            description: "Target companies matching your skill level".to_string(),
        },
    ]
}

/// Builds the full fallback career plan for a non-empty skill list.
///
/// Pure: the same input always yields the same plan.
pub fn determine_career(skills: &[String]) -> CareerPlan {
    let folded = fold(skills);
    let selected = rule(select_tag(&folded));
    debug!(rule = ?selected.tag, career = selected.career, "cascade selected rule");

    let missing = missing_skills(selected.required_skills, &folded);
    let placement_probability = adjusted_probability(
        selected.base_probability,
        selected.required_skills.len(),
        missing.len(),
    );

    CareerPlan {
        career: selected.career.to_string(),
        salary_range: selected.salary_range.to_string(),
        placement_probability,
        roadmap: roadmap(selected),
        skill_gap: SkillGap {
            current: skills.to_vec(),
            required: selected
                .required_skills
                .iter()
                .map(|s| s.to_string())
                .collect(),
            missing,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
