use serde::{Deserialize, Serialize};

/// One step of the suggested roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

/// Required skills of the selected career split by what the user already has.
///
/// `missing` is always drawn from `required`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub current: Vec<String>,
    pub required: Vec<String>,
    pub missing: Vec<String>,
}

/// Career plan returned by `POST /api/career-plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPlan {
    pub career: String,
    pub salary_range: String,
    pub placement_probability: i64,
    pub roadmap: Vec<RoadmapStep>,
    pub skill_gap: SkillGap,
}
