// Prompt constants for the career-plan completion.

/// System prompt for career planning. The reply is parsed as a JSON object.
pub const CAREER_PLAN_SYSTEM: &str = r#"You are a career advisor for the Indian job market. Analyze the given skills and suggest the best career path.
Return ONLY a JSON object with this exact structure:
{
  "career": "Job Title",
  "salaryRange": "₹X LPA – ₹Y LPA",
  "placementProbability": number between 20-70,
  "roadmap": [{"step": 1, "title": "...", "description": "..."}, ...],
  "skillGap": {
    "current": ["skill1"],
    "required": ["skill1", "skill2"],
    "missing": ["skill2"]
  }
}

Important: Keep salary REALISTIC for the Indian entry-level market (₹2-8 LPA max).
Placement probability should be conservative (20-70%)."#;

/// User message: `Skills: a, b, c`.
pub fn career_plan_user_message(skills: &[String]) -> String {
    format!("Skills: {}", skills.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_joins_skills_in_order() {
        let skills = vec!["React".to_string(), "SQL".to_string()];
        assert_eq!(career_plan_user_message(&skills), "Skills: React, SQL");
    }

    #[test]
    fn test_system_prompt_asks_for_camel_case_schema() {
        assert!(CAREER_PLAN_SYSTEM.contains("\"placementProbability\""));
        assert!(CAREER_PLAN_SYSTEM.contains("\"skillGap\""));
    }
}
