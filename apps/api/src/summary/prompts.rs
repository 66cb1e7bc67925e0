// Prompt constants for the summary completion.

/// System prompt for the CV summary. The reply is used as plain text.
pub const SUMMARY_SYSTEM: &str = "You are a professional CV writer. \
    Create a compelling professional summary for a CV. \
    Return ONLY the summary text (2-3 sentences), no JSON, no quotes. \
    Make it professional, concise, and tailored to the entry-level Indian job market. \
    Maximum 50 words.";

const NO_EXPERIENCE: &str = "Entry level / Fresher";

/// User message listing the candidate's name, skills and experience.
pub fn summary_user_message(name: &str, skills: &[String], experience: Option<&str>) -> String {
    let experience = experience
        .filter(|e| !e.trim().is_empty())
        .unwrap_or(NO_EXPERIENCE);
    format!(
        "Name: {name}\nSkills: {}\nExperience: {experience}\n\nGenerate a professional summary:",
        skills.join(", ")
    )
}
