//! Summary Composer: template summary used when the remote completion fails.

/// Skills listed by name before the remainder is collapsed into a count.
const LISTED_SKILLS: usize = 3;

/// Builds the fallback professional summary.
///
/// Experience only selects the seniority word; blank experience counts as none.
pub fn compose_summary(skills: &[String], experience: Option<&str>) -> String {
    let level = match experience {
        Some(e) if !e.trim().is_empty() => "experienced",
        _ => "entry-level",
    };

    format!(
        "Motivated {level} professional with expertise in {}. \
        Eager to contribute to innovative projects and grow within a dynamic team environment. \
        Strong problem-solving abilities and committed to continuous learning and professional development.",
        describe_skills(skills)
    )
}

/// "A", "A and B", "A, B and C", or "A, B, C, and N more".
fn describe_skills(skills: &[String]) -> String {
    match skills {
        [] => String::new(),
        [only] => only.clone(),
        _ if skills.len() > LISTED_SKILLS => format!(
            "{}, and {} more",
            skills[..LISTED_SKILLS].join(", "),
            skills.len() - LISTED_SKILLS
        ),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
