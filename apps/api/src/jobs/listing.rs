//! Fixed in-memory job listing. There is no job-board integration.

use std::str::FromStr;

use serde::Serialize;

/// How crowded the applicant pool is for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl FromStr for Competition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Competition::Low),
            "Medium" => Ok(Competition::Medium),
            "High" => Ok(Competition::High),
            other => Err(format!("Unknown competition level '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary_range: &'static str,
    pub experience: &'static str,
    pub competition: Competition,
    pub skills: &'static [&'static str],
    pub posted_days: u32,
    pub apply_url: &'static str,
}

pub const JOBS: &[Job] = &[
    Job {
        id: "1",
        title: "Frontend Developer",
        company: "TechStart India",
        location: "Bangalore, Karnataka",
        salary_range: "₹4 - ₹6 LPA",
        experience: "0-1 years",
        competition: Competition::Medium,
        skills: &["HTML", "CSS", "JavaScript", "React"],
        posted_days: 2,
        apply_url: "#",
    },
    Job {
        id: "2",
        title: "Junior Data Analyst",
        company: "DataDriven Solutions",
        location: "Mumbai, Maharashtra",
        salary_range: "₹3 - ₹5 LPA",
        experience: "0-2 years",
        competition: Competition::High,
        skills: &["Excel", "SQL", "Python", "Data Analysis"],
        posted_days: 1,
        apply_url: "#",
    },
    Job {
        id: "3",
        title: "Digital Marketing Executive",
        company: "GrowthBox",
        location: "Delhi NCR",
        salary_range: "₹2.5 - ₹4 LPA",
        experience: "0-1 years",
        competition: Competition::Low,
        skills: &["Digital Marketing", "Content Writing", "Social Media"],
        posted_days: 3,
        apply_url: "#",
    },
    Job {
        id: "4",
        title: "Python Developer",
        company: "CodeCraft Labs",
        location: "Hyderabad, Telangana",
        salary_range: "₹4 - ₹7 LPA",
        experience: "0-2 years",
        competition: Competition::Medium,
        skills: &["Python", "Django", "SQL", "REST APIs"],
        posted_days: 5,
        apply_url: "#",
    },
    Job {
        id: "5",
        title: "UI/UX Designer",
        company: "DesignFirst Studio",
        location: "Pune, Maharashtra",
        salary_range: "₹3 - ₹5 LPA",
        experience: "0-1 years",
        competition: Competition::Medium,
        skills: &["UI/UX Design", "Figma", "Graphic Design"],
        posted_days: 4,
        apply_url: "#",
    },
    Job {
        id: "6",
        title: "Content Writer",
        company: "WordWise Media",
        location: "Remote",
        salary_range: "₹2 - ₹3.5 LPA",
        experience: "0-1 years",
        competition: Competition::Low,
        skills: &["Content Writing", "SEO", "Communication"],
        posted_days: 1,
        apply_url: "#",
    },
    Job {
        id: "7",
        title: "Java Developer Trainee",
        company: "Enterprise Solutions Ltd",
        location: "Chennai, Tamil Nadu",
        salary_range: "₹3.5 - ₹5 LPA",
        experience: "Fresher",
        competition: Competition::High,
        skills: &["Java", "SQL", "Spring Boot"],
        posted_days: 6,
        apply_url: "#",
    },
    Job {
        id: "8",
        title: "Video Editor",
        company: "Creative Studios",
        location: "Mumbai, Maharashtra",
        salary_range: "₹2.5 - ₹4.5 LPA",
        experience: "0-1 years",
        competition: Competition::Low,
        skills: &["Video Editing", "After Effects", "Premiere Pro"],
        posted_days: 2,
        apply_url: "#",
    },
];

/// Keeps jobs whose title, company or any skill contains `query`
/// (case-insensitive), then narrows to `competition` when given.
/// An empty query matches everything.
pub fn filter_jobs<'a>(
    jobs: &'a [Job],
    query: &str,
    competition: Option<Competition>,
) -> Vec<&'a Job> {
    let query = query.to_lowercase();
    jobs.iter()
        .filter(|job| query.is_empty() || matches_query(job, &query))
        .filter(|job| competition.map_or(true, |c| job.competition == c))
        .collect()
}

fn matches_query(job: &Job, query: &str) -> bool {
    job.title.to_lowercase().contains(query)
        || job.company.to_lowercase().contains(query)
        || job.skills.iter().any(|s| s.to_lowercase().contains(query))
}
