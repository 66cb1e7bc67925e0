//! Career rule table: fixed career targets the classifier can select.

/// Short key identifying one entry of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTag {
    Default,
    Frontend,
    Backend,
    Fullstack,
    Data,
    Marketing,
    Design,
    Content,
    Video,
    Python,
    Java,
}

/// A career target with its display salary band, base placement probability
/// (0–100) and the skills a candidate is expected to bring.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerRule {
    pub tag: RuleTag,
    pub career: &'static str,
    pub salary_range: &'static str,
    pub base_probability: u32,
    pub required_skills: &'static [&'static str],
}

static DEFAULT: CareerRule = CareerRule {
    tag: RuleTag::Default,
    career: "Software Developer",
    salary_range: "₹3 LPA – ₹5 LPA",
    base_probability: 35,
    required_skills: &["Programming", "Problem Solving", "Communication"],
};

static FRONTEND: CareerRule = CareerRule {
    tag: RuleTag::Frontend,
    career: "Frontend Developer",
    salary_range: "₹3 LPA – ₹6 LPA",
    base_probability: 45,
    required_skills: &["HTML", "CSS", "JavaScript", "React", "Git", "Responsive Design"],
};

static BACKEND: CareerRule = CareerRule {
    tag: RuleTag::Backend,
    career: "Backend Developer",
    salary_range: "₹3.5 LPA – ₹7 LPA",
    base_probability: 40,
    required_skills: &["Python", "Java", "Node.js", "SQL", "REST APIs", "Git"],
};

static FULLSTACK: CareerRule = CareerRule {
    tag: RuleTag::Fullstack,
    career: "Full Stack Developer",
    salary_range: "₹4 LPA – ₹8 LPA",
    base_probability: 35,
    required_skills: &["JavaScript", "React", "Node.js", "SQL", "Git", "REST APIs"],
};

static DATA: CareerRule = CareerRule {
    tag: RuleTag::Data,
    career: "Junior Data Analyst",
    salary_range: "₹3 LPA – ₹5 LPA",
    base_probability: 50,
    required_skills: &["Excel", "SQL", "Python", "Data Analysis", "Statistics"],
};

static MARKETING: CareerRule = CareerRule {
    tag: RuleTag::Marketing,
    career: "Digital Marketing Executive",
    salary_range: "₹2.5 LPA – ₹4 LPA",
    base_probability: 55,
    required_skills: &[
        "Digital Marketing",
        "Content Writing",
        "SEO",
        "Social Media",
        "Analytics",
    ],
};

static DESIGN: CareerRule = CareerRule {
    tag: RuleTag::Design,
    career: "UI/UX Designer",
    salary_range: "₹3 LPA – ₹5 LPA",
    base_probability: 42,
    required_skills: &[
        "UI/UX Design",
        "Figma",
        "Graphic Design",
        "User Research",
        "Prototyping",
    ],
};

static CONTENT: CareerRule = CareerRule {
    tag: RuleTag::Content,
    career: "Content Writer",
    salary_range: "₹2 LPA – ₹3.5 LPA",
    base_probability: 60,
    required_skills: &["Content Writing", "SEO", "Communication", "Research", "Editing"],
};

static VIDEO: CareerRule = CareerRule {
    tag: RuleTag::Video,
    career: "Video Editor",
    salary_range: "₹2.5 LPA – ₹4.5 LPA",
    base_probability: 48,
    required_skills: &["Video Editing", "Premiere Pro", "After Effects", "Storytelling"],
};

static PYTHON: CareerRule = CareerRule {
    tag: RuleTag::Python,
    career: "Python Developer",
    salary_range: "₹3.5 LPA – ₹6 LPA",
    base_probability: 43,
    required_skills: &["Python", "Django", "SQL", "REST APIs", "Git"],
};

static JAVA: CareerRule = CareerRule {
    tag: RuleTag::Java,
    career: "Java Developer",
    salary_range: "₹3.5 LPA – ₹6 LPA",
    base_probability: 40,
    required_skills: &["Java", "Spring Boot", "SQL", "Git", "REST APIs"],
};

/// Looks up the rule for `tag`.
pub fn rule(tag: RuleTag) -> &'static CareerRule {
    match tag {
        RuleTag::Default => &DEFAULT,
        RuleTag::Frontend => &FRONTEND,
        RuleTag::Backend => &BACKEND,
        RuleTag::Fullstack => &FULLSTACK,
        RuleTag::Data => &DATA,
        RuleTag::Marketing => &MARKETING,
        RuleTag::Design => &DESIGN,
        RuleTag::Content => &CONTENT,
        RuleTag::Video => &VIDEO,
        RuleTag::Python => &PYTHON,
        RuleTag::Java => &JAVA,
    }
}
