//! View models built from the portfolio payload
//!
//! Everything the slides display is computed here so rendering stays a dumb
//! walk over strings.

use crate::config::PortfolioConfig;
use crate::models::{Blog, Education, Experience, Portfolio, Project, Skill};

/// A labelled outbound link
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Profile fields shown on the home and about slides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Resolved image URL, `None` when the profile has no image
    pub image_url: Option<String>,
    pub social_links: Vec<Link>,
    pub resume_available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCard {
    pub name: String,
    pub category: String,
    /// Level bar fill between 0 and 1
    pub fill: f32,
}

/// Card with a title, a body and a row of chips
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedCard {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// Card with a title, a subtitle line and a detail line
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineCard {
    pub title: String,
    pub subtitle: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMethod {
    pub label: String,
    pub value: String,
}

/// Everything the slides render after a successful fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioView {
    pub profile: ProfileView,
    pub skills: Vec<SkillCard>,
    pub projects: Vec<TaggedCard>,
    pub experience: Vec<TimelineCard>,
    pub blogs: Vec<TaggedCard>,
    pub education: Vec<TimelineCard>,
    pub contact_methods: Vec<ContactMethod>,
}

impl PortfolioView {
    pub fn from_portfolio(portfolio: &Portfolio, config: &PortfolioConfig) -> Self {
        let profile = &portfolio.profile;

        let mut social_links = Vec::new();
        if !profile.github.is_empty() {
            social_links.push(link("GitHub", &profile.github));
        }
        if !profile.linkedin.is_empty() {
            social_links.push(link("LinkedIn", &profile.linkedin));
        }

        let mut contact_methods = Vec::new();
        for (label, value) in [
            ("Email", &profile.email),
            ("Phone", &profile.phone),
            ("Location", &profile.location),
        ] {
            if !value.is_empty() {
                contact_methods.push(ContactMethod {
                    label: label.to_string(),
                    value: value.clone(),
                });
            }
        }

        Self {
            profile: ProfileView {
                name: profile.name.clone(),
                role: profile.role.clone(),
                bio: profile.bio.clone(),
                image_url: (!profile.image.is_empty()).then(|| config.api_url(&profile.image)),
                social_links,
                resume_available: !profile.resume.is_empty(),
            },
            skills: portfolio.skills.iter().map(skill_card).collect(),
            projects: portfolio.projects.iter().map(project_card).collect(),
            experience: portfolio.experience.iter().map(experience_card).collect(),
            blogs: portfolio.blogs.iter().map(blog_card).collect(),
            education: portfolio.education.iter().map(education_card).collect(),
            contact_methods,
        }
    }
}

fn link(label: &str, href: &str) -> Link {
    Link {
        label: label.to_string(),
        href: href.to_string(),
    }
}

/// `head` followed by `separator` and `tail` when `tail` is set
fn joined(head: &str, separator: &str, tail: &str) -> String {
    if tail.is_empty() {
        head.to_string()
    } else {
        format!("{}{}{}", head, separator, tail)
    }
}

fn skill_card(skill: &Skill) -> SkillCard {
    SkillCard {
        name: skill.name.clone(),
        category: skill.category.clone(),
        fill: (skill.level.clamp(0.0, 100.0) / 100.0) as f32,
    }
}

fn project_card(project: &Project) -> TaggedCard {
    TaggedCard {
        title: project.title.clone(),
        body: project.description.clone(),
        tags: project.tech_stack.clone(),
    }
}

fn blog_card(blog: &Blog) -> TaggedCard {
    TaggedCard {
        title: blog.title.clone(),
        body: blog.excerpt.clone(),
        tags: blog.tags.clone(),
    }
}

fn experience_card(experience: &Experience) -> TimelineCard {
    TimelineCard {
        title: experience.title.clone(),
        subtitle: joined(&experience.company, " • ", &experience.location),
        detail: experience.description.clone(),
    }
}

fn education_card(education: &Education) -> TimelineCard {
    TimelineCard {
        title: joined(&education.degree, " - ", &education.field),
        subtitle: education.institution.clone(),
        detail: joined(&education.start_date, " - ", &education.end_date),
    }
}
