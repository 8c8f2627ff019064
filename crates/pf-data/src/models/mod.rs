//! Response models for `GET /api/portfolio`

pub mod lenient;

use serde::Deserialize;
use serde_json::Value;

/// The whole portfolio payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    #[serde(deserialize_with = "lenient::object")]
    pub profile: Profile,

    #[serde(deserialize_with = "lenient::list")]
    pub skills: Vec<Skill>,

    #[serde(deserialize_with = "lenient::list")]
    pub projects: Vec<Project>,

    #[serde(deserialize_with = "lenient::list")]
    pub experience: Vec<Experience>,

    #[serde(deserialize_with = "lenient::list")]
    pub blogs: Vec<Blog>,

    #[serde(deserialize_with = "lenient::list")]
    pub education: Vec<Education>,
}

impl Portfolio {
    /// Decode a response body; a body that is not an object is empty
    pub fn from_value(value: Value) -> Self {
        lenient::record(value)
    }
}

/// Profile scalars
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub role: String,
    #[serde(deserialize_with = "lenient::string")]
    pub bio: String,
    /// Image path, relative to the API base unless absolute
    #[serde(deserialize_with = "lenient::string")]
    pub image: String,
    /// Non-empty when a resume has been uploaded
    #[serde(deserialize_with = "lenient::string")]
    pub resume: String,
    #[serde(deserialize_with = "lenient::string")]
    pub github: String,
    #[serde(deserialize_with = "lenient::string")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    /// Proficiency, nominally 0 to 100
    #[serde(deserialize_with = "lenient::number")]
    pub level: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(rename = "techStack", deserialize_with = "lenient::string_list")]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Blog {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub excerpt: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient::string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::string")]
    pub field: String,
    #[serde(deserialize_with = "lenient::string")]
    pub institution: String,
    #[serde(rename = "startDate", deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(rename = "endDate", deserialize_with = "lenient::string")]
    pub end_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_payload() {
        let portfolio = Portfolio::from_value(json!({
            "profile": { "name": "Ada" },
            "skills": []
        }));

        assert_eq!(portfolio.profile.name, "Ada");
        assert_eq!(portfolio.profile.role, "");
        assert!(portfolio.skills.is_empty());
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.experience.is_empty());
        assert!(portfolio.blogs.is_empty());
        assert!(portfolio.education.is_empty());
    }

    #[test]
    fn test_non_array_lists_degrade_to_empty() {
        let portfolio = Portfolio::from_value(json!({
            "skills": "rust",
            "projects": { "title": "x" },
            "blogs": null,
            "education": 3
        }));

        assert!(portfolio.skills.is_empty());
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.blogs.is_empty());
        assert!(portfolio.education.is_empty());
    }

    #[test]
    fn test_wrong_scalar_types_are_coerced() {
        let portfolio = Portfolio::from_value(json!({
            "profile": { "name": 7, "phone": null },
            "skills": [{ "name": "Rust", "level": "90" }, { "level": "lots" }],
            "projects": [{ "title": "Site", "techStack": "rust" }]
        }));

        assert_eq!(portfolio.profile.name, "7");
        assert_eq!(portfolio.profile.phone, "");
        assert_eq!(portfolio.skills[0].level, 90.0);
        assert_eq!(portfolio.skills[1].level, 0.0);
        assert_eq!(portfolio.skills[1].name, "");
        assert!(portfolio.projects[0].tech_stack.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let portfolio = Portfolio::from_value(json!({
            "projects": [{ "title": "Site", "techStack": ["Rust", "egui"] }],
            "education": [{ "degree": "BSc", "startDate": "2015", "endDate": "2019" }]
        }));

        assert_eq!(portfolio.projects[0].tech_stack, vec!["Rust", "egui"]);
        assert_eq!(portfolio.education[0].start_date, "2015");
        assert_eq!(portfolio.education[0].end_date, "2019");
    }

    #[test]
    fn test_non_object_body_is_empty() {
        assert_eq!(Portfolio::from_value(json!([1, 2, 3])), Portfolio::default());
        assert_eq!(
            Portfolio::from_value(json!({ "profile": "Ada" })).profile,
            Profile::default()
        );
    }
}
