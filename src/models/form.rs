//! Sanitized resume form data — the validated shape handed to the generator.
//!
//! Produced by the upstream validation layer and consumed as-is; no further
//! validation happens here. Below the two routing fields everything is
//! optional, and an empty string counts the same as an absent field
//! everywhere in rendering.

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// The full sanitized request payload.
///
/// `selected_template` picks the renderer and compiler bundle;
/// `ordered_sections` picks which sections are emitted and in what order.
/// Section names outside the known set contribute nothing to the output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SanitizedValues {
    pub selected_template: String,
    pub ordered_sections: Vec<String>,
    pub basics: Option<Basics>,
    pub education: Option<Education>,
    pub work: Option<Work>,
    pub skills: Option<Skills>,
    pub projects: Option<Projects>,
    pub awards: Option<Awards>,
}

impl SanitizedValues {
    /// Decodes a JSON payload from the form layer.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Basics {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<Location>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub heading: Option<String>,
    pub schools: Option<Vec<School>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct School {
    pub institution: Option<String>,
    pub location: Option<String>,
    pub study_type: Option<String>,
    pub area: Option<String>,
    pub gpa: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Work {
    pub heading: Option<String>,
    pub jobs: Option<Vec<Job>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub heading: Option<String>,
    pub skills: Option<Vec<Skill>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: Option<String>,
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Projects {
    pub heading: Option<String>,
    pub projects: Option<Vec<Project>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Awards {
    pub heading: Option<String>,
    pub awards: Option<Vec<Award>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub date: Option<String>,
    pub awarder: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_payload_deserializes() {
        let payload = serde_json::json!({
            "selectedTemplate": "template6",
            "orderedSections": ["profile", "education"],
            "basics": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "location": { "address": "12 St James's Square" }
            },
            "education": {
                "heading": "Studies",
                "schools": [{
                    "institution": "University of London",
                    "studyType": "BS",
                    "area": "Mathematics",
                    "startDate": "1835",
                    "endDate": "1839"
                }]
            }
        });

        let values: SanitizedValues = serde_json::from_value(payload).unwrap();
        assert_eq!(values.selected_template, "template6");
        assert_eq!(values.ordered_sections, vec!["profile", "education"]);

        let schools = values.education.unwrap().schools.unwrap();
        let school = &schools[0];
        assert_eq!(school.study_type.as_deref(), Some("BS"));
        assert_eq!(school.start_date.as_deref(), Some("1835"));
    }

    #[test]
    fn test_missing_fields_default_instead_of_failing() {
        let values: SanitizedValues = serde_json::from_str("{}").unwrap();
        assert!(values.selected_template.is_empty());
        assert!(values.ordered_sections.is_empty());
        assert!(values.basics.is_none());
        assert!(values.awards.is_none());
    }

    #[test]
    fn test_from_json_rejects_malformed_payload() {
        let result = SanitizedValues::from_json("not json");
        assert!(
            matches!(result, Err(Error::InvalidPayload(_))),
            "malformed payload must surface as InvalidPayload"
        );
    }
}
