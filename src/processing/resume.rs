//! Structured resume record consumed by the scorer and keyword matcher

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub header: Header,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    /// Category key (e.g. `programming_languages`) to ordered skill list.
    pub skills: BTreeMap<String, Vec<String>>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub gpa: String,
    pub graduation_date: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub organization: String,
    pub date: String,
    pub bullets: Vec<String>,
}

impl Resume {
    /// Parse JSON text leniently. Only text that is not JSON at all is an
    /// error; any JSON value becomes a resume.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }

    /// Coerce an arbitrary JSON value into a resume. Wrong types and
    /// `null`s fall back to empty defaults instead of failing.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            header: obj.get("header").map(Header::from_value).unwrap_or_default(),
            summary: coerce_text(obj.get("summary")),
            experience: coerce_list(obj.get("experience"), Experience::from_value),
            education: coerce_list(obj.get("education"), Education::from_value),
            certifications: coerce_list(obj.get("certifications"), Certification::from_value),
            skills: coerce_skills(obj.get("skills")),
            projects: coerce_list(obj.get("projects"), Project::from_value),
        }
    }

    pub fn experience_bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.bullets.iter().map(String::as_str))
    }

    pub fn project_bullets(&self) -> impl Iterator<Item = &str> {
        self.projects
            .iter()
            .flat_map(|p| p.bullets.iter().map(String::as_str))
    }

    /// Experience bullets followed by project bullets.
    pub fn all_bullets(&self) -> impl Iterator<Item = &str> {
        self.experience_bullets().chain(self.project_bullets())
    }

    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.skills.values().flat_map(|v| v.iter().map(String::as_str))
    }

    /// Every free-text field in the record.
    pub fn text_fields(&self) -> Vec<&str> {
        let h = &self.header;
        let mut fields = vec![
            h.name.as_str(),
            h.title.as_str(),
            h.email.as_str(),
            h.phone.as_str(),
            h.location.as_str(),
            h.linkedin.as_str(),
            self.summary.as_str(),
        ];
        for e in &self.experience {
            fields.extend([
                e.role.as_str(),
                e.organization.as_str(),
                e.start_date.as_str(),
                e.end_date.as_str(),
                e.location.as_str(),
            ]);
            fields.extend(e.bullets.iter().map(String::as_str));
        }
        for e in &self.education {
            fields.extend([
                e.degree.as_str(),
                e.field.as_str(),
                e.institution.as_str(),
                e.gpa.as_str(),
                e.graduation_date.as_str(),
                e.location.as_str(),
            ]);
        }
        for c in &self.certifications {
            fields.extend([c.name.as_str(), c.issuer.as_str(), c.date.as_str()]);
        }
        fields.extend(self.all_skills());
        for p in &self.projects {
            fields.extend([p.title.as_str(), p.organization.as_str(), p.date.as_str()]);
            fields.extend(p.bullets.iter().map(String::as_str));
        }
        fields
    }
}

impl Header {
    fn from_value(value: &Value) -> Self {
        Self {
            name: field(value, "name"),
            title: field(value, "title"),
            email: field(value, "email"),
            phone: field(value, "phone"),
            location: field(value, "location"),
            linkedin: field(value, "linkedin"),
        }
    }
}

impl Experience {
    fn from_value(value: &Value) -> Self {
        Self {
            role: field(value, "role"),
            organization: field(value, "organization"),
            start_date: field(value, "start_date"),
            end_date: field(value, "end_date"),
            location: field(value, "location"),
            bullets: coerce_strings(value.get("bullets")),
        }
    }
}

impl Education {
    fn from_value(value: &Value) -> Self {
        Self {
            degree: field(value, "degree"),
            field: field(value, "field"),
            institution: field(value, "institution"),
            gpa: field(value, "gpa"),
            graduation_date: field(value, "graduation_date"),
            location: field(value, "location"),
        }
    }
}

impl Certification {
    fn from_value(value: &Value) -> Self {
        Self {
            name: field(value, "name"),
            issuer: field(value, "issuer"),
            date: field(value, "date"),
        }
    }
}

impl Project {
    fn from_value(value: &Value) -> Self {
        Self {
            title: field(value, "title"),
            organization: field(value, "organization"),
            date: field(value, "date"),
            bullets: coerce_strings(value.get("bullets")),
        }
    }
}

fn field(value: &Value, key: &str) -> String {
    coerce_text(value.get(key))
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_list<T>(value: Option<&Value>, convert: fn(&Value) -> T) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items.iter().filter(|v| v.is_object()).map(convert).collect(),
        Some(obj @ Value::Object(_)) => vec![convert(obj)],
        _ => Vec::new(),
    }
}

fn coerce_strings(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| coerce_text(Some(v)))
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) => s
            .lines()
            .map(str::to_string)
            .filter(|l| !l.trim().is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn coerce_skills(value: Option<&Value>) -> BTreeMap<String, Vec<String>> {
    let mut skills = BTreeMap::new();
    match value {
        Some(Value::Object(categories)) => {
            for (category, list) in categories {
                let values = match list {
                    Value::String(s) => split_skill_list(s),
                    other => coerce_strings(Some(other)),
                };
                skills.insert(category.clone(), values);
            }
        }
        Some(list @ Value::Array(_)) => {
            skills.insert("skills".to_string(), coerce_strings(Some(list)));
        }
        Some(Value::String(s)) => {
            skills.insert("skills".to_string(), split_skill_list(s));
        }
        _ => {}
    }
    skills
}

fn split_skill_list(text: &str) -> Vec<String> {
    text.split([',', ';', '\n'])
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
