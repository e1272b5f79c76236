//! Course Editing
//!
//! Raw editor form fields and the validated update sent to the backend.

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{Course, CourseLevel};

/// Editor form values exactly as typed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseFormFields {
    pub title: String,
    pub category: String,
    pub price: String,
    pub level: String,
    pub description: String,
    /// One prerequisite per line
    pub prerequisites: String,
    /// One learning outcome per line
    pub outcomes: String,
}

impl CourseFormFields {
    /// Pre-fill the editor from an existing course
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            category: course.category.to_lowercase(),
            price: course.price.to_string(),
            level: course.level.as_str().to_string(),
            description: course.description.clone(),
            prerequisites: course.prerequisites.join("\n"),
            outcomes: course.outcomes.join("\n"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseUpdate {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub level: CourseLevel,
    pub description: String,
    pub prerequisites: Vec<String>,
    pub outcomes: Vec<String>,
}

/// Non-blank trimmed lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-negative price rounded to cents
fn parse_price(raw: &str) -> AppResult<f64> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation("Price must be a number".to_string()))?;
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation("Price cannot be negative".to_string()));
    }
    Ok((price * 100.0).round() / 100.0)
}

impl CourseUpdate {
    pub fn from_fields(fields: &CourseFormFields) -> AppResult<Self> {
        let title = fields.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Course title is required".to_string()));
        }
        let description = fields.description.trim();
        if description.is_empty() {
            return Err(AppError::Validation("Course description is required".to_string()));
        }
        let level = CourseLevel::parse(&fields.level)
            .ok_or_else(|| AppError::Validation(format!("Unknown level `{}`", fields.level)))?;

        Ok(Self {
            title: title.to_string(),
            category: fields.category.trim().to_lowercase(),
            price: parse_price(&fields.price)?,
            level,
            description: description.to_string(),
            prerequisites: split_lines(&fields.prerequisites),
            outcomes: split_lines(&fields.outcomes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> CourseFormFields {
        CourseFormFields {
            title: "  Rust for Beginners ".into(),
            category: "Programming".into(),
            price: "19.999".into(),
            level: "beginner".into(),
            description: "Learn Rust".into(),
            prerequisites: "Basic CLI\n\n  Git  \n".into(),
            outcomes: "Write CLIs\r\nUnderstand ownership".into(),
        }
    }

    #[test]
    fn test_from_fields() {
        let update = CourseUpdate::from_fields(&fields()).unwrap();
        assert_eq!(update.title, "Rust for Beginners");
        assert_eq!(update.category, "programming");
        assert_eq!(update.price, 20.0);
        assert_eq!(update.level, CourseLevel::Beginner);
        assert_eq!(update.prerequisites, vec!["Basic CLI", "Git"]);
        assert_eq!(update.outcomes, vec!["Write CLIs", "Understand ownership"]);
    }

    #[test]
    fn test_required_fields_and_price() {
        let mut f = fields();
        f.title = " ".into();
        assert!(CourseUpdate::from_fields(&f).is_err());

        let mut f = fields();
        f.price = "-5".into();
        assert_eq!(
            CourseUpdate::from_fields(&f),
            Err(AppError::Validation("Price cannot be negative".into()))
        );

        let mut f = fields();
        f.price = "free".into();
        assert!(CourseUpdate::from_fields(&f).is_err());

        let mut f = fields();
        f.level = "expert".into();
        assert!(CourseUpdate::from_fields(&f).is_err());
    }

    #[test]
    fn test_prefill_joins_lists() {
        let course = Course {
            id: "c1".into(),
            title: "T".into(),
            category: "Design".into(),
            price: 12.5,
            level: CourseLevel::Advanced,
            description: "D".into(),
            prerequisites: vec!["a".into(), "b".into()],
            outcomes: vec![],
        };
        let f = CourseFormFields::from_course(&course);
        assert_eq!(f.prerequisites, "a\nb");
        assert_eq!(f.outcomes, "");
        assert_eq!(f.price, "12.5");
        assert_eq!(f.level, "advanced");
        assert_eq!(f.category, "design");
    }
}
