use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
}

impl Project {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Trim and validate a user supplied project name.
    pub fn validate_name(name: &str) -> AppResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidProjectName(name.to_string()));
        }
        Ok(trimmed.to_string())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_invalid() {
        assert!(matches!(
            Project::validate_name("   "),
            Err(AppError::InvalidProjectName(_))
        ));
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(Project::validate_name("  android ").unwrap(), "android");
    }
}
