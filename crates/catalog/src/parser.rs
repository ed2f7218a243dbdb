//! Parser for catalog files.
//!
//! A catalog file is a JSON array of job trials:
//!
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "title": "Frontend Developer Intern",
//!     "company": "TechCorp",
//!     "duration": "3 months",
//!     "description": "Work on React applications.",
//!     "skills": ["React", "JavaScript", "CSS"],
//!     "category": "Technology",
//!     "status": "available"
//!   }
//! ]
//! ```

use crate::error::{CatalogError, Result};
use crate::types::JobTrial;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a catalog file into trials, keeping file order
pub fn parse_trials(path: &Path) -> Result<Vec<JobTrial>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    parse_trials_str(&content)
}

/// Parse trials from JSON text
pub fn parse_trials_str(content: &str) -> Result<Vec<JobTrial>> {
    let trials: Vec<JobTrial> = serde_json::from_str(content)?;
    Ok(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrialStatus;

    #[test]
    fn test_parse_trials_str() {
        let json = r#"[
            {
                "id": "a",
                "title": "Barista",
                "company": "Bean Co",
                "duration": "2 weeks",
                "description": "Pull shots.",
                "skills": ["Coffee"],
                "category": "Hospitality",
                "status": "in-progress"
            }
        ]"#;

        let trials = parse_trials_str(json).unwrap();
        assert_eq!(trials.len(), 1);
        assert_eq!(trials[0].company, "Bean Co");
        assert_eq!(trials[0].status, TrialStatus::InProgress);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        // No "skills" field
        let json = r#"[{"id": "a", "title": "t", "company": "c", "duration": "d",
                        "description": "x", "category": "y", "status": "available"}]"#;
        let result = parse_trials_str(json);
        assert!(matches!(result, Err(CatalogError::JsonError(_))));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"[{"id": "a", "title": "t", "company": "c", "duration": "d",
                        "description": "x", "skills": [], "category": "y", "status": "paused"}]"#;
        assert!(parse_trials_str(json).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = parse_trials(Path::new("definitely/not/here.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
