// View filtering for the task list

use crate::models::Task;
use eyre::eyre;
use serde::{Deserialize, Serialize};

/// Which subset of the collection a consumer sees
///
/// Process-local UI state, independent of the collection itself. Every value
/// is reachable from every other in one step; the initial value is `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ViewFilter {
    /// Whether a task belongs to this view
    pub fn matches(self, task: &Task) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Active => !task.done,
            ViewFilter::Completed => task.done,
        }
    }
}

impl std::fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewFilter::All => write!(f, "all"),
            ViewFilter::Active => write!(f, "active"),
            ViewFilter::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ViewFilter {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ViewFilter::All),
            "active" => Ok(ViewFilter::Active),
            "completed" => Ok(ViewFilter::Completed),
            other => Err(eyre!(
                "Unknown filter: {} (expected all, active or completed)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(ViewFilter::default(), ViewFilter::All);
    }

    #[test]
    fn test_matches_all() {
        let mut task = Task::new("t".to_string());
        assert!(ViewFilter::All.matches(&task));
        task.done = true;
        assert!(ViewFilter::All.matches(&task));
    }

    #[test]
    fn test_matches_active() {
        let mut task = Task::new("t".to_string());
        assert!(ViewFilter::Active.matches(&task));
        task.done = true;
        assert!(!ViewFilter::Active.matches(&task));
    }

    #[test]
    fn test_matches_completed() {
        let mut task = Task::new("t".to_string());
        assert!(!ViewFilter::Completed.matches(&task));
        task.done = true;
        assert!(ViewFilter::Completed.matches(&task));
    }

    #[test]
    fn test_display() {
        assert_eq!(ViewFilter::All.to_string(), "all");
        assert_eq!(ViewFilter::Active.to_string(), "active");
        assert_eq!(ViewFilter::Completed.to_string(), "completed");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("all".parse::<ViewFilter>().unwrap(), ViewFilter::All);
        assert_eq!("active".parse::<ViewFilter>().unwrap(), ViewFilter::Active);
        assert_eq!(
            "completed".parse::<ViewFilter>().unwrap(),
            ViewFilter::Completed
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("done".parse::<ViewFilter>().is_err());
        assert!("".parse::<ViewFilter>().is_err());
        assert!("All".parse::<ViewFilter>().is_err());
    }

    #[test]
    fn test_serialization_lowercase() {
        let json = serde_json::to_string(&ViewFilter::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let parsed: ViewFilter = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, ViewFilter::Completed);
    }
}
