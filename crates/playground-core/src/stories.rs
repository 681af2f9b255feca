//! Stories list and title search

use crate::error::DataError;
use serde::{Deserialize, Serialize};

const STORIES_FIXTURE: &str = include_str!("../data/stories.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: u64,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
}

/// Load the bundled stories
pub fn load_stories() -> Result<Vec<Story>, DataError> {
    let stories: Vec<Story> =
        serde_json::from_str(STORIES_FIXTURE).map_err(|source| DataError::Parse {
            fixture: "stories",
            source,
        })?;
    log::debug!("Loaded {} stories", stories.len());
    Ok(stories)
}

/// Stories whose title contains `term`, ignoring case. An empty term matches all.
pub fn search_stories<'a>(stories: &'a [Story], term: &str) -> Vec<&'a Story> {
    let needle = term.trim().to_lowercase();
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(stories: &[&'a Story]) -> Vec<&'a str> {
        stories.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_load_stories() {
        let stories = load_stories().unwrap();
        assert_eq!(stories.len(), 3);
        assert_eq!(stories[1].object_id, 1);
        assert_eq!(stories[1].title, "Redux");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let stories = load_stories().unwrap();
        assert_eq!(titles(&search_stories(&stories, "re")), vec!["React", "Redux"]);
        assert_eq!(titles(&search_stories(&stories, "RAT")), vec!["Ratatui"]);
    }

    #[test]
    fn test_empty_term_matches_all() {
        let stories = load_stories().unwrap();
        assert_eq!(search_stories(&stories, "").len(), stories.len());
        assert_eq!(search_stories(&stories, "   ").len(), stories.len());
    }

    #[test]
    fn test_no_match() {
        let stories = load_stories().unwrap();
        assert!(search_stories(&stories, "vue").is_empty());
    }
}
