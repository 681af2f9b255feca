//! People list for the prop drilling screen

use crate::error::DataError;
use serde::{Deserialize, Serialize};

const PEOPLE_FIXTURE: &str = include_str!("../data/people.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub name: String,
}

/// Load the bundled people list
pub fn load_people() -> Result<Vec<Person>, DataError> {
    let people: Vec<Person> =
        serde_json::from_str(PEOPLE_FIXTURE).map_err(|source| DataError::Parse {
            fixture: "people",
            source,
        })?;
    log::debug!("Loaded {} people", people.len());
    Ok(people)
}

/// Drop the person with `id`; unknown ids leave the list as it was
pub fn remove_person(people: Vec<Person>, id: u32) -> Vec<Person> {
    people.into_iter().filter(|person| person.id != id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_people() {
        let people = load_people().unwrap();
        assert_eq!(people.len(), 4);
        assert_eq!(people[0].name, "john");
    }

    #[test]
    fn test_remove_person() {
        let people = load_people().unwrap();
        let remaining = remove_person(people, 2);
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|p| p.id != 2));
        assert_eq!(remaining[1].name, "susan");
    }

    #[test]
    fn test_remove_unknown_person() {
        let people = load_people().unwrap();
        let remaining = remove_person(people.clone(), 99);
        assert_eq!(remaining, people);
    }
}
