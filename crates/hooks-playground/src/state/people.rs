use playground_core::Person;

/// People screen state
#[derive(Debug, Clone, Default)]
pub struct PeopleState {
    pub people: Vec<Person>,
    /// Full list as loaded, used to restore removed people
    pub original: Vec<Person>,
    pub selected: usize,
}

impl PeopleState {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            original: people.clone(),
            people,
            selected: 0,
        }
    }

    pub fn selected_person(&self) -> Option<&Person> {
        self.people.get(self.selected)
    }
}
