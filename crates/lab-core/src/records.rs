//! Profile records for the object-model demo section.
//!
//! A closed set of record variants with a `describe` capability per variant.
//! Values are constructed and dropped per call; nothing lives in shared
//! mutable state.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Profile {
    Person { name: String },
    Student { name: String, university: String },
}

impl Profile {
    pub fn person(name: impl Into<String>) -> Self {
        Profile::Person { name: name.into() }
    }

    pub fn student(name: impl Into<String>, university: impl Into<String>) -> Self {
        Profile::Student {
            name: name.into(),
            university: university.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Profile::Person { name } => name,
            Profile::Student { name, .. } => name,
        }
    }

    /// Greeting shared by every variant.
    pub fn greet(&self) -> String {
        format!("Hello, my name is {}", self.name())
    }

    /// Full self-description; students extend the greeting with their
    /// university.
    pub fn describe(&self) -> String {
        match self {
            Profile::Person { .. } => self.greet(),
            Profile::Student { university, .. } => {
                format!("{} and I study at {}", self.greet(), university)
            }
        }
    }
}

/// The three demo lines shown by the object-model section.
pub fn sample_introductions() -> Vec<String> {
    let john = Profile::person("John");
    let alice = Profile::student("Alice", "CVUT");
    vec![john.greet(), alice.greet(), alice.describe()]
}
