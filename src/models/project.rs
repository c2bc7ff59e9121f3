use std::fmt;

/// A configured project a session can be attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Project \"{}\"", self.name)
    }
}

/// Read-only, ordinal-indexed view over the configured projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectList {
    projects: Vec<Project>,
}

impl ProjectList {
    pub fn new(names: &[String]) -> Self {
        Self {
            projects: names.iter().map(Project::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Project at zero-based position `n`.
    pub fn get(&self, n: usize) -> Option<&Project> {
        self.projects.get(n)
    }

    pub fn name_at(&self, n: usize) -> Option<&str> {
        self.get(n).map(|p| p.name.as_str())
    }

    pub fn find(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Resolve a user selector: an exact name first, then a 1-based ordinal.
    pub fn resolve(&self, selector: &str) -> Option<&Project> {
        self.find(selector).or_else(|| {
            selector
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|n| self.get(n))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }
}
