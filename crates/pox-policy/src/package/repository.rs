use std::fmt;

/// A package source registered in a pool
///
/// Repositories are compared by identity: two handles refer to the same
/// repository only if they point at the same allocation.
#[derive(Debug)]
pub struct Repository {
    name: String,
}

impl Repository {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
