use std::fmt;

/// A greeting with an opaque numeric id and its text.
///
/// Both fields can be reassigned after construction. Equality and hashing
/// compare both fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Greeting {
    id: i64,
    content: String,
}

impl Greeting {
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn into_parts(self) -> (i64, String) {
        (self.id, self.content)
    }
}

impl From<(i64, String)> for Greeting {
    fn from((id, content): (i64, String)) -> Self {
        Self::new(id, content)
    }
}

impl From<(i64, &str)> for Greeting {
    fn from((id, content): (i64, &str)) -> Self {
        Self::new(id, content)
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Greeting(id={}, content={})", self.id, self.content)
    }
}
