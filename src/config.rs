use std::{env, io};

use anyhow::Context;

use crate::{AppResult, Greeting};

pub const GREETING_ID: &str = "GREETING_ID";
pub const GREETING_CONTENT: &str = "GREETING_CONTENT";

const DEFAULT_ID: i64 = 1;
const DEFAULT_CONTENT: &str = "Hello, World!";

/// Values for the greeting the binary builds, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    pub id: i64,
    pub content: String,
}

impl GreetingConfig {
    /// Reads `GREETING_ID` and `GREETING_CONTENT`, loading `.env` from the
    /// working directory first if there is one. Variables already set in
    /// the process win over the file.
    pub fn from_env() -> AppResult<Self> {
        match dotenv::from_path(".env") {
            Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {}
            loaded => loaded.context("failed to load .env")?,
        }

        let id = read_var(GREETING_ID)?;
        let content = read_var(GREETING_CONTENT)?;
        Self::from_vars(id.as_deref(), content.as_deref())
    }

    pub fn from_vars(id: Option<&str>, content: Option<&str>) -> AppResult<Self> {
        let id = match id {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("{GREETING_ID}={raw:?} is not a 64-bit integer"))?,
            None => DEFAULT_ID,
        };

        Ok(Self {
            id,
            content: content.unwrap_or(DEFAULT_CONTENT).to_owned(),
        })
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::new(self.id, self.content.as_str())
    }
}

fn read_var(name: &str) -> AppResult<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("{name} is not valid unicode"))
            .into()),
    }
}
