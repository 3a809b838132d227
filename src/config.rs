use crate::error::{GitRankError, Result};
use crate::identity::AliasResolver;
use crate::model::Period;
use crate::period::PeriodIndex;
use crate::score::ScoreWeights;
use crate::util::parse_period_date;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub periods: Vec<PeriodEntry>,
    pub users: Vec<UserEntry>,
    pub scoring: ScoreWeights,
    pub blame: BlameSelection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub user: String,
    pub start: String,
    pub end: String,
    /// Label shown next to the contributor name.
    #[serde(default)]
    pub alias: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    pub alias: String,
    /// Blank hides the author from the report.
    #[serde(default)]
    pub name: String,
}

/// Which tracked files feed the selected blame pass, and which are left out of
/// both blame passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlameSelection {
    pub selected_names: Vec<String>,
    pub selected_extensions: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for BlameSelection {
    fn default() -> Self {
        Self {
            selected_names: vec!["configure".to_string(), "Makefile".to_string()],
            selected_extensions: ["h", "cpp", "c", "js"].iter().map(|s| s.to_string()).collect(),
            exclude: vec!["extra_lib".to_string()],
        }
    }
}

impl BlameSelection {
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude.iter().any(|e| !e.is_empty() && path.contains(e.as_str()))
    }

    pub fn is_selected(&self, path: &str) -> bool {
        if self.selected_names.iter().any(|n| !n.is_empty() && path.contains(n.as_str())) {
            return true;
        }
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.selected_extensions.iter().any(|s| s == ext))
            .unwrap_or(false)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        Ok(config)
    }

    pub fn period_index(&self) -> Result<PeriodIndex> {
        self.periods
            .iter()
            .map(|entry| {
                let start = parse_period_date(&entry.start).map_err(|e| invalid_period(entry, e))?;
                let end = parse_period_date(&entry.end).map_err(|e| invalid_period(entry, e))?;
                Ok(Period {
                    owner: entry.user.clone(),
                    start,
                    end,
                    label: entry.alias.clone(),
                })
            })
            .collect()
    }

    pub fn alias_resolver(&self) -> AliasResolver {
        let mut resolver = AliasResolver::new();
        for user in &self.users {
            resolver.insert(user.alias.clone(), user.name.clone());
        }
        resolver
    }
}

fn invalid_period(entry: &PeriodEntry, err: GitRankError) -> GitRankError {
    GitRankError::Config(format!(
        "period '{}' for user '{}': {}",
        entry.alias, entry.user, err
    ))
}
