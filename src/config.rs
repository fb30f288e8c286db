// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use anyhow::Result;
use std::path::PathBuf;

/// Environment variable overriding the database location.
pub const DB_ENV: &str = "PITAKA_DB";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// `--db` beats `PITAKA_DB`, which beats the platform data dir.
    pub fn resolve(db_flag: Option<&str>) -> Result<Self> {
        Self::resolve_with(db_flag, std::env::var(DB_ENV).ok())
    }

    pub fn resolve_with(db_flag: Option<&str>, db_env: Option<String>) -> Result<Self> {
        let explicit = db_flag
            .map(str::to_string)
            .or(db_env)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let db_path = match explicit {
            Some(p) => PathBuf::from(p),
            None => db::default_db_path()?,
        };
        Ok(Self { db_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_env() {
        let cfg = Config::resolve_with(Some("/tmp/a.sqlite"), Some("/tmp/b.sqlite".into())).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/a.sqlite"));
    }

    #[test]
    fn env_used_without_flag() {
        let cfg = Config::resolve_with(None, Some(" /tmp/b.sqlite ".into())).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/b.sqlite"));
    }
}
