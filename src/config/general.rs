//! The general configuration settings for fileexplorer.
//!
//! [General] is deserialized from the `[general]` table of fx.toml and then
//! converted into [InternalGeneral], which has the start directory expanded.

use crate::core::Navigator;
use crate::utils::expand_home_path;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The `[general]` table as written in fx.toml.
/// `start_dir` is kept as text here; `~` is expanded on conversion.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    start_dir: Option<String>,
    follow_symlinks: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            start_dir: None,
            follow_symlinks: true,
        }
    }
}

/// Processed general settings used at startup.
/// Built from [General] with the start directory already expanded.
#[derive(Debug)]
pub struct InternalGeneral {
    start_dir: Option<PathBuf>,
    follow_symlinks: bool,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            start_dir: g
                .start_dir
                .filter(|s| !s.trim().is_empty())
                .map(|s| expand_home_path(&s)),
            follow_symlinks: g.follow_symlinks,
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn start_dir(&self) -> Option<&Path> {
        self.start_dir.as_deref()
    }

    #[inline]
    pub fn follow_symlinks(&self) -> bool {
        self.follow_symlinks
    }

    /// Navigator carrying the configured listing policy.
    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.follow_symlinks)
    }
}
