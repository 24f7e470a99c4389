//! Navigation state and the single-step transition between directories.
//!
//! A [NavState] is a snapshot: the current path plus the subdirectories it had
//! when it was listed. Every step builds a new one from scratch.

use crate::core::ExplorerError;
use crate::core::fm::list_dirs_with;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Wire value of [Selection::Up].
pub const UP_SENTINEL: i64 = -1;

/// The current directory and its subdirectories, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    current_path: PathBuf,
    available_directories: Vec<String>,
}

impl NavState {
    /// Builds a state from already listed parts. The caller is responsible for
    /// `available_directories` matching `current_path`.
    pub fn from_parts(current_path: PathBuf, available_directories: Vec<String>) -> Self {
        Self {
            current_path,
            available_directories,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    #[inline]
    pub fn available_directories(&self) -> &[String] {
        &self.available_directories
    }

    /// Builds the request a host would send back after the user picked `selection`.
    pub fn request(&self, selection: Selection) -> NavRequest {
        NavRequest {
            current_path: self.current_path.clone(),
            selected_directory: selection,
        }
    }
}

/// What the user picked: the parent, or one named child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Up,
    Child(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelection {
    Name(String),
    Marker(i64),
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawSelection::deserialize(deserializer)? {
            RawSelection::Name(name) => Ok(Selection::Child(name)),
            RawSelection::Marker(UP_SENTINEL) => Ok(Selection::Up),
            RawSelection::Marker(other) => Err(de::Error::custom(format!(
                "selected_directory {} is neither a directory name nor {}",
                other, UP_SENTINEL
            ))),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Selection::Up => serializer.serialize_i64(UP_SENTINEL),
            Selection::Child(name) => serializer.serialize_str(name),
        }
    }
}

/// Inbound navigation event. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavRequest {
    pub current_path: PathBuf,
    pub selected_directory: Selection,
}

impl NavRequest {
    /// Resolves the path this request points at, without touching the filesystem.
    ///
    /// Child names are not checked against the last listing: a stale or forged
    /// name only fails once the target is read.
    pub fn target(&self) -> PathBuf {
        match &self.selected_directory {
            Selection::Up => parent_of(&self.current_path),
            Selection::Child(name) => self.current_path.join(name),
        }
    }
}

/// Lexical parent of `path`.
///
/// The parent of a root is the root itself and the parent of a bare relative
/// name is `.`, so going up never produces an empty path.
pub fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if p.as_os_str().is_empty() => PathBuf::from("."),
        Some(p) => p.to_path_buf(),
        None if path.as_os_str().is_empty() => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}

/// Lists directories and performs navigation steps with one listing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    follow_symlinks: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator {
            follow_symlinks: true,
        }
    }
}

impl Navigator {
    /// Creates a navigator. With `follow_symlinks` set, symlinks that point at
    /// directories are listed and can be entered like real directories.
    pub fn new(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }

    #[inline]
    pub fn follow_symlinks(&self) -> bool {
        self.follow_symlinks
    }

    /// Lists `path` and wraps the result in a fresh [NavState].
    pub fn state_at(&self, path: PathBuf) -> Result<NavState, ExplorerError> {
        let available_directories = list_dirs_with(&path, self.follow_symlinks)?;
        Ok(NavState::from_parts(path, available_directories))
    }

    /// Resolves the request's target and lists it.
    pub fn step(&self, request: &NavRequest) -> Result<NavState, ExplorerError> {
        let next = request.target();
        tracing::debug!(
            from = %request.current_path.display(),
            to = %next.display(),
            up = matches!(request.selected_directory, Selection::Up),
            "navigation step"
        );
        self.state_at(next)
    }
}

/// One navigation step with the default listing policy.
pub fn step(request: &NavRequest) -> Result<NavState, ExplorerError> {
    Navigator::default().step(request)
}
