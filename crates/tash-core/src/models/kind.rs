//! Task kind enumeration.

use serde::{Deserialize, Serialize};

/// Type-safe tag distinguishing ordinary work from generated free time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// A unit of work supplied by the caller
    #[default]
    Regular,

    /// Recovery gap inserted automatically after every task
    Buffer,

    /// Rest period inserted by the caller
    Rest,
}

impl TaskKind {
    /// Convert to its lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Regular => "regular",
            TaskKind::Buffer => "buffer",
            TaskKind::Rest => "rest",
        }
    }

    /// Fixed name given to generated tasks of this kind.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            TaskKind::Regular => None,
            TaskKind::Buffer => Some("buffer"),
            TaskKind::Rest => Some("rest"),
        }
    }

    /// Fixed description given to generated tasks of this kind.
    pub fn fixed_description(&self) -> Option<&'static str> {
        match self {
            TaskKind::Regular => None,
            TaskKind::Buffer => Some("buffer between tasks, free time"),
            TaskKind::Rest => Some("free time, take a rest"),
        }
    }
}
