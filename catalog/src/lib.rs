#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Cavesets exposed through one query interface.
//!
//! A [`CaveSet`] either serves the twenty embedded Boulder Dash I caves,
//! regenerating each one from its raw record on request, or wraps an
//! external [`StructuredCaveSource`]. Every request yields a freshly owned
//! [`Cave`].

mod builtin;
mod demo;
mod structured;

use boulder_caves_core::{Cave, CaveError};

pub use demo::{decode_demo, DemoStep, DEMO_TERMINATOR};
pub use structured::{
    StructuredCave, StructuredCaveSet, StructuredCaveSource, StructuredColor, StructuredColors,
    DEFAULT_STRUCTURED_HEIGHT, DEFAULT_STRUCTURED_WIDTH, MAX_STRUCTURED_SIZE,
};

use crate::builtin::{BUILTIN_CAVES, CAVE_A_DEMO};

/// Title of the embedded caveset.
pub const BUILTIN_NAME: &str = "Boulder Dash I";
/// Author of the embedded caveset.
pub const BUILTIN_AUTHOR: &str = "Peter Liepa";
/// Release year of the embedded caveset.
pub const BUILTIN_DATE: &str = "1984";

enum Source {
    Builtin,
    Structured(Box<dyn StructuredCaveSource>),
}

/// Ordered collection of caves plus caveset metadata.
pub struct CaveSet {
    source: Source,
}

impl std::fmt::Debug for CaveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaveSet")
            .field("name", &self.name())
            .field("caves", &self.cave_count())
            .finish()
    }
}

impl CaveSet {
    /// Caveset backed by the embedded Boulder Dash I records.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            source: Source::Builtin,
        }
    }

    /// Caveset backed by an external structured source.
    pub fn structured(source: impl StructuredCaveSource + 'static) -> Self {
        Self {
            source: Source::Structured(Box::new(source)),
        }
    }

    /// Reports whether the caveset serves the embedded caves.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        matches!(self.source, Source::Builtin)
    }

    /// Title of the caveset.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.source {
            Source::Builtin => BUILTIN_NAME,
            Source::Structured(source) => source.name(),
        }
    }

    /// Author of the caveset.
    #[must_use]
    pub fn author(&self) -> &str {
        match &self.source {
            Source::Builtin => BUILTIN_AUTHOR,
            Source::Structured(source) => source.author(),
        }
    }

    /// Release date of the caveset.
    #[must_use]
    pub fn date(&self) -> &str {
        match &self.source {
            Source::Builtin => BUILTIN_DATE,
            Source::Structured(source) => source.date(),
        }
    }

    /// Web address of the author, empty for the embedded caveset.
    #[must_use]
    pub fn www(&self) -> &str {
        match &self.source {
            Source::Builtin => "",
            Source::Structured(source) => source.www(),
        }
    }

    /// Number of caves in the set.
    #[must_use]
    pub fn cave_count(&self) -> usize {
        match &self.source {
            Source::Builtin => BUILTIN_CAVES.len(),
            Source::Structured(source) => source.caves().len(),
        }
    }

    /// Cave names in play order.
    #[must_use]
    pub fn cave_names(&self) -> Vec<&str> {
        match &self.source {
            Source::Builtin => BUILTIN_CAVES.iter().map(|entry| entry.name).collect(),
            Source::Structured(source) => {
                source.caves().iter().map(|cave| cave.name.as_str()).collect()
            }
        }
    }

    /// Decodes the cave at the provided position, counting from one.
    pub fn cave(&self, index: usize) -> Result<Cave, CaveError> {
        let count = self.cave_count();
        if index == 0 || index > count {
            return Err(CaveError::Bounds { index, count });
        }

        let mut cave = match &self.source {
            Source::Builtin => builtin::decode(&BUILTIN_CAVES[index - 1])?,
            Source::Structured(source) => {
                let position = u32::try_from(index).map_err(|_| {
                    CaveError::precondition(format!("cave index {index} does not fit a u32"))
                })?;
                source.caves()[index - 1].to_cave(position)?
            }
        };
        cave.author = self.author().to_owned();
        cave.date = self.date().to_owned();
        cave.www = self.www().to_owned();
        Ok(cave)
    }

    /// Recorded demonstration of the first cave, embedded caveset only.
    pub fn demo(&self) -> Result<Option<Vec<DemoStep>>, CaveError> {
        match self.source {
            Source::Builtin => decode_demo(&CAVE_A_DEMO).map(Some),
            Source::Structured(_) => Ok(None),
        }
    }
}
