//! Pipeline configuration.
//!
//! Loading these from files or command lines is left to callers; with the
//! `interchange` feature they can be deserialized directly.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::parser::{KeywordTable, Tag};

/// Settings for annotation extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct ExtractorConfig {
    /// Additional keyword spellings, e.g. `@input` for `@in`
    pub extra_keywords: IndexMap<SmolStr, Tag>,
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<SmolStr>, tag: Tag) -> Self {
        self.extra_keywords.insert(keyword.into(), tag);
        self
    }

    /// The standard keywords plus any extra spellings
    pub fn keyword_table(&self) -> KeywordTable {
        let mut table = KeywordTable::default();
        for (keyword, tag) in &self.extra_keywords {
            table.insert(keyword, *tag);
        }
        table
    }
}

/// Settings for model building
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct ModelerConfig {
    /// Name of the top-level program to treat as the model root
    pub workflow: Option<SmolStr>,
}

impl ModelerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workflow(mut self, name: impl Into<SmolStr>) -> Self {
        self.workflow = Some(name.into());
        self
    }
}

/// Settings for a whole extract-then-model run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct PipelineConfig {
    pub extract: ExtractorConfig,
    pub model: ModelerConfig,
}
