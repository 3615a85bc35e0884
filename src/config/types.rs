use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::config::validation;
use crate::document::Indentation;
use crate::utils::error::BoxResult;

/// Numbering style of ordered lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderedListMarker {
    /// 1. 2. 3.
    Ordered,
    /// 1. 1. 1.
    One,
}

/// How one level of list nesting is indented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentationMode {
    /// Width of the list marker plus one space
    Adaptive,
    /// Editor indentation (tab or `tab_size` spaces)
    Inherit,
}

/// `[toc]` section of the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocSettings {
    /// Heading depth range, `"<start>..<end>"`
    #[serde(default = "defaults::default_levels")]
    pub levels: String,

    #[serde(default = "defaults::default_ordered_list")]
    pub ordered_list: bool,

    #[serde(default = "defaults::default_unordered_list_marker")]
    pub unordered_list_marker: String,

    #[serde(default = "defaults::default_ordered_list_marker")]
    pub ordered_list_marker: OrderedListMarker,

    /// Render plain text entries instead of links
    #[serde(default = "defaults::default_plaintext")]
    pub plaintext: bool,

    #[serde(default = "defaults::default_update_on_save")]
    pub update_on_save: bool,

    #[serde(default = "defaults::default_indentation")]
    pub indentation: IndentationMode,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            levels: defaults::default_levels(),
            ordered_list: defaults::default_ordered_list(),
            unordered_list_marker: defaults::default_unordered_list_marker(),
            ordered_list_marker: defaults::default_ordered_list_marker(),
            plaintext: defaults::default_plaintext(),
            update_on_save: defaults::default_update_on_save(),
            indentation: defaults::default_indentation(),
        }
    }
}

/// `[editor]` section of the settings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "defaults::default_tab_size")]
    pub tab_size: usize,

    #[serde(default = "defaults::default_insert_spaces")]
    pub insert_spaces: bool,

    /// File extensions treated as markdown documents
    #[serde(default = "defaults::default_markdown_extensions")]
    pub markdown_extensions: Vec<String>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: defaults::default_tab_size(),
            insert_spaces: defaults::default_insert_spaces(),
            markdown_extensions: defaults::default_markdown_extensions(),
        }
    }
}

impl EditorSettings {
    /// Indentation preference reported by documents opened with these settings
    pub fn indentation(&self) -> Indentation {
        if self.insert_spaces {
            Indentation::Spaces(self.tab_size)
        } else {
            Indentation::Tabs
        }
    }
}

/// Settings file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub toc: TocSettings,

    #[serde(default)]
    pub editor: EditorSettings,
}

/// Immutable TOC configuration, rebuilt from settings for every top-level operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocConfig {
    pub start_depth: usize,
    pub end_depth: usize,
    /// Bullet used for unordered lists
    pub list_marker: String,
    pub ordered_list: bool,
    pub update_on_save: bool,
    pub plaintext: bool,
    pub ordered_list_marker_is_one: bool,
    pub adaptive_indentation: bool,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            start_depth: 1,
            end_depth: 6,
            list_marker: defaults::default_unordered_list_marker(),
            ordered_list: false,
            update_on_save: true,
            plaintext: false,
            ordered_list_marker_is_one: false,
            adaptive_indentation: true,
        }
    }
}

impl TocConfig {
    /// Validate settings and convert them into a configuration value
    pub fn from_settings(settings: &Settings) -> BoxResult<Self> {
        validation::validate_settings(settings)?;
        let (start_depth, end_depth) = validation::parse_depth_range(&settings.toc.levels)?;
        let toc = &settings.toc;

        Ok(Self {
            start_depth,
            end_depth,
            list_marker: toc.unordered_list_marker.clone(),
            ordered_list: toc.ordered_list,
            update_on_save: toc.update_on_save,
            plaintext: toc.plaintext,
            ordered_list_marker_is_one: toc.ordered_list_marker == OrderedListMarker::One,
            adaptive_indentation: toc.indentation == IndentationMode::Adaptive,
        })
    }
}
