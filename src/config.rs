//! Output configuration for the compiler driver.
//!
//! Where the five artifacts go and what they are called.

use std::path::{Path, PathBuf};

/// One of the five text artifacts produced per compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Artifact {
    Tokens,
    LexicalErrors,
    SymbolTable,
    ParseTree,
    SyntaxErrors,
}

impl Artifact {
    /// All artifacts, in the order they are written.
    pub const ALL: [Artifact; 5] = [
        Artifact::Tokens,
        Artifact::LexicalErrors,
        Artifact::SymbolTable,
        Artifact::ParseTree,
        Artifact::SyntaxErrors,
    ];

    /// File name used when none is configured.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Artifact::Tokens => "tokens.txt",
            Artifact::LexicalErrors => "lexical_errors.txt",
            Artifact::SymbolTable => "symbol_table.txt",
            Artifact::ParseTree => "parse_tree.txt",
            Artifact::SyntaxErrors => "syntax_errors.txt",
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory the artifacts are written into (created if missing)
    out_dir: PathBuf,
    /// File names, indexed like [`Artifact::ALL`]
    file_names: [String; 5],
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            file_names: Artifact::ALL.map(|artifact| artifact.default_file_name().to_string()),
        }
    }
}

impl OutputConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Override the file name of one artifact
    pub fn with_file_name(mut self, artifact: Artifact, name: impl Into<String>) -> Self {
        self.file_names[artifact as usize] = name.into();
        self
    }

    pub fn file_name(&self, artifact: Artifact) -> &str {
        &self.file_names[artifact as usize]
    }

    /// Full path of an artifact inside the output directory.
    pub fn path_for(&self, artifact: Artifact) -> PathBuf {
        self.out_dir.join(self.file_name(artifact))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        let config = OutputConfig::default();
        let names: Vec<&str> = Artifact::ALL.iter().map(|a| config.file_name(*a)).collect();
        assert_eq!(
            names,
            [
                "tokens.txt",
                "lexical_errors.txt",
                "symbol_table.txt",
                "parse_tree.txt",
                "syntax_errors.txt"
            ]
        );
        assert_eq!(config.out_dir(), Path::new("."));
    }

    #[test]
    fn test_builder_overrides() {
        let config = OutputConfig::new()
            .with_out_dir("build")
            .with_file_name(Artifact::ParseTree, "tree.txt");
        assert_eq!(config.path_for(Artifact::ParseTree), Path::new("build").join("tree.txt"));
        assert_eq!(config.path_for(Artifact::Tokens), Path::new("build").join("tokens.txt"));
    }

    #[test]
    fn test_artifact_order_matches_indices() {
        for (i, artifact) in Artifact::ALL.iter().enumerate() {
            assert_eq!(*artifact as usize, i);
        }
    }
}
