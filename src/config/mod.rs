// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! External sample-name configuration.
//!
//! The drum sample library is opaque to this crate: just an ordered list
//! of names, supplied by the host application. It is injected into the
//! generators rather than read from a hidden global, so tests can run
//! against fixed fixtures.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// An ordered list of sample names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleBank {
    names: Vec<String>,
}

impl SampleBank {
    /// Build a bank from fixed names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a bank from a JSON file containing an array of names
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read sample list: {:?}", path.as_ref()))?;
        Self::from_json(&contents)
    }

    /// Parse a bank from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse sample list JSON")
    }

    /// Sample names in order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of samples in the bank
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the bank has no samples
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_names() {
        let bank = SampleBank::from_names(["kick-electro01", "snare-vinyl01"]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.names()[1], "snare-vinyl01");
    }

    #[test]
    fn test_from_json() {
        let bank = SampleBank::from_json(r#"["hihat-reso", "hihat-plain", "clap-808"]"#).unwrap();
        assert_eq!(bank.len(), 3);
        assert_eq!(bank.names()[2], "clap-808");
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(SampleBank::from_json(r#"{"samples": []}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["kick-electro01", "bass"]"#).unwrap();

        let bank = SampleBank::load(file.path()).unwrap();
        assert_eq!(bank.names(), ["kick-electro01", "bass"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SampleBank::load(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read sample list"));
    }
}
