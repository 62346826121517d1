use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::SyncError;

/// Default pattern for protobuf definition files.
pub const PROTO_GLOB: &str = "*.proto";

/// Matches file names against a set of globs. Only the final path
/// component is considered, so `*.proto` matches at any depth.
#[derive(Debug, Clone)]
pub struct ProtoMatcher {
    globs: GlobSet,
}

impl ProtoMatcher {
    pub fn new(patterns: &[&str]) -> Result<Self, SyncError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .map_err(|e| SyncError::InvalidPattern(format!("{pattern}: {e}")))?;
            builder.add(glob);
        }
        let globs = builder
            .build()
            .map_err(|e| SyncError::InvalidPattern(e.to_string()))?;
        Ok(Self { globs })
    }

    pub fn is_match(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self.globs.is_match(name),
            None => false,
        }
    }
}

impl Default for ProtoMatcher {
    fn default() -> Self {
        Self::new(&[PROTO_GLOB]).expect("static glob is valid")
    }
}
