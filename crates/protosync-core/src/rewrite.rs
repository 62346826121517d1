use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::SyncError;

/// Upstream `go_package` prefix. Spaces and tabs around `=` are tolerated,
/// line breaks are not.
pub const UPSTREAM_GO_PACKAGE: &str =
    r#"go_package[ \t]*=[ \t]*"github\.com/tronprotocol/grpc-gateway"#;

/// Canonical replacement for every upstream match.
pub const LOCAL_GO_PACKAGE: &str = r#"go_package = "github.com/fullstackwang/tron-grpc"#;

/// Rewrites the `go_package` option of upstream proto files to point at
/// the local Go module.
#[derive(Debug, Clone)]
pub struct GoPackageRewrite {
    pattern: Regex,
    replacement: String,
}

impl GoPackageRewrite {
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, SyncError> {
        let pattern =
            Regex::new(pattern).map_err(|e| SyncError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Replace all non-overlapping matches. Returns the new text and the
    /// number of replacements; text without a match is borrowed as-is.
    pub fn apply<'a>(&self, text: &'a str) -> (Cow<'a, str>, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }
        let out = self
            .pattern
            .replace_all(text, NoExpand(self.replacement.as_str()));
        (out, count)
    }
}

impl Default for GoPackageRewrite {
    fn default() -> Self {
        Self::new(UPSTREAM_GO_PACKAGE, LOCAL_GO_PACKAGE).expect("static regex is valid")
    }
}
