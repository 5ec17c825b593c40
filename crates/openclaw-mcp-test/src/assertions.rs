//! Assertions for call results

use openclaw_mcp_core::CallResult;

/// Assertion helpers for [`CallResult`]
pub struct ResultAssertions<'a> {
    result: &'a CallResult,
}

impl<'a> ResultAssertions<'a> {
    pub fn new(result: &'a CallResult) -> Self {
        Self { result }
    }

    /// Assert the result is not error-flagged
    pub fn assert_success(&self) -> &Self {
        assert!(
            !self.result.is_error,
            "Expected success but got error result: {:?}",
            self.result
        );
        self
    }

    /// Assert the result is error-flagged
    pub fn assert_error(&self) -> &Self {
        assert!(
            self.result.is_error,
            "Expected error result but got success: {:?}",
            self.result
        );
        self
    }

    /// Assert the first text block equals `expected`
    pub fn assert_text(&self, expected: &str) -> &Self {
        assert_eq!(
            self.result.first_text(),
            Some(expected),
            "Unexpected text in {:?}",
            self.result
        );
        self
    }

    /// Assert the first text block contains `needle`
    pub fn assert_text_contains(&self, needle: &str) -> &Self {
        let text = self
            .result
            .first_text()
            .unwrap_or_else(|| panic!("No text block in {:?}", self.result));
        assert!(
            text.contains(needle),
            "Expected text containing {:?}, got {:?}",
            needle,
            text
        );
        self
    }

    /// Assert the number of content blocks
    pub fn assert_len(&self, expected: usize) -> &Self {
        assert_eq!(self.result.content.len(), expected);
        self
    }
}
