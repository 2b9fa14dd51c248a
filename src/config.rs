/// Limits applied before and during evaluation.
///
/// Worst-case work is linear in the input, but the operator stack grows with
/// parenthesis nesting, so callers accepting untrusted text should keep both
/// limits bounded.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatorConfig {
    /// Maximum length of the raw input in bytes, whitespace included (default 4096)
    pub max_input_len: usize,

    /// Maximum number of simultaneously open parentheses (default 256)
    pub max_nesting_depth: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_input_len: 4096,
            max_nesting_depth: 256,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn with_max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.max_nesting_depth = max_nesting_depth;
        self
    }
}
