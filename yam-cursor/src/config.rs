/// Limits applied by the [`Tokenizer`](crate::Tokenizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// How many flow collections (`[` and `{`) may be open at once.
    pub max_flow_depth: u32,
    /// How far in bytes a `:` may be from the start of the simple key it belongs to.
    pub max_simple_key_len: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            max_flow_depth: 1024,
            max_simple_key_len: 1024,
        }
    }
}

impl TokenizerConfig {
    #[must_use]
    pub fn with_max_flow_depth(mut self, max_flow_depth: u32) -> Self {
        self.max_flow_depth = max_flow_depth;
        self
    }

    #[must_use]
    pub fn with_max_simple_key_len(mut self, max_simple_key_len: usize) -> Self {
        self.max_simple_key_len = max_simple_key_len;
        self
    }
}
