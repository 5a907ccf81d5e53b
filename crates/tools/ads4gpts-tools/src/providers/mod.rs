//! Provider-specific tool definition renderers.
//!
//! Each provider wraps the same input schema differently:
//! - OpenAI: `{"type": "function", "function": {...}}`
//! - Anthropic: direct object with `input_schema`
//! - MCP: direct object with `inputSchema`/`outputSchema`

pub mod anthropic;
pub mod mcp;
pub mod openai;
