//! ADS4GPTs ad tools for LLM tool-calling frameworks.
//!
//! This crate provides:
//! - [`Tool`] trait: native tool definition, called with typed input
//! - [`ToolRegistry`]: name-keyed storage with JSON dispatch
//! - [`BannerAdsTool`] / [`ChatAdsTool`]: the two ad tools, backed by any [`AdsClient`]
//! - [`Ads4GptsToolkit`]: both tools plus OpenAI, Anthropic and MCP tool definitions
//!
//! [`AdsClient`]: ads4gpts_async::AdsClient

pub mod context;
pub mod error;
pub mod providers;
pub mod registry;
pub mod schema;
pub mod tool;
pub mod toolkit;
pub mod tools;

pub use context::ToolContext;
pub use error::ToolError;
pub use registry::{ErasedTool, ToolRegistry, ToolRegistryBuilder};
pub use tool::Tool;
pub use toolkit::Ads4GptsToolkit;
pub use tools::{AdToolInput, BannerAdsTool, ChatAdsTool};

pub use futures::future::BoxFuture;
