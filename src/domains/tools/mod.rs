//! Tools domain module.
//!
//! Each MCP tool maps onto one Minds REST API call.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, grouped by API area
//! - `handlers.rs` - The `ApiTool` trait plus shared parse/execute/route code
//! - `response.rs` - Success and error result envelopes
//! - `router.rs` - rmcp ToolRouter builder
//! - `registry.rs` - Tool listing and by-name dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing `ApiTool` in the matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs`
//! 4. Register it in `registry.rs`

pub mod definitions;
mod error;
pub mod handlers;
mod registry;
pub mod response;
pub mod router;

pub use error::ToolError;
pub use handlers::{ApiTool, ToolReply};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
