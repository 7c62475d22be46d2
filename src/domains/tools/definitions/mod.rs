//! Tool definitions module.
//!
//! Tools are grouped by the part of the Minds API they cover:
//! - `datasources`: datasource CRUD
//! - `minds`: Mind CRUD
//! - `chat`: asking Minds questions
//! - `results`: fetching and exporting query results
//! - `catalog`: table/column metadata

pub mod catalog;
pub mod chat;
pub mod datasources;
pub mod minds;
pub mod results;

pub use catalog::{
    GetCatalogTool, LoadCatalogTablesTool, RefreshCatalogTool, RefreshMode,
    UpdateColumnDescriptionTool, UpdateTableDescriptionTool,
};
pub use chat::{AskMindTool, ChatMessage, ChatRole, QueryMindTool};
pub use datasources::{
    CreateDatasourceTool, DeleteDatasourceTool, GetDatasourceTool, ListDatasourcesTool,
    UpdateDatasourceTool,
};
pub use minds::{
    CreateMindTool, DeleteMindTool, GetMindTool, ListMindsTool, MindDatasource, UpdateMindTool,
};
pub use results::{ExportQueryCsvTool, GetQueryResultTool};
