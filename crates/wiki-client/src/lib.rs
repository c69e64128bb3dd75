//! Channel Wiki Documents Client
//!
//! This crate keeps a paginated, filterable, sortable view of remote wiki
//! documents consistent with user actions while minimizing redundant
//! network calls and avoiding update races.
//!
//! # Components
//! - Typed HTTP transport for the wiki document service ([`WikiDocsClient`])
//! - Query-driven, debounced, race-safe list controller ([`list::WikiDocList`])
//! - Fetch-and-mutate editor for a single document ([`editor::WikiDocEditor`])
//! - Sidebar view-state reducer and toggle registry ([`view_state`])
//!
//! The host application's authentication, routing, permission checks and
//! rendering are outside this crate; callers catch and display failures
//! themselves.

pub mod client;
pub mod config;
pub mod editor;
pub mod error;
pub mod list;
pub mod models;
pub mod view_state;

pub use client::WikiDocsClient;
pub use config::ClientConfig;
pub use editor::WikiDocEditor;
pub use error::{ClientError, ClientResult};
pub use list::{ListOptions, ListState, WikiDocList};
pub use models::{
    ListParams, ListParamsUpdate, PageResult, SortDirection, SortField, WikiDoc, WikiDocPatch,
    WikiDocStatus,
};
pub use view_state::{SidebarView, ToggleRegistry, ViewEvent, ViewState};
