//! Terminal client for the HRMS Lite REST backend.
//!
//! The [`api`] module talks to the remote service; the [`app`] module owns
//! all view state and orchestrates the client in response to user actions;
//! the [`ui`] module renders that state and reads commands from stdin.

pub mod api;
pub mod app;
pub mod config;
pub mod model;
pub mod ui;

pub use api::{ApiClient, ApiError, HrApi};
pub use app::{App, ViewState};
pub use config::Config;
pub use model::{AttendanceRecord, AttendanceStatus, Employee};
