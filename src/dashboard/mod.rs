//! Web dashboard module.
//!
//! Serves the single-page assistant dashboard: embedded Botpress webchat,
//! connection status, the text-input message log and static account data.

pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use server::{build_router, start_dashboard};
pub use state::DashboardState;
