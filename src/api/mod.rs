//! HTTP API module for the payroll ledger.
//!
//! This module exposes employee management, wage entry, record listing,
//! exports and the dashboard as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{RECORD_OUTCOME_HEADER, create_router};
pub use request::{
    DeleteRangeRequest, EmployeeQuery, LoginRequest, PassphraseRequest, RangeQuery,
    WageEntryRequest,
};
pub use response::{ApiError, ApiErrorResponse, DeletedResponse, LoginResponse};
pub use state::AppState;
