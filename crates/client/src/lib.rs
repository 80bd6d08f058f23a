//! `washboard-client` — typed interface to the remote laundry API.
//!
//! One [`ApiClient`] carries the shared base configuration (base URL, JSON +
//! client-type headers, cookie-borne session); one module per resource
//! exposes typed request functions on top of it. Nothing here retries or
//! caches: a failed request surfaces an [`ApiError`] and leaves caller state
//! unchanged.

pub mod config;
pub mod error;
pub mod http;
pub mod pager;
pub mod pagination;
pub mod resources;
pub mod seq;
pub mod session;

pub use config::ApiConfig;
pub use error::ApiError;
pub use http::ApiClient;
pub use pager::ListPager;
pub use pagination::{ListQuery, PageMeta, Paginated};
pub use resources::{
    auth::AuthApi, customers::CustomerApi, dashboard::DashboardApi, packages::PackageApi,
    transactions::TransactionApi, RemoteApi,
};
pub use seq::{RequestSeq, SeqTicket};
pub use session::{CurrentUser, Session, SessionState};
