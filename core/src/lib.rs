#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod controller;
pub mod envelope;
pub mod filter;
pub mod models;
pub mod notify;
pub mod pagination;

// Re-export commonly used types
pub use controller::{ControllerPolicy, FetchOutcome, FetchTicket, ListController, ListView};
pub use envelope::{ApiFailure, ApiResponse};
pub use filter::{
    ConsultationSearchFilter, ContractSearchFilter, CustomerSearchFilter, FilterError, ListFilter,
    PropertySearchFilter, SmsHistoryQuery, SmsListFilter, DEFAULT_PAGE_SIZE,
};
pub use models::{CreatedId, Keyed, Lenient, WireEnum};
pub use notify::{Notifier, Severity};
pub use pagination::{PageData, PageMetadata};
