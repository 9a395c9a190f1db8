//! `childhealth` - Child health records and vaccination appointments
//!
//! This library provides the in-memory stores (credentials, health records,
//! appointments, vaccine information), the application state that owns them,
//! and the interactive console shell that drives them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod appointments;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod records;
pub mod shell;
pub mod vaccines;

pub use app::HealthCareApp;
pub use appointments::{AppointmentDate, AppointmentStore};
pub use config::{Config, InvalidNumberPolicy};
pub use credentials::{CredentialStore, PlainTextCredentials};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use records::{ChildId, HealthRecordStore};
pub use shell::Shell;
pub use vaccines::VaccineKnowledgeBase;
