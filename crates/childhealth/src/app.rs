//! Application state shared by the shell.
//!
//! [`HealthCareApp`] owns every store for the life of the process. It is
//! built once in `main` and lent to the shell by mutable reference.

use std::borrow::Cow;

use tracing::{info, warn};

use crate::appointments::{AppointmentDate, AppointmentStore};
use crate::config::Config;
use crate::credentials::{CredentialStore, PlainTextCredentials};
use crate::records::{ChildId, HealthRecordStore};
use crate::vaccines::VaccineKnowledgeBase;

/// All in-memory state of a session.
#[derive(Debug)]
pub struct HealthCareApp<C = PlainTextCredentials> {
    credentials: C,
    records: HealthRecordStore,
    appointments: AppointmentStore,
    vaccines: VaccineKnowledgeBase,
}

impl HealthCareApp<PlainTextCredentials> {
    /// Build the application with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Build the application with plain-text credentials, seeded from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_credentials(PlainTextCredentials::new(), config)
    }
}

impl Default for HealthCareApp<PlainTextCredentials> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CredentialStore> HealthCareApp<C> {
    /// Build the application around an existing credential store.
    ///
    /// The demo account (if enabled) is registered into `credentials`, and the
    /// vaccine knowledge base gets the configured extra entries.
    #[must_use]
    pub fn with_credentials(mut credentials: C, config: &Config) -> Self {
        if config.seed.demo_account
            && !credentials.register(&config.seed.demo_username, &config.seed.demo_password)
        {
            warn!(
                username = %config.seed.demo_username,
                "demo account was not registered, credential store rejected it"
            );
        }
        let vaccines = VaccineKnowledgeBase::with_extra(
            config
                .vaccines
                .extra
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        info!(
            accounts = credentials.len(),
            diseases = vaccines.len(),
            "application state initialized"
        );
        Self {
            credentials,
            records: HealthRecordStore::new(),
            appointments: AppointmentStore::new(),
            vaccines,
        }
    }

    /// Check a username/password pair.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.credentials.authenticate(username, password)
    }

    /// Register a new account; false if the username is taken.
    pub fn register(&mut self, username: &str, password: &str) -> bool {
        self.credentials.register(username, password)
    }

    /// Insert or replace a child's health record.
    pub fn update_health_record(&mut self, child_id: ChildId, details: impl Into<String>) {
        self.records.update(child_id, details);
    }

    /// Set a child's vaccination appointment.
    pub fn schedule_appointment(&mut self, child_id: ChildId, date: AppointmentDate) {
        self.appointments.schedule(child_id, date);
    }

    /// Vaccine information for `disease`.
    #[must_use]
    pub fn vaccine_information(&self, disease: &str) -> Cow<'_, str> {
        self.vaccines.lookup(disease)
    }

    /// The credential store.
    #[must_use]
    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// The health record store.
    #[must_use]
    pub fn records(&self) -> &HealthRecordStore {
        &self.records
    }

    /// The appointment store.
    #[must_use]
    pub fn appointments(&self) -> &AppointmentStore {
        &self.appointments
    }

    /// The vaccine knowledge base.
    #[must_use]
    pub fn vaccines(&self) -> &VaccineKnowledgeBase {
        &self.vaccines
    }
}
