//! Menu choices and the fixed text the shell prints.

/// Printed above every menu and action.
pub const SEPARATOR: &str = "======================================";

/// Prompt shown after a menu listing.
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

pub(crate) const WELCOME: &str = "Welcome to the HealthCare Application!";
pub(crate) const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub(crate) const INVALID_NUMBER_HINT: &str = "Invalid input. Please enter a whole number.";
pub(crate) const AUTH_OK: &str = "Authentication successful!";
pub(crate) const AUTH_BAD_CREDENTIALS: &str = "Invalid username or password.";
pub(crate) const AUTH_FAILED: &str = "Authentication failed. Please try again.";
pub(crate) const REGISTER_OK: &str = "Registration successful! You can now log in.";
pub(crate) const REGISTER_TAKEN: &str =
    "Username already exists. Please choose a different username.";
pub(crate) const INVALID_DATE: &str = "Invalid date format. Please try again.";
pub(crate) const LOGGING_OUT: &str = "Logging out. Goodbye!";
pub(crate) const EXITING: &str = "Exiting the application. Goodbye!";

/// Options on the main (logged-out) menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    /// Authenticate and enter the user menu.
    LogIn,
    /// Create a new account.
    Register,
    /// Leave the application.
    Exit,
}

impl MainChoice {
    /// Heading and numbered options, one per line.
    pub const MENU: &'static [&'static str] = &["Main Menu:", "1. Log In", "2. Register", "3. Exit"];

    /// Map a menu number to a choice.
    #[must_use]
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(Self::LogIn),
            2 => Some(Self::Register),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Options on the user (logged-in) menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    /// Write a child's health record.
    UpdateHealthRecord,
    /// Set a child's vaccination date.
    ScheduleAppointment,
    /// Look up a disease.
    VaccineInformation,
    /// Return to the main menu.
    LogOut,
}

impl UserChoice {
    /// Heading and numbered options, one per line.
    pub const MENU: &'static [&'static str] = &[
        "User Menu:",
        "1. Update Health Record",
        "2. Schedule Vaccination Appointment",
        "3. Get Vaccine Information",
        "4. Log Out",
    ];

    /// Map a menu number to a choice.
    #[must_use]
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(Self::UpdateHealthRecord),
            2 => Some(Self::ScheduleAppointment),
            3 => Some(Self::VaccineInformation),
            4 => Some(Self::LogOut),
            _ => None,
        }
    }
}
