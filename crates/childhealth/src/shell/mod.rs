//! Interactive console shell.
//!
//! Two nested loops: the main menu (log in, register, exit) and, after a
//! successful log in, the user menu (health record, appointment, vaccine
//! information, log out). The shell is generic over its input and output so
//! the binary drives it with stdin/stdout and tests drive it with buffers.
//!
//! A malformed date is recovered in place. A malformed number either ends the
//! session with [`Error::InvalidNumber`] or is asked again, depending on
//! [`InvalidNumberPolicy`].

mod input;
mod menu;

use std::io::{BufRead, Write};

use tracing::{debug, info, info_span};

use crate::app::HealthCareApp;
use crate::appointments::AppointmentDate;
use crate::config::{InvalidNumberPolicy, ShellConfig};
use crate::credentials::{CredentialStore, PlainTextCredentials};
use crate::error::{Error, Result};

pub use input::Input;
pub use menu::{MainChoice, UserChoice, CHOICE_PROMPT, SEPARATOR};

/// The interactive menu driver.
#[derive(Debug)]
pub struct Shell<'a, R, W, C = PlainTextCredentials> {
    app: &'a mut HealthCareApp<C>,
    input: Input<R>,
    out: W,
    options: ShellConfig,
}

impl<'a, R, W, C> Shell<'a, R, W, C>
where
    R: BufRead,
    W: Write,
    C: CredentialStore,
{
    /// Create a shell over `app` reading from `reader` and writing to `out`.
    pub fn new(app: &'a mut HealthCareApp<C>, reader: R, out: W, options: ShellConfig) -> Self {
        Self {
            app,
            input: Input::new(reader),
            out,
            options,
        }
    }

    /// Run until the user picks Exit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNumber`] for non-numeric menu or child ID input
    /// under the fatal policy, [`Error::EndOfInput`] if input runs out, and
    /// [`Error::Io`] if the console streams fail.
    pub fn run(&mut self) -> Result<()> {
        if self.options.show_banner {
            writeln!(self.out, "{}\n", menu::WELCOME)?;
        }

        loop {
            self.show_menu(MainChoice::MENU)?;
            let choice = self.read_number(CHOICE_PROMPT, "menu choice")?;
            match MainChoice::from_number(choice) {
                Some(MainChoice::LogIn) => {
                    if let Some(username) = self.authenticate()? {
                        self.user_session(&username)?;
                    } else {
                        writeln!(self.out, "{}", menu::AUTH_FAILED)?;
                    }
                }
                Some(MainChoice::Register) => self.register()?,
                Some(MainChoice::Exit) => {
                    writeln!(self.out, "{}", menu::EXITING)?;
                    self.out.flush()?;
                    debug!("exit selected");
                    return Ok(());
                }
                None => writeln!(self.out, "{}", menu::INVALID_CHOICE)?,
            }
        }
    }

    /// Prompt for credentials; the username on success.
    fn authenticate(&mut self) -> Result<Option<String>> {
        writeln!(self.out, "{SEPARATOR}")?;
        let username = self.read_text("Enter username: ")?;
        let password = self.read_text("Enter password: ")?;

        if self.app.authenticate(&username, &password) {
            writeln!(self.out, "{}\n", menu::AUTH_OK)?;
            Ok(Some(username))
        } else {
            writeln!(self.out, "{}\n", menu::AUTH_BAD_CREDENTIALS)?;
            Ok(None)
        }
    }

    fn register(&mut self) -> Result<()> {
        writeln!(self.out, "{SEPARATOR}")?;
        let username = self.read_text("Enter new username: ")?;
        let password = self.read_text("Enter new password: ")?;

        let message = if self.app.register(&username, &password) {
            menu::REGISTER_OK
        } else {
            menu::REGISTER_TAKEN
        };
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn user_session(&mut self, username: &str) -> Result<()> {
        let span = info_span!("session", username);
        let _guard = span.enter();
        info!("logged in");

        loop {
            self.show_menu(UserChoice::MENU)?;
            let choice = self.read_number(CHOICE_PROMPT, "menu choice")?;
            match UserChoice::from_number(choice) {
                Some(UserChoice::UpdateHealthRecord) => self.update_health_record()?,
                Some(UserChoice::ScheduleAppointment) => self.schedule_appointment()?,
                Some(UserChoice::VaccineInformation) => self.vaccine_information()?,
                Some(UserChoice::LogOut) => {
                    writeln!(self.out, "{}", menu::LOGGING_OUT)?;
                    info!("logged out");
                    return Ok(());
                }
                None => writeln!(self.out, "{}", menu::INVALID_CHOICE)?,
            }
        }
    }

    fn update_health_record(&mut self) -> Result<()> {
        writeln!(self.out, "{SEPARATOR}")?;
        let child_id = self.read_number("Enter child ID: ", "child ID")?;
        let details = self.read_text("Enter health record details: ")?;

        self.app.update_health_record(child_id, details);
        writeln!(self.out, "Health record updated for child ID: {child_id}")?;
        Ok(())
    }

    fn schedule_appointment(&mut self) -> Result<()> {
        writeln!(self.out, "{SEPARATOR}")?;
        let child_id = self.read_number("Enter child ID: ", "child ID")?;
        let text = self.read_text("Enter appointment date (yyyy-MM-dd): ")?;

        match AppointmentDate::parse(&text) {
            Ok(date) => {
                self.app.schedule_appointment(child_id, date);
                writeln!(
                    self.out,
                    "Appointment scheduled for child ID: {child_id} on {date}"
                )?;
            }
            Err(err @ Error::InvalidDate { .. }) => {
                debug!(child_id, error = %err, "appointment not scheduled");
                writeln!(self.out, "{}", menu::INVALID_DATE)?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    fn vaccine_information(&mut self) -> Result<()> {
        writeln!(self.out, "{SEPARATOR}")?;
        let disease = self.read_text("Enter disease name: ")?;

        let info = self.app.vaccine_information(&disease);
        writeln!(self.out, "\nVaccine Information:")?;
        writeln!(self.out, "{info}")?;
        Ok(())
    }

    fn show_menu(&mut self, lines: &[&str]) -> Result<()> {
        writeln!(self.out, "{SEPARATOR}")?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        Ok(())
    }

    fn read_text(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?;
        self.input.read_line()
    }

    fn read_number(&mut self, prompt: &str, field: &'static str) -> Result<i32> {
        loop {
            self.prompt(prompt)?;
            let token = self.input.read_token()?;
            match token.parse::<i32>() {
                Ok(n) => return Ok(n),
                Err(_) => match self.options.invalid_number {
                    InvalidNumberPolicy::Fatal => {
                        debug!(field, token = %token, "non-numeric input");
                        return Err(Error::invalid_number(field, token));
                    }
                    InvalidNumberPolicy::Reprompt => {
                        writeln!(self.out, "{}", menu::INVALID_NUMBER_HINT)?;
                    }
                },
            }
        }
    }
}
