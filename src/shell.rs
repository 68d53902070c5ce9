//! Numbered-menu front end over any line reader and writer.

use std::io::{self, BufRead, Write};

use chrono::Local;
use tracing::error;

use crate::{
    record::{Event, EventDraft},
    registry::{Registry, RegistryError},
    types::{Timestamp, format_timestamp},
};

const MENU: &str = "\
1. Register user
2. Add event
3. List all events
4. List upcoming events
5. List past events
6. Participate in event
7. Cancel participation
8. List events and participants
9. Exit";

/// Current local wall-clock time.
pub fn local_now() -> Timestamp {
    Local::now().naive_local()
}

/// Interactive session bound to one registry.
///
/// Registry errors are printed and the menu is shown again; only I/O errors
/// on the session streams end [`Shell::run`] early.
pub struct Shell<'a, R, W> {
    registry: &'a mut Registry,
    input: R,
    output: W,
    clock: fn() -> Timestamp,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Session using [`local_now`] for time-relative listings.
    pub fn new(registry: &'a mut Registry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            clock: local_now,
        }
    }

    /// Replaces the clock used for upcoming and past listings.
    pub fn with_clock(mut self, clock: fn() -> Timestamp) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the menu until the exit option or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                return Ok(());
            };
            let keep_going = match choice.trim() {
                "" => true,
                "1" => self.register_user()?,
                "2" => self.add_event()?,
                "3" => {
                    let events: Vec<&Event> = self.registry.all_events().iter().collect();
                    write_events(&mut self.output, "All events", &events)?;
                    true
                }
                "4" => {
                    let events = self.registry.upcoming_events((self.clock)());
                    write_events(&mut self.output, "Upcoming events", &events)?;
                    true
                }
                "5" => {
                    let events = self.registry.past_events((self.clock)());
                    write_events(&mut self.output, "Past events", &events)?;
                    true
                }
                "6" => self.participate()?,
                "7" => self.cancel_participation()?,
                "8" => {
                    self.write_participations()?;
                    true
                }
                "9" => false,
                other => {
                    writeln!(self.output, "Invalid option {other:?}, pick 1-9.")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn register_user(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(false);
        };
        let Some(city) = self.prompt("City: ")? else {
            return Ok(false);
        };
        let Some(email) = self.prompt("Email: ")? else {
            return Ok(false);
        };
        match self.registry.register_user(name, city, email) {
            Ok(user) => writeln!(self.output, "User registered: {}", user.name)?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn add_event(&mut self) -> io::Result<bool> {
        let categories = self
            .registry
            .categories()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let Some(name) = self.prompt("Event name: ")? else {
            return Ok(false);
        };
        let Some(address) = self.prompt("Event address: ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt(&format!("Event category [{categories}]: "))? else {
            return Ok(false);
        };
        let Some(date_time) = self.prompt("Event date and time (dd/MM/yyyy HH:mm): ")? else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Event description: ")? else {
            return Ok(false);
        };

        let draft = EventDraft {
            name,
            address,
            category,
            date_time,
            description,
        };
        match self.registry.add_event(draft) {
            Ok(event) => writeln!(self.output, "Event added: {}", event.name)?,
            Err(err @ RegistryError::InvalidCategory(_)) => {
                self.report(&err)?;
                writeln!(self.output, "Choose one of: {categories}")?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn participate(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Registered users:")?;
        for user in self.registry.users() {
            writeln!(self.output, "  {}", user.name)?;
        }
        let Some(user_name) = self.prompt("Select a user by name: ")? else {
            return Ok(false);
        };

        let events: Vec<&Event> = self.registry.all_events().iter().collect();
        write_events(&mut self.output, "All events", &events)?;
        let Some(event_name) = self.prompt("Select an event by name: ")? else {
            return Ok(false);
        };

        match self.registry.participate(event_name, user_name) {
            Ok(p) => writeln!(
                self.output,
                "Participation recorded: {} in {}",
                p.user_name, p.event_name
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn cancel_participation(&mut self) -> io::Result<bool> {
        self.write_participations()?;
        let Some(event_name) = self.prompt("Event name to cancel: ")? else {
            return Ok(false);
        };
        let Some(user_name) = self.prompt("User name to cancel: ")? else {
            return Ok(false);
        };

        match self.registry.cancel_participation(&event_name, &user_name) {
            Ok(removed) => writeln!(
                self.output,
                "Cancelled {removed} participation(s) for {user_name} in {event_name}"
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn write_participations(&mut self) -> io::Result<()> {
        let index = self.registry.participations_by_event();
        let mut entries: Vec<_> = index.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        writeln!(self.output, "Events and participants:")?;
        for (event, users) in entries {
            let mut users: Vec<&str> = users.iter().map(String::as_str).collect();
            users.sort_unstable();
            writeln!(self.output, "Event: {event}")?;
            writeln!(self.output, "Participants: {}", users.join(", "))?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &RegistryError) -> io::Result<()> {
        if let RegistryError::Store(_) = err {
            error!(%err, "operation not saved");
        }
        writeln!(self.output, "Error: {err}")
    }
}

fn write_events<W: Write>(out: &mut W, title: &str, events: &[&Event]) -> io::Result<()> {
    writeln!(out, "{title}:")?;
    if events.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for ev in events {
        writeln!(out, "Name: {}", ev.name)?;
        writeln!(out, "Address: {}", ev.address)?;
        writeln!(out, "Category: {}", ev.category)?;
        writeln!(out, "Date and time: {}", format_timestamp(&ev.date_time))?;
        writeln!(out, "Description: {}", ev.description)?;
        writeln!(out)?;
    }
    Ok(())
}
