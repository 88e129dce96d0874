//! Wall-clock seam used to stamp check-ins with local `fecha`/`hora`.

use crate::{CoreError, FECHA_FORMAT, HORA_FORMAT, Result as CoreErrorResult};

use std::panic::Location;
use std::sync::Arc;

use chrono::{Duration, Local, NaiveDateTime};
use error_location::ErrorLocation;

/// Source of the current local date and time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Current date and time formatted the way the `taller` table stores them
    fn stamp(&self) -> Stamp {
        Stamp::from(self.now())
    }

    /// Today's date formatted as `YYYY-MM-DD`
    fn today(&self) -> String {
        self.now().format(FECHA_FORMAT).to_string()
    }

    /// The date `days` days before today, formatted as `YYYY-MM-DD`
    fn days_ago(&self, days: i64) -> String {
        (self.now() - Duration::days(days))
            .format(FECHA_FORMAT)
            .to_string()
    }
}

pub type SharedClock = Arc<dyn Clock>;

/// Formatted local date and time of a check-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub fecha: String,
    pub hora: String,
}

impl From<NaiveDateTime> for Stamp {
    fn from(now: NaiveDateTime) -> Self {
        Self {
            fecha: now.format(FECHA_FORMAT).to_string(),
            hora: now.format(HORA_FORMAT).to_string(),
        }
    }
}

/// System clock in the process' local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse `YYYY-MM-DD HH:MM:SS`
    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
            .map(Self)
            .map_err(|_| CoreError::InvalidTimestamp {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
