use std::{env, sync::Arc};

use chrono::{DateTime, Utc};
use spendly_core::{Clock, FixedClock};

use crate::cli::core::CliError;

/// Pins the shell clock to an RFC 3339 instant, mainly for scripted runs.
pub const NOW_ENV: &str = "SPENDLY_NOW";

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub fn clock_from_env() -> Result<Arc<dyn Clock>, CliError> {
    match env::var(NOW_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            let instant = DateTime::parse_from_rfc3339(raw.trim()).map_err(|err| {
                CliError::Input(format!("invalid {NOW_ENV} value `{raw}`: {err}"))
            })?;
            Ok(Arc::new(FixedClock(instant.with_timezone(&Utc))))
        }
        _ => Ok(Arc::new(SystemClock)),
    }
}
