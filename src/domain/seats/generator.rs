//! Stateful seat activity generation
//!
//! The generator seeds a `login -> last activity` map from its template once,
//! then on every call advances each login by the usage pattern's increment and
//! returns a fresh copy of the template with the new values written in.
//!
//! Whether a caller sees "stateless" or "stateful" output depends only on
//! which template it constructs the next generator from: the original
//! template yields the same timestamps every time, while the previous output
//! yields timestamps that keep moving forward.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

use super::template::parse_timestamp;
use super::{EditorPool, SeatTemplate, SeatsError, SeatsMockConfig, SeatsSnapshot};
use crate::domain::types::Login;

/// Result of advancing one login's activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityOutcome {
    /// Activity moved forward to this timestamp
    Advanced(DateTime<Utc>),
    /// The next timestamp would pass the end date; the last real timestamp is kept
    Capped(DateTime<Utc>),
}

impl ActivityOutcome {
    /// Timestamp written to the seat's `last_activity_at`
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Advanced(at) | Self::Capped(at) => *at,
        }
    }

    pub fn is_capped(&self) -> bool {
        matches!(self, Self::Capped(_))
    }
}

/// Snapshot plus the per-login outcomes that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SeatsTick {
    pub snapshot: SeatsSnapshot,
    pub outcomes: BTreeMap<Login, ActivityOutcome>,
}

/// Advances seat activity across repeated calls
#[derive(Debug)]
pub struct SeatActivityGenerator<R = StdRng> {
    config: SeatsMockConfig,
    editors: EditorPool,
    template: SeatTemplate,
    seat_logins: Vec<Login>,
    activities: HashMap<Login, DateTime<Utc>>,
    rng: R,
}

impl SeatActivityGenerator<StdRng> {
    /// Generator picking editors from an entropy-seeded random source
    pub fn new(config: SeatsMockConfig, template: SeatTemplate) -> Result<Self, SeatsError> {
        Self::with_rng(config, template, StdRng::from_entropy())
    }
}

impl SeatActivityGenerator<ChaCha8Rng> {
    /// Generator whose editor choices are reproducible for a given seed
    pub fn seeded(
        config: SeatsMockConfig,
        template: SeatTemplate,
        seed: u64,
    ) -> Result<Self, SeatsError> {
        Self::with_rng(config, template, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> SeatActivityGenerator<R> {
    pub fn with_rng(
        config: SeatsMockConfig,
        template: SeatTemplate,
        rng: R,
    ) -> Result<Self, SeatsError> {
        let editors = EditorPool::new(config.editors.clone())?;

        let seat_logins = template.logins()?;
        let mut activities = HashMap::with_capacity(seat_logins.len());
        for (index, login) in seat_logins.iter().enumerate() {
            let seeded_at = match template.last_activity_at(index) {
                None => config.activity_floor(),
                Some(Value::String(raw)) => {
                    parse_timestamp(raw).map_err(|_| SeatsError::InvalidTimestamp {
                        login: login.to_string(),
                        value: raw.clone(),
                    })?
                }
                Some(other) => {
                    return Err(SeatsError::InvalidTimestamp {
                        login: login.to_string(),
                        value: other.to_string(),
                    })
                }
            };
            // First seat wins when a login repeats
            activities.entry(login.clone()).or_insert(seeded_at);
        }

        info!(
            seats = seat_logins.len(),
            pattern = %config.usage_pattern,
            ceiling = %config.activity_ceiling(),
            "Seat activity generator initialized"
        );

        Ok(Self {
            config,
            editors,
            template,
            seat_logins,
            activities,
            rng,
        })
    }

    /// Produce the next seats snapshot
    pub fn generate_metrics(&mut self) -> SeatsSnapshot {
        self.generate_tick().snapshot
    }

    /// Produce the next seats snapshot along with each login's outcome
    ///
    /// A login that appears on several seats is advanced once per call.
    pub fn generate_tick(&mut self) -> SeatsTick {
        let mut snapshot = self.template.clone();
        let mut outcomes = BTreeMap::new();

        for (index, login) in self.seat_logins.iter().enumerate() {
            let editor = self.editors.choose(&mut self.rng);
            let outcome = *outcomes
                .entry(login.clone())
                .or_insert_with(|| advance(&self.config, &mut self.activities, login));

            snapshot.record_activity(index, outcome.timestamp(), editor);
            debug!(%login, %editor, ?outcome, "Updated seat activity");
        }

        let capped = outcomes.values().filter(|outcome| outcome.is_capped()).count();
        if capped > 0 {
            warn!(
                capped,
                ceiling = %self.config.activity_ceiling(),
                "Seat activity withheld at the end date"
            );
        }

        SeatsTick { snapshot, outcomes }
    }

    /// Last real activity recorded for `login`
    pub fn last_activity(&self, login: &Login) -> Option<DateTime<Utc>> {
        self.activities.get(login).copied()
    }

    pub fn config(&self) -> &SeatsMockConfig {
        &self.config
    }
}

fn advance(
    config: &SeatsMockConfig,
    activities: &mut HashMap<Login, DateTime<Utc>>,
    login: &Login,
) -> ActivityOutcome {
    let current = activities
        .get(login)
        .copied()
        .unwrap_or_else(|| config.activity_floor());
    let increment = config.usage_pattern.increment(config.is_heavy_user(login));

    match current.checked_add_signed(increment) {
        Some(next) if next <= config.activity_ceiling() => {
            activities.insert(login.clone(), next);
            ActivityOutcome::Advanced(next)
        }
        _ => ActivityOutcome::Capped(current),
    }
}
