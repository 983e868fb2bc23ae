use std::fmt;

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Serialize, Serializer};

pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 80.0;

/// Rendered in place of an arrival time until distance and departure are known.
pub const ARRIVAL_PLACEHOLDER: &str = "--:--";

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Wall-clock time of day with minute precision. No date, no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Accepts `HH:MM`, plus the `HH:MM:SS` form browsers send for time inputs.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
            .and_then(|time| Self::from_hm(time.hour(), time.minute()))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Adds whole minutes, wrapping past midnight in either direction.
    pub fn wrapping_add_minutes(self, minutes: i64) -> Self {
        let delta = TimeDelta::minutes(minutes.rem_euclid(MINUTES_PER_DAY));
        let (time, _wrapped) = self.0.overflowing_add_signed(delta);
        Self(time)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripDuration {
    pub hours: u32,
    pub minutes: u32,
}

impl TripDuration {
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripEta {
    pub arrival: ClockTime,
    pub duration: TripDuration,
}

/// Projects travel time and arrival from a distance at a constant average speed.
#[derive(Debug, Clone, Copy)]
pub struct EtaProjector {
    average_speed_kmh: f64,
}

impl Default for EtaProjector {
    fn default() -> Self {
        Self::new(DEFAULT_AVERAGE_SPEED_KMH)
    }
}

impl EtaProjector {
    pub fn new(average_speed_kmh: f64) -> Self {
        Self { average_speed_kmh }
    }

    pub fn average_speed_kmh(&self) -> f64 {
        self.average_speed_kmh
    }

    /// Travel time rounded to the nearest minute. Negative or NaN distances give 0.
    pub fn travel_minutes(&self, distance_km: f64) -> u32 {
        (distance_km / self.average_speed_kmh * 60.0).round() as u32
    }

    /// Rounding to whole minutes first carries a would-be `60m` into the hours.
    pub fn travel_time(&self, distance_km: f64) -> TripDuration {
        TripDuration::from_minutes(self.travel_minutes(distance_km))
    }

    pub fn project(&self, distance_km: Option<f64>, departure: Option<&str>) -> Option<TripEta> {
        let distance_km = distance_km?;
        let departure = ClockTime::parse(departure?)?;
        Some(self.project_from(distance_km, departure))
    }

    pub fn project_from(&self, distance_km: f64, departure: ClockTime) -> TripEta {
        let duration = self.travel_time(distance_km);
        TripEta {
            arrival: departure.wrapping_add_minutes(i64::from(duration.total_minutes())),
            duration,
        }
    }

    pub fn arrival_label(&self, distance_km: Option<f64>, departure: Option<&str>) -> String {
        match self.project(distance_km, departure) {
            Some(eta) => eta.arrival.to_string(),
            None => ARRIVAL_PLACEHOLDER.to_string(),
        }
    }
}
