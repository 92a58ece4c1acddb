/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time with nanosecond precision, carried as epoch seconds on the wire.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * 1_000_000_000_f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                Instant::from_f64(-duration.as_secs_f64())
            }
        }
    }

    fn to_chrono(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    // AutoSi pads fractions to 3, 6 or 9 digits
                    match rfc3339.find('.') {
                        Some(_) => {
                            let mut trimmed = rfc3339
                                .trim_end_matches('Z')
                                .trim_end_matches('0')
                                .to_owned();
                            trimmed.push('Z');
                            trimmed
                        }
                        None => rfc3339,
                    }
                }
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

pub enum Format {
    DateTime,
    EpochSeconds,
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.has_nanos() {
            serializer.serialize_f64(self.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.seconds)
        }
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EpochSecondsVisitor;

        impl<'de> Visitor<'de> for EpochSecondsVisitor {
            type Value = Instant;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a timestamp in epoch seconds")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Instant::from_epoch_seconds(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                if v > i64::MAX as u64 {
                    return Err(E::custom("timestamp out of range"));
                }
                Ok(Instant::from_epoch_seconds(v as i64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if !v.is_finite() {
                    return Err(E::custom("timestamp must be finite"));
                }
                Ok(Instant::from_f64(v))
            }
        }

        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn system_time_conversion() {
        let time = UNIX_EPOCH + Duration::new(1614952162, 500_000_000);
        let instant = Instant::from(time);
        assert_eq!(instant.epoch_seconds(), 1614952162);
        assert_eq!(instant.fmt(Format::EpochSeconds), "1614952162.5");
    }

    #[test]
    fn serde_uses_epoch_seconds() {
        let whole = Instant::from_epoch_seconds(1576540098);
        assert_eq!(serde_json::to_string(&whole).unwrap(), "1576540098");
        let parsed: Instant = serde_json::from_str("1576540098.25").unwrap();
        assert_eq!(parsed, Instant::from_secs_and_nanos(1576540098, 250_000_000));
        assert!(serde_json::from_str::<Instant>("\"yesterday\"").is_err());
    }

    proptest! {
        #[test]
        fn epoch_seconds_roundtrip(seconds in -10_000_000_000i64..10_000_000_000i64) {
            let instant = Instant::from_epoch_seconds(seconds);
            let json = serde_json::to_string(&instant).unwrap();
            let parsed: Instant = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, instant);
            prop_assert_eq!(instant.fmt(Format::EpochSeconds), seconds.to_string());
        }
    }
}
