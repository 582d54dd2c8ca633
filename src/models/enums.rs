use serde::{Deserialize, Serialize};

use super::ModelError;

/// Generates a lowercase string enum with `as_str`, `Display` and `FromStr`.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Informational only; bookings are never refused on this basis.
str_enum!(AvailabilityStatus {
    Available => "available",
    Busy => "busy",
    Offline => "offline",
});

impl AvailabilityStatus {
    /// Badge text on directory cards and profiles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available Today",
            Self::Busy => "Busy",
            Self::Offline => "Offline",
        }
    }
}

str_enum!(AppointmentStatus {
    Confirmed => "confirmed",
    Pending => "pending",
    Cancelled => "cancelled",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn availability_status_round_trip() {
        for (variant, s) in [
            (AvailabilityStatus::Available, "available"),
            (AvailabilityStatus::Busy, "busy"),
            (AvailabilityStatus::Offline, "offline"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AvailabilityStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn appointment_status_round_trip() {
        for (variant, s) in [
            (AppointmentStatus::Confirmed, "confirmed"),
            (AppointmentStatus::Pending, "pending"),
            (AppointmentStatus::Cancelled, "cancelled"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AppointmentStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn availability_badge_labels() {
        assert_eq!(AvailabilityStatus::Available.label(), "Available Today");
        assert_eq!(AvailabilityStatus::Busy.label(), "Busy");
        assert_eq!(AvailabilityStatus::Offline.label(), "Offline");
    }

    #[test]
    fn unknown_value_names_the_enum() {
        let err = AppointmentStatus::from_str("rescheduled").unwrap_err();
        match err {
            ModelError::InvalidEnum { field, value } => {
                assert_eq!(field, "AppointmentStatus");
                assert_eq!(value, "rescheduled");
            }
        }
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&AvailabilityStatus::Busy).unwrap();
        assert_eq!(json, "\"busy\"");
        let parsed: AppointmentStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::Confirmed);
    }
}
