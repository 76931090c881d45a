use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const TIME_SLOTS: [&str; 5] = ["08:00 AM", "12:00 PM", "02:00 PM", "06:00 PM", "08:00 PM"];

/// How far ahead a delivery can be scheduled, today included.
pub const SCHEDULING_DAYS: i64 = 7;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Delivery {
    #[serde(rename = "ASAP")]
    Asap,
    Scheduled {
        date: Option<String>,
        time: Option<String>,
    },
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum DeliverySlot {
    #[serde(rename = "ASAP")]
    Asap,
    Scheduled { date: NaiveDate, time: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckoutError {
    MissingAddress,
    MissingSlot,
    DateOutOfRange,
    UnknownTimeSlot,
}

impl CheckoutError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingAddress => "Please enter a delivery address",
            Self::MissingSlot => "Please select your preferred delivery slot",
            Self::DateOutOfRange => "Please pick a delivery date within the next 7 days",
            Self::UnknownTimeSlot => "Please pick one of the available delivery times",
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub fn validate(
    address: &str,
    delivery: &Delivery,
    today: NaiveDate,
) -> Result<DeliverySlot, CheckoutError> {
    if address.trim().is_empty() {
        return Err(CheckoutError::MissingAddress);
    }

    let (date, time) = match delivery {
        Delivery::Asap => return Ok(DeliverySlot::Asap),
        Delivery::Scheduled { date, time } => {
            match (present(date.as_deref()), present(time.as_deref())) {
                (Some(date), Some(time)) => (date, time),
                _ => return Err(CheckoutError::MissingSlot),
            }
        }
    };

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| CheckoutError::DateOutOfRange)?;
    if date < today || date >= today + Duration::days(SCHEDULING_DAYS) {
        return Err(CheckoutError::DateOutOfRange);
    }

    if !TIME_SLOTS.contains(&time) {
        return Err(CheckoutError::UnknownTimeSlot);
    }

    Ok(DeliverySlot::Scheduled {
        date,
        time: time.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    fn scheduled(date: Option<&str>, time: Option<&str>) -> Delivery {
        Delivery::Scheduled {
            date: date.map(String::from),
            time: time.map(String::from),
        }
    }

    #[test]
    fn address_is_required_first() {
        assert_eq!(
            validate("   ", &scheduled(None, None), today()),
            Err(CheckoutError::MissingAddress)
        );
        assert_eq!(
            CheckoutError::MissingAddress.message(),
            "Please enter a delivery address"
        );
    }

    #[test]
    fn asap_needs_only_an_address() {
        assert_eq!(
            validate("Kilimani, Rose Ave", &Delivery::Asap, today()),
            Ok(DeliverySlot::Asap)
        );
    }

    #[test]
    fn scheduled_needs_both_date_and_time() {
        for delivery in [
            scheduled(None, Some("12:00 PM")),
            scheduled(Some("2026-03-10"), None),
            scheduled(Some(""), Some("12:00 PM")),
        ] {
            assert_eq!(
                validate("Rose Ave", &delivery, today()),
                Err(CheckoutError::MissingSlot)
            );
        }
    }

    #[test]
    fn dates_must_fall_in_the_coming_week() {
        let ok = validate("Rose Ave", &scheduled(Some("2026-03-15"), Some("08:00 PM")), today());
        assert_eq!(
            ok,
            Ok(DeliverySlot::Scheduled {
                date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
                time: "08:00 PM".to_string()
            })
        );

        for date in ["2026-03-08", "2026-03-16", "09/03/2026"] {
            assert_eq!(
                validate("Rose Ave", &scheduled(Some(date), Some("08:00 PM")), today()),
                Err(CheckoutError::DateOutOfRange)
            );
        }
    }

    #[test]
    fn times_must_be_an_offered_slot() {
        assert_eq!(
            validate("Rose Ave", &scheduled(Some("2026-03-09"), Some("03:00 PM")), today()),
            Err(CheckoutError::UnknownTimeSlot)
        );
    }

    #[test]
    fn delivery_deserializes_from_tagged_json() {
        let asap: Delivery = serde_json::from_str(r#"{"type":"ASAP"}"#).unwrap();
        assert_eq!(asap, Delivery::Asap);

        let scheduled: Delivery =
            serde_json::from_str(r#"{"type":"Scheduled","date":"2026-03-10"}"#).unwrap();
        assert_eq!(
            scheduled,
            Delivery::Scheduled {
                date: Some("2026-03-10".to_string()),
                time: None
            }
        );
    }
}
