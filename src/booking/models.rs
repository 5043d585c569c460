//! Booking records.
//!
//! A `BookingRequest` is what the booking form submits; a `Booking` is the
//! persisted record created from it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::VehicleSize;

/// Where the detail is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    /// At the studio, no travel fee
    #[default]
    Studio,
    /// Home service, priced by travel zone
    Mobile,
}

/// Booking form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub vehicle: String,
    pub size: VehicleSize,
    pub service_id: String,
    #[serde(default)]
    pub addons: Vec<String>,
    #[serde(default)]
    pub location_type: LocationMode,
    #[serde(default)]
    pub mobile_zone: Option<String>,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suburb: String,
    #[serde(default)]
    pub postcode: String,
    pub date: NaiveDate,
    #[serde(with = "slot_time")]
    pub time: NaiveTime,
    #[serde(default)]
    pub notes: String,
}

impl BookingRequest {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Persisted booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub request: BookingRequest,
    pub total: Decimal,
    pub travel_fee: Decimal,
    #[serde(default)]
    pub paid: bool,
}

impl Booking {
    pub fn date(&self) -> NaiveDate {
        self.request.date
    }

    pub fn time(&self) -> NaiveTime {
        self.request.time
    }

    pub fn starts_at(&self) -> NaiveDateTime {
        self.request.starts_at()
    }

    /// Contact, vehicle and address fields joined for admin search
    pub fn search_text(&self) -> String {
        let r = &self.request;
        [
            r.customer.as_str(),
            r.email.as_str(),
            r.phone.as_str(),
            r.vehicle.as_str(),
            r.street.as_str(),
            r.suburb.as_str(),
            r.postcode.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// `HH:MM` wire format for slot times
pub mod slot_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sample_request() -> BookingRequest {
        serde_json::from_value(json!({
            "customer": "Jane Smith",
            "email": "jane@example.com",
            "phone": "0400 222 333",
            "vehicle": "BMW M3",
            "size": "medium",
            "service_id": "signature",
            "addons": ["pet"],
            "location_type": "mobile",
            "mobile_zone": "B",
            "street": "88 Queen St",
            "suburb": "Brisbane",
            "postcode": "4000",
            "date": "2026-11-02",
            "time": "10:30"
        }))
        .unwrap()
    }

    #[test]
    fn test_request_parses_slot_time() {
        let request = sample_request();
        assert_eq!(request.time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(request.location_type, LocationMode::Mobile);
        assert_eq!(request.notes, "");
    }

    #[test]
    fn test_request_rejects_malformed_time() {
        let result: Result<BookingRequest, _> = serde_json::from_value(json!({
            "size": "small",
            "service_id": "express",
            "date": "2026-11-02",
            "time": "half past ten"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_location_defaults_to_studio() {
        let request: BookingRequest = serde_json::from_value(json!({
            "size": "small",
            "service_id": "express",
            "date": "2026-11-02",
            "time": "09:00"
        }))
        .unwrap();
        assert_eq!(request.location_type, LocationMode::Studio);
        assert!(request.mobile_zone.is_none());
    }

    #[test]
    fn test_booking_serializes_flat() {
        let booking = Booking {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            request: sample_request(),
            total: dec!(374),
            travel_fee: dec!(45),
            paid: false,
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["time"], "10:30");
        assert_eq!(value["customer"], "Jane Smith");
        assert_eq!(value["total"], "374");

        let back: Booking = serde_json::from_value(value).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn test_search_text_is_lowercase() {
        let booking = Booking {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            request: sample_request(),
            total: dec!(374),
            travel_fee: dec!(45),
            paid: false,
        };
        let text = booking.search_text();
        assert!(text.contains("jane smith"));
        assert!(text.contains("bmw m3"));
        assert!(text.contains("4000"));
    }
}
