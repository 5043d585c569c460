//! Catalog configuration for the booking engine.
//!
//! Services, add-ons, travel zones and the opening schedule are loaded once
//! at startup and shared read-only behind an `Arc`. The built-in default is
//! the Olympus Detailing price list.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Vehicle size category used to select a service price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleSize {
    Small,
    Medium,
    Large,
}

impl VehicleSize {
    pub const ALL: [VehicleSize; 3] = [VehicleSize::Small, VehicleSize::Medium, VehicleSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleSize::Small => "small",
            VehicleSize::Medium => "medium",
            VehicleSize::Large => "large",
        }
    }
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One price per vehicle size. Every size must be priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizePricing {
    pub small: Decimal,
    pub medium: Decimal,
    pub large: Decimal,
}

impl SizePricing {
    pub fn price(&self, size: VehicleSize) -> Decimal {
        match size {
            VehicleSize::Small => self.small,
            VehicleSize::Medium => self.medium,
            VehicleSize::Large => self.large,
        }
    }
}

/// Detailing package offered by the studio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: u32,
    pub price_by_size: SizePricing,
}

impl ServiceCatalogEntry {
    pub fn base_price(&self, size: VehicleSize) -> Decimal {
        self.price_by_size.price(size)
    }

    /// Human readable duration, e.g. `2h 30m` or `1h`.
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{}m", m),
            (h, 0) => format!("{}h", h),
            (h, m) => format!("{}h {}m", h, m),
        }
    }
}

/// Optional enhancement with a flat price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonEntry {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

/// Home-service travel distance bucket with a flat fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelZoneEntry {
    pub id: String,
    pub label: String,
    pub fee: Decimal,
}

/// Business hours and daily capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub opening_hour: u32,
    /// Exclusive: no slot starts at the closing hour.
    pub closing_hour: u32,
    pub slot_minutes: u32,
    pub slots_per_day: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            opening_hour: 9,
            closing_hour: 17,
            slot_minutes: 30,
            slots_per_day: 6,
        }
    }
}

/// Immutable price list and schedule injected into the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_currency")]
    pub currency: String,
    pub services: Vec<ServiceCatalogEntry>,
    #[serde(default)]
    pub addons: Vec<AddonEntry>,
    #[serde(default)]
    pub zones: Vec<TravelZoneEntry>,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

fn default_currency() -> String {
    "AUD".to_string()
}

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {message}")]
    Invalid { message: String, errors: Vec<String> },
}

impl Catalog {
    pub fn service(&self, id: &str) -> Option<&ServiceCatalogEntry> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn addon(&self, id: &str) -> Option<&AddonEntry> {
        self.addons.iter().find(|a| a.id == id)
    }

    pub fn zone(&self, id: &str) -> Option<&TravelZoneEntry> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Parse and validate a JSON catalog
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read, parse and validate a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded catalog from {}: {} services, {} add-ons, {} zones",
            path.display(),
            catalog.services.len(),
            catalog.addons.len(),
            catalog.zones.len()
        );
        Ok(catalog)
    }

    /// Check ids, prices and schedule bounds. Collects every problem.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut errors = Vec::new();

        if self.services.is_empty() {
            errors.push("catalog has no services".to_string());
        }

        check_ids("service", self.services.iter().map(|s| s.id.as_str()), &mut errors);
        check_ids("add-on", self.addons.iter().map(|a| a.id.as_str()), &mut errors);
        check_ids("zone", self.zones.iter().map(|z| z.id.as_str()), &mut errors);

        for service in &self.services {
            for size in VehicleSize::ALL {
                if service.base_price(size) < Decimal::ZERO {
                    errors.push(format!("service '{}' has a negative {} price", service.id, size));
                }
            }
        }
        for addon in &self.addons {
            if addon.price < Decimal::ZERO {
                errors.push(format!("add-on '{}' has a negative price", addon.id));
            }
        }
        for zone in &self.zones {
            if zone.fee < Decimal::ZERO {
                errors.push(format!("zone '{}' has a negative fee", zone.id));
            }
        }

        let schedule = &self.schedule;
        if schedule.opening_hour >= schedule.closing_hour || schedule.closing_hour > 24 {
            errors.push(format!(
                "opening hour {} must be before closing hour {} (max 24)",
                schedule.opening_hour, schedule.closing_hour
            ));
        }
        if schedule.slot_minutes == 0 || 60 % schedule.slot_minutes != 0 {
            errors.push(format!("slot length {} must divide an hour", schedule.slot_minutes));
        }
        if schedule.slots_per_day == 0 {
            errors.push("slots per day must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid {
                message: format!("{} problem(s) found", errors.len()),
                errors,
            })
        }
    }
}

fn check_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>, errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            errors.push(format!("{} with an empty id", kind));
        } else if !seen.insert(id) {
            errors.push(format!("duplicate {} id '{}'", kind, id));
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            services: vec![
                ServiceCatalogEntry {
                    id: "express".to_string(),
                    name: "Express Detail".to_string(),
                    description: "Exterior wash, quick interior spruce, tyre shine.".to_string(),
                    duration_minutes: 60,
                    price_by_size: SizePricing {
                        small: dec!(89),
                        medium: dec!(109),
                        large: dec!(129),
                    },
                },
                ServiceCatalogEntry {
                    id: "signature".to_string(),
                    name: "Signature Detail".to_string(),
                    description: "Deep interior clean, foam wash, clay, machine polish (light)."
                        .to_string(),
                    duration_minutes: 150,
                    price_by_size: SizePricing {
                        small: dec!(249),
                        medium: dec!(289),
                        large: dec!(329),
                    },
                },
                ServiceCatalogEntry {
                    id: "ceramic".to_string(),
                    name: "Ceramic Coat (3-yr)".to_string(),
                    description: "Paint prep, multi-stage polish, 3-year ceramic protection."
                        .to_string(),
                    duration_minutes: 300,
                    price_by_size: SizePricing {
                        small: dec!(899),
                        medium: dec!(1099),
                        large: dec!(1299),
                    },
                },
            ],
            addons: vec![
                addon("pet", "Pet Hair Removal", dec!(40)),
                addon("engine", "Engine Bay Detail", dec!(60)),
                addon("headlights", "Headlight Restoration", dec!(80)),
                addon("interior", "Leather Clean & Protect", dec!(70)),
            ],
            zones: vec![
                zone("A", "Zone A – within ~20km", dec!(25)),
                zone("B", "Zone B – 20–35km", dec!(45)),
                zone("C", "Zone C – 35–50km", dec!(65)),
            ],
            schedule: ScheduleConfig::default(),
        }
    }
}

fn addon(id: &str, name: &str, price: Decimal) -> AddonEntry {
    AddonEntry {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

fn zone(id: &str, label: &str, fee: Decimal) -> TravelZoneEntry {
    TravelZoneEntry {
        id: id.to_string(),
        label: label.to_string(),
        fee,
    }
}
