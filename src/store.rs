//! Booking collection storage.
//!
//! Bookings are kept in insertion order. When a file path is configured the
//! whole collection is rewritten after every change; there is no partial
//! update format.

use std::path::{Path, PathBuf};

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::booking::Booking;

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Booking {0} not found")]
    NotFound(Uuid),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Shared booking collection with optional JSON file persistence
#[derive(Debug)]
pub struct BookingStore {
    bookings: RwLock<Vec<Booking>>,
    path: Option<PathBuf>,
}

impl BookingStore {
    /// Memory-only store, starting empty
    pub fn in_memory() -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
            path: None,
        }
    }

    /// File-backed store. A missing or unreadable file starts an empty
    /// collection; the file is created on the first write.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let bookings = match load_bookings(&path).await {
            Ok(bookings) => {
                info!("Loaded {} bookings from {}", bookings.len(), path.display());
                bookings
            }
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No booking file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to load bookings from {}: {}. Starting empty", path.display(), e);
                Vec::new()
            }
        };

        Self {
            bookings: RwLock::new(bookings),
            path: Some(path),
        }
    }

    /// Copy of the current collection, in insertion order
    pub async fn snapshot(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Booking> {
        self.bookings.read().await.iter().find(|b| b.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }

    /// Build a booking from the current collection and append it.
    ///
    /// The write lock is held from `build` until the collection is stored, so
    /// concurrent submissions are checked against each other.
    pub async fn insert_with<F, E>(&self, build: F) -> Result<Booking, E>
    where
        F: FnOnce(&[Booking]) -> Result<Booking, E>,
        E: From<StoreError>,
    {
        let mut guard = self.bookings.write().await;
        let booking = build(&guard)?;

        let mut next = guard.clone();
        next.push(booking.clone());
        self.persist(&next).await?;
        *guard = next;

        info!("Stored booking {} for {} {}", booking.id, booking.date(), booking.time());
        Ok(booking)
    }

    /// Flip the paid flag and return the updated booking
    pub async fn toggle_paid(&self, id: Uuid) -> Result<Booking, StoreError> {
        let mut guard = self.bookings.write().await;

        let mut next = guard.clone();
        let booking = next
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        booking.paid = !booking.paid;
        let updated = booking.clone();

        self.persist(&next).await?;
        *guard = next;

        info!("Booking {} marked {}", id, if updated.paid { "paid" } else { "unpaid" });
        Ok(updated)
    }

    /// Delete a booking and return it
    pub async fn remove(&self, id: Uuid) -> Result<Booking, StoreError> {
        let mut guard = self.bookings.write().await;

        let index = guard
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let mut next = guard.clone();
        let removed = next.remove(index);

        self.persist(&next).await?;
        *guard = next;

        info!("Booking {} deleted", id);
        Ok(removed)
    }

    async fn persist(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        match &self.path {
            Some(path) => save_bookings(path, bookings).await,
            None => Ok(()),
        }
    }
}

/// Read a persisted booking collection
pub async fn load_bookings(path: &Path) -> Result<Vec<Booking>, StoreError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Replace the persisted collection. Writes a sibling temp file and renames
/// it over the target.
pub async fn save_bookings(path: &Path, bookings: &[Booking]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(bookings)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
