use crate::backend::BookingBackend;
use crate::error::BookingError;
use crate::slot_engine;
use crate::types::{Booking, DayAvailability, WeeklyAvailability};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use tracing::error;
use uuid::Uuid;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    availability: WeeklyAvailability,
    bookings: Vec<Booking>,
}

/// File-backed backend: the whole scheduler state is one JSON snapshot,
/// rewritten atomically after every mutation. The snapshot write happens
/// inside the same lock as the mutation, so the file always reflects a
/// state that respected the capacity invariant.
#[derive(Clone, Debug)]
pub struct FileBookings {
    path: Arc<PathBuf>,
    state: Arc<Mutex<Snapshot>>,
}

impl FileBookings {
    pub fn open(path: &Path) -> io::Result<Self> {
        let snapshot = match std::fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Snapshot::default(),
            Err(err) => return Err(err),
        };

        Ok(Self {
            path: Arc::new(path.to_path_buf()),
            state: Arc::new(Mutex::new(snapshot)),
        })
    }

    // Write-then-rename via a tempfile in the target directory, so a crash
    // mid-write leaves the previous snapshot intact.
    fn save(&self, snapshot: &Snapshot) {
        let directory = self.path.parent().unwrap_or_else(|| Path::new("."));

        let result = NamedTempFile::new_in(directory).and_then(|file| {
            serde_json::to_writer_pretty(&file, snapshot)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            file.persist(&*self.path)?;
            Ok(())
        });

        if let Err(err) = result {
            error!(?err, path = %self.path.display(), "failed to write booking snapshot");
        }
    }
}

impl BookingBackend for FileBookings {
    fn availability(&self) -> WeeklyAvailability {
        self.state.lock().unwrap().availability.clone()
    }

    fn update_day(&self, weekday: Weekday, day: DayAvailability) {
        let mut snapshot = self.state.lock().unwrap();
        snapshot.availability.set_day(weekday, day);
        self.save(&snapshot);
    }

    fn bookings(&self) -> Vec<Booking> {
        let mut bookings = self.state.lock().unwrap().bookings.clone();
        bookings.sort_unstable_by_key(|booking| booking.slot);
        bookings
    }

    fn admit(&self, booking: Booking, max_slots_per_time: u32) -> Result<Booking, BookingError> {
        let mut snapshot = self.state.lock().unwrap();
        if !slot_engine::is_slot_available(
            booking.slot.date(),
            booking.slot.time(),
            &snapshot.bookings,
            max_slots_per_time,
        ) {
            return Err(BookingError::SlotFull);
        }
        snapshot.bookings.push(booking.clone());
        self.save(&snapshot);
        Ok(booking)
    }

    fn cancel(&self, id: Uuid) -> Result<(), BookingError> {
        let mut snapshot = self.state.lock().unwrap();
        let before = snapshot.bookings.len();
        snapshot.bookings.retain(|booking| booking.id != id);
        if snapshot.bookings.len() == before {
            return Err(BookingError::NotFound);
        }
        self.save(&snapshot);
        Ok(())
    }
}
