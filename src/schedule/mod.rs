pub mod handle;

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

pub use vis_portal_shared::schedule::*;

use crate::Error;

/// The static instance of calendar events.
pub static INSTANCE: Lazy<ScheduleManager> = Lazy::new(ScheduleManager::new);

pub struct ScheduleManager {
    pub events: RwLock<Vec<RwLock<ScheduleEvent>>>,
}

impl ScheduleManager {
    /// Read and create a schedule manager from `./data/schedule`.
    fn new() -> Self {
        #[cfg(not(test))]
        {
            use std::fs::{self, File};
            use std::io::Read;

            let _ = fs::create_dir_all("./data/schedule");

            let mut vec = Vec::new();
            for entry in fs::read_dir("./data/schedule")
                .into_iter()
                .flatten()
                .flatten()
            {
                if let Ok(event) = toml::from_str::<ScheduleEvent>(&{
                    let mut string = String::new();
                    let _ = File::open(entry.path())
                        .and_then(|mut file| file.read_to_string(&mut string));
                    string
                }) {
                    vec.push(RwLock::new(event));
                }
            }

            Self {
                events: RwLock::new(vec),
            }
        }

        #[cfg(test)]
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    pub fn insert(&self, descriptor: handle::ScheduleDescriptor, created_by: &str) -> ScheduleEvent {
        let mut events = self.events.write();

        let now = Utc::now();
        let event = ScheduleEvent {
            id: events.iter().map(|e| e.read().id).max().unwrap_or(0) + 1,
            date: descriptor.date,
            time: descriptor.time,
            title: descriptor.title,
            description: descriptor.description,
            location: descriptor.location,
            created_by: Some(created_by.to_string()),
            created_at: now,
            updated_at: now,
        };

        save_event(&event);
        events.push(RwLock::new(event.clone()));
        event
    }

    /// Merge provided fields into an existing event.
    pub fn edit(
        &self,
        id: i32,
        descriptor: handle::EditScheduleDescriptor,
    ) -> Result<ScheduleEvent, Error> {
        let events = self.events.read();
        let lock = events
            .iter()
            .find(|e| e.read().id == id)
            .ok_or(Error::EventNotFound)?;

        let mut event = lock.write();
        if let Some(date) = descriptor.date {
            event.date = date;
        }
        if let Some(time) = descriptor.time {
            event.time = time;
        }
        if let Some(title) = descriptor.title {
            event.title = title;
        }
        if let Some(description) = descriptor.description {
            event.description = Some(description);
        }
        if let Some(location) = descriptor.location {
            event.location = Some(location);
        }
        event.updated_at = Utc::now();
        save_event(&event);
        Ok(event.clone())
    }

    pub fn remove(&self, id: i32) -> Result<(), Error> {
        let mut events = self.events.write();
        let index = events
            .iter()
            .position(|e| e.read().id == id)
            .ok_or(Error::EventNotFound)?;

        events.remove(index);
        remove_event(id);
        Ok(())
    }

    /// All events, soonest first: date ascending, then time.
    pub fn all(&self) -> Vec<ScheduleEvent> {
        let mut events: Vec<_> = self.events.read().iter().map(|e| e.read().clone()).collect();
        events.sort_by_key(|e| (e.date, e.time));
        events
    }

    /// Events on one date, time ascending.
    pub fn on_date(&self, date: NaiveDate) -> Vec<ScheduleEvent> {
        let mut events: Vec<_> = self
            .events
            .read()
            .iter()
            .map(|e| e.read().clone())
            .filter(|e| e.date == date)
            .collect();
        events.sort_by_key(|e| e.time);
        events
    }

    /// Push an event to this instance, only for testing.
    #[cfg(test)]
    pub fn push(&self, event: ScheduleEvent) {
        self.events.write().push(RwLock::new(event));
    }

    #[cfg(test)]
    pub fn reset(&self) {
        self.events.write().clear();
    }
}

/// Persist a calendar event.
pub(crate) fn save_event(_event: &ScheduleEvent) {
    #[cfg(not(test))]
    {
        let this = _event.clone();

        tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;

            if let Ok(mut file) =
                tokio::fs::File::create(format!("./data/schedule/{}.toml", this.id)).await
            {
                let _ = file
                    .write_all(toml::to_string(&this).unwrap_or_default().as_bytes())
                    .await;
            }
        });
    }
}

pub(crate) fn remove_event(_id: i32) {
    #[cfg(not(test))]
    {
        tokio::spawn(async move {
            let _ = tokio::fs::remove_file(format!("./data/schedule/{}.toml", _id)).await;
        });
    }
}
