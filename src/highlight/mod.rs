pub mod handle;

use chrono::Utc;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

pub use vis_portal_shared::highlight::*;

use crate::Error;

/// The static instance of highlights.
pub static INSTANCE: Lazy<HighlightManager> = Lazy::new(HighlightManager::new);

pub struct HighlightManager {
    pub highlights: RwLock<Vec<RwLock<Highlight>>>,
}

impl HighlightManager {
    /// Read and create a highlight manager from `./data/highlights`.
    fn new() -> Self {
        #[cfg(not(test))]
        {
            use std::fs::{self, File};
            use std::io::Read;

            let _ = fs::create_dir_all("./data/highlights");

            let mut vec = Vec::new();
            for entry in fs::read_dir("./data/highlights")
                .into_iter()
                .flatten()
                .flatten()
            {
                if let Ok(highlight) = toml::from_str::<Highlight>(&{
                    let mut string = String::new();
                    let _ = File::open(entry.path())
                        .and_then(|mut file| file.read_to_string(&mut string));
                    string
                }) {
                    vec.push(RwLock::new(highlight));
                }
            }

            Self {
                highlights: RwLock::new(vec),
            }
        }

        #[cfg(test)]
        Self {
            highlights: RwLock::new(Vec::new()),
        }
    }

    pub fn insert(
        &self,
        descriptor: handle::HighlightDescriptor,
        created_by: &str,
    ) -> Highlight {
        let mut highlights = self.highlights.write();

        let now = Utc::now();
        let highlight = Highlight {
            id: highlights.iter().map(|h| h.read().id).max().unwrap_or(0) + 1,
            date: descriptor.date,
            title: descriptor.title,
            description: descriptor.description,
            created_by: Some(created_by.to_string()),
            created_at: now,
            updated_at: now,
        };

        save_highlight(&highlight);
        highlights.push(RwLock::new(highlight.clone()));
        highlight
    }

    /// Merge provided fields into an existing entry.
    pub fn edit(
        &self,
        id: i32,
        descriptor: handle::EditHighlightDescriptor,
    ) -> Result<Highlight, Error> {
        let highlights = self.highlights.read();
        let lock = highlights
            .iter()
            .find(|h| h.read().id == id)
            .ok_or(Error::HighlightNotFound)?;

        let mut highlight = lock.write();
        if let Some(date) = descriptor.date {
            highlight.date = date;
        }
        if let Some(title) = descriptor.title {
            highlight.title = title;
        }
        if let Some(description) = descriptor.description {
            highlight.description = description;
        }
        highlight.updated_at = Utc::now();
        save_highlight(&highlight);
        Ok(highlight.clone())
    }

    pub fn remove(&self, id: i32) -> Result<(), Error> {
        let mut highlights = self.highlights.write();
        let index = highlights
            .iter()
            .position(|h| h.read().id == id)
            .ok_or(Error::HighlightNotFound)?;

        highlights.remove(index);
        remove_highlight(id);
        Ok(())
    }

    /// All entries, newest date first.
    pub fn all(&self) -> Vec<Highlight> {
        let mut highlights: Vec<_> = self
            .highlights
            .read()
            .iter()
            .map(|h| h.read().clone())
            .collect();
        highlights.sort_by(|a, b| b.date.cmp(&a.date));
        highlights
    }

    /// Push a highlight to this instance, only for testing.
    #[cfg(test)]
    pub fn push(&self, highlight: Highlight) {
        self.highlights.write().push(RwLock::new(highlight));
    }

    #[cfg(test)]
    pub fn reset(&self) {
        self.highlights.write().clear();
    }
}

/// Persist a highlight.
pub(crate) fn save_highlight(_highlight: &Highlight) {
    #[cfg(not(test))]
    {
        let this = _highlight.clone();

        tokio::spawn(async move {
            use tokio::io::AsyncWriteExt;

            if let Ok(mut file) =
                tokio::fs::File::create(format!("./data/highlights/{}.toml", this.id)).await
            {
                let _ = file
                    .write_all(toml::to_string(&this).unwrap_or_default().as_bytes())
                    .await;
            }
        });
    }
}

pub(crate) fn remove_highlight(_id: i32) {
    #[cfg(not(test))]
    {
        tokio::spawn(async move {
            let _ = tokio::fs::remove_file(format!("./data/highlights/{}.toml", _id)).await;
        });
    }
}
