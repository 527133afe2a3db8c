use chrono::{NaiveDateTime, Utc};
use tracing::debug;
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{Genre, LibraryError, LibraryResult};
use crate::utils::date::serializer;

// BookEntity abstracts a single physical copy in the catalog. `available` is true
// exactly when the copy has no outstanding loan.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub genre: Genre,
    pub available: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, genre: Genre, is_available: bool) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            genre,
            available: is_available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    fn transition(&mut self, available: bool) {
        self.available = available;
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn genre(&self) -> Genre {
        self.genre
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn borrow(&mut self) -> LibraryResult<()> {
        if !self.available {
            return Err(LibraryError::book_not_available(
                format!("book {} is not available", self.book_id).as_str()));
        }
        self.transition(false);
        debug!(book_id = %self.book_id, title = %self.title, version = self.version, "book borrowed");
        Ok(())
    }

    // A late return is rejected outright and the copy stays on loan.
    // TODO: confirm with the product owner whether late returns should still restore availability.
    fn return_book(&mut self, is_late: bool) -> LibraryResult<()> {
        if is_late {
            return Err(LibraryError::late_return(
                format!("book {} returned late", self.book_id).as_str()));
        }
        self.transition(true);
        debug!(book_id = %self.book_id, title = %self.title, version = self.version, "book returned");
        Ok(())
    }
}
