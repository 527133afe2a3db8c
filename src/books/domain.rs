use crate::core::domain::Identifiable;
use crate::core::library::{Genre, LibraryResult};

pub mod model;

// Book abstracts a catalog entry that can be lent out and taken back.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn genre(&self) -> Genre;
    fn is_available(&self) -> bool;
    fn borrow(&mut self) -> LibraryResult<()>;
    fn return_book(&mut self, is_late: bool) -> LibraryResult<()>;
}
