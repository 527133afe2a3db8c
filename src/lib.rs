pub mod core;
pub mod books;
pub mod members;
pub mod utils;

pub use crate::books::domain::Book;
pub use crate::books::domain::model::BookEntity;
pub use crate::core::domain::{Configuration, Identifiable};
pub use crate::core::library::{Genre, LibraryError, LibraryResult, MembershipTier};
pub use crate::members::domain::Member;
pub use crate::members::domain::model::MemberEntity;
