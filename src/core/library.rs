use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    // borrow was attempted on a book that is already on loan
    BookNotAvailable {
        message: String,
    },
    // the return was late and has been rejected, the book stays on loan
    LateReturn {
        message: String,
    },
    // tier input does not name one of the membership tiers
    InvalidMembership {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn book_not_available(message: &str) -> LibraryError {
        LibraryError::BookNotAvailable { message: message.to_string() }
    }

    pub fn late_return(message: &str) -> LibraryError {
        LibraryError::LateReturn { message: message.to_string() }
    }

    pub fn invalid_membership(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidMembership { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::BookNotAvailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::LateReturn { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidMembership { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Genre {
    Fiction = 1,
    NonFiction = 2,
    Science = 3,
    History = 4,
    Biography = 5,
}

impl Genre {
    // numeric catalog code, 1 through 5 in declaration order
    pub fn code(&self) -> i64 {
        *self as i64
    }
}

impl TryFrom<String> for Genre {
    type Error = LibraryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "Fiction" => Ok(Genre::Fiction),
            "NonFiction" => Ok(Genre::NonFiction),
            "Science" => Ok(Genre::Science),
            "History" => Ok(Genre::History),
            "Biography" => Ok(Genre::Biography),
            _ => Err(LibraryError::validation(
                format!("unknown genre {}", s).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Genre::Fiction => write!(f, "Fiction"),
            Genre::NonFiction => write!(f, "NonFiction"),
            Genre::Science => write!(f, "Science"),
            Genre::History => write!(f, "History"),
            Genre::Biography => write!(f, "Biography"),
        }
    }
}

// MembershipTier defines the closed set of member tiers, each one carrying its dues.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum MembershipTier {
    Basic,
    Premium,
    Gold,
}

impl MembershipTier {
    pub fn fee(&self) -> i64 {
        match self {
            MembershipTier::Basic => 100,
            MembershipTier::Premium => 200,
            MembershipTier::Gold => 500,
        }
    }
}

impl TryFrom<i64> for MembershipTier {
    type Error = LibraryError;

    fn try_from(fee: i64) -> Result<Self, Self::Error> {
        match fee {
            100 => Ok(MembershipTier::Basic),
            200 => Ok(MembershipTier::Premium),
            500 => Ok(MembershipTier::Gold),
            _ => Err(LibraryError::invalid_membership(
                format!("no membership tier with fee {}", fee).as_str(), Some("400".to_string()))),
        }
    }
}

impl TryFrom<&str> for MembershipTier {
    type Error = LibraryError;

    // accepts either a tier name or its fee value
    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let raw = raw.trim();
        if let Ok(fee) = raw.parse::<i64>() {
            return MembershipTier::try_from(fee);
        }
        match raw.to_ascii_lowercase().as_str() {
            "basic" => Ok(MembershipTier::Basic),
            "premium" => Ok(MembershipTier::Premium),
            "gold" => Ok(MembershipTier::Gold),
            _ => Err(LibraryError::invalid_membership(
                format!("unknown membership tier {:?}", raw).as_str(), Some("400".to_string()))),
        }
    }
}

impl Display for MembershipTier {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MembershipTier::Basic => write!(f, "Basic"),
            MembershipTier::Premium => write!(f, "Premium"),
            MembershipTier::Gold => write!(f, "Gold"),
        }
    }
}
