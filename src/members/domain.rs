use crate::core::domain::Identifiable;
use crate::core::library::MembershipTier;

pub mod model;

pub trait Member: Identifiable {
    fn name(&self) -> &str;
    fn tier(&self) -> MembershipTier;
    fn get_fee(&self) -> i64;
}
