use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryResult, MembershipTier};
use crate::members::domain::Member;
use crate::utils::date::serializer;

// MemberEntity abstracts a library member. Name and tier are fixed once built.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MemberEntity {
    pub member_id: String,
    pub name: String,
    pub membership_tier: MembershipTier,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl MemberEntity {
    pub fn new(name: &str, membership_tier: MembershipTier) -> Self {
        Self {
            member_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            membership_tier,
            created_at: Utc::now().naive_utc(),
        }
    }

    // builds a member from untyped tier input, either a tier name or its fee value
    pub fn from_raw_tier(name: &str, raw_tier: &str) -> LibraryResult<Self> {
        let tier = MembershipTier::try_from(raw_tier)?;
        Ok(Self::new(name, tier))
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> String {
        self.member_id.to_string()
    }

    fn version(&self) -> i64 {
        0
    }
}

impl Member for MemberEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn tier(&self) -> MembershipTier {
        self.membership_tier
    }

    fn get_fee(&self) -> i64 {
        self.membership_tier.fee()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LibraryError, MembershipTier};
    use crate::members::domain::Member;
    use crate::members::domain::model::MemberEntity;

    #[tokio::test]
    async fn test_should_build_member() {
        let member = MemberEntity::new("Alice", MembershipTier::Gold);
        assert_eq!("Alice", member.name());
        assert_eq!(MembershipTier::Gold, member.tier());
        assert_eq!(500, member.get_fee());
    }

    #[tokio::test]
    async fn test_should_get_fee_for_each_tier() {
        let fees = vec![
            (MembershipTier::Basic, 100),
            (MembershipTier::Premium, 200),
            (MembershipTier::Gold, 500),
        ];
        for (tier, fee) in fees {
            assert_eq!(fee, MemberEntity::new("Bob", tier).get_fee());
        }
    }

    #[tokio::test]
    async fn test_should_build_member_from_raw_tier() {
        let member = MemberEntity::from_raw_tier("Carol", "200").expect("should resolve fee");
        assert_eq!(MembershipTier::Premium, member.tier());
        let member = MemberEntity::from_raw_tier("Carol", "basic").expect("should resolve name");
        assert_eq!(100, member.get_fee());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_raw_tier() {
        for raw in ["0", "300", "Platinum"] {
            let res = MemberEntity::from_raw_tier("Dave", raw);
            assert!(matches!(res, Err(LibraryError::InvalidMembership{ .. })));
        }
    }

    #[tokio::test]
    async fn test_should_reject_unknown_tier_in_json() {
        let member = MemberEntity::new("Erin", MembershipTier::Basic);
        let mut json = serde_json::to_value(&member).expect("should serialize");
        assert_eq!("Basic", json["membership_tier"]);
        json["membership_tier"] = serde_json::Value::from("Platinum");
        let res = serde_json::from_value::<MemberEntity>(json).map_err(LibraryError::from);
        assert!(matches!(res, Err(LibraryError::Serialization{ .. })));
    }
}
