use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::{ShopId, UserId};

/// Authorization link: the user may manage this shop and its products.
#[derive(Debug, Clone)]
pub struct Seller {
    pub user_id: UserId,
    pub shop_id: ShopId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Seller {
    pub fn new(user_id: UserId, shop_id: ShopId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            shop_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        shop_id: ShopId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            shop_id,
            created_at,
            updated_at,
        }
    }

    pub fn matches_shop(&self, shop_id: ShopId) -> bool {
        self.shop_id == shop_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_match_own_shop_only() {
        let seller = Seller::new(UserId::new(1), ShopId::new(10));

        assert!(seller.matches_shop(ShopId::new(10)));
        assert!(!seller.matches_shop(ShopId::new(11)));
    }
}
