use chrono::{DateTime, Utc};

use super::errors::FavoriteError;
use crate::domain::shared::value_objects::{ProductId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FavoriteListId(i64);

impl FavoriteListId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Composite identity: at most one marker per (list, product) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FavoriteMarkerId {
    pub favorite_list_id: FavoriteListId,
    pub product_id: ProductId,
}

#[derive(Debug, Clone)]
pub struct FavoriteMarker {
    pub id: FavoriteMarkerId,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoriteMarker {
    fn new(id: FavoriteMarkerId) -> Self {
        let now = Utc::now();
        Self {
            id,
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: FavoriteMarkerId,
        enabled: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            enabled,
            created_at,
            updated_at,
        }
    }

    fn enable(&mut self) {
        self.enabled = true;
        self.updated_at = Utc::now();
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.updated_at = Utc::now();
    }
}

/// A user's favorites. Markers are never removed, only disabled.
#[derive(Debug, Clone)]
pub struct FavoriteList {
    pub id: FavoriteListId,
    pub user_id: UserId,
    pub markers: Vec<FavoriteMarker>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoriteList {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: FavoriteListId,
        user_id: UserId,
        markers: Vec<FavoriteMarker>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            markers,
            created_at,
            updated_at,
        }
    }

    fn marker_id(&self, product_id: ProductId) -> FavoriteMarkerId {
        FavoriteMarkerId {
            favorite_list_id: self.id,
            product_id,
        }
    }

    // Linear scan; a user's favorites stay small.
    fn find_marker_mut(&mut self, product_id: ProductId) -> Option<&mut FavoriteMarker> {
        let id = self.marker_id(product_id);
        self.markers.iter_mut().find(|marker| marker.id == id)
    }

    /// Re-enables an existing marker for the product, or appends a new one.
    pub fn add_product(&mut self, product_id: ProductId) {
        match self.find_marker_mut(product_id) {
            Some(marker) => marker.enable(),
            None => {
                let id = self.marker_id(product_id);
                self.markers.push(FavoriteMarker::new(id));
            }
        }
    }

    /// Disables the product's marker. A product never favorited is `NotFound`.
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<(), FavoriteError> {
        let marker = self
            .find_marker_mut(product_id)
            .ok_or(FavoriteError::NotFound)?;
        marker.disable();
        Ok(())
    }

    pub fn is_favorited(&self, product_id: ProductId) -> bool {
        let id = self.marker_id(product_id);
        self.markers
            .iter()
            .any(|marker| marker.enabled && marker.id == id)
    }

    pub fn favorited_product_ids(&self) -> Vec<ProductId> {
        self.markers
            .iter()
            .filter(|marker| marker.enabled)
            .map(|marker| marker.id.product_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn empty_list() -> FavoriteList {
        let now = Utc::now();
        FavoriteList::from_repository(
            FavoriteListId::new(5),
            UserId::new(1),
            Vec::new(),
            now,
            now,
        )
    }

    #[test]
    fn should_append_enabled_marker_on_first_add() {
        let mut list = empty_list();

        list.add_product(ProductId::new(10));

        assert_eq!(list.markers.len(), 1);
        assert!(list.markers[0].enabled);
        assert_eq!(list.markers[0].id.favorite_list_id, FavoriteListId::new(5));
        assert!(list.is_favorited(ProductId::new(10)));
    }

    #[test]
    fn should_keep_single_marker_when_added_twice() {
        let mut list = empty_list();

        list.add_product(ProductId::new(10));
        list.add_product(ProductId::new(10));

        assert_eq!(list.markers.len(), 1);
        assert!(list.markers[0].enabled);
    }

    #[test]
    fn should_reenable_disabled_marker_instead_of_appending() {
        let mut list = empty_list();
        list.add_product(ProductId::new(10));
        list.remove_product(ProductId::new(10)).unwrap();
        assert!(!list.is_favorited(ProductId::new(10)));

        list.add_product(ProductId::new(10));

        assert_eq!(list.markers.len(), 1);
        assert!(list.is_favorited(ProductId::new(10)));
    }

    #[test]
    fn should_fail_when_removing_product_never_favorited() {
        let mut list = empty_list();
        list.add_product(ProductId::new(10));

        let result = list.remove_product(ProductId::new(11));

        assert!(matches!(result.unwrap_err(), FavoriteError::NotFound));
        assert!(list.is_favorited(ProductId::new(10)));
    }

    #[test]
    fn should_ignore_markers_of_another_list() {
        let mut list = empty_list();
        let now = Utc::now();
        list.markers.push(FavoriteMarker::from_repository(
            FavoriteMarkerId {
                favorite_list_id: FavoriteListId::new(99),
                product_id: ProductId::new(10),
            },
            true,
            now,
            now,
        ));

        assert!(!list.is_favorited(ProductId::new(10)));
        list.add_product(ProductId::new(10));
        assert_eq!(list.markers.len(), 2);
    }

    #[test]
    fn should_list_only_enabled_products() {
        let mut list = empty_list();
        list.add_product(ProductId::new(1));
        list.add_product(ProductId::new(2));
        list.remove_product(ProductId::new(1)).unwrap();

        assert_eq!(list.favorited_product_ids(), vec![ProductId::new(2)]);
    }

    proptest! {
        #[test]
        fn should_never_hold_duplicate_markers(
            ops in prop::collection::vec((any::<bool>(), 0i64..8), 0..64)
        ) {
            let mut list = empty_list();
            let mut expected: HashSet<i64> = HashSet::new();
            let mut seen: HashSet<i64> = HashSet::new();

            for (add, product) in ops {
                let product_id = ProductId::new(product);
                if add {
                    list.add_product(product_id);
                    expected.insert(product);
                    seen.insert(product);
                } else {
                    let result = list.remove_product(product_id);
                    prop_assert_eq!(result.is_ok(), seen.contains(&product));
                    expected.remove(&product);
                }
            }

            let ids: HashSet<_> = list.markers.iter().map(|m| m.id).collect();
            prop_assert_eq!(ids.len(), list.markers.len());
            prop_assert_eq!(list.markers.len(), seen.len());
            for product in 0i64..8 {
                prop_assert_eq!(
                    list.is_favorited(ProductId::new(product)),
                    expected.contains(&product)
                );
            }
        }
    }
}
