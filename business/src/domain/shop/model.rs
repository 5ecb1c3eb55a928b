use chrono::{DateTime, Utc};

use super::errors::ShopError;
use crate::domain::shared::value_objects::{ShopId, is_blank};

/// Descriptive fields supplied on registration or update.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopDetails {
    pub name: String,
    pub info: Option<String>,
    pub phone: String,
}

impl ShopDetails {
    /// Validates required fields and trims the uniqueness key.
    pub fn new(name: String, info: Option<String>, phone: String) -> Result<Self, ShopError> {
        if is_blank(&name) {
            return Err(ShopError::NameEmpty);
        }
        if is_blank(&phone) {
            return Err(ShopError::PhoneEmpty);
        }

        Ok(Self {
            name: name.trim().to_string(),
            info,
            phone: phone.trim().to_string(),
        })
    }
}

/// A shop that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewShop {
    pub details: ShopDetails,
    pub authentication_code: String,
}

#[derive(Debug, Clone)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub info: Option<String>,
    pub phone: String,
    pub authentication_code: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shop {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ShopId,
        name: String,
        info: Option<String>,
        phone: String,
        authentication_code: String,
        enabled: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            info,
            phone,
            authentication_code,
            enabled,
            created_at,
            updated_at,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Overwrites the descriptive fields. Identity and code are untouched.
    pub fn update(&mut self, details: ShopDetails) {
        self.name = details.name;
        self.info = details.info;
        self.phone = details.phone;
        self.updated_at = Utc::now();
    }

    /// Brings a soft-deleted shop back under the same id and code.
    pub fn reactivate(&mut self, details: ShopDetails) {
        self.update(details);
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_shop(enabled: bool) -> Shop {
        let created = Utc::now() - chrono::Duration::days(3);
        Shop::from_repository(
            ShopId::new(11),
            "Vintage Corner".to_string(),
            Some("Used denim".to_string()),
            "010-1234-5678".to_string(),
            "AB12CD34".to_string(),
            enabled,
            created,
            created,
        )
    }

    #[test]
    fn should_build_details_when_fields_present() {
        let details = ShopDetails::new(
            "  Vintage Corner ".to_string(),
            None,
            " 010-1234-5678".to_string(),
        )
        .unwrap();

        assert_eq!(details.name, "Vintage Corner");
        assert_eq!(details.phone, "010-1234-5678");
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = ShopDetails::new("  ".to_string(), None, "010".to_string());
        assert!(matches!(result.unwrap_err(), ShopError::NameEmpty));
    }

    #[test]
    fn should_reject_when_phone_empty() {
        let result = ShopDetails::new("Vintage Corner".to_string(), None, "".to_string());
        assert!(matches!(result.unwrap_err(), ShopError::PhoneEmpty));
    }

    #[test]
    fn should_keep_identity_when_reactivated() {
        let mut shop = stored_shop(false);
        let details = ShopDetails::new(
            "Vintage Corner".to_string(),
            Some("Reopened".to_string()),
            "010-1234-5678".to_string(),
        )
        .unwrap();

        shop.reactivate(details);

        assert!(shop.is_enabled());
        assert_eq!(shop.id, ShopId::new(11));
        assert_eq!(shop.authentication_code, "AB12CD34");
        assert_eq!(shop.info.as_deref(), Some("Reopened"));
        assert!(shop.updated_at > shop.created_at);
    }

    #[test]
    fn should_disable_shop() {
        let mut shop = stored_shop(true);
        shop.disable();
        assert!(!shop.is_enabled());
    }
}
