//! Subscription packages offered on the pricing page.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require_text, PackageId, Timestamp, ValidationError};

/// Billing period unit of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationType {
    #[default]
    Monthly,
    Yearly,
}

impl DurationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationType::Monthly => "monthly",
            DurationType::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(DurationType::Monthly),
            "yearly" => Some(DurationType::Yearly),
            _ => None,
        }
    }
}

/// A subscription package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPackage {
    pub id: PackageId,
    pub name: String,
    pub description: String,
    /// Whole currency units.
    pub price: i64,
    pub duration: i32,
    pub duration_type: DurationType,
    pub features: Vec<String>,
    pub is_active: bool,
    pub is_recommended: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a package.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPackage {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub duration: i32,
    pub duration_type: DurationType,
    pub features: Vec<String>,
    pub is_recommended: bool,
}

/// Partial update for a package. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackagePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub duration: Option<i32>,
    pub duration_type: Option<DurationType>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_recommended: Option<bool>,
}

fn check_price(price: i64) -> Result<(), ValidationError> {
    if price < 0 {
        Err(ValidationError::invalid_format("price", "must not be negative"))
    } else {
        Ok(())
    }
}

impl SubscriptionPackage {
    /// Creates an active package. `isActive` is always forced on.
    pub fn create(input: NewPackage, now: Timestamp) -> Result<Self, ValidationError> {
        require_text("name", &input.name)?;
        check_price(input.price)?;
        Ok(Self {
            id: PackageId::new(),
            name: input.name.trim().to_string(),
            description: input.description,
            price: input.price,
            duration: input.duration,
            duration_type: input.duration_type,
            features: input.features,
            is_active: true,
            is_recommended: input.is_recommended,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a partial update and stamps `updated_at`.
    pub fn apply(&mut self, patch: PackagePatch, now: Timestamp) -> Result<(), ValidationError> {
        if let Some(name) = &patch.name {
            require_text("name", name)?;
        }
        if let Some(price) = patch.price {
            check_price(price)?;
        }

        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(duration_type) = patch.duration_type {
            self.duration_type = duration_type;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(active) = patch.is_active {
            self.is_active = active;
        }
        if let Some(recommended) = patch.is_recommended {
            self.is_recommended = recommended;
        }
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewPackage {
        NewPackage {
            name: "Pro".to_string(),
            description: "For growing teams".to_string(),
            price: 150_000,
            duration: 1,
            duration_type: DurationType::Monthly,
            features: vec!["Invoices".to_string()],
            is_recommended: true,
        }
    }

    #[test]
    fn create_forces_active_and_stamps_timestamps() {
        let now = Timestamp::now();
        let pkg = SubscriptionPackage::create(input(), now).unwrap();
        assert!(pkg.is_active);
        assert_eq!(pkg.created_at, now);
        assert_eq!(pkg.updated_at, now);
    }

    #[test]
    fn create_requires_name() {
        let mut bad = input();
        bad.name = "  ".to_string();
        assert_eq!(
            SubscriptionPackage::create(bad, Timestamp::now()),
            Err(ValidationError::empty_field("name"))
        );
    }

    #[test]
    fn create_rejects_negative_price() {
        let mut bad = input();
        bad.price = -1;
        assert!(SubscriptionPackage::create(bad, Timestamp::now()).is_err());
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let now = Timestamp::now();
        let mut pkg = SubscriptionPackage::create(input(), now).unwrap();
        let later = now.plus_secs(10);

        pkg.apply(
            PackagePatch {
                price: Some(200_000),
                is_active: Some(false),
                ..Default::default()
            },
            later,
        )
        .unwrap();

        assert_eq!(pkg.price, 200_000);
        assert!(!pkg.is_active);
        assert_eq!(pkg.name, "Pro");
        assert_eq!(pkg.features, vec!["Invoices".to_string()]);
        assert_eq!(pkg.updated_at, later);
        assert_eq!(pkg.created_at, now);
    }

    #[test]
    fn patch_deserializes_from_partial_json() {
        let patch: PackagePatch =
            serde_json::from_str(r#"{"durationType":"yearly","isRecommended":false}"#).unwrap();
        assert_eq!(patch.duration_type, Some(DurationType::Yearly));
        assert_eq!(patch.is_recommended, Some(false));
        assert!(patch.name.is_none());
    }

    #[test]
    fn package_serializes_camel_case() {
        let pkg = SubscriptionPackage::create(input(), Timestamp::now()).unwrap();
        let json = serde_json::to_value(&pkg).unwrap();
        assert_eq!(json["durationType"], "monthly");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["isRecommended"], true);
    }
}
