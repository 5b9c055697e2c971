//! Subscription transaction aggregate.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{TransactionAction, TransactionStatus};
use crate::domain::catalog::{PaymentMethod, SubscriptionPackage};
use crate::domain::foundation::{
    AuthenticatedUser, CompanyProfile, DomainError, ErrorCode, PackageId, PaymentMethodId,
    StateMachine, Timestamp, TransactionId, UserId,
};

pub const GUEST_USER_ID: &str = "guest";
pub const GUEST_EMAIL: &str = "guest@example.com";
pub const GUEST_NAME: &str = "Guest User";

/// A purchase of a package through a payment method.
///
/// Package and payment method names are snapshotted at checkout; the
/// referenced documents may later change or disappear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionTransaction {
    pub id: TransactionId,
    /// `None` for guest checkouts; serialized as `"guest"`.
    #[serde(with = "guest_or_user")]
    pub user_id: Option<UserId>,
    pub user_email: String,
    pub user_name: String,
    pub package_id: PackageId,
    pub package_name: String,
    pub amount: i64,
    pub payment_method_id: PaymentMethodId,
    pub payment_method_name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payment_proof: Option<String>,
    #[serde(rename = "companyData", skip_serializing_if = "Option::is_none", default)]
    pub company: Option<CompanyProfile>,
    pub status: TransactionStatus,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub completed_at: Option<Timestamp>,
}

/// What an admin action did to a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub previous: TransactionStatus,
    pub current: TransactionStatus,
}

impl StatusChange {
    /// True when a settled transaction was rewritten.
    pub fn overwrote_terminal(&self) -> bool {
        !self.previous.can_transition_to(&self.current)
    }
}

impl SubscriptionTransaction {
    /// Opens a pending transaction for `package` paid with `method`.
    ///
    /// The company profile falls back to the buyer's session profile.
    pub fn checkout(
        buyer: Option<&AuthenticatedUser>,
        package: &SubscriptionPackage,
        method: &PaymentMethod,
        company: Option<CompanyProfile>,
        now: Timestamp,
    ) -> Result<Self, DomainError> {
        if !method.is_active {
            return Err(DomainError::new(
                ErrorCode::PaymentMethodInactive,
                "Payment method is not active",
            )
            .with_detail("payment_method_id", method.id.to_string()));
        }

        let company = company
            .filter(|c| !c.is_blank())
            .or_else(|| buyer.and_then(|b| b.company.clone()));

        Ok(Self {
            id: TransactionId::new(),
            user_id: buyer.map(|b| b.id),
            user_email: buyer.map_or_else(|| GUEST_EMAIL.to_string(), |b| b.email.clone()),
            user_name: buyer.map_or_else(|| GUEST_NAME.to_string(), |b| b.name.clone()),
            package_id: package.id,
            package_name: package.name.clone(),
            amount: package.price,
            payment_method_id: method.id,
            payment_method_name: method.name.clone(),
            payment_proof: None,
            company,
            status: TransactionStatus::Pending,
            created_at: now,
            completed_at: None,
        })
    }

    pub fn is_guest(&self) -> bool {
        self.user_id.is_none()
    }

    /// Applies an admin action. Always writes: a settled transaction is
    /// overwritten and the returned change reports it.
    pub fn apply(&mut self, action: TransactionAction, now: Timestamp) -> StatusChange {
        let previous = self.status;
        self.status = action.target_status();
        self.completed_at = Some(now);
        StatusChange {
            previous,
            current: self.status,
        }
    }

    /// Guest transactions are readable by anyone holding the id; others
    /// only by their owner or an admin.
    pub fn is_visible_to(&self, viewer: Option<&AuthenticatedUser>) -> bool {
        match (self.user_id, viewer) {
            (None, _) => true,
            (Some(owner), Some(viewer)) => viewer.can_act_for(&owner),
            (Some(_), None) => false,
        }
    }
}

mod guest_or_user {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<UserId>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => s.collect_str(id),
            None => s.serialize_str(GUEST_USER_ID),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<UserId>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw == GUEST_USER_ID {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{FeeType, NewPackage, NewPaymentMethod};
    use crate::domain::foundation::Role;

    fn package() -> SubscriptionPackage {
        SubscriptionPackage::create(
            NewPackage {
                name: "Starter".to_string(),
                price: 99_000,
                duration: 1,
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    fn method() -> PaymentMethod {
        PaymentMethod::create(
            NewPaymentMethod {
                name: "QRIS".to_string(),
                fee: 1.0,
                fee_type: FeeType::Percentage,
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap()
    }

    fn member() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(), "m@example.com", "Member", Role::Member)
    }

    fn guest_checkout() -> SubscriptionTransaction {
        SubscriptionTransaction::checkout(None, &package(), &method(), None, Timestamp::now())
            .unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Checkout
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn guest_checkout_uses_placeholder_identity() {
        let tx = guest_checkout();
        assert!(tx.is_guest());
        assert_eq!(tx.user_email, GUEST_EMAIL);
        assert_eq!(tx.user_name, GUEST_NAME);
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.amount, 99_000);
        assert!(tx.completed_at.is_none());
    }

    #[test]
    fn member_checkout_records_buyer_and_session_company() {
        let company = CompanyProfile {
            company_name: "Acme".to_string(),
            ..Default::default()
        };
        let buyer = member().with_company(company.clone());
        let tx = SubscriptionTransaction::checkout(
            Some(&buyer),
            &package(),
            &method(),
            None,
            Timestamp::now(),
        )
        .unwrap();

        assert_eq!(tx.user_id, Some(buyer.id));
        assert_eq!(tx.user_email, "m@example.com");
        assert_eq!(tx.company, Some(company));
    }

    #[test]
    fn explicit_company_overrides_session_company() {
        let buyer = member().with_company(CompanyProfile {
            company_name: "Old".to_string(),
            ..Default::default()
        });
        let fresh = CompanyProfile {
            company_name: "New".to_string(),
            ..Default::default()
        };
        let tx = SubscriptionTransaction::checkout(
            Some(&buyer),
            &package(),
            &method(),
            Some(fresh.clone()),
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(tx.company, Some(fresh));
    }

    #[test]
    fn inactive_payment_method_is_refused() {
        let mut m = method();
        m.is_active = false;
        let err = SubscriptionTransaction::checkout(None, &package(), &m, None, Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PaymentMethodInactive);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Admin actions
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn confirm_completes_pending_transaction() {
        let mut tx = guest_checkout();
        let now = Timestamp::now();
        let change = tx.apply(TransactionAction::Confirm, now);

        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.completed_at, Some(now));
        assert!(!change.overwrote_terminal());
    }

    #[test]
    fn reject_fails_pending_transaction() {
        let mut tx = guest_checkout();
        tx.apply(TransactionAction::Reject, Timestamp::now());
        assert_eq!(tx.status, TransactionStatus::Failed);
    }

    #[test]
    fn action_on_settled_transaction_still_overwrites() {
        let mut tx = guest_checkout();
        tx.apply(TransactionAction::Confirm, Timestamp::now());

        let later = Timestamp::now().plus_secs(5);
        let change = tx.apply(TransactionAction::Reject, later);

        assert_eq!(tx.status, TransactionStatus::Failed);
        assert_eq!(tx.completed_at, Some(later));
        assert_eq!(change.previous, TransactionStatus::Completed);
        assert!(change.overwrote_terminal());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Visibility & serialization
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn guest_transactions_are_visible_to_anyone() {
        let tx = guest_checkout();
        assert!(tx.is_visible_to(None));
        assert!(tx.is_visible_to(Some(&member())));
    }

    #[test]
    fn owned_transactions_are_private() {
        let owner = member();
        let tx = SubscriptionTransaction::checkout(
            Some(&owner),
            &package(),
            &method(),
            None,
            Timestamp::now(),
        )
        .unwrap();
        let admin = AuthenticatedUser::new(UserId::new(), "a@example.com", "A", Role::Admin);

        assert!(tx.is_visible_to(Some(&owner)));
        assert!(tx.is_visible_to(Some(&admin)));
        assert!(!tx.is_visible_to(Some(&member())));
        assert!(!tx.is_visible_to(None));
    }

    #[test]
    fn guest_user_id_serializes_as_guest() {
        let tx = guest_checkout();
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["userId"], "guest");
        assert_eq!(json["status"], "pending");

        let back: SubscriptionTransaction = serde_json::from_value(json).unwrap();
        assert!(back.is_guest());
    }
}
