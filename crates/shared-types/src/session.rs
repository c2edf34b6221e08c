use crate::models::{AuthUser, Subscription, SubscriptionStatus, UserRole};

/// Snapshot of who is looking at the page.
///
/// Built once per render from the auth context and passed to pages as a
/// prop, so access decisions never reach for global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<AuthUser>,
    pub subscription_status: Option<SubscriptionStatus>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for a signed-in user. The status comes from the user record.
    pub fn for_user(user: AuthUser) -> Self {
        let subscription_status = user.subscription_status.clone();
        Self {
            user: Some(user),
            subscription_status,
        }
    }

    /// Prefer the live subscription status over the one cached on the user.
    pub fn with_subscription(mut self, subscription: Option<&Subscription>) -> Self {
        if let Some(sub) = subscription {
            self.subscription_status = Some(sub.status.clone());
        }
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.role == UserRole::Admin)
    }

    pub fn has_premium_access(&self) -> bool {
        self.is_authenticated()
            && self
                .subscription_status
                .as_ref()
                .is_some_and(SubscriptionStatus::grants_access)
    }

    pub fn can_cancel(&self) -> bool {
        self.is_authenticated()
            && self
                .subscription_status
                .as_ref()
                .is_some_and(SubscriptionStatus::is_cancellable)
    }

    pub fn tile_access(&self) -> TileAccess {
        if !self.is_authenticated() {
            TileAccess::Locked(LockReason::SignedOut)
        } else if self.has_premium_access() {
            TileAccess::Full
        } else {
            TileAccess::Locked(LockReason::NoSubscription)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    SignedOut,
    NoSubscription,
}

impl LockReason {
    /// Label of the overlay call to action.
    pub fn cta_label(&self) -> &'static str {
        match self {
            LockReason::SignedOut => "Log in",
            LockReason::NoSubscription => "View plans",
        }
    }
}

/// Paywall decision for premium tile content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAccess {
    Full,
    Locked(LockReason),
}

impl TileAccess {
    pub fn is_locked(&self) -> bool {
        matches!(self, TileAccess::Locked(_))
    }
}
