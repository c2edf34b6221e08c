//! Subscription cancellation wizard.
//!
//! Three linear steps: pick a reason, look at retention offers, confirm.
//! The state machine is plain data so the page component only renders it
//! and forwards clicks.

use crate::models::SubscriptionStatus;
use crate::requests::CancelSubscriptionRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CancellationReason {
    TooExpensive,
    NotUsingEnough,
    TechnicalIssues,
    Other,
}

impl CancellationReason {
    pub const ALL: [CancellationReason; 4] = [
        CancellationReason::TooExpensive,
        CancellationReason::NotUsingEnough,
        CancellationReason::TechnicalIssues,
        CancellationReason::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CancellationReason::TooExpensive => "too-expensive",
            CancellationReason::NotUsingEnough => "not-using-enough",
            CancellationReason::TechnicalIssues => "technical-issues",
            CancellationReason::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CancellationReason::TooExpensive => "It's too expensive",
            CancellationReason::NotUsingEnough => "I'm not using it enough",
            CancellationReason::TechnicalIssues => "I ran into technical issues",
            CancellationReason::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Reason,
    Options,
    Confirm,
}

impl WizardStep {
    pub const COUNT: usize = 3;

    /// 1-based position for the step indicator.
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Reason => 1,
            WizardStep::Options => 2,
            WizardStep::Confirm => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Reason => "Why are you leaving?",
            WizardStep::Options => "Before you go",
            WizardStep::Confirm => "Confirm cancellation",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            WizardStep::Reason => Some(WizardStep::Options),
            WizardStep::Options => Some(WizardStep::Confirm),
            WizardStep::Confirm => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            WizardStep::Reason => None,
            WizardStep::Options => Some(WizardStep::Reason),
            WizardStep::Confirm => Some(WizardStep::Options),
        }
    }
}

/// Offers shown on the options step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionOffer {
    Pause,
    SwitchToAnnual,
}

/// What the page should do after an offer is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferOutcome {
    /// Show the message; the wizard stays where it is.
    Unavailable(String),
    GoToPricing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    NoReasonSelected,
    AtFirstStep,
    AtLastStep,
    NotAtConfirm,
    Submitting,
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::NoReasonSelected => write!(f, "Select a reason to continue"),
            WizardError::AtFirstStep => write!(f, "Already at the first step"),
            WizardError::AtLastStep => write!(f, "Already at the last step"),
            WizardError::NotAtConfirm => write!(f, "Cancellation can only be submitted from the confirm step"),
            WizardError::Submitting => write!(f, "A cancellation request is already in progress"),
        }
    }
}

impl std::error::Error for WizardError {}

/// Whether the wizard may render for a subscription status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEntry {
    Allowed,
    RedirectToPricing,
}

/// Entry guard run on mount: only active, trialing and past-due
/// subscriptions can be cancelled.
pub fn entry_for(status: Option<&SubscriptionStatus>) -> WizardEntry {
    match status {
        Some(s) if s.is_cancellable() => WizardEntry::Allowed,
        _ => WizardEntry::RedirectToPricing,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationWizard {
    step: WizardStep,
    reason: Option<CancellationReason>,
    submitting: bool,
    error: Option<String>,
    completed: bool,
}

impl Default for CancellationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Reason,
            reason: None,
            submitting: false,
            error: None,
            completed: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn reason(&self) -> Option<CancellationReason> {
        self.reason
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn select_reason(&mut self, reason: CancellationReason) {
        self.reason = Some(reason);
    }

    /// Whether the "Continue" control is enabled.
    pub fn can_continue(&self) -> bool {
        match self.step {
            WizardStep::Reason => self.reason.is_some(),
            WizardStep::Options => true,
            WizardStep::Confirm => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.submitting && self.step.prev().is_some()
    }

    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if self.step == WizardStep::Reason && self.reason.is_none() {
            return Err(WizardError::NoReasonSelected);
        }
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        if self.submitting {
            return Err(WizardError::Submitting);
        }
        let prev = self.step.prev().ok_or(WizardError::AtFirstStep)?;
        self.step = prev;
        self.error = None;
        Ok(prev)
    }

    pub fn choose_offer(&self, offer: RetentionOffer) -> OfferOutcome {
        match offer {
            RetentionOffer::Pause => OfferOutcome::Unavailable(
                "Pausing a subscription is not available yet.".to_string(),
            ),
            RetentionOffer::SwitchToAnnual => OfferOutcome::GoToPricing,
        }
    }

    /// Start the terminal request. Returns the body to send.
    pub fn begin_submit(&mut self) -> Result<CancelSubscriptionRequest, WizardError> {
        if self.step != WizardStep::Confirm {
            return Err(WizardError::NotAtConfirm);
        }
        if self.submitting {
            return Err(WizardError::Submitting);
        }
        let reason = self.reason.ok_or(WizardError::NoReasonSelected)?;
        self.submitting = true;
        self.error = None;
        Ok(CancelSubscriptionRequest { reason })
    }

    /// The request failed: show the message and stay on the confirm step.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.completed = true;
    }
}
