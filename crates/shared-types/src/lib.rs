pub mod error;
pub mod config;

// Account / billing wire types
pub mod models;
pub mod requests;
pub mod session;
pub mod profile;
pub mod cancellation;

// Shariah tile domain
pub mod shariah;
pub mod compliance;
pub mod slug;
pub mod tile_form;

pub mod format;

pub use error::*;
pub use config::*;
pub use models::*;
pub use requests::*;
pub use session::*;
pub use shariah::*;

// Logic modules are NOT glob re-exported; the common entry points are
// listed here and everything else is reached through its module path.
pub use cancellation::{CancellationReason, CancellationWizard, WizardStep};
pub use compliance::{evaluate_metric, parse_numeric_value, MetricOutcome};
pub use profile::{check_avatar, AvatarRejection, ProfileForm};
pub use slug::slugify;
pub use tile_form::{validate_tile_form, FieldErrors, MetricDraft, TileForm};
