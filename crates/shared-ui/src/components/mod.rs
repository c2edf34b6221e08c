// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod form_select;
pub mod input;
pub mod notice;
pub mod page_header;
pub mod skeleton;
pub mod step_indicator;
pub mod textarea;

// Primitive wrappers
pub mod alert_dialog;
pub mod avatar;

// Depends on dioxus-free-icons
pub mod locked_overlay;

pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use locked_overlay::*;
pub use notice::*;
pub use page_header::*;
pub use skeleton::*;
pub use step_indicator::*;
pub use textarea::*;
