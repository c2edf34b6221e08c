mod metrics_table;
mod status_badge;
mod tile_card;

pub use metrics_table::MetricsTable;
pub use status_badge::{
    invoice_badge_variant, subscription_badge_variant, ComplianceBadge, InvoiceStatusBadge,
    SubscriptionStatusBadge,
};
pub use tile_card::TileCard;
