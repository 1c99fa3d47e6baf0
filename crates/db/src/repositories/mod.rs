//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod campaign_repo;
pub mod dashboard_repo;

pub use campaign_repo::CampaignRepo;
pub use dashboard_repo::DashboardRepo;
