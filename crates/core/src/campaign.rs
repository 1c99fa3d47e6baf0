//! Campaign constants, enums and field validators.
//!
//! Platform and status values are stored as TEXT in the `campaigns` table;
//! the string constants here are the single source of truth for both the
//! Rust enums and the database CHECK constraints.

use rust_decimal::Decimal;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Platform constants
// ---------------------------------------------------------------------------

pub const PLATFORM_INSTAGRAM: &str = "instagram";
pub const PLATFORM_FACEBOOK: &str = "facebook";
pub const PLATFORM_TWITTER: &str = "twitter";
pub const PLATFORM_LINKEDIN: &str = "linkedin";
pub const PLATFORM_TIKTOK: &str = "tiktok";
pub const PLATFORM_YOUTUBE: &str = "youtube";
pub const PLATFORM_OTHER: &str = "other";

/// All valid platforms, in display order.
pub const VALID_PLATFORMS: &[&str] = &[
    PLATFORM_INSTAGRAM,
    PLATFORM_FACEBOOK,
    PLATFORM_TWITTER,
    PLATFORM_LINKEDIN,
    PLATFORM_TIKTOK,
    PLATFORM_YOUTUBE,
    PLATFORM_OTHER,
];

/// Platform used when a campaign is created without one.
pub const DEFAULT_PLATFORM: &str = PLATFORM_INSTAGRAM;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_PAUSED: &str = "paused";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid campaign statuses, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_SCHEDULED,
    STATUS_ACTIVE,
    STATUS_PAUSED,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// Status used when a campaign is created without one.
pub const DEFAULT_STATUS: &str = STATUS_DRAFT;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_TARGET_AUDIENCE_LEN: usize = 200;
pub const MAX_TAGS_LEN: usize = 500;

/// Total significant digits allowed in `budget` (NUMERIC(10,2)).
pub const BUDGET_MAX_DIGITS: u32 = 10;
/// Digits after the decimal point in `budget`.
pub const BUDGET_DECIMAL_PLACES: u32 = 2;

/// `0.00`, the budget of a campaign created without one.
pub fn default_budget() -> Decimal {
    Decimal::new(0, BUDGET_DECIMAL_PLACES)
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Social platform a campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    LinkedIn,
    TikTok,
    YouTube,
    Other,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 7] = [
        Self::Instagram,
        Self::Facebook,
        Self::Twitter,
        Self::LinkedIn,
        Self::TikTok,
        Self::YouTube,
        Self::Other,
    ];

    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => PLATFORM_INSTAGRAM,
            Self::Facebook => PLATFORM_FACEBOOK,
            Self::Twitter => PLATFORM_TWITTER,
            Self::LinkedIn => PLATFORM_LINKEDIN,
            Self::TikTok => PLATFORM_TIKTOK,
            Self::YouTube => PLATFORM_YOUTUBE,
            Self::Other => PLATFORM_OTHER,
        }
    }

    /// Human-readable name shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter / X",
            Self::LinkedIn => "LinkedIn",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
            Self::Other => "Other",
        }
    }

    /// Parse from the database string, returning an error for unknown platforms.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            PLATFORM_INSTAGRAM => Ok(Self::Instagram),
            PLATFORM_FACEBOOK => Ok(Self::Facebook),
            PLATFORM_TWITTER => Ok(Self::Twitter),
            PLATFORM_LINKEDIN => Ok(Self::LinkedIn),
            PLATFORM_TIKTOK => Ok(Self::TikTok),
            PLATFORM_YOUTUBE => Ok(Self::YouTube),
            PLATFORM_OTHER => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "Unknown platform: '{other}'. Valid platforms: {}",
                VALID_PLATFORMS.join(", ")
            ))),
        }
    }
}

/// Lifecycle state of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Draft,
    Scheduled,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [CampaignStatus; 6] = [
        Self::Draft,
        Self::Scheduled,
        Self::Active,
        Self::Paused,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Scheduled => STATUS_SCHEDULED,
            Self::Active => STATUS_ACTIVE,
            Self::Paused => STATUS_PAUSED,
            Self::Completed => STATUS_COMPLETED,
            Self::Cancelled => STATUS_CANCELLED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Scheduled => "Scheduled",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Parse from the database string, returning an error for unknown statuses.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_DRAFT => Ok(Self::Draft),
            STATUS_SCHEDULED => Ok(Self::Scheduled),
            STATUS_ACTIVE => Ok(Self::Active),
            STATUS_PAUSED => Ok(Self::Paused),
            STATUS_COMPLETED => Ok(Self::Completed),
            STATUS_CANCELLED => Ok(Self::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Unknown campaign status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------
//
// Each validator returns the client-facing message on failure so callers can
// collect them per field with `FieldErrors::check`.

/// Title must be present, non-blank and at most [`MAX_TITLE_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("This field may not be blank.".to_string());
    }
    validate_max_len(title, MAX_TITLE_LEN)
}

/// Length limit counted in characters, not bytes.
pub fn validate_max_len(value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!(
            "Ensure this field has no more than {max} characters."
        ));
    }
    Ok(())
}

pub fn validate_platform(platform: &str) -> Result<(), String> {
    Platform::parse(platform)
        .map(|_| ())
        .map_err(|_| invalid_choice(platform))
}

pub fn validate_status(status: &str) -> Result<(), String> {
    CampaignStatus::parse(status)
        .map(|_| ())
        .map_err(|_| invalid_choice(status))
}

fn invalid_choice(value: &str) -> String {
    format!("\"{value}\" is not a valid choice.")
}

/// Budget must fit NUMERIC(10,2): at most two decimal places and at most
/// eight digits before the decimal point. Negative amounts are accepted.
pub fn validate_budget(budget: Decimal) -> Result<(), String> {
    let normalized = budget.normalize();
    let decimal_places = normalized.scale();
    let whole_digits = count_digits(normalized.trunc().abs().mantissa());

    if whole_digits + decimal_places > BUDGET_MAX_DIGITS {
        return Err(format!(
            "Ensure that there are no more than {BUDGET_MAX_DIGITS} digits in total."
        ));
    }
    if decimal_places > BUDGET_DECIMAL_PLACES {
        return Err(format!(
            "Ensure that there are no more than {BUDGET_DECIMAL_PLACES} decimal places."
        ));
    }
    let max_whole = BUDGET_MAX_DIGITS - BUDGET_DECIMAL_PLACES;
    if whole_digits > max_whole {
        return Err(format!(
            "Ensure that there are no more than {max_whole} digits before the decimal point."
        ));
    }
    Ok(())
}

/// Number of decimal digits in `n`; zero has none.
fn count_digits(mut n: i128) -> u32 {
    let mut digits = 0;
    while n != 0 {
        n /= 10;
        digits += 1;
    }
    digits
}
