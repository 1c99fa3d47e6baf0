/// Campaign primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Stored as TIMESTAMPTZ, always handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time component (`scheduled_date`).
pub type Date = chrono::NaiveDate;
