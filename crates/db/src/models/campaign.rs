//! Campaign entity model and DTOs.

use campaign_core::campaign::{
    validate_budget, validate_max_len, validate_platform, validate_status, validate_title,
    MAX_TAGS_LEN, MAX_TARGET_AUDIENCE_LEN,
};
use campaign_core::error::{CoreError, FieldErrors};
use campaign_core::types::{Date, DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";

/// A request field that can be omitted (`None`), sent as `null`
/// (`Some(None)`) or sent with a value (`Some(Some(v))`).
pub type Nullable<T> = Option<Option<T>>;

/// The value of a field that was sent and is not `null`.
pub fn supplied<T>(field: &Nullable<T>) -> Option<&T> {
    field.as_ref()?.as_ref()
}

/// A row from the `campaigns` table.
///
/// `budget` serializes as a fixed two-decimal string (e.g. `"0.00"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub platform: String,
    pub status: String,
    pub budget: Decimal,
    pub target_audience: String,
    pub content: String,
    pub scheduled_date: Option<Date>,
    pub tags: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a campaign. Only `title` is required; everything else
/// falls back to the column defaults.
///
/// Text fields arrive trimmed of surrounding whitespace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCampaign {
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub title: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub description: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub platform: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub budget: Nullable<Decimal>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub target_audience: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub content: Nullable<String>,
    pub scheduled_date: Option<Date>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub tags: Nullable<String>,
}

impl CreateCampaign {
    /// Check every field constraint, collecting all failures.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        if self.title.is_none() {
            errors.add("title", REQUIRED);
        }
        check_title(&mut errors, &self.title);
        self.shared().check(&mut errors);
        errors.into_result()
    }

    fn shared(&self) -> SharedFields<'_> {
        SharedFields {
            description: &self.description,
            platform: &self.platform,
            status: &self.status,
            budget: &self.budget,
            target_audience: &self.target_audience,
            content: &self.content,
            tags: &self.tags,
        }
    }
}

/// DTO for updating a campaign. Omitted fields keep their stored value;
/// text fields arrive trimmed.
///
/// `scheduled_date: null` clears the date. `null` for any other field is a
/// validation error, since those columns are not nullable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampaign {
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub title: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub description: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub platform: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub status: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub budget: Nullable<Decimal>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub target_audience: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub content: Nullable<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub scheduled_date: Nullable<Date>,
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    pub tags: Nullable<String>,
}

impl UpdateCampaign {
    /// Check the supplied fields. A full update (`partial == false`) must
    /// also carry `title`.
    pub fn validate(&self, partial: bool) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        if self.title.is_none() && !partial {
            errors.add("title", REQUIRED);
        }
        check_title(&mut errors, &self.title);
        self.shared().check(&mut errors);
        errors.into_result()
    }

    fn shared(&self) -> SharedFields<'_> {
        SharedFields {
            description: &self.description,
            platform: &self.platform,
            status: &self.status,
            budget: &self.budget,
            target_audience: &self.target_audience,
            content: &self.content,
            tags: &self.tags,
        }
    }
}

/// Query filters for listing campaigns (`?platform=&status=`).
///
/// Empty strings are treated the same as an absent parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampaignFilter {
    pub platform: Option<String>,
    pub status: Option<String>,
}

impl CampaignFilter {
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref().filter(|s| !s.is_empty())
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

/// Fields validated the same way on create and update.
struct SharedFields<'a> {
    description: &'a Nullable<String>,
    platform: &'a Nullable<String>,
    status: &'a Nullable<String>,
    budget: &'a Nullable<Decimal>,
    target_audience: &'a Nullable<String>,
    content: &'a Nullable<String>,
    tags: &'a Nullable<String>,
}

impl SharedFields<'_> {
    fn check(&self, errors: &mut FieldErrors) {
        check_field(errors, "description", self.description, |_| Ok(()));
        check_field(errors, "platform", self.platform, |p| validate_platform(p));
        check_field(errors, "status", self.status, |s| validate_status(s));
        check_field(errors, "budget", self.budget, |b| validate_budget(*b));
        check_field(errors, "target_audience", self.target_audience, |a| {
            validate_max_len(a, MAX_TARGET_AUDIENCE_LEN)
        });
        check_field(errors, "content", self.content, |_| Ok(()));
        check_field(errors, "tags", self.tags, |t| validate_max_len(t, MAX_TAGS_LEN));
    }
}

fn check_title(errors: &mut FieldErrors, title: &Nullable<String>) {
    check_field(errors, "title", title, |t| validate_title(t));
}

/// Record `null` as an error and run `validate` on a supplied value.
fn check_field<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &Nullable<T>,
    validate: impl FnOnce(&T) -> Result<(), String>,
) {
    match value {
        None => {}
        Some(None) => errors.add(field, NOT_NULL),
        Some(Some(v)) => errors.check(field, validate(v)),
    }
}

/// Wrap any present value (including `null`) in `Some`, so a missing key
/// stays `None` via `#[serde(default)]`.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// [`deserialize_present`] for text, trimming surrounding whitespace.
fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<Nullable<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(Some(value.map(|s| s.trim().to_string())))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn field_errors(err: CoreError) -> FieldErrors {
        match err {
            CoreError::InvalidFields(fields) => fields,
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn create_without_title_reports_required() {
        let err = CreateCampaign::default().validate().unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref fields)
            if fields.get("title") == Some(&[REQUIRED.to_string()][..]));
    }

    #[test]
    fn create_collects_every_bad_field() {
        let input: CreateCampaign = serde_json::from_value(json!({
            "title": "Spring launch",
            "platform": "myspace",
            "status": "archived",
            "budget": "10.555",
            "tags": "x".repeat(501),
        }))
        .unwrap();

        let fields = field_errors(input.validate().unwrap_err());
        for field in ["platform", "status", "budget", "tags"] {
            assert!(fields.get(field).is_some(), "missing error for {field}");
        }
        assert!(fields.get("title").is_none());
    }

    #[test]
    fn text_fields_are_trimmed_before_validation() {
        let padded_title = format!("  {}  ", "t".repeat(200));
        let input: CreateCampaign = serde_json::from_value(json!({
            "title": padded_title,
            "description": "\tnotes\n",
            "target_audience": " founders ",
            "tags": " a,b ",
        }))
        .unwrap();

        assert_eq!(supplied(&input.title).map(String::len), Some(200));
        assert_eq!(supplied(&input.description).map(String::as_str), Some("notes"));
        assert_eq!(supplied(&input.target_audience).map(String::as_str), Some("founders"));
        assert_eq!(supplied(&input.tags).map(String::as_str), Some("a,b"));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn whitespace_only_title_is_blank() {
        let input: CreateCampaign = serde_json::from_value(json!({"title": "   "})).unwrap();
        assert_eq!(supplied(&input.title).map(String::as_str), Some(""));

        let fields = field_errors(input.validate().unwrap_err());
        assert_eq!(
            fields.get("title"),
            Some(&["This field may not be blank.".to_string()][..])
        );
    }

    #[test]
    fn explicit_null_is_rejected_for_non_nullable_fields() {
        let input: CreateCampaign = serde_json::from_value(json!({
            "title": null,
            "budget": null,
            "platform": null,
        }))
        .unwrap();
        let fields = field_errors(input.validate().unwrap_err());
        for field in ["title", "budget", "platform"] {
            assert_eq!(fields.get(field), Some(&[NOT_NULL.to_string()][..]), "{field}");
        }

        let patch: UpdateCampaign =
            serde_json::from_value(json!({"description": null})).unwrap();
        let fields = field_errors(patch.validate(true).unwrap_err());
        assert_eq!(fields.get("description"), Some(&[NOT_NULL.to_string()][..]));
    }

    #[test]
    fn partial_update_may_omit_title_but_full_update_may_not() {
        let input = UpdateCampaign {
            status: Some(Some("active".to_string())),
            ..Default::default()
        };
        assert!(input.validate(true).is_ok());
        assert_matches!(input.validate(false), Err(CoreError::InvalidFields(_)));
    }

    #[test]
    fn scheduled_date_null_differs_from_missing() {
        let missing: UpdateCampaign = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.scheduled_date, None);

        let cleared: UpdateCampaign =
            serde_json::from_str(r#"{"scheduled_date": null}"#).unwrap();
        assert_eq!(cleared.scheduled_date, Some(None));
        assert!(cleared.validate(true).is_ok());

        let set: UpdateCampaign =
            serde_json::from_str(r#"{"scheduled_date": "2025-03-01"}"#).unwrap();
        assert_eq!(
            set.scheduled_date,
            Some(Some(Date::from_ymd_opt(2025, 3, 1).unwrap()))
        );
    }

    #[test]
    fn empty_filter_values_are_ignored() {
        let filter = CampaignFilter {
            platform: Some(String::new()),
            status: Some("active".to_string()),
        };
        assert_eq!(filter.platform(), None);
        assert_eq!(filter.status(), Some("active"));
    }
}
