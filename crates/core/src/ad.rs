//! Ad domain model, request input and validation rules.
//!
//! An ad is stored in its compact form ([`Ad`], [`AdSummary`]: minutes since
//! midnight and a delimited weekday string) and exposed in its external form
//! ([`AdView`], [`AdListing`]: `"HH:MM"` strings and a weekday sequence).

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::time_codec::{self, TimeError};
use crate::token_set::{self, WEEK_DAY_DELIMITER};
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Numeric weekday identifiers, `"0"` is Sunday.
pub const NUMERIC_WEEK_DAYS: &[&str] = &["0", "1", "2", "3", "4", "5", "6"];

/// Short English weekday identifiers.
pub const NAMED_WEEK_DAYS: &[&str] = &["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Whether `token` is a recognized weekday identifier.
pub fn is_week_day(token: &str) -> bool {
    NUMERIC_WEEK_DAYS.contains(&token) || NAMED_WEEK_DAYS.contains(&token)
}

// ---------------------------------------------------------------------------
// Stored representation
// ---------------------------------------------------------------------------

/// Storage-ready input for a new ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAd {
    pub game_id: EntityId,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    /// Weekday tokens joined with [`WEEK_DAY_DELIMITER`].
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
}

/// A persisted ad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ad {
    pub id: EntityId,
    pub game_id: EntityId,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
    pub created_at: Timestamp,
}

/// A persisted ad without its contact handle, as returned by listing queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSummary {
    pub id: EntityId,
    pub name: String,
    pub years_playing: i32,
    pub week_days: String,
    pub hour_start: i32,
    pub hour_end: i32,
    pub use_voice_channel: bool,
}

// ---------------------------------------------------------------------------
// External representation
// ---------------------------------------------------------------------------

/// A freshly created ad, echoed back to the poster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdView {
    pub id: EntityId,
    pub game_id: EntityId,
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: Vec<String>,
    pub hour_start: String,
    pub hour_end: String,
    pub use_voice_channel: bool,
    pub created_at: Timestamp,
}

/// One entry of a game's ad listing. Has no contact field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdListing {
    pub id: EntityId,
    pub name: String,
    pub week_days: Vec<String>,
    pub use_voice_channel: bool,
    pub years_playing: i32,
    pub hour_start: String,
    pub hour_end: String,
}

/// The contact handle of a single ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdContact {
    pub discord: String,
}

impl TryFrom<Ad> for AdView {
    type Error = CoreError;

    fn try_from(ad: Ad) -> Result<Self, Self::Error> {
        Ok(Self {
            hour_start: stored_hour(ad.id, ad.hour_start)?,
            hour_end: stored_hour(ad.id, ad.hour_end)?,
            week_days: token_set::decode_token_set(&ad.week_days, WEEK_DAY_DELIMITER),
            id: ad.id,
            game_id: ad.game_id,
            name: ad.name,
            years_playing: ad.years_playing,
            discord: ad.discord,
            use_voice_channel: ad.use_voice_channel,
            created_at: ad.created_at,
        })
    }
}

impl TryFrom<AdSummary> for AdListing {
    type Error = CoreError;

    fn try_from(ad: AdSummary) -> Result<Self, Self::Error> {
        Ok(Self {
            hour_start: stored_hour(ad.id, ad.hour_start)?,
            hour_end: stored_hour(ad.id, ad.hour_end)?,
            week_days: token_set::decode_token_set(&ad.week_days, WEEK_DAY_DELIMITER),
            id: ad.id,
            name: ad.name,
            use_voice_channel: ad.use_voice_channel,
            years_playing: ad.years_playing,
        })
    }
}

/// A stored minute value outside the day is a broken storage invariant, not
/// a client error.
fn stored_hour(ad_id: EntityId, minutes: i32) -> Result<String, CoreError> {
    time_codec::to_hour_string(minutes)
        .map_err(|e| CoreError::Internal(format!("ad {ad_id} has a corrupt hour value: {e}")))
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Request body for creating an ad.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdInput {
    #[validate(
        length(min = 1, max = 100, message = "name must be 1-100 characters"),
        custom(function = "not_blank", message = "name must not be blank")
    )]
    pub name: String,

    #[validate(range(min = 0, max = 100, message = "yearsPlaying must be between 0 and 100"))]
    pub years_playing: i32,

    #[validate(
        length(min = 1, max = 100, message = "discord must be 1-100 characters"),
        custom(function = "not_blank", message = "discord must not be blank")
    )]
    pub discord: String,

    #[validate(custom(function = "validate_week_days"))]
    pub week_days: Vec<String>,

    #[validate(custom(function = "validate_hour_string"))]
    pub hour_start: String,

    #[validate(custom(function = "validate_hour_string"))]
    pub hour_end: String,

    pub use_voice_channel: bool,
}

impl CreateAdInput {
    /// Validate the input and convert it into its storage form for `game_id`.
    pub fn into_new_ad(self, game_id: EntityId) -> Result<NewAd, CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let week_days = token_set::encode_token_set(&self.week_days, WEEK_DAY_DELIMITER)
            .map_err(|e| CoreError::Validation(format!("weekDays: {e}")))?;
        let hour_start = time_codec::to_minutes(&self.hour_start)
            .map_err(|e| CoreError::Validation(format!("hourStart: {e}")))?;
        let hour_end = time_codec::to_minutes(&self.hour_end)
            .map_err(|e| CoreError::Validation(format!("hourEnd: {e}")))?;

        Ok(NewAd {
            game_id,
            name: self.name.trim().to_string(),
            years_playing: self.years_playing,
            discord: self.discord.trim().to_string(),
            week_days,
            hour_start,
            hour_end,
            use_voice_channel: self.use_voice_channel,
        })
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_week_days(days: &[String]) -> Result<(), ValidationError> {
    if days.is_empty() {
        return Err(ValidationError::new("week_days_empty")
            .with_message("weekDays must contain at least one day".into()));
    }
    if let Some(unknown) = days.iter().find(|d| !is_week_day(d)) {
        return Err(ValidationError::new("week_day_unknown")
            .with_message(format!("'{unknown}' is not a recognized weekday").into()));
    }
    Ok(())
}

fn validate_hour_string(value: &str) -> Result<(), ValidationError> {
    time_codec::to_minutes(value).map(|_| ()).map_err(|e| {
        let code = match e {
            TimeError::InvalidFormat(_) => "invalid_time_format",
            TimeError::OutOfRange(_) => "time_out_of_range",
        };
        ValidationError::new(code).with_message(e.to_string().into())
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn input() -> CreateAdInput {
        CreateAdInput {
            name: "Raider".to_string(),
            years_playing: 3,
            discord: "raider#0001".to_string(),
            week_days: vec!["mon".into(), "wed".into(), "fri".into()],
            hour_start: "18:00".to_string(),
            hour_end: "23:30".to_string(),
            use_voice_channel: true,
        }
    }

    #[test]
    fn valid_input_converts_to_storage_form() {
        let game_id = Uuid::new_v4();
        let ad = input().into_new_ad(game_id).unwrap();

        assert_eq!(ad.game_id, game_id);
        assert_eq!(ad.week_days, "mon,wed,fri");
        assert_eq!(ad.hour_start, 1080);
        assert_eq!(ad.hour_end, 1410);
        assert!(ad.use_voice_channel);
    }

    #[test]
    fn numeric_week_days_are_accepted() {
        let mut input = input();
        input.week_days = vec!["0".into(), "6".into()];
        assert_eq!(input.into_new_ad(Uuid::new_v4()).unwrap().week_days, "0,6");
    }

    #[test]
    fn name_and_discord_are_trimmed() {
        let mut input = input();
        input.name = "  Raider ".into();
        input.discord = " raider#0001".into();
        let ad = input.into_new_ad(Uuid::new_v4()).unwrap();
        assert_eq!(ad.name, "Raider");
        assert_eq!(ad.discord, "raider#0001");
    }

    #[test]
    fn zero_years_playing_is_allowed() {
        let mut input = input();
        input.years_playing = 0;
        assert!(input.into_new_ad(Uuid::new_v4()).is_ok());
    }

    #[test]
    fn rejects_invalid_fields() {
        let cases: Vec<(&str, Box<dyn Fn(&mut CreateAdInput)>)> = vec![
            ("empty name", Box::new(|i| i.name = String::new())),
            ("blank name", Box::new(|i| i.name = "   ".into())),
            ("long name", Box::new(|i| i.name = "x".repeat(101))),
            ("negative years", Box::new(|i| i.years_playing = -1)),
            ("too many years", Box::new(|i| i.years_playing = 101)),
            ("blank discord", Box::new(|i| i.discord = " ".into())),
            ("no week days", Box::new(|i| i.week_days.clear())),
            ("unknown day", Box::new(|i| i.week_days = vec!["funday".into()])),
            ("day out of range", Box::new(|i| i.week_days = vec!["7".into()])),
            ("day with delimiter", Box::new(|i| i.week_days = vec!["mon,tue".into()])),
            ("bad start", Box::new(|i| i.hour_start = "25:00".into())),
            ("bad end", Box::new(|i| i.hour_end = "noon".into())),
        ];

        for (label, mutate) in cases {
            let mut input = input();
            mutate(&mut input);
            assert_matches!(
                input.into_new_ad(Uuid::new_v4()),
                Err(CoreError::Validation(_)),
                "{label} should be rejected"
            );
        }
    }

    #[test]
    fn stored_ad_converts_to_external_form() {
        let ad = Ad {
            id: Uuid::new_v4(),
            game_id: Uuid::new_v4(),
            name: "Raider".into(),
            years_playing: 2,
            discord: "raider#0001".into(),
            week_days: "1,3".into(),
            hour_start: 570,
            hour_end: 0,
            use_voice_channel: false,
            created_at: Utc::now(),
        };

        let view = AdView::try_from(ad).unwrap();
        assert_eq!(view.week_days, vec!["1", "3"]);
        assert_eq!(view.hour_start, "09:30");
        assert_eq!(view.hour_end, "00:00");
    }

    #[test]
    fn corrupt_stored_hour_is_internal_error() {
        let summary = AdSummary {
            id: Uuid::new_v4(),
            name: "Raider".into(),
            years_playing: 2,
            week_days: "mon".into(),
            hour_start: 2000,
            hour_end: 60,
            use_voice_channel: false,
        };

        assert_matches!(AdListing::try_from(summary), Err(CoreError::Internal(_)));
    }

    #[test]
    fn listing_serializes_without_discord() {
        let listing = AdListing {
            id: Uuid::new_v4(),
            name: "Raider".into(),
            week_days: vec!["mon".into()],
            use_voice_channel: true,
            years_playing: 1,
            hour_start: "10:00".into(),
            hour_end: "12:00".into(),
        };

        let json = serde_json::to_value(&listing).unwrap();
        assert!(json.get("discord").is_none());
        assert_eq!(json["weekDays"][0], "mon");
        assert_eq!(json["useVoiceChannel"], true);
        assert_eq!(json["hourStart"], "10:00");
    }
}
