//! Entity normalization.
//!
//! UI components hand over source records in whatever shape the content API
//! produced (camelCase or snake_case keys, `thumbnail` vs `thumbnailUrl`,
//! date-only or RFC 3339 timestamps). This module turns such a record into a
//! canonical [`FavoriteEntity`], or rejects it with
//! [`FavoritesError::Validation`] before any state is touched.
//!
//! Required for both kinds: `id`, `title`, `instructor`, `thumbnailUrl`,
//! `videoUrl`. Workouts also require `type`, `duration`, `difficulty` and
//! `publishedDate`; movements require `category` and `dateAdded`.
//! `description`, `equipment` and the view/like counters default to empty
//! or zero when absent.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use super::{Difficulty, FavoriteEntity, FavoriteKind, MovementFavorite, WorkoutFavorite};
use crate::error::{FavoritesError, Result};

const ID: &[&str] = &["id", "_id"];
const TITLE: &[&str] = &["title", "name"];
const DESCRIPTION: &[&str] = &["description"];
const INSTRUCTOR: &[&str] = &["instructor"];
const THUMBNAIL: &[&str] = &["thumbnailUrl", "thumbnail_url", "thumbnail"];
const VIDEO: &[&str] = &["videoUrl", "video_url", "video"];
const EQUIPMENT: &[&str] = &["equipment"];
const VIEWS: &[&str] = &["views", "viewCount", "view_count"];
const LIKES: &[&str] = &["likes", "likeCount", "like_count"];
const WORKOUT_TYPE: &[&str] = &["type", "workoutType", "workout_type"];
const DURATION: &[&str] = &["duration"];
const DIFFICULTY: &[&str] = &["difficulty"];
const PUBLISHED: &[&str] = &["publishedDate", "published_date", "publishedAt"];
const CATEGORY: &[&str] = &["category"];
const DATE_ADDED: &[&str] = &["dateAdded", "date_added", "createdAt"];

/// Normalize a raw source record of the given kind.
///
/// # Errors
///
/// Returns [`FavoritesError::Validation`] if the record is not an object,
/// a required field is absent or empty, or a field has the wrong type.
pub fn normalize(kind: FavoriteKind, record: &Value) -> Result<FavoriteEntity> {
    let map = record
        .as_object()
        .ok_or_else(|| FavoritesError::validation(kind, "record", "must be a JSON object"))?;
    let fields = Fields { kind, map };

    let entity = match kind {
        FavoriteKind::Workout => FavoriteEntity::Workout(WorkoutFavorite {
            id: fields.id()?,
            title: fields.required_text(TITLE)?,
            description: fields.optional_text(DESCRIPTION)?,
            workout_type: fields.required_text(WORKOUT_TYPE)?,
            duration: fields.duration()?,
            difficulty: fields.difficulty()?,
            equipment: fields.string_list(EQUIPMENT)?,
            instructor: fields.required_text(INSTRUCTOR)?,
            thumbnail_url: fields.required_text(THUMBNAIL)?,
            video_url: fields.required_text(VIDEO)?,
            published_date: fields.timestamp(PUBLISHED)?,
            views: fields.counter(VIEWS)?,
            likes: fields.counter(LIKES)?,
        }),
        FavoriteKind::Movement => FavoriteEntity::Movement(MovementFavorite {
            id: fields.id()?,
            title: fields.required_text(TITLE)?,
            description: fields.optional_text(DESCRIPTION)?,
            category: fields.required_text(CATEGORY)?,
            equipment: fields.string_list(EQUIPMENT)?,
            instructor: fields.required_text(INSTRUCTOR)?,
            thumbnail_url: fields.required_text(THUMBNAIL)?,
            video_url: fields.required_text(VIDEO)?,
            date_added: fields.timestamp(DATE_ADDED)?,
            views: fields.counter(VIEWS)?,
            likes: fields.counter(LIKES)?,
        }),
    };

    Ok(entity)
}

/// Re-check an already typed entity.
///
/// Typed entities can still carry blank text in required fields; these are
/// trimmed and rejected the same way [`normalize`] rejects raw records.
pub fn validate(mut entity: FavoriteEntity) -> Result<FavoriteEntity> {
    let kind = entity.kind();
    let fields: [(&str, &mut String); 6] = match &mut entity {
        FavoriteEntity::Workout(w) => [
            (ID[0], &mut w.id),
            (TITLE[0], &mut w.title),
            (WORKOUT_TYPE[0], &mut w.workout_type),
            (INSTRUCTOR[0], &mut w.instructor),
            (THUMBNAIL[0], &mut w.thumbnail_url),
            (VIDEO[0], &mut w.video_url),
        ],
        FavoriteEntity::Movement(m) => [
            (ID[0], &mut m.id),
            (TITLE[0], &mut m.title),
            (CATEGORY[0], &mut m.category),
            (INSTRUCTOR[0], &mut m.instructor),
            (THUMBNAIL[0], &mut m.thumbnail_url),
            (VIDEO[0], &mut m.video_url),
        ],
    };

    for (name, value) in fields {
        *value = value.trim().to_string();
        if value.is_empty() {
            return Err(FavoritesError::validation(kind, name, "must not be empty"));
        }
    }

    Ok(entity)
}

/// Field accessor over a record object.
struct Fields<'a> {
    kind: FavoriteKind,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// First non-null value among the accepted names.
    fn lookup(&self, names: &[&str]) -> Option<&'a Value> {
        names
            .iter()
            .filter_map(|name| self.map.get(*name))
            .find(|value| !value.is_null())
    }

    fn invalid(&self, names: &[&str], message: &str) -> FavoritesError {
        FavoritesError::validation(self.kind, names[0], message)
    }

    /// Ids may arrive as strings or integers.
    fn id(&self) -> Result<String> {
        let id = match self.lookup(ID) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) if n.is_u64() || n.is_i64() => n.to_string(),
            Some(_) => return Err(self.invalid(ID, "must be a string")),
            None => return Err(self.invalid(ID, "is required")),
        };
        if id.is_empty() {
            return Err(self.invalid(ID, "must not be empty"));
        }
        Ok(id)
    }

    fn required_text(&self, names: &[&str]) -> Result<String> {
        match self.lookup(names) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
            Some(Value::String(_)) => Err(self.invalid(names, "must not be empty")),
            Some(_) => Err(self.invalid(names, "must be a string")),
            None => Err(self.invalid(names, "is required")),
        }
    }

    fn optional_text(&self, names: &[&str]) -> Result<String> {
        match self.lookup(names) {
            Some(Value::String(s)) => Ok(s.trim().to_string()),
            Some(_) => Err(self.invalid(names, "must be a string")),
            None => Ok(String::new()),
        }
    }

    /// Arrays of strings, or a single comma-separated string.
    fn string_list(&self, names: &[&str]) -> Result<Vec<String>> {
        match self.lookup(names) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(|s| s.trim().to_string())
                        .ok_or_else(|| self.invalid(names, "must contain only strings"))
                })
                .filter(|item| !matches!(item, Ok(s) if s.is_empty()))
                .collect(),
            Some(Value::String(s)) => Ok(s
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()),
            Some(_) => Err(self.invalid(names, "must be a list of strings")),
            None => Ok(Vec::new()),
        }
    }

    fn counter(&self, names: &[&str]) -> Result<u64> {
        match self.lookup(names) {
            Some(value) => value
                .as_u64()
                .ok_or_else(|| self.invalid(names, "must be a non-negative integer")),
            None => Ok(0),
        }
    }

    fn duration(&self) -> Result<u64> {
        match self.lookup(DURATION) {
            Some(Value::Number(n)) => n
                .as_u64()
                .ok_or_else(|| self.invalid(DURATION, "must be a non-negative number of seconds")),
            Some(Value::String(s)) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| self.invalid(DURATION, "must be a non-negative number of seconds")),
            Some(_) => Err(self.invalid(DURATION, "must be a non-negative number of seconds")),
            None => Err(self.invalid(DURATION, "is required")),
        }
    }

    fn difficulty(&self) -> Result<Difficulty> {
        let raw = self.required_text(DIFFICULTY)?;
        raw.parse::<Difficulty>()
            .map_err(|_| self.invalid(DIFFICULTY, "must be beginner, intermediate or advanced"))
    }

    /// RFC 3339 timestamps, date-only strings, or epoch milliseconds.
    fn timestamp(&self, names: &[&str]) -> Result<DateTime<Utc>> {
        match self.lookup(names) {
            Some(Value::String(s)) => parse_timestamp(s.trim())
                .ok_or_else(|| self.invalid(names, "must be an RFC 3339 timestamp or YYYY-MM-DD date")),
            Some(Value::Number(n)) => n
                .as_i64()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .ok_or_else(|| self.invalid(names, "must be epoch milliseconds")),
            Some(_) => Err(self.invalid(names, "must be a timestamp")),
            None => Err(self.invalid(names, "is required")),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
