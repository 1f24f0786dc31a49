use std::num::IntErrorKind;

use super::types::{
    ProcessingError, RawUserRow, RowErrorKind, UserRecord, FIELD_AGE, FIELD_PURCHASES,
    FIELD_USER_ID, FIELD_VISITS,
};

/// Validate a raw row into a [`UserRecord`].
///
/// Fields are checked in the order user id, age, purchases, visits and the
/// first problem found is returned. Never panics on row content.
pub fn parse_row(raw: &RawUserRow) -> Result<UserRecord, ProcessingError> {
    let user_id = parse_user_id(raw)?;
    let age = parse_count(raw, FIELD_AGE)?;
    let purchases = parse_count(raw, FIELD_PURCHASES)?;
    let visits = parse_count(raw, FIELD_VISITS)?;

    Ok(UserRecord {
        user_id,
        age,
        purchases,
        visits,
    })
}

fn field<'a>(raw: &'a RawUserRow, name: &'static str) -> Result<&'a str, ProcessingError> {
    let value = raw
        .get(name)
        .ok_or_else(|| ProcessingError::new(raw, name, RowErrorKind::Missing))?;

    if raw.undecodable.contains(&name) {
        return Err(ProcessingError::new(
            raw,
            name,
            RowErrorKind::InvalidUtf8 {
                value: value.to_string(),
            },
        ));
    }
    Ok(value)
}

fn parse_user_id(raw: &RawUserRow) -> Result<String, ProcessingError> {
    let id = field(raw, FIELD_USER_ID)?.trim();
    if id.is_empty() {
        return Err(ProcessingError::new(raw, FIELD_USER_ID, RowErrorKind::Empty));
    }
    Ok(id.to_string())
}

fn parse_count(raw: &RawUserRow, name: &'static str) -> Result<u32, ProcessingError> {
    let text = field(raw, name)?.trim();
    let reject = |kind| ProcessingError::new(raw, name, kind);

    let value: i64 = text.parse().map_err(|e: std::num::ParseIntError| {
        let value = text.to_string();
        match e.kind() {
            IntErrorKind::Empty => reject(RowErrorKind::Empty),
            IntErrorKind::PosOverflow => reject(RowErrorKind::TooLarge { value }),
            IntErrorKind::NegOverflow => reject(RowErrorKind::Negative { value }),
            _ => reject(RowErrorKind::NotAnInteger { value }),
        }
    })?;

    if value < 0 {
        return Err(reject(RowErrorKind::Negative {
            value: text.to_string(),
        }));
    }

    u32::try_from(value).map_err(|_| {
        reject(RowErrorKind::TooLarge {
            value: text.to_string(),
        })
    })
}
