//! Feed line parser with field-count and field-type validation.

use super::error::FeedError;
use super::record::FeedRecord;
use crate::book::{OrderId, Side};
use rust_decimal::Decimal;

const ADD_FIELDS: usize = 6;
const REDUCE_FIELDS: usize = 4;

/// Parse one feed line into a validated [`FeedRecord`].
///
/// Fields are split on whitespace. The record type (`A`/`R`) and side
/// (`B`/`S`) letters are matched case-insensitively.
///
/// # Errors
/// Returns a [`FeedError`] describing the first offending field; the
/// caller decides whether to abort the stream or skip the line.
pub fn parse_line(line: &str) -> Result<FeedRecord, FeedError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [] => Err(FeedError::EmptyLine),
        [_] => Err(FeedError::Truncated(line.trim().to_string())),
        [_, kind, ..] if kind.eq_ignore_ascii_case("A") => parse_add(&fields),
        [_, kind, ..] if kind.eq_ignore_ascii_case("R") => parse_reduce(&fields),
        [_, kind, ..] => Err(FeedError::UnknownRecordType((*kind).to_string())),
    }
}

fn parse_add(fields: &[&str]) -> Result<FeedRecord, FeedError> {
    if fields.len() != ADD_FIELDS {
        return Err(FeedError::FieldCount {
            kind: "add",
            expected: ADD_FIELDS,
            found: fields.len(),
        });
    }
    let timestamp = parse_timestamp(fields[0])?;
    let id = OrderId::new(fields[2]);
    let side = Side::from_letter(fields[3]).ok_or_else(|| FeedError::InvalidField {
        field: "side",
        value: fields[3].to_string(),
    })?;
    let price = parse_price(fields[4])?;
    let size = parse_size(fields[5], "size")?;
    if size == 0 {
        return Err(FeedError::NonPositiveField {
            field: "size",
            value: fields[5].to_string(),
        });
    }
    Ok(FeedRecord::Add {
        timestamp,
        id,
        side,
        price,
        size,
    })
}

fn parse_reduce(fields: &[&str]) -> Result<FeedRecord, FeedError> {
    if fields.len() != REDUCE_FIELDS {
        return Err(FeedError::FieldCount {
            kind: "reduce",
            expected: REDUCE_FIELDS,
            found: fields.len(),
        });
    }
    let timestamp = parse_timestamp(fields[0])?;
    let id = OrderId::new(fields[2]);
    // 0 is a full cancel, so only the sign is restricted here.
    let size = parse_size(fields[3], "size")?;
    Ok(FeedRecord::Reduce {
        timestamp,
        id,
        size,
    })
}

fn parse_timestamp(field: &str) -> Result<u64, FeedError> {
    field.parse().map_err(|_| FeedError::InvalidField {
        field: "timestamp",
        value: field.to_string(),
    })
}

fn parse_size(field: &str, name: &'static str) -> Result<u64, FeedError> {
    field.parse().map_err(|_| FeedError::InvalidField {
        field: name,
        value: field.to_string(),
    })
}

fn parse_price(field: &str) -> Result<Decimal, FeedError> {
    let price: Decimal = field.parse().map_err(|_| FeedError::InvalidField {
        field: "price",
        value: field.to_string(),
    })?;
    if price <= Decimal::ZERO {
        return Err(FeedError::NonPositiveField {
            field: "price",
            value: field.to_string(),
        });
    }
    Ok(price)
}
