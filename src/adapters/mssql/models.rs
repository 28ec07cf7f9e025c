//! SQL Server scalar conversion
//!
//! Maps tiberius column data into the domain [`CellValue`] type. Everything
//! without a natural numeric or boolean shape (GUIDs, decimals, temporal
//! values, binary, XML) is rendered to text here so nothing downstream
//! depends on driver types.

use crate::domain::errors::ExportError;
use crate::domain::report::CellValue;
use crate::domain::result::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tiberius::{ColumnData, FromSql};

/// Converts one database scalar into a domain cell
///
/// # Errors
///
/// Returns `Query` if a temporal value cannot be decoded.
pub fn cell_from_column_data(data: ColumnData<'static>) -> Result<CellValue> {
    let cell = match data {
        ColumnData::Bit(v) => v.map(CellValue::Bool).unwrap_or(CellValue::Null),
        ColumnData::U8(v) => v.map(|n| CellValue::Int(i64::from(n))).unwrap_or(CellValue::Null),
        ColumnData::I16(v) => v.map(|n| CellValue::Int(i64::from(n))).unwrap_or(CellValue::Null),
        ColumnData::I32(v) => v.map(|n| CellValue::Int(i64::from(n))).unwrap_or(CellValue::Null),
        ColumnData::I64(v) => v.map(CellValue::Int).unwrap_or(CellValue::Null),
        ColumnData::F32(v) => v.map(|n| CellValue::Float(f64::from(n))).unwrap_or(CellValue::Null),
        ColumnData::F64(v) => v.map(CellValue::Float).unwrap_or(CellValue::Null),
        ColumnData::String(v) => v
            .map(|s| CellValue::Text(s.into_owned()))
            .unwrap_or(CellValue::Null),
        ColumnData::Guid(v) => v
            .map(|g| CellValue::Text(g.to_string()))
            .unwrap_or(CellValue::Null),
        ColumnData::Numeric(v) => v
            .map(|n| CellValue::Text(n.to_string()))
            .unwrap_or(CellValue::Null),
        ColumnData::Xml(v) => v
            .map(|x| CellValue::Text(x.into_owned().into_string()))
            .unwrap_or(CellValue::Null),
        ColumnData::Binary(v) => v
            .map(|b| CellValue::Text(hex_literal(&b)))
            .unwrap_or(CellValue::Null),
        d @ (ColumnData::DateTime(_)
        | ColumnData::SmallDateTime(_)
        | ColumnData::DateTime2(_)) => match decode_temporal::<NaiveDateTime>(&d)? {
            Some(dt) => CellValue::Text(dt.format("%Y-%m-%d %H:%M:%S%.f").to_string()),
            None => CellValue::Null,
        },
        d @ ColumnData::Date(_) => match decode_temporal::<NaiveDate>(&d)? {
            Some(date) => CellValue::Text(date.format("%Y-%m-%d").to_string()),
            None => CellValue::Null,
        },
        d @ ColumnData::Time(_) => match decode_temporal::<NaiveTime>(&d)? {
            Some(time) => CellValue::Text(time.format("%H:%M:%S%.f").to_string()),
            None => CellValue::Null,
        },
        d @ ColumnData::DateTimeOffset(_) => match decode_temporal::<DateTime<Utc>>(&d)? {
            Some(dt) => CellValue::Text(dt.to_rfc3339()),
            None => CellValue::Null,
        },
    };

    Ok(cell)
}

fn decode_temporal<'a, T: FromSql<'a>>(data: &'a ColumnData<'static>) -> Result<Option<T>> {
    T::from_sql(data)
        .map_err(|e| ExportError::Query(format!("Invalid temporal value in result set: {e}")))
}

/// Renders varbinary data as a SQL-style hex literal
fn hex_literal(bytes: &[u8]) -> String {
    let digits: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
    format!("0x{digits}")
}
