//! Record binder for typed lists and nested structs.
//!
//! A record is a fixed-schema element of a [`crate::typed_list::TypedList`].
//! Implementations map incoming (column, raw value) pairs onto their fields
//! through the helpers in [`bind`], and encode themselves back into a typed
//! attribute map for rendering.

use std::collections::HashMap;

use bytes::Bytes;

use crate::attr::AttributeValue;
use crate::collection::Collection;
use crate::driver::DriverValue;
use crate::error::{Error, Result};

/// A record with a fixed schema known on the host side.
///
/// `bind_field` receives every (column, value) pair of a scanned map;
/// implementations match on the column name (explicit name, or the
/// lower-snake-case of the field name per [`column_name`]) and delegate to
/// a [`bind`] helper. Unknown columns must be ignored by returning `Ok(())`.
pub trait Record: Default {
    fn bind_field(&mut self, column: &str, raw: &DriverValue) -> Result<()>;

    /// Encode the record's fields as a typed attribute map.
    fn encode_fields(&self) -> Result<HashMap<String, AttributeValue>>;
}

/// Derive the column name of a field: lower snake case, with consecutive
/// capitals kept as one word (`UserID` -> `user_id`).
pub fn column_name(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();
    let mut out = String::with_capacity(field.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && chars[i - 1].is_lowercase();
            let next_lower = i + 1 < chars.len() && chars[i + 1].is_lowercase();
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(*c);
        }
    }
    out
}

/// Per-field-kind assignment helpers composed by `Record::bind_field`
/// implementations.
///
/// A `Null` raw leaves non-optional fields at their current value and
/// optional fields `None`; a raw of the wrong kind is `failed to cast`.
pub mod bind {
    use super::*;

    pub fn string(field: &mut String, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::String(s) => {
                *field = s.clone();
                Ok(())
            }
            DriverValue::Null => Ok(()),
            _ => Err(Error::FailedToCast),
        }
    }

    pub fn opt_string(field: &mut Option<String>, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::String(s) => {
                *field = Some(s.clone());
                Ok(())
            }
            DriverValue::Null => {
                *field = None;
                Ok(())
            }
            _ => Err(Error::FailedToCast),
        }
    }

    pub fn int(field: &mut i64, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Number(n) => {
                *field = *n as i64;
                Ok(())
            }
            DriverValue::Null => Ok(()),
            _ => Err(Error::FailedToCast),
        }
    }

    pub fn opt_int(field: &mut Option<i64>, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Number(n) => {
                *field = Some(*n as i64);
                Ok(())
            }
            DriverValue::Null => {
                *field = None;
                Ok(())
            }
            _ => Err(Error::FailedToCast),
        }
    }

    pub fn float(field: &mut f64, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Number(n) => {
                *field = *n;
                Ok(())
            }
            DriverValue::Null => Ok(()),
            _ => Err(Error::FailedToCast),
        }
    }

    pub fn opt_float(field: &mut Option<f64>, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Number(n) => {
                *field = Some(*n);
                Ok(())
            }
            DriverValue::Null => {
                *field = None;
                Ok(())
            }
            _ => Err(Error::FailedToCast),
        }
    }

    pub fn boolean(field: &mut bool, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Bool(b) => {
                *field = *b;
                Ok(())
            }
            DriverValue::Null => Ok(()),
            _ => Err(Error::FailedToCast),
        }
    }

    pub fn opt_boolean(field: &mut Option<bool>, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Bool(b) => {
                *field = Some(*b);
                Ok(())
            }
            DriverValue::Null => {
                *field = None;
                Ok(())
            }
            _ => Err(Error::FailedToCast),
        }
    }

    pub fn bytes(field: &mut Bytes, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Bytes(b) => {
                *field = b.clone();
                Ok(())
            }
            DriverValue::Null => Ok(()),
            _ => Err(Error::FailedToCast),
        }
    }

    /// Bind a nested record: the raw value must be a keyed map.
    pub fn nested<R: Record>(field: &mut R, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Map(entries) => {
                for (column, value) in entries {
                    field.bind_field(column, value)?;
                }
                Ok(())
            }
            DriverValue::Null => Ok(()),
            _ => Err(Error::FailedToCast),
        }
    }

    /// Bind an optional nested record; absent raw leaves it `None`.
    pub fn opt_nested<R: Record>(field: &mut Option<R>, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Null => {
                *field = None;
                Ok(())
            }
            _ => {
                let mut record = R::default();
                nested(&mut record, raw)?;
                *field = Some(record);
                Ok(())
            }
        }
    }

    /// Delegate to a collection's scanner hook. This is how Set, List and
    /// Map fields participate in record binding.
    pub fn scanner<C: Collection>(field: &mut C, raw: &DriverValue) -> Result<()> {
        match raw {
            DriverValue::Null => field.scan(None),
            _ => field.scan(Some(raw.clone())),
        }
    }
}
