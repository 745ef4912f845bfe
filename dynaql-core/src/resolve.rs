//! Nested-resolution walker.
//!
//! After a scan, list and map elements may still be raw driver shapes. The
//! walker promotes each element into its semantic container by structural
//! inference, first match wins:
//!
//! 1. generic keyed map -> Map (recursing through its scan)
//! 2. numeric slice, all members integral -> Set<i64>
//! 3. numeric slice -> Set<f64>
//! 4. string slice -> Set<String>
//! 5. binary slice -> Set<Bytes>
//! 6. generic slice -> List (recursive)
//! 7. otherwise the element is a scalar and passes through

use bytes::Bytes;

use crate::collection::Collection;
use crate::driver::DriverValue;
use crate::error::Result;
use crate::list::List;
use crate::map::Map;
use crate::set::Set;
use crate::value::DocValue;

/// Promote a raw driver value into its resolved document value.
pub fn resolve(raw: DriverValue) -> Result<DocValue> {
    match raw {
        DriverValue::Map(_) => {
            let mut map = Map::new();
            map.scan(Some(raw))?;
            Ok(DocValue::Map(map))
        }
        DriverValue::NumberList(_) if Set::<i64>::is_compatible(&raw) => {
            let mut set: Set<i64> = Set::new();
            set.scan(Some(raw))?;
            Ok(DocValue::IntSet(set))
        }
        DriverValue::NumberList(_) => {
            let mut set: Set<f64> = Set::new();
            set.scan(Some(raw))?;
            Ok(DocValue::FloatSet(set))
        }
        DriverValue::StringList(_) => {
            let mut set: Set<String> = Set::new();
            set.scan(Some(raw))?;
            Ok(DocValue::StringSet(set))
        }
        DriverValue::BytesList(_) => {
            let mut set: Set<Bytes> = Set::new();
            set.scan(Some(raw))?;
            Ok(DocValue::BinarySet(set))
        }
        DriverValue::List(_) => {
            let mut list = List::new();
            list.scan(Some(raw))?;
            Ok(DocValue::List(list))
        }
        DriverValue::Null => Ok(DocValue::Null),
        DriverValue::Bool(b) => Ok(DocValue::Bool(b)),
        DriverValue::Number(n) => Ok(DocValue::Number(n)),
        DriverValue::String(s) => Ok(DocValue::String(s)),
        DriverValue::Bytes(b) => Ok(DocValue::Bytes(b)),
    }
}
