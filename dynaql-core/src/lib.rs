pub mod attr;
pub mod collection;
pub mod driver;
pub mod error;
pub mod list;
pub mod map;
pub mod record;
pub mod resolve;
pub mod set;
pub mod typed_list;
pub mod value;

pub use attr::{decode, encode, encode_as, format_number, AttrKind, AttributeValue};
pub use collection::{BoundExpr, Collection};
pub use driver::DriverValue;
pub use error::{DriverError, Error, Result, SetKind};
pub use list::List;
pub use map::Map;
pub use record::{bind, column_name, Record};
pub use resolve::resolve;
pub use set::{Set, SetElement};
pub use typed_list::TypedList;
pub use value::DocValue;
