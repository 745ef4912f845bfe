//! Common contract shared by the collection containers.

use crate::attr::AttributeValue;
use crate::driver::DriverValue;
use crate::error::Result;

/// A rendered bound parameter: a SQL placeholder plus the exact wire member
/// it binds.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundExpr {
    /// Always the dialect's placeholder, `?`.
    pub sql: &'static str,
    /// The container's exact attribute-value member (e.g. `L` for a List).
    pub var: AttributeValue,
}

impl BoundExpr {
    pub fn new(var: AttributeValue) -> Self {
        Self { sql: "?", var }
    }
}

/// Contract implemented by List, Map, Set and TypedList.
pub trait Collection {
    /// Opaque tag identifying the container kind to the ORM schema layer.
    fn data_type_tag(&self) -> &'static str;

    /// Populate the receiver from a driver-returned value.
    ///
    /// A non-empty receiver fails with `collection already contains item`
    /// and is left unchanged. A `None` raw leaves the receiver empty. A raw
    /// of the wrong shape clears the receiver and returns the appropriate
    /// scan error.
    fn scan(&mut self, raw: Option<DriverValue>) -> Result<()>;

    /// Render the container as a bound parameter.
    fn bind_expr(&self) -> Result<BoundExpr>;
}
