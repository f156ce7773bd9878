use crate::error::Result;

/// Check that an entity's construction parameters describe a well-formed object.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
