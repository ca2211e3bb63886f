//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing an entity update.
#[derive(Clone, Copy, Debug)]
pub struct Update;

/// Marker type describing the last login of an entity.
#[derive(Clone, Copy, Debug)]
pub struct LastLogin;
