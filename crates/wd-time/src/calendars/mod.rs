//! Region-specific holiday rules.

/// United Kingdom bank holidays.
pub mod united_kingdom;
