//! Financial-market rule sets.

/// US government securities market (USGS).
pub mod us_government_securities;

pub use us_government_securities::UnitedStatesGovernmentSecurities;
