//! Country rule sets.

/// Hong Kong (HK, HKG).
pub mod hong_kong;

/// Hungary (HU, HUN).
pub mod hungary;

/// Mozambique (MZ, MOZ).
pub mod mozambique;

/// Thailand (TH, THA).
pub mod thailand;

pub use hong_kong::HongKong;
pub use hungary::Hungary;
pub use mozambique::Mozambique;
pub use thailand::Thailand;
