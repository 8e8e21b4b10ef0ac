//! Utility modules shared by the scan and generator stages.

pub mod date;
pub mod path;
pub mod plural;
