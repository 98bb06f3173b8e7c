//! Domain and date types shared by all registry clients.

mod date;
mod domain;

pub use date::{DateKind, RenewalTerm};
pub use domain::{DomainName, SuffixSet};
