//! Built-in document templates
//!
//! One module per document kind. Each declares the kind's ordered sections
//! as pure render functions plus its optional clause library.

pub mod business_contract;
pub mod employment_contract;
pub mod llc_formation;
pub mod nda;
pub mod rental_agreement;
pub mod will_trust;
