pub mod form;

pub use form::SanitizedValues;
