pub mod dates;
pub mod document;
pub mod filters;
pub mod validation;
