pub mod fallback;
pub mod store;
pub mod validation;
