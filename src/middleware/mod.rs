// Middleware

pub mod cors;

pub use cors::apply_cors;
