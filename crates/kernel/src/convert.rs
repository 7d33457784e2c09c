pub mod annotation;
pub mod path;
pub mod route;
pub mod tls;
