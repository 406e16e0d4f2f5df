//! Entry submission flow: persistent button, modal form, intake

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;
