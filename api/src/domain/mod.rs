//! Domain layer
//!
//! - `entities`: the `Item` model and its listing options
//! - `ports`: the repository trait the use cases depend on

pub mod entities;
pub mod ports;
