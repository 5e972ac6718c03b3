pub mod config;
pub mod constants;
pub mod enter;
pub mod error;
pub mod media;
pub mod schedule;
pub mod starfield;
pub mod store;
pub mod surface;
pub mod tilt;
pub mod typewriter;
pub mod visitor;

pub use config::*;
pub use enter::*;
pub use error::StoreError;
pub use schedule::*;
pub use starfield::*;
pub use store::*;
pub use surface::*;
pub use typewriter::*;
pub use visitor::*;
