pub mod error;
pub mod feature_flags;

pub mod auth_view;
pub mod capability;
pub mod config;
pub mod requests;
pub mod role;
pub mod session;
pub mod store;

pub use error::*;
pub use feature_flags::*;

pub use auth_view::*;
pub use capability::*;
pub use config::*;
pub use requests::*;
pub use role::*;
pub use session::*;
pub use store::*;
