pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod input;
pub mod label;
pub mod page_header;
pub mod spinner;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use spinner::*;
