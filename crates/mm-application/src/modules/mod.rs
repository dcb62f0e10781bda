//! Business modules
//!
//! Every module exposes an `ID` constant and a `manifest()` describing the
//! capabilities it provides and the slots it declares. Module state is fixed
//! at construction and wiring; operations take `&self`.

pub mod address_service;
pub mod email_service;
pub mod user_service;

pub use address_service::AddressService;
pub use email_service::EmailService;
pub use user_service::UserService;
