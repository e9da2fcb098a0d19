//! Country metadata resolution and listing

pub mod service;
pub mod traits;

pub use service::CountryService;
pub use traits::CountryProvider;
