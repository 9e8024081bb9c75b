/// Defines the `Rejection` and `DecodeError` enums
pub mod error;
/// Defines `FragmentResult`, `ParseResult` and `Side`
pub mod result;
/// Defines the selector records and their units
pub mod selector;

pub use error::*;
pub use result::*;
pub use selector::*;
