pub mod assembler;
pub mod error;
pub mod error_utils;
pub mod filter;
pub mod images;
pub mod title;
pub mod types;

pub use assembler::*;
pub use error::*;
pub use error_utils::*;
pub use filter::*;
pub use images::*;
pub use title::*;
pub use types::*;
