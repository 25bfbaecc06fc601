pub mod compare;
pub mod error;
pub mod extract;
pub mod index;
pub mod normalize;
pub mod types;

pub use compare::*;
pub use error::*;
pub use extract::*;
pub use index::*;
pub use normalize::*;
pub use types::*;
