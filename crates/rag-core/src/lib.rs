pub mod error;
pub mod traits;
pub mod types;
pub mod vocab;
pub mod weights;

pub use error::*;
pub use traits::*;
pub use types::*;
pub use vocab::*;
pub use weights::*;
