pub mod constants;
pub mod field;
pub mod mock;
pub mod records;
pub mod spectrum;
pub mod transport;

pub use constants::*;
pub use field::*;
pub use mock::*;
pub use records::*;
pub use spectrum::*;
pub use transport::*;
