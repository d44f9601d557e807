pub mod codec;
pub mod dump;
pub mod errors;
pub mod formats;
pub mod keys;
pub mod parser_config;
pub mod store;
pub mod traits;
pub mod typed;
pub mod utils;
pub mod validation;

pub use codec::*;
pub use errors::*;
pub use formats::*;
pub use parser_config::*;
pub use store::*;
pub use traits::*;
pub use typed::*;
pub use validation::*;
