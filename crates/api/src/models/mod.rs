pub mod element;
pub mod naming;
pub mod selection;
pub mod util;

pub use element::*;
pub use naming::{DotPathConvention, NamingConvention};
pub use selection::*;
