pub mod classification;
pub mod preview;

pub use classification::{interpret, Classification};
pub use preview::encode_preview;
