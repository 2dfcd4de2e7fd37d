pub mod content;
pub mod section;

pub use content::*;
pub use section::*;
