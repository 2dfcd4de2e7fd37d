pub mod check;
pub mod filter;
pub mod toast;
pub mod visibility;
