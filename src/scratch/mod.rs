pub mod pointer;
pub mod tracker;
