pub mod fertilizer;
pub mod nutrients;
