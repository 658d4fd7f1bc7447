pub mod goodreads;
pub mod validation;
