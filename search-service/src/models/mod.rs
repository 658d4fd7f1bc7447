pub mod goodreads;
pub mod request;
pub mod responses;
