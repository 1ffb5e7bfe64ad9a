//! Request/response bodies

pub mod movies;
