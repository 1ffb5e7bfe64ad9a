//! HTTP handlers

pub mod movies;
