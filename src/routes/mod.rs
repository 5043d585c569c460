//! Server-rendered pages

pub mod confirmation;
