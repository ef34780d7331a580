//! Shrink-to-fit images onto a fixed white canvas and encode them as WebP.

pub mod config;
pub mod converter;
pub mod error;
pub mod folder;
pub mod format;
pub mod report;
