//! Declarative motion-path export.

pub mod css;
