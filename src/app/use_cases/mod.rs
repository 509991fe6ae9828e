//! Use-Cases der Application-Layer-Orchestrierung.

pub mod image_io;
pub mod options;
pub mod selection;
pub mod viewport;
