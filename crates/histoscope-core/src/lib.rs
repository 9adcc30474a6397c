pub mod annotate;
pub mod config;
pub mod consts;
pub mod error;
pub mod geom;
pub mod grid;
pub mod measure;
pub mod navigator;
pub mod patch;
pub mod session;
pub mod transform;
pub mod viewport;
