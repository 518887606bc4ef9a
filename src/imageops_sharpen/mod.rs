pub mod adapter;
pub mod config;
pub mod convolve;
pub mod kernel;
pub mod pixel_buffer;
pub mod session;
pub mod sharpen;
pub mod strategy;
