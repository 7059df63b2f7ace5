//! Configuration file parsing and environment overrides

pub mod router_toml;

pub use router_toml::{
    COLOR_ENV, CONFIG_FILE_NAME, ColorOption, Config, FORMAT_ENV, OutputConfig, OutputFormat,
};
