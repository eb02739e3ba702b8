//! 流配置模块

mod config;

pub use config::StreamConfiguration;
