// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod fs_std;
pub mod probe_ffprobe;
pub mod toml_config;

// Re-export adapters
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_std::StdFsAdapter;
pub use probe_ffprobe::FFprobeAdapter;
pub use toml_config::{AppConfig, ConfigOverrides, TomlConfigAdapter};
