use std::sync::Arc;

use crate::adapters::{AppConfig, FFmpegAdapter, FFprobeAdapter, StdFsAdapter};
use crate::app::trim_interactor::TrimInteractor;
use crate::ports::{ExecutePort, FsPort, ProbePort};

pub trait AppContainer {
    fn trim_interactor(&self) -> Arc<TrimInteractor>;
}

/// Wires the real ffmpeg, ffprobe and filesystem adapters
pub struct DefaultAppContainer {
    trim_interactor: Arc<TrimInteractor>,
}

impl DefaultAppContainer {
    pub fn new(config: &AppConfig) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::new(&config.ffprobe));
        let execute_port = Arc::new(FFmpegAdapter::new(&config.ffmpeg));
        let fs_port = Arc::new(StdFsAdapter::new());

        let trim_interactor = Arc::new(TrimInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            execute_port as Arc<dyn ExecutePort>,
            fs_port as Arc<dyn FsPort>,
            config.suffix.as_str(),
        ));

        Self { trim_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn trim_interactor(&self) -> Arc<TrimInteractor> {
        Arc::clone(&self.trim_interactor)
    }
}
