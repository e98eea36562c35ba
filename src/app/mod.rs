// Application layer - Use case interactors

pub mod container;
pub mod trim_interactor;

pub use container::{AppContainer, DefaultAppContainer};
pub use trim_interactor::TrimInteractor;
