// Domain layer - Trim modes, requests and the rules that turn them into commands

pub mod model;
pub mod rules;
