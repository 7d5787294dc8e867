//! Process-wide engine for callers that do not want to thread an
//! [`Engine`] handle through their code.

use std::sync::OnceLock;

use crate::engine::{Engine, EngineConfig};
use crate::error::EngineError;
use crate::lunar::LunarConverter;

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// Build and install the global engine. Fails if one is already installed.
pub fn init(config: EngineConfig, converter: impl LunarConverter + 'static) -> Result<(), EngineError> {
    let engine = Engine::new(config, converter)?;
    ENGINE
        .set(engine)
        .map_err(|_| EngineError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Result<&'static Engine, EngineError> {
    ENGINE.get().ok_or(EngineError::NotInitialized)
}
