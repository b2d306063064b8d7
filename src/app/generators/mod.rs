//! Generators shipped with the binary.

mod express;

pub use express::{EXPRESS_APP, EXPRESS_APP_BASIC, express_app, express_app_basic};

use crate::domain::{AppError, GeneratorRegistry};

/// Registry holding every built-in generator.
pub fn builtin_registry() -> Result<GeneratorRegistry, AppError> {
    let mut registry = GeneratorRegistry::new();
    registry.register(express_app())?;
    registry.register(express_app_basic())?;
    Ok(registry)
}
