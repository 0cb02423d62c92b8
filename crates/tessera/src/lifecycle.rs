//! Lifecycle callbacks.
//!
//! The host mod loader drives the library through a fixed order:
//!
//! ```text
//! Constructed ─▶ CommonSetup ─┬─▶ ClientSetup          (client only)
//!                             └─▶ ServerSetup          (dedicated server only)
//! ```
//!
//! Common setup loads the configuration. Everything that depends on it
//! (pipeline builders, sprite lookups) reads the loaded values.

use crate::config::TesseraConfig;
use crate::error::{TesseraError, TesseraResult};
use std::path::Path;
use tessera_render::{
    sprite_for_uv_logged, ElementIndices, FormatCache, PipelineBuilder, Sprite, SpriteSource, Uv,
    VertexFormat,
};

/// Which side the library runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dist {
    /// Game client, renders models.
    Client,
    /// Headless server.
    DedicatedServer,
}

/// Lifecycle position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecyclePhase {
    /// Created, nothing loaded.
    Constructed,
    /// Configuration loaded.
    CommonSetup,
    /// Client-side setup finished.
    ClientSetup,
    /// Server-side setup finished.
    ServerSetup,
}

/// Library state owned by the host.
#[derive(Debug)]
pub struct Tessera {
    dist: Dist,
    phase: LifecyclePhase,
    config: TesseraConfig,
    formats: FormatCache,
}

impl Tessera {
    /// Identifier the host registers the library under.
    pub const MOD_ID: &'static str = "tessera";

    /// Default configuration file, relative to the game directory.
    pub const CONFIG_PATH: &'static str = "config/tessera.toml";

    /// Creates the library for one side. Configuration stays at defaults
    /// until [`Tessera::on_common_setup`].
    #[must_use]
    pub fn new(dist: Dist) -> Self {
        tracing::info!(?dist, "tessera constructed");
        Self {
            dist,
            phase: LifecyclePhase::Constructed,
            config: TesseraConfig::default(),
            formats: FormatCache::new(),
        }
    }

    /// Common setup: loads or creates the configuration file.
    ///
    /// # Errors
    ///
    /// [`TesseraError::OutOfOrder`] if called twice,
    /// [`TesseraError::Config`] if the file cannot be loaded.
    pub fn on_common_setup(&mut self, config_path: &Path) -> TesseraResult<()> {
        self.advance(LifecyclePhase::Constructed, LifecyclePhase::CommonSetup)?;
        self.config = TesseraConfig::load_or_create(config_path)?;
        self.phase = LifecyclePhase::CommonSetup;
        tracing::info!(config = %config_path.display(), "tessera common setup complete");
        Ok(())
    }

    /// Client setup. Resolves the built-in block format so the first model
    /// bake does not pay for it.
    ///
    /// # Errors
    ///
    /// [`TesseraError::WrongDist`] on a dedicated server,
    /// [`TesseraError::OutOfOrder`] before common setup.
    pub fn on_client_setup(&mut self) -> TesseraResult<()> {
        self.require_dist(Dist::Client, LifecyclePhase::ClientSetup)?;
        self.advance(LifecyclePhase::CommonSetup, LifecyclePhase::ClientSetup)?;
        let indices = self.formats.indices(&VertexFormat::block());
        self.phase = LifecyclePhase::ClientSetup;
        tracing::info!(?indices, "tessera client setup complete");
        Ok(())
    }

    /// Dedicated server setup.
    ///
    /// # Errors
    ///
    /// [`TesseraError::WrongDist`] on a client,
    /// [`TesseraError::OutOfOrder`] before common setup.
    pub fn on_server_setup(&mut self) -> TesseraResult<()> {
        self.require_dist(Dist::DedicatedServer, LifecyclePhase::ServerSetup)?;
        self.advance(LifecyclePhase::CommonSetup, LifecyclePhase::ServerSetup)?;
        self.phase = LifecyclePhase::ServerSetup;
        tracing::info!("tessera server setup complete");
        Ok(())
    }

    fn advance(&self, expected: LifecyclePhase, attempted: LifecyclePhase) -> TesseraResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TesseraError::OutOfOrder {
                attempted,
                current: self.phase,
            })
        }
    }

    fn require_dist(&self, dist: Dist, attempted: LifecyclePhase) -> TesseraResult<()> {
        if self.dist == dist {
            Ok(())
        } else {
            Err(TesseraError::WrongDist {
                attempted,
                dist: self.dist,
            })
        }
    }

    /// A pipeline builder for `format`, configured from the loaded file.
    #[must_use]
    pub fn pipeline_builder(&self, format: VertexFormat) -> PipelineBuilder {
        let indices = self.formats.indices(&format);
        PipelineBuilder::new(format)
            .with_indices(indices)
            .reinterpolate_clamped(self.config.pipeline.reinterpolate_clamped)
            .trace_culling(self.config.pipeline.trace_culling)
    }

    /// Resolved element indices for `format`, cached across calls.
    #[must_use]
    pub fn format_indices(&self, format: &VertexFormat) -> ElementIndices {
        self.formats.indices(format)
    }

    /// Sprite-for-uv fallback lookup, logged per configuration.
    #[must_use]
    pub fn sprite_for_uv<'a, S: SpriteSource + ?Sized>(&self, source: &'a S, uv: Uv) -> &'a Sprite {
        sprite_for_uv_logged(source, uv, self.config.sprites.warn_on_fallback)
    }

    /// Side the library runs on.
    #[must_use]
    pub const fn dist(&self) -> Dist {
        self.dist
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &TesseraConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_setup_before_common_is_rejected() {
        let mut lib = Tessera::new(Dist::Client);
        let err = lib.on_client_setup().unwrap_err();
        assert!(matches!(
            err,
            TesseraError::OutOfOrder {
                attempted: LifecyclePhase::ClientSetup,
                current: LifecyclePhase::Constructed,
            }
        ));
    }

    #[test]
    fn test_server_setup_on_client_is_rejected() {
        let mut lib = Tessera::new(Dist::Client);
        assert!(matches!(
            lib.on_server_setup(),
            Err(TesseraError::WrongDist { dist: Dist::Client, .. })
        ));
    }

    #[test]
    fn test_pipeline_builder_uses_default_config() {
        let lib = Tessera::new(Dist::Client);
        let pipeline = lib
            .pipeline_builder(VertexFormat::block())
            .clamp(tessera_core::Cuboid6::FULL_BLOCK)
            .build();
        assert_eq!(pipeline.stages().len(), 2);
    }
}
