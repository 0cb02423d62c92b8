//! Integration tests for the lifecycle facade and its configuration file.

use std::path::PathBuf;
use tessera::geometry::Cuboid6;
use tessera::render::{PipelineElement, Sprite, SpriteAtlas, Uv, VertexFormat};
use tessera::{Dist, LifecyclePhase, Tessera, TesseraConfig, TesseraError};

fn temp_config_path(tag: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("test_tessera_{tag}_{id}"))
        .join("tessera.toml")
}

#[test]
fn test_common_setup_creates_default_config() {
    let path = temp_config_path("create");
    let mut lib = Tessera::new(Dist::Client);

    lib.on_common_setup(&path).unwrap();

    assert!(path.exists());
    assert_eq!(lib.phase(), LifecyclePhase::CommonSetup);
    assert_eq!(*lib.config(), TesseraConfig::default());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(TesseraConfig::from_toml_str(&written).unwrap(), TesseraConfig::default());

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_existing_config_drives_pipeline_builder() {
    let path = temp_config_path("existing");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[pipeline]\nreinterpolate_clamped = false\n").unwrap();

    let mut lib = Tessera::new(Dist::Client);
    lib.on_common_setup(&path).unwrap();
    lib.on_client_setup().unwrap();

    assert!(!lib.config().pipeline.reinterpolate_clamped);
    // Unspecified sections keep their defaults.
    assert!(lib.config().sprites.warn_on_fallback);

    let pipeline = lib
        .pipeline_builder(VertexFormat::block())
        .clamp(Cuboid6::FULL_BLOCK)
        .build();
    assert_eq!(pipeline.stages().len(), 1);
    assert!(matches!(pipeline.stages()[0], PipelineElement::Clamp(_)));

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_malformed_config_is_reported() {
    let path = temp_config_path("malformed");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[pipeline\n").unwrap();

    let mut lib = Tessera::new(Dist::Client);
    let err = lib.on_common_setup(&path).unwrap_err();

    assert!(matches!(err, TesseraError::Config(_)));
    assert_eq!(lib.phase(), LifecyclePhase::Constructed);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_phases_must_run_in_order() {
    let path = temp_config_path("order");
    let mut lib = Tessera::new(Dist::DedicatedServer);

    assert!(matches!(
        lib.on_server_setup(),
        Err(TesseraError::OutOfOrder { .. })
    ));

    lib.on_common_setup(&path).unwrap();
    assert!(matches!(
        lib.on_common_setup(&path),
        Err(TesseraError::OutOfOrder {
            attempted: LifecyclePhase::CommonSetup,
            current: LifecyclePhase::CommonSetup,
        })
    ));

    assert!(matches!(
        lib.on_client_setup(),
        Err(TesseraError::WrongDist {
            dist: Dist::DedicatedServer,
            ..
        })
    ));

    lib.on_server_setup().unwrap();
    assert_eq!(lib.phase(), LifecyclePhase::ServerSetup);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_sprite_lookup_and_format_cache() {
    let mut atlas = SpriteAtlas::new();
    atlas.register(Sprite::new("stone", 0.0, 0.5, 0.0, 0.5));

    let lib = Tessera::new(Dist::Client);
    assert_eq!(lib.sprite_for_uv(&atlas, Uv::new(0.25, 0.25)).name, "stone");
    assert_eq!(
        lib.sprite_for_uv(&atlas, Uv::new(0.75, 0.75)).name,
        SpriteAtlas::MISSING_NAME
    );

    let format = VertexFormat::block();
    let indices = lib.format_indices(&format);
    assert_eq!(indices.position, Some(0));
    assert_eq!(lib.format_indices(&format), indices);
}
