use glam::Vec3;
use plexus_core::error::Axis;
use plexus_core::{ConfigError, NetworkConfig};

#[test]
fn test_config_default_values() {
    let config = NetworkConfig::default();

    assert_eq!(config.particle_count, 80);
    assert_eq!(config.bounds, Vec3::new(15.0, 15.0, 8.0));
    assert_eq!(config.speed_range, Vec3::new(0.01, 0.01, 0.005));
    assert_eq!(config.connection_distance, 2.5);
    assert_eq!(config.rotation_rate, 0.02);
    assert_eq!(config.half_extents(), Vec3::new(7.5, 7.5, 4.0));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_new_keeps_default_speed_and_rotation() {
    let config = NetworkConfig::new(3, Vec3::splat(10.0), 100.0);

    assert_eq!(config.particle_count, 3);
    assert_eq!(config.bounds, Vec3::splat(10.0));
    assert_eq!(config.connection_distance, 100.0);
    assert_eq!(config.speed_range, NetworkConfig::default().speed_range);
    assert_eq!(config.rotation_rate, NetworkConfig::default().rotation_rate);
}

#[test]
fn test_zero_count_rejected() {
    let config = NetworkConfig {
        particle_count: 0,
        ..NetworkConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::EmptyParticleSet));
}

#[test]
fn test_bad_bounds_rejected() {
    let config = NetworkConfig::new(10, Vec3::new(1.0, f32::INFINITY, 1.0), 1.0);
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidBounds { axis: Axis::Y, value: f32::INFINITY })
    );

    let config = NetworkConfig::new(10, Vec3::new(1.0, 1.0, -2.0), 1.0);
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidBounds { axis: Axis::Z, value: -2.0 })
    );

    let config = NetworkConfig::new(10, Vec3::new(f32::NAN, 1.0, 1.0), 1.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidBounds { axis: Axis::X, .. })
    ));
}

#[test]
fn test_zero_extent_bounds_allowed() {
    let config = NetworkConfig::new(10, Vec3::new(10.0, 10.0, 0.0), 1.0);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_bad_speed_range_rejected() {
    let config = NetworkConfig {
        speed_range: Vec3::new(0.01, -0.01, 0.0),
        ..NetworkConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidSpeedRange { axis: Axis::Y, value: -0.01 })
    );
}

#[test]
fn test_connection_distance_validation() {
    assert_eq!(NetworkConfig::new(2, Vec3::ONE, 0.0).validate(), Ok(()));
    assert_eq!(
        NetworkConfig::new(2, Vec3::ONE, -1.0).validate(),
        Err(ConfigError::InvalidConnectionDistance(-1.0))
    );
    assert!(matches!(
        NetworkConfig::new(2, Vec3::ONE, f32::NAN).validate(),
        Err(ConfigError::InvalidConnectionDistance(_))
    ));
}

#[test]
fn test_rotation_rate_validation() {
    let config = NetworkConfig {
        rotation_rate: -0.5,
        ..NetworkConfig::default()
    };
    assert_eq!(config.validate(), Ok(()), "negative rate just spins the other way");

    let config = NetworkConfig {
        rotation_rate: f32::NEG_INFINITY,
        ..NetworkConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidRotationRate(f32::NEG_INFINITY))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::EmptyParticleSet.to_string(),
        "particle count must be at least 1"
    );
    assert_eq!(
        ConfigError::InvalidBounds { axis: Axis::Z, value: -2.0 }.to_string(),
        "bounds.z must be finite and non-negative, got -2"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_partial_json_fills_defaults() {
    let config: NetworkConfig =
        serde_json::from_str(r#"{ "particle_count": 20, "connection_distance": 1.5 }"#).unwrap();

    assert_eq!(config.particle_count, 20);
    assert_eq!(config.connection_distance, 1.5);
    assert_eq!(config.bounds, NetworkConfig::default().bounds);
}

#[test]
fn test_unaddressable_particle_count_rejected() {
    let count = 1usize << (usize::BITS / 2 + 1);
    let config = NetworkConfig::new(count, Vec3::splat(10.0), 1.0);

    assert_eq!(config.line_buffer_bytes(), None);
    assert_eq!(config.validate(), Err(ConfigError::TooManyParticles { count }));

    let config = NetworkConfig::new(usize::MAX, Vec3::splat(10.0), 1.0);
    assert_eq!(
        config.validate(),
        Err(ConfigError::TooManyParticles { count: usize::MAX })
    );
}

#[test]
fn test_line_buffer_bytes_for_default_field() {
    // 3160 pairs, 24 bytes each
    assert_eq!(NetworkConfig::default().line_buffer_bytes(), Some(3160 * 24));
}
