use glam::Vec3;
use plexus_core::proximity::max_edges;
use plexus_core::{NetworkConfig, ParticleNetwork};
use proptest::prelude::*;

fn any_config() -> impl Strategy<Value = NetworkConfig> {
    (
        1usize..40,
        (0.0f32..20.0, 0.0f32..20.0, 0.0f32..10.0),
        (0.0f32..0.5, 0.0f32..0.5, 0.0f32..0.25),
        0.0f32..6.0,
    )
        .prop_map(|(count, (bx, by, bz), (sx, sy, sz), threshold)| NetworkConfig {
            particle_count: count,
            bounds: Vec3::new(bx, by, bz),
            speed_range: Vec3::new(sx, sy, sz),
            connection_distance: threshold,
            ..NetworkConfig::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn particles_never_overshoot_more_than_one_step(
        config in any_config(),
        seed in any::<u64>(),
        steps in 1usize..300,
    ) {
        let mut network = ParticleNetwork::with_seed(config, seed).unwrap();
        let half = config.half_extents();

        for step in 0..steps {
            network.step(step as f32 * 0.016);
            let particles = network.particles();
            let states = particles.positions().iter().zip(particles.velocities());
            for (i, (p, v)) in states.enumerate() {
                let limit = half + v.abs() + Vec3::splat(1e-3);
                prop_assert!(
                    p.abs().cmple(limit).all(),
                    "particle {i} at step {step}: pos={p} vel={v} half={half}"
                );
            }
        }
    }

    #[test]
    fn edges_are_exactly_the_close_pairs(
        config in any_config(),
        seed in any::<u64>(),
        steps in 1usize..20,
    ) {
        let mut network = ParticleNetwork::with_seed(config, seed).unwrap();
        for step in 0..steps {
            network.step(step as f32);
        }

        let positions = network.particles().positions().to_vec();
        let mut expected = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if positions[i].distance(positions[j]) < config.connection_distance {
                    expected.extend_from_slice(&positions[i].to_array());
                    expected.extend_from_slice(&positions[j].to_array());
                }
            }
        }

        let frame = network.frame();
        prop_assert_eq!(frame.segments(), &expected[..]);
    }

    #[test]
    fn buffer_lengths_hold(
        config in any_config(),
        seed in any::<u64>(),
    ) {
        let n = config.particle_count;
        let mut network = ParticleNetwork::with_seed(config, seed).unwrap();
        let frame = network.step(1.0);

        prop_assert_eq!(frame.positions().len(), 3 * n);
        prop_assert_eq!(frame.segments().len() % 6, 0);
        prop_assert!(frame.segments().len() <= 3 * n * (n - 1));
        prop_assert_eq!(frame.padded_segments().len(), 6 * max_edges(n));
        prop_assert!(frame.padded_segments()[frame.segments().len()..].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn seeded_runs_are_reproducible(
        config in any_config(),
        seed in any::<u64>(),
        times in prop::collection::vec(0.0f32..1000.0, 1..30),
    ) {
        let mut a = ParticleNetwork::with_seed(config, seed).unwrap();
        let mut b = ParticleNetwork::with_seed(config, seed).unwrap();

        for &t in &times {
            let fa = a.step(t);
            let expected: Vec<u32> = fa
                .positions()
                .iter()
                .chain(fa.padded_segments())
                .map(|x| x.to_bits())
                .collect();
            let fb = b.step(t);
            let actual: Vec<u32> = fb
                .positions()
                .iter()
                .chain(fb.padded_segments())
                .map(|x| x.to_bits())
                .collect();
            prop_assert_eq!(expected, actual);
        }
    }
}
