// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end layout generation, driving the engine the way an external
//! layout recipe would: orient a site to two hotspot anchors, lay out an
//! extraction row feeding a centered depot grid, wire everything up, and
//! seal the scene.

use approx::assert_relative_eq;
use basegen_core::{ConnectorKind, Part, PartRegistry, PartSpec, Point3, Vector3};
use basegen_layout::{
    multi_wire, orient_to_anchors, wire_between, Replicate, SceneBuilder, TimestampPolicy,
    UserDataOverride, UserDataPolicy,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EXTRACTOR_SPACING: f64 = 3.3333333333;
const DEPOT_SPACING: f64 = 5.3333333333;

fn test_registry() -> PartRegistry {
    let mut registry = PartRegistry::new();
    registry
        .insert("extractor", PartSpec::sized(3.0, 2.0, 3.0))
        .insert("depot", PartSpec::sized(5.0, 5.0, 5.0))
        .insert("generator", PartSpec::sized(2.0, 3.0, 2.0));
    registry
}

#[test]
fn generates_a_complete_mine_layout() {
    let registry = test_registry();

    let resource_anchor = Point3::new(12.0, 40.0, -7.0);
    let power_anchor = Point3::new(62.0, 44.0, 13.0);
    let surface_up = Vector3::new(0.1, 1.0, -0.05);

    let site = orient_to_anchors(&surface_up, &resource_anchor, &power_anchor).unwrap();

    // Extraction column climbing the resource hotspot's up axis.
    let extractor = Part::new("extractor", site.part_frame()).with_jitter(0.01);
    let extractors = extractor
        .clone_on_axis(&site.axes.y, 6, EXTRACTOR_SPACING, UserDataPolicy::Inherit)
        .unwrap();
    assert_eq!(extractors.len(), 6);

    // Depot pad: a centered 3x3 grid off to the side of the column.
    let mut depot_seed = Part::new("depot", site.part_frame());
    depot_seed
        .translate_along(&site.axes.z, 10.0 * DEPOT_SPACING)
        .unwrap();
    let depots = depot_seed
        .clone_on_grid(&site.axes, 3, 3, DEPOT_SPACING, UserDataPolicy::Sequential(0))
        .unwrap();
    assert_eq!(depots.len(), 9);

    // The grid is centered on the seed, so its centroid is the seed position.
    let mut centroid = Vector3::zeros();
    for depot in &depots {
        centroid += depot.position().coords;
    }
    centroid /= depots.len() as f64;
    assert_relative_eq!(centroid, depot_seed.position().coords, epsilon = 1e-9);

    // One generator at the power hotspot, facing the resource column.
    let mut generator = Part::new("generator", site.part_frame());
    generator.set_position(power_anchor);

    // Power feed from the generator to the first extractor, then pipe runs
    // from every extractor to the depot pad.
    let mut scene = SceneBuilder::new();

    let power_run = wire_between(
        &generator.connector_position(ConnectorKind::Power, &registry).unwrap(),
        &extractors[0].connector_position(ConnectorKind::Power, &registry).unwrap(),
        "powerline",
        Some(100.0),
    )
    .unwrap();
    assert!(!power_run.is_empty());

    // Wire legs chain exactly from the generator plug to the extractor plug.
    let power_start = power_run[0].position();
    let mut cursor = power_start;
    for segment in &power_run {
        assert_relative_eq!(segment.position(), cursor, epsilon = 1e-9);
        assert!(segment.forward().norm() <= 100.0 + 1e-9);
        cursor = segment.position() + segment.forward();
    }
    assert_relative_eq!(
        cursor,
        extractors[0].connector_position(ConnectorKind::Power, &registry).unwrap(),
        epsilon = 1e-9
    );

    let depot_positions: Vec<Point3<f64>> = depots.iter().map(|d| d.position()).collect();

    scene.add_part(generator);
    scene.add_parts(extractors.clone());
    scene.add_parts(depots);
    scene.add_parts(power_run);

    for (extractor, depot_position) in extractors.iter().zip(depot_positions) {
        let route = [
            extractor.connector_position(ConnectorKind::Pipe, &registry).unwrap(),
            depot_position,
        ];
        let pipes = multi_wire(&route, "pipeline", None).unwrap();
        scene.add_parts(pipes);
    }

    // Tag the extraction column for the in-game selection mask, then stamp
    // generation order.
    scene.apply_user_data(&[
        UserDataOverride::for_all(0),
        UserDataOverride::for_tag("extractor", 131_072),
    ]);
    scene.stamp_timestamps(TimestampPolicy::Sequential {
        start: 1_700_000_000,
        step: 30,
    });

    let part_count = scene.len();
    let mut rng = StdRng::seed_from_u64(4_871);
    let records = scene.into_records(&mut rng);
    assert_eq!(records.len(), part_count);

    // Append order: generator first, then the extraction column.
    assert_eq!(records[0].type_tag, "generator");
    assert_eq!(records[1].type_tag, "extractor");
    assert_eq!(records[1].user_data, 131_072);
    assert_eq!(records[0].user_data, 0);

    // Sequential stamping follows append order.
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.timestamp, 1_700_000_000 + 30 * i as u64);
    }
}

#[test]
fn generation_is_reproducible_for_a_fixed_seed() {
    let build = || {
        let site = orient_to_anchors(
            &Vector3::y(),
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(25.0, 0.0, 10.0),
        )
        .unwrap();

        let extractor = Part::new("extractor", site.part_frame()).with_jitter(0.05);
        let mut scene = SceneBuilder::new();
        scene.add_parts(
            extractor
                .clone_on_axis(&site.axes.y, 8, EXTRACTOR_SPACING, UserDataPolicy::Sequential(1))
                .unwrap(),
        );
        scene.stamp_timestamps(TimestampPolicy::Shared(1_650_000_000));

        let mut rng = StdRng::seed_from_u64(7);
        scene.into_records(&mut rng)
    };

    assert_eq!(build(), build());
}

#[test]
fn jitter_perturbs_records_but_never_geometry() {
    let extractor = Part::new("extractor", basegen_core::Frame::at(Point3::origin()))
        .with_jitter(0.05);

    let clones = extractor
        .clone_on_axis(&Vector3::y(), 3, EXTRACTOR_SPACING, UserDataPolicy::Inherit)
        .unwrap();

    // Clone geometry is exact: jitter only exists in the emitted records.
    for (i, clone) in clones.iter().enumerate() {
        assert_relative_eq!(
            clone.position(),
            Point3::new(0.0, EXTRACTOR_SPACING * i as f64, 0.0),
            epsilon = 1e-12
        );
    }

    let mut scene = SceneBuilder::new();
    scene.add_parts(clones);
    let mut rng = StdRng::seed_from_u64(11);
    let records = scene.into_records(&mut rng);

    for (i, record) in records.iter().enumerate() {
        let exact = EXTRACTOR_SPACING * i as f64;
        assert!((record.position[1] - exact).abs() <= 0.025);
        assert!((record.position[0]).abs() <= 0.025);
    }
}
