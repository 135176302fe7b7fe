//! Unit tests for trj-agent.

use trj_core::{UniqueId, VizType};

use crate::{AgentData, AgentLists};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn ids(rows: &[&[u64]]) -> Vec<Vec<UniqueId>> {
    rows.iter().map(|r| r.iter().map(|&i| UniqueId(i)).collect()).collect()
}

fn names(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect()
}

fn viz(rows: &[&[u16]]) -> Vec<Vec<VizType>> {
    rows.iter().map(|r| r.iter().map(|&v| VizType(v)).collect()).collect()
}

/// Three frames with 3, 4, and 3 agents.
fn jagged_lists() -> AgentLists {
    AgentLists {
        times:      vec![0.0, 0.1, 0.2],
        n_agents:   Some(vec![3, 4, 3]),
        viz_types:  viz(&[&[1000, 1001, 1001], &[1001, 1000, 1001, 1001], &[1000, 1000, 1001]]),
        unique_ids: ids(&[&[0, 1, 2], &[0, 1, 2, 3], &[0, 1, 2]]),
        type_names: names(&[&["H", "A", "C"], &["L", "D", "A", "U"], &["E", "Q", "K"]]),
        positions:  vec![
            vec![[4.89610492, -29.81564851, 40.77254057], [0.0; 3], [0.0; 3]],
            vec![[0.0; 3], [-43.37181102, -13.41127423, -17.31316927], [0.0; 3], [0.0; 3]],
            vec![
                [-24.91450698, -44.79360525, 13.32273796],
                [4.10861266, 43.86451151, 21.93697483],
                [0.0; 3],
            ],
        ],
        radii:      vec![
            vec![8.38656327, 1.0, 1.0],
            vec![1.0, 6.69209780, 1.0, 1.0],
            vec![8.91022619, 9.01379396, 1.0],
        ],
        ..AgentLists::default()
    }
}

/// Three fibers per frame with ragged subpoint lists.
fn fiber_lists() -> AgentLists {
    AgentLists {
        times:       vec![0.0, 1.00001, 2.00001],
        viz_types:   viz(&[&[1001; 3], &[1001; 3], &[1001; 3]]),
        unique_ids:  ids(&[&[1, 2, 3], &[1, 2, 3], &[1, 2, 3]]),
        type_names:  names(&[&["H", "A", "C"], &["L", "D", "A"], &["K", "K", "A"]]),
        n_subpoints: vec![vec![9, 12, 6], vec![9, 9, 6], vec![9, 6, 6]],
        subpoints:   vec![
            vec![
                (1..=10).map(f64::from).collect(),
                (1..=12).map(|v| -f64::from(v)).collect(),
                vec![0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 0.0, 0.0],
            ],
            vec![vec![2.0; 12], vec![3.0; 9], vec![4.0; 6]],
            vec![vec![5.0; 9], vec![6.0; 12], vec![7.0; 7]],
        ],
        ..AgentLists::default()
    }
}

// ── from_lists ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod from_lists {
    use super::*;
    use crate::AgentError;

    #[test]
    fn agent_dimension_is_global_max() {
        let data = AgentData::from_lists(&jagged_lists(), 1.0).unwrap();
        assert_eq!(data.total_steps(), 3);
        assert_eq!(data.n_agents, vec![3, 4, 3]);
        assert_eq!(data.max_agents(), 4);
        assert_eq!(data.viz_types.shape(), (3, 4));
        assert_eq!(data.unique_ids.shape(), (3, 4));
        assert_eq!(data.positions.shape(), (3, 4));
        assert_eq!(data.radii.shape(), (3, 4));
        assert_eq!(data.n_subpoints.shape(), (3, 4));
    }

    #[test]
    fn padding_is_zero() {
        let data = AgentData::from_lists(&jagged_lists(), 1.0).unwrap();
        for frame in [0, 2] {
            assert_eq!(data.viz_types.get(frame, 3), VizType(0));
            assert_eq!(data.unique_ids.get(frame, 3), UniqueId(0));
            assert_eq!(data.positions.get(frame, 3), [0.0; 3]);
            assert_eq!(data.radii.get(frame, 3), 0.0);
        }
    }

    #[test]
    fn live_values_copied_verbatim() {
        let data = AgentData::from_lists(&jagged_lists(), 1.0).unwrap();
        assert_eq!(data.types[1], vec!["L", "D", "A", "U"]);
        assert_eq!(data.viz_types.row(1), &[VizType(1001), VizType(1000), VizType(1001), VizType(1001)]);
        assert_eq!(data.positions.get(1, 1), [-43.37181102, -13.41127423, -17.31316927]);
        assert_eq!(data.radii.get(2, 1), 9.01379396);
        assert_eq!(data.unique_ids.get(1, 3), UniqueId(3));
    }

    #[test]
    fn matches_expected_padded_arrays() {
        use crate::Grid;

        let data = AgentData::from_lists(&jagged_lists(), 1.0).unwrap();
        let expected_radii = Grid::from_rows(&[
            vec![8.38656327, 1.0, 1.0, 0.0],
            vec![1.0, 6.69209780, 1.0, 1.0],
            vec![8.91022619, 9.01379396, 1.0, 0.0],
        ]);
        assert_eq!(data.radii, expected_radii);
        assert_eq!(data.times, vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn scale_factor_law() {
        let k = 10.0;
        let unit = AgentData::from_lists(&fiber_lists(), 1.0).unwrap();
        let scaled = AgentData::from_lists(&fiber_lists(), k).unwrap();
        for f in 0..unit.total_steps() {
            for a in 0..unit.max_agents() {
                let p = unit.positions.get(f, a);
                assert_eq!(scaled.positions.get(f, a), [p[0] * k, p[1] * k, p[2] * k]);
                assert_eq!(scaled.radii.get(f, a), unit.radii.get(f, a) * k);
                let expected: Vec<f64> = unit.subpoints.slot(f, a).iter().map(|v| v * k).collect();
                assert_eq!(scaled.subpoints.slot(f, a), expected.as_slice());
            }
        }
        // Ids and counts are not scaled.
        assert_eq!(scaled.unique_ids, unit.unique_ids);
        assert_eq!(scaled.n_subpoints, unit.n_subpoints);
        assert_eq!(scaled.times, unit.times);
    }

    #[test]
    fn scale_factor_applies_to_default_radius() {
        let lists = AgentLists {
            times:      vec![0.0],
            type_names: names(&[&["A"]]),
            ..AgentLists::default()
        };
        let data = AgentData::from_lists(&lists, 0.5).unwrap();
        assert_eq!(data.radii.get(0, 0), 0.5);
        assert_eq!(data.viz_types.get(0, 0), VizType::DEFAULT);
        assert_eq!(data.unique_ids.get(0, 0), UniqueId(0));
    }

    #[test]
    fn subpoints_padded_per_frame() {
        let data = AgentData::from_lists(&fiber_lists(), 1.0).unwrap();
        assert_eq!(data.subpoints.widths(), &[12, 9, 6]);
        assert_eq!(data.max_subpoints(), 12);
        assert_eq!(data.n_subpoints.row(0), &[9, 12, 6]);

        // True values, then zero padding up to the frame width.
        let first = data.subpoints.slot(0, 0);
        assert_eq!(&first[..9], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(&first[9..], &[0.0, 0.0, 0.0]);
        assert_eq!(data.subpoints.slot(0, 2)[..6], [0.5, 1.5, 2.5, 3.5, 4.5, 5.5]);

        // Values listed past n_subpoints are dropped.
        assert_eq!(data.subpoints.slot(1, 0), &[2.0; 9]);
        assert_eq!(data.agent(2, 1).subpoints, &[6.0; 6]);
    }

    #[test]
    fn n_agents_defaults_to_type_names() {
        let mut lists = jagged_lists();
        lists.n_agents = None;
        let data = AgentData::from_lists(&lists, 1.0).unwrap();
        assert_eq!(data.n_agents, vec![3, 4, 3]);
    }

    #[test]
    fn values_past_live_count_are_dropped() {
        let mut lists = jagged_lists();
        lists.n_agents = Some(vec![2, 4, 3]);
        let data = AgentData::from_lists(&lists, 1.0).unwrap();
        assert_eq!(data.max_agents(), 4);
        assert_eq!(data.types[0], vec!["H", "A"]);
        assert_eq!(data.radii.get(0, 2), 0.0);
        assert_eq!(data.viz_types.get(0, 2), VizType(0));
    }

    #[test]
    fn outer_length_mismatch_is_error() {
        let mut lists = jagged_lists();
        lists.radii.pop();
        let err = AgentData::from_lists(&lists, 1.0).unwrap_err();
        assert!(matches!(err, AgentError::LengthMismatch { field: "radii", expected: 3, got: 2 }));
    }

    #[test]
    fn missing_type_names_is_error() {
        let mut lists = jagged_lists();
        lists.n_agents = Some(vec![3, 5, 3]);
        let err = AgentData::from_lists(&lists, 1.0).unwrap_err();
        assert!(matches!(err, AgentError::MissingTypeNames { frame: 1, expected: 5, got: 4 }));
    }

    #[test]
    fn declared_subpoints_beyond_list_is_error() {
        let mut lists = fiber_lists();
        lists.n_subpoints[2][2] = 9;
        let err = AgentData::from_lists(&lists, 1.0).unwrap_err();
        assert!(matches!(err, AgentError::SubpointOverrun { frame: 2, agent: 2, declared: 9, available: 7 }));
    }

    #[test]
    fn zero_scale_factor_rejected() {
        assert!(AgentData::from_lists(&jagged_lists(), 0.0).is_err());
    }

    #[test]
    fn equal_inputs_give_equal_data() {
        let a = AgentData::from_lists(&fiber_lists(), 1.0).unwrap();
        let b = AgentData::from_lists(&fiber_lists(), 1.0).unwrap();
        assert_eq!(a, b);
        let mut c = b.clone();
        c.types[2][0] = "Z".into();
        assert_ne!(a, c);
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;
    use crate::{Agent, AgentError, Dimensions};

    #[test]
    fn from_dimensions_is_zero_filled() {
        let data = AgentData::from_dimensions(Dimensions::new(4, 5));
        assert_eq!(data.total_steps(), 4);
        assert_eq!(data.max_agents(), 5);
        assert_eq!(data.max_subpoints(), 0);
        assert!(data.n_agents.iter().all(|&n| n == 0));
        assert!(data.types.iter().all(Vec::is_empty));
        assert_eq!(data.radii.row(3), &[0.0; 5]);
        data.validate().unwrap();
    }

    #[test]
    fn two_phase_subpoints() {
        let mut data = AgentData::from_dimensions(Dimensions::new(2, 2));
        data.allocate_subpoints(&[6, 3]).unwrap();
        data.set_subpoints(0, 1, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        data.set_subpoints(1, 0, &[7.0, 8.0]).unwrap();
        assert_eq!(data.n_subpoints.get(0, 1), 6);
        assert_eq!(data.subpoints.slot(1, 0), &[7.0, 8.0, 0.0]);

        let err = data.set_subpoints(1, 1, &[0.0; 4]).unwrap_err();
        assert!(matches!(err, AgentError::SubpointWidth { frame: 1, agent: 1, got: 4, width: 3 }));
    }

    #[test]
    fn allocate_subpoints_needs_one_width_per_frame() {
        let mut data = AgentData::from_dimensions(Dimensions::new(2, 2));
        assert!(data.allocate_subpoints(&[3]).is_err());
    }

    #[test]
    fn from_frames_round_trips_live_records() {
        let frames = vec![
            vec![
                Agent::new(0, "A", [1.0, 2.0, 3.0]).with_radius(2.0),
                Agent::fiber(1, "F", &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]),
            ],
            vec![Agent::new(5, "B", [0.0, 0.0, 1.0]).with_rotation([0.1, 0.2, 0.3])],
        ];
        let data = AgentData::from_frames(vec![0.0, 1.0], &frames).unwrap();
        assert_eq!(data.n_agents, vec![2, 1]);
        assert_eq!(data.max_agents(), 2);
        assert_eq!(data.subpoints.widths(), &[6, 0]);
        assert_eq!(data.frame_agents(0), frames[0]);
        assert_eq!(data.frame_agents(1), frames[1]);
        data.validate().unwrap();
    }

    #[test]
    fn from_frames_needs_one_frame_per_time() {
        let err = AgentData::from_frames(vec![0.0, 1.0], &[vec![]]).unwrap_err();
        assert!(matches!(err, AgentError::LengthMismatch { field: "frames", .. }));
    }

    #[test]
    fn validate_catches_missing_names() {
        let mut data = AgentData::from_frames(vec![0.0], &[vec![Agent::new(0, "A", [0.0; 3])]]).unwrap();
        data.types[0].clear();
        assert!(matches!(data.validate(), Err(AgentError::MissingTypeNames { frame: 0, .. })));
    }

    #[test]
    fn grid_widen_keeps_values() {
        let mut grid = crate::Grid::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        grid.widen(3);
        assert_eq!(grid.row(0), &[1.0, 2.0, 0.0]);
        assert_eq!(grid.row(1), &[3.0, 0.0, 0.0]);
        grid.widen(1);
        assert_eq!(grid.cols(), 3);
    }
}

// ── TypeMapping ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod type_mapping {
    use super::*;
    use crate::{AgentError, TypeMapping};
    use trj_core::TypeIndex;

    #[test]
    fn first_seen_order_across_frames() {
        let data = AgentData::from_lists(&jagged_lists(), 1.0).unwrap();
        let mapping = TypeMapping::from_agent_data(&data);
        let order: Vec<&str> = mapping.iter().map(|(_, n)| n).collect();
        assert_eq!(order, vec!["H", "A", "C", "L", "D", "U", "E", "Q", "K"]);
        assert_eq!(mapping.index_of("A"), Some(TypeIndex(1)));
        assert_eq!(mapping.index_of("U"), Some(TypeIndex(5)));
    }

    #[test]
    fn deterministic() {
        let data = AgentData::from_lists(&fiber_lists(), 1.0).unwrap();
        assert_eq!(TypeMapping::from_agent_data(&data), TypeMapping::from_agent_data(&data));
    }

    #[test]
    fn seeded_indices_fill_gaps() {
        let mut mapping = TypeMapping::seeded([("microtubule", TypeIndex(1)), ("motor", TypeIndex(7))]).unwrap();
        assert_eq!(mapping.get_or_insert("x"), TypeIndex(0));
        assert_eq!(mapping.get_or_insert("y"), TypeIndex(2));
        assert_eq!(mapping.get_or_insert("motor"), TypeIndex(7));
        assert_eq!(mapping.name(TypeIndex(1)), Some("microtubule"));
    }

    #[test]
    fn seeded_collision_is_error() {
        let err = TypeMapping::seeded([("a", TypeIndex(0)), ("b", TypeIndex(0))]).unwrap_err();
        assert!(matches!(err, AgentError::DuplicateTypeIndex { .. }));
    }
}

// ── TrajectoryData ────────────────────────────────────────────────────────────

#[cfg(test)]
mod trajectory {
    use super::*;
    use crate::{MetaData, TrajectoryData};
    use trj_core::TypeIndex;

    fn trajectory() -> TrajectoryData {
        TrajectoryData::new(MetaData::default(), AgentData::from_lists(&jagged_lists(), 1.0).unwrap())
    }

    #[test]
    fn time_step_size() {
        let t = trajectory();
        assert!((t.time_step_size() - 0.1).abs() < 1e-12);

        let mut single = t.clone();
        single.agent_data = AgentData::from_frames(vec![3.0], &[vec![]]).unwrap();
        assert_eq!(single.time_step_size(), 0.0);
    }

    #[test]
    fn clone_is_independent() {
        let original = trajectory();
        let mut copy = original.clone();
        copy.agent_data.positions.set(0, 0, [9.0; 3]);
        assert_ne!(copy.agent_data.positions.get(0, 0), original.agent_data.positions.get(0, 0));
    }

    #[test]
    fn type_mapping_respects_reserved_indices() {
        let mut t = trajectory();
        t.type_indices.insert("K".into(), TypeIndex(0));
        let mapping = t.type_mapping().unwrap();
        assert_eq!(mapping.index_of("K"), Some(TypeIndex(0)));
        assert_eq!(mapping.index_of("H"), Some(TypeIndex(1)));
    }

    #[test]
    fn defaults() {
        let meta = MetaData::default();
        assert_eq!(meta.box_size, crate::DEFAULT_BOX_SIZE);
        assert_eq!(meta.scale_factor, 1.0);
        let t = trajectory();
        assert_eq!(t.time_units.name, "s");
        assert!(t.plots.is_empty());
    }
}
