//! Unit tests for trj-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TypeIndex, UniqueId};

    #[test]
    fn index_roundtrip() {
        let id = TypeIndex(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TypeIndex::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn padding_default_is_zero() {
        assert_eq!(UniqueId::default(), UniqueId(0));
        assert_eq!(TypeIndex::default(), TypeIndex(0));
    }

    #[test]
    fn wire_value() {
        assert_eq!(UniqueId(7).as_f64(), 7.0);
    }

    #[test]
    fn display() {
        assert_eq!(UniqueId(7).to_string(), "UniqueId(7)");
    }
}

#[cfg(test)]
mod units {
    use crate::UnitData;

    #[test]
    fn multiply_by_inverse_scale() {
        let mut nm = UnitData::new("nm", 1.0);
        nm.multiply(1.0 / 0.1);
        assert!((nm.magnitude - 10.0).abs() < 1e-12, "got {}", nm.magnitude);
        assert_eq!(nm.name, "nm");
    }

    #[test]
    fn defaults() {
        assert_eq!(UnitData::seconds(), UnitData::new("s", 1.0));
        assert_eq!(UnitData::micrometers().name, "µm");
    }
}

#[cfg(test)]
mod camera {
    use crate::CameraData;

    #[test]
    fn default_matches_constant() {
        let cam = CameraData::default();
        assert_eq!(cam.position, [0.0, 0.0, 120.0]);
        assert_eq!(cam.look_at_position, [0.0, 0.0, 0.0]);
        assert_eq!(cam.up_vector, [0.0, 1.0, 0.0]);
        assert_eq!(cam.fov_degrees, 75.0);
    }
}

#[cfg(test)]
mod display {
    use crate::{DEFAULT_RADIUS, DisplayData, DisplayMap, DisplayType};

    fn readdy_like() -> DisplayMap {
        DisplayMap::new()
            .with("A", DisplayData::new("C", DisplayType::Sphere).with_radius(3.0).with_color("#0080ff"))
            .with("B", DisplayData::new("B", DisplayType::Obj).with_url("c.obj"))
            .with("D", DisplayData::new("C", DisplayType::Sphere).with_radius(3.0))
    }

    #[test]
    fn unregistered_token_resolves_to_identity_sphere() {
        let data = readdy_like().resolve("Z");
        assert_eq!(data.name, "Z");
        assert_eq!(data.display_type, DisplayType::Sphere);
        assert_eq!(data.radius, Some(DEFAULT_RADIUS));
        assert!(data.color.is_none());
        assert!(data.url.is_none());
    }

    #[test]
    fn registered_token_resolves_to_its_name() {
        let map = readdy_like();
        assert_eq!(map.resolve("A").name, "C");
        assert_eq!(map.resolve("D").name, "C");
        assert_eq!(map.resolve("B").url.as_deref(), Some("c.obj"));
    }

    #[test]
    fn empty_name_falls_back_to_token() {
        let map = DisplayMap::new().with("X", DisplayData::default().with_radius(2.0));
        let data = map.resolve("X");
        assert_eq!(data.name, "X");
        assert_eq!(data.radius_or_default(), 2.0);
    }

    #[test]
    fn by_output_name_collapses_shared_names() {
        let by_name = readdy_like().by_output_name();
        assert_eq!(by_name.len(), 2);
        assert_eq!(by_name.get("C").unwrap().color.as_deref(), Some("#0080ff"));
        assert!(by_name.contains("B"));
    }

    #[test]
    fn display_type_parse() {
        assert_eq!("fiber".parse::<DisplayType>().unwrap(), DisplayType::Fiber);
        assert_eq!(DisplayType::Pdb.to_string(), "PDB");
        assert!("cube".parse::<DisplayType>().is_err());
    }

    #[test]
    fn merge_keeps_existing_entries() {
        let mut a = DisplayMap::new().with("X", DisplayData::new("X", DisplayType::Fiber));
        let b = DisplayMap::new()
            .with("X", DisplayData::new("X", DisplayType::Obj))
            .with("Y", DisplayData::new("Y", DisplayType::Pdb));
        a.merge(&b);
        assert_eq!(a.get("X").unwrap().display_type, DisplayType::Fiber);
        assert_eq!(a.get("Y").unwrap().display_type, DisplayType::Pdb);
    }
}

#[cfg(test)]
mod viz {
    use crate::{VizType, vec3};

    #[test]
    fn codes() {
        assert_eq!(VizType::DEFAULT.as_f64(), 1000.0);
        assert!(VizType::FIBER.is_fiber());
        assert!(!VizType::default().is_fiber());
        assert_eq!(VizType::default(), VizType(0));
    }

    #[test]
    fn vector_helpers() {
        assert_eq!(vec3::add([1.0, 2.0, 3.0], [10.0, 0.0, 50.0]), [11.0, 2.0, 53.0]);
        assert_eq!(vec3::scale([1.0, -2.0, 0.5], 2.0), [2.0, -4.0, 1.0]);
    }
}

#[cfg(test)]
mod scale {
    use crate::TrjError;
    use crate::units::check_scale_factor;

    #[test]
    fn accepts_finite_non_zero() {
        assert_eq!(check_scale_factor(0.1).unwrap(), 0.1);
        assert_eq!(check_scale_factor(-2.0).unwrap(), -2.0);
    }

    #[test]
    fn rejects_zero_and_nan() {
        assert!(matches!(check_scale_factor(0.0), Err(TrjError::InvalidScaleFactor(_))));
        assert!(check_scale_factor(f64::NAN).is_err());
        assert!(check_scale_factor(f64::INFINITY).is_err());
    }
}
