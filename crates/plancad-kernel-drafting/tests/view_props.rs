//! Property tests over every view template.

use plancad_ir::{keys, Dimension, Features, ObjectSpec, ObjectType, Side};
use plancad_kernel_drafting::{draft, ViewKind};
use proptest::prelude::*;

fn arb_type() -> impl Strategy<Value = ObjectType> {
    prop::sample::select(ObjectType::ALL.to_vec())
}

fn arb_dims() -> impl Strategy<Value = Dimension> {
    (0.1f64..12.0, 0.1f64..12.0, 0.1f64..6.0)
        .prop_map(|(w, l, h)| Dimension::new(w, l, h).unwrap())
}

fn arb_features() -> impl Strategy<Value = Features> {
    (
        -2i64..10,
        -2i64..8,
        0i64..6,
        any::<bool>(),
        any::<bool>(),
        prop::sample::select(Side::ALL.to_vec()),
    )
        .prop_map(|(legs, windows, bedrooms, round, garage, door_side)| {
            Features::new()
                .with(keys::LEGS, legs)
                .with(keys::DOORS, legs.min(4))
                .with(keys::SEATS, legs.min(5))
                .with(keys::WINDOWS, windows)
                .with(keys::BEDROOMS, bedrooms)
                .with(keys::SEAT_SHAPE, if round { "circular" } else { "square" })
                .with(keys::HAS_GARAGE, garage)
                .with(keys::STYLE, if garage { "modern" } else { "traditional" })
                .with(keys::DOOR_POSITION, door_side.as_str())
        })
}

proptest! {
    #[test]
    fn prop_every_view_draws_finite_strokes(
        ty in arb_type(),
        dims in arb_dims(),
        features in arb_features(),
    ) {
        let spec = ObjectSpec::new(ty, dims, features);
        let views = draft(&spec, 1.0);
        for kind in ViewKind::ALL {
            let path = views.view(kind);
            prop_assert!(!path.is_empty(), "{ty} {kind:?} is empty");
            for sub in path.subpaths() {
                prop_assert!(sub.len() >= 2);
                for p in sub {
                    prop_assert!(p.x.is_finite() && p.y.is_finite());
                }
            }
        }
    }

    #[test]
    fn prop_views_stay_within_width(
        ty in arb_type(),
        dims in arb_dims(),
        features in arb_features(),
        scale in 0.5f64..200.0,
    ) {
        let spec = ObjectSpec::new(ty, dims, features);
        let views = draft(&spec, scale);
        let limit = dims.width * scale;
        let eps = 1e-9 * limit.max(1.0);
        for kind in ViewKind::ALL {
            if let Some(b) = views.view(kind).bounds() {
                prop_assert!(b.min.x >= -eps, "{ty} {kind:?} min x {}", b.min.x);
                prop_assert!(b.max.x <= limit + eps, "{ty} {kind:?} max x {} > {limit}", b.max.x);
                prop_assert!(b.min.y >= -eps);
            }
        }
        if let Some(b) = views.top.bounds() {
            prop_assert!(b.max.y <= dims.length * scale + eps);
        }
    }

    #[test]
    fn prop_drafting_is_deterministic(
        ty in arb_type(),
        dims in arb_dims(),
        features in arb_features(),
    ) {
        let spec = ObjectSpec::new(ty, dims, features);
        prop_assert_eq!(draft(&spec, 3.0), draft(&spec, 3.0));
    }
}
