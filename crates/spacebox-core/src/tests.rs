#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::Controls;
    use crate::config::{AsteroidConfig, FieldConfig, PilotConfig};
    use crate::constants;
    use crate::enums::Primitive;
    use crate::scene::Scene;
    use crate::types::{wrap_angle, Color, FieldExtent, Shape, ShapeVertex};

    // ---- Color ----

    #[test]
    fn test_color_darkened_halves_channels() {
        let c = Color::new(200, 101, 7);
        let d = c.darkened();
        assert_eq!(d, Color::new(100, 50, 3));
    }

    #[test]
    fn test_color_lerp_endpoints() {
        let a = Color::new(128, 64, 0);
        let b = Color::new(165, 42, 42);
        assert_eq!(Color::lerp(a, b, 0.0), a);
        assert_eq!(Color::lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_color_lerp_truncates_and_handles_descending_channels() {
        let a = Color::new(128, 64, 0);
        let b = Color::new(165, 42, 42);
        let mid = Color::lerp(a, b, 0.5);
        // 128 + 18.5 truncates to 146; 64 - 11 = 53; 0 + 21 = 21.
        assert_eq!(mid, Color::new(146, 53, 21));
    }

    #[test]
    fn test_color_lerp_clamps_t() {
        let a = Color::new(10, 10, 10);
        let b = Color::new(20, 20, 20);
        assert_eq!(Color::lerp(a, b, -1.0), a);
        assert_eq!(Color::lerp(a, b, 2.0), b);
    }

    // ---- Angles ----

    #[test]
    fn test_wrap_angle_inside_range_untouched() {
        use std::f32::consts::TAU;
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(3.0), 3.0);
        assert_eq!(wrap_angle(-3.0), -3.0);
        // Exactly ±2π is left alone; only strictly-beyond folds.
        assert_eq!(wrap_angle(TAU), TAU);
        assert_eq!(wrap_angle(-TAU), -TAU);
    }

    #[test]
    fn test_wrap_angle_folds_one_turn() {
        use std::f32::consts::TAU;
        let over = TAU + 0.5;
        assert!((wrap_angle(over) - 0.5).abs() < 1e-6);
        let under = -TAU - 0.5;
        assert!((wrap_angle(under) + 0.5).abs() < 1e-6);
    }

    // ---- Field extent ----

    #[test]
    fn test_extent_contains() {
        let ext = FieldExtent::new(1000.0, 800.0);
        assert!(ext.contains(Vec2::new(500.0, 400.0)));
        assert!(ext.contains(Vec2::new(0.0, 0.0)), "edges are inside");
        assert!(!ext.contains(Vec2::new(-0.1, 400.0)));
        assert!(!ext.contains(Vec2::new(500.0, 800.1)));
    }

    #[test]
    fn test_extent_wrap_each_side() {
        let ext = FieldExtent::new(1000.0, 800.0);
        assert_eq!(ext.wrap(Vec2::new(-10.0, 400.0)), Vec2::new(990.0, 400.0));
        assert_eq!(ext.wrap(Vec2::new(1010.0, 400.0)), Vec2::new(10.0, 400.0));
        assert_eq!(ext.wrap(Vec2::new(500.0, -10.0)), Vec2::new(500.0, 790.0));
        assert_eq!(ext.wrap(Vec2::new(500.0, 810.0)), Vec2::new(500.0, 10.0));
    }

    #[test]
    fn test_wrapped_delta_folds_only_positive_overshoot() {
        let ext = FieldExtent::new(1000.0, 800.0);
        let near_right = Vec2::new(995.0, 100.0);
        let near_left = Vec2::new(5.0, 100.0);

        // Large positive delta folds across the seam.
        let folded = ext.wrapped_delta(near_right, near_left);
        assert!((folded.x + 10.0).abs() < 1e-4, "expected -10, got {}", folded.x);

        // The mirrored query keeps the raw negative delta.
        let raw = ext.wrapped_delta(near_left, near_right);
        assert!((raw.x + 990.0).abs() < 1e-4, "expected -990, got {}", raw.x);
    }

    // ---- Input & shapes ----

    #[test]
    fn test_controls_default_idle() {
        let c = Controls::default();
        assert!(!c.rotate_left && !c.rotate_right && !c.thrust && !c.fire);
    }

    #[test]
    fn test_shape_starts_visible() {
        let s = Shape::new(
            Primitive::Triangles,
            vec![ShapeVertex::new(Vec2::ZERO, Color::WHITE)],
        );
        assert!(s.visible);
    }

    // ---- Config defaults ----

    #[test]
    fn test_asteroid_config_defaults() {
        let cfg = AsteroidConfig::default();
        assert_eq!(cfg.min_child_size, constants::ASTEROID_DEFAULT_MIN_CHILD_SIZE);
        assert_eq!(cfg.color, constants::ASTEROID_DEFAULT_COLOR);
    }

    #[test]
    fn test_field_config_defaults() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.team, constants::ASTEROID_TEAM);
        assert_eq!(cfg.min_color, constants::FIELD_DEFAULT_COLOR);
        assert_eq!(cfg.max_color, constants::FIELD_DEFAULT_COLOR);
    }

    #[test]
    fn test_pilot_config_defaults() {
        let cfg = PilotConfig::default();
        assert_eq!(cfg.team, constants::PLAYER_TEAM);
        assert_eq!(cfg.respawn_secs, constants::DEFAULT_RESPAWN_SECS);
        assert!(cfg.clear_radius.is_none());
    }

    // ---- Scene ----

    /// Verify the scene snapshot serializes to JSON.
    #[test]
    fn test_scene_serde() {
        let scene = Scene::default();
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
        assert!(
            json.len() < 64,
            "Empty scene should serialize tiny, was {} bytes",
            json.len()
        );
    }
}
