#[cfg(test)]
mod tests {
    use crate::commands::{HelmInput, PlayerCommand};
    use crate::constants::DT;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::types::{Position, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Playing, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_projectile_kind_serde() {
        let variants = vec![ProjectileKind::Torpedo, ProjectileKind::DeckShell];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ProjectileKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_effect_kind_serde() {
        let variants = vec![EffectKind::Bubble, EffectKind::Explosion];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EffectKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SetHelm {
                helm: HelmInput {
                    forward: true,
                    backward: false,
                    left: false,
                    right: true,
                },
            },
            PlayerCommand::Dive,
            PlayerCommand::Surface,
            PlayerCommand::FireTorpedo {
                target_x: 640.0,
                target_y: 120.0,
            },
            PlayerCommand::FireDeckGun,
            PlayerCommand::SetViewport {
                width: 1920.0,
                height: 1080.0,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::TorpedoAway { remaining: 9 },
            GameEvent::ShellAway,
            GameEvent::Submerged,
            GameEvent::Surfaced { forced: true },
            GameEvent::BoatDestroyed {
                x: 12.0,
                y: -40.0,
                kind: ProjectileKind::Torpedo,
            },
            GameEvent::HullHit { damage: 10 },
            GameEvent::WaveCleared { wave: 3 },
            GameEvent::GameOver,
        ];
        for ev in &events {
            let json = serde_json::to_string(ev).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    // ---- Geometry ----

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.range_sq_to(&b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_unit_length() {
        let a = Position::new(1.0, 1.0);
        let b = Position::new(4.0, 5.0);
        let dir = a.direction_to(&b).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-12);
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.y - 0.8).abs() < 1e-12);
    }

    /// Coincident positions must not produce a NaN direction.
    #[test]
    fn test_direction_to_zero_length_guard() {
        let a = Position::new(7.0, -3.0);
        assert!(a.direction_to(&a).is_none());
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 30.0 * DT).abs() < 1e-12);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }
}
