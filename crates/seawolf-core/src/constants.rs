//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Submarine ---

/// Hull points.
pub const SUB_MAX_HEALTH: u32 = 100;

/// Torpedo tube capacity.
pub const SUB_TORPEDO_CAPACITY: u32 = 10;

/// Base displacement per movement tick (world units).
pub const SUB_BASE_SPEED: f64 = 2.0;

/// Forward speed factor while submerged (surfaced is 1.0).
pub const SUB_SUBMERGED_FORWARD_FACTOR: f64 = 0.6;

/// Backward speed factor while surfaced.
pub const SUB_SURFACED_BACKWARD_FACTOR: f64 = 0.6;

/// Backward speed factor while submerged.
pub const SUB_SUBMERGED_BACKWARD_FACTOR: f64 = 0.4;

/// Heading change per rotation tick (radians).
pub const SUB_TURN_RATE: f64 = 0.05;

/// Seconds of air available per dive.
pub const SUB_AIR_TIME_SECS: f64 = 8.0;

/// Deck gun reload time (seconds).
pub const DECK_GUN_COOLDOWN_SECS: f64 = 1.0;

// --- Projectiles ---

/// Torpedo displacement per tick.
pub const TORPEDO_SPEED: f64 = 4.0;

/// Deck shell displacement per tick (unaffected by submersion; the gun
/// only fires surfaced).
pub const SHELL_SPEED: f64 = 6.0;

/// Projectile-boat hit radius (world units).
pub const HIT_RADIUS: f64 = 15.0;

/// Squared hit radius for distance-squared comparisons.
pub const HIT_RADIUS_SQ: f64 = HIT_RADIUS * HIT_RADIUS;

/// Projectiles farther than this from the player are culled.
pub const PROJECTILE_DESPAWN_RADIUS: f64 = 4_000.0;

/// Squared despawn radius.
pub const PROJECTILE_DESPAWN_RADIUS_SQ: f64 =
    PROJECTILE_DESPAWN_RADIUS * PROJECTILE_DESPAWN_RADIUS;

// --- Pursuit boats ---

/// Contact radius against a surfaced player (world units).
pub const CONTACT_RADIUS: f64 = 20.0;

/// Squared contact radius.
pub const CONTACT_RADIUS_SQ: f64 = CONTACT_RADIUS * CONTACT_RADIUS;

/// Damage dealt by a single boat contact (the boat dies with it).
pub const CONTACT_DAMAGE: u32 = 10;

/// Boat speed at wave 1.
pub const BOAT_BASE_SPEED: f64 = 1.0;

/// Boat speed increase per wave past the first.
pub const BOAT_SPEED_PER_WAVE: f64 = 0.2;

// --- Waves ---

/// Boats spawned per wave number (wave N spawns N * this).
pub const BOATS_PER_WAVE: u32 = 5;

/// Spawn offset beyond the viewport edge (world units).
pub const SPAWN_EDGE_OFFSET: f64 = 100.0;

/// Hull points restored on wave clear (capped at max).
pub const WAVE_CLEAR_REPAIR: u32 = 20;

/// Default viewport extent used until the frontend reports a resize.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

// --- Scoring ---

/// Score per torpedo kill.
pub const TORPEDO_KILL_SCORE: u32 = 100;

/// Score per deck shell kill.
pub const SHELL_KILL_SCORE: u32 = 50;

/// Scrap awarded per kill.
pub const SCRAP_PER_KILL: u32 = 1;

// --- Effects ---

/// Bubble lifetime (seconds).
pub const BUBBLE_LIFE_SECS: f64 = 0.5;

/// Bubble rise rate (world units per second).
pub const BUBBLE_RISE_SPEED: f64 = 10.0;

/// Explosion lifetime (seconds).
pub const EXPLOSION_LIFE_SECS: f64 = 0.6;

/// Bubbles scattered when surfacing.
pub const SURFACE_BUBBLE_COUNT: u32 = 5;

/// Horizontal scatter of surfacing bubbles (world units, full width).
pub const SURFACE_BUBBLE_SPREAD: f64 = 20.0;

/// Muzzle blast offset ahead of the hull (world units).
pub const MUZZLE_OFFSET: f64 = 20.0;
