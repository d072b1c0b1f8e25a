// World geometry
pub const TILE_SIZE: f64 = 32.0;
pub const MAP_WIDTH: usize = 100;
pub const MAP_HEIGHT: usize = 100;
pub const FALLBACK_SPAWN: (f64, f64) = (100.0, 100.0);

// Dungeon generation
pub const ROOM_ATTEMPTS: usize = 20;
pub const ROOM_MIN_SIZE: usize = 6;
pub const ROOM_MAX_SIZE: usize = 15;
pub const CHEST_ROOM_RATIO: f64 = 0.3;

// Entity collision boxes (width, height)
pub const PLAYER_BOX: (f64, f64) = (24.0, 24.0);
pub const ENEMY_BOX: (f64, f64) = (24.0, 24.0);

// Experience curve: floor(100 * 1.5^(level - 1))
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_GROWTH: f64 = 1.5;

// Level-up growth
pub const LEVEL_UP_HEALTH_PERCENT: u32 = 10;
pub const LEVEL_UP_DAMAGE_PERCENT: u32 = 15;
pub const LEVEL_UP_DEFENSE: u32 = 1;
pub const LEVEL_UP_CRIT_CHANCE: f64 = 0.01;
pub const MAX_CRIT_CHANCE: f64 = 0.5;

// Player base stats
pub const PLAYER_MAX_HEALTH: u32 = 100;
pub const PLAYER_DAMAGE: u32 = 15;
pub const PLAYER_CRIT_CHANCE: f64 = 0.15;
pub const PLAYER_CRIT_MULTIPLIER: f64 = 2.5;
pub const PLAYER_DEFENSE: u32 = 5;
pub const PLAYER_SPEED: f64 = 150.0;
pub const PLAYER_ATTACK_COOLDOWN: f64 = 0.5;
pub const PLAYER_STARTING_GOLD: u32 = 100;
pub const PLAYER_LEVEL_UP_GOLD: u32 = 50;
pub const HEALTH_POTION_HEAL: u32 = 50;

// Enemy stat curves: base * growth^(level - 1)
pub const ENEMY_HEALTH_BASE: f64 = 80.0;
pub const ENEMY_HEALTH_GROWTH: f64 = 1.2;
pub const ENEMY_DAMAGE_BASE: f64 = 8.0;
pub const ENEMY_DAMAGE_GROWTH: f64 = 1.15;
pub const ENEMY_DEFENSE_BASE: f64 = 2.0;
pub const ENEMY_DEFENSE_GROWTH: f64 = 1.1;
pub const ENEMY_CRIT_BASE: f64 = 0.05;
pub const ENEMY_CRIT_PER_LEVEL: f64 = 0.01;
pub const ENEMY_CRIT_MULTIPLIER: f64 = 1.8;
pub const ENEMY_SPEED: f64 = 80.0;
pub const ENEMY_ATTACK_COOLDOWN: f64 = 1.5;

// Enemy rewards
pub const ENEMY_XP_REWARD_BASE: f64 = 50.0;
pub const ENEMY_XP_REWARD_GROWTH: f64 = 1.3;
pub const ENEMY_GOLD_REWARD_BASE: f64 = 10.0;
pub const ENEMY_GOLD_REWARD_GROWTH: f64 = 1.2;

// Enemy AI
pub const ENEMY_AGGRO_RANGE: f64 = f64::INFINITY;
pub const ENEMY_ATTACK_RANGE: f64 = 27.0;
pub const ENEMY_WANDER_DURATION: f64 = 2.0;
pub const ENEMY_WANDER_STOP_CHANCE: f64 = 0.3;
pub const ENEMY_WANDER_SPEED_FACTOR: f64 = 0.5;
pub const MELEE_CONTACT_DISTANCE: f64 = 28.0;

// Population
pub const INITIAL_ENEMY_COUNT: usize = 80;
pub const MIN_ENEMY_COUNT: usize = 3;
pub const ENEMY_REINFORCEMENT_COUNT: usize = 2;
pub const INITIAL_PICKUP_COUNT: usize = 3;
pub const LOOT_DROP_CHANCE: f64 = 0.2;

// Chests
pub const CHEST_COST: u32 = 50;
pub const CHEST_GOLD_MIN: u32 = 50;
pub const CHEST_GOLD_MAX: u32 = 150;
pub const CHEST_EXPERIENCE: u64 = 1000;
pub const CHEST_REACH_TILES: f64 = 1.5;

// Damage aura
pub const DAMAGE_AURA_ID: &str = "damage_aura";
pub const DAMAGE_AURA_NAME: &str = "Damage Aura";
pub const AURA_PULSE_INTERVAL: f64 = 0.5;
pub const AURA_BASE_RADIUS: f64 = 100.0;
pub const AURA_RADIUS_PER_LEVEL: f64 = 10.0;
pub const AURA_BASE_DAMAGE: u32 = 8;
pub const AURA_DAMAGE_PER_LEVEL: u32 = 2;
pub const AURA_OWNER_DAMAGE_SHARE: f64 = 0.25;
pub const AURA_CRIT_BONUS: f64 = 0.05;
pub const PICKUP_RADIUS: f64 = 35.0;

// Visual effect overlay lifetimes (seconds)
pub const AURA_HIT_FLASH_SECONDS: f64 = 0.25;
pub const CRIT_FLASH_SECONDS: f64 = 0.3;

// Animation
pub const PLAYER_FRAME_COUNT: u32 = 8;
pub const PLAYER_FRAME_DURATION: f64 = 0.12;
pub const PLAYER_INITIAL_FACING: u8 = 2;
pub const ENEMY_FRAME_COUNT: u32 = 4;
pub const ENEMY_FRAME_DURATION: f64 = 0.15;
pub const ENEMY_INITIAL_FACING: u8 = 4;

// Camera
pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;
pub const CAMERA_SMOOTHING: f64 = 0.1;

// Message feed
pub const MAX_MESSAGES: usize = 5;
pub const MESSAGE_LIFETIME_SECONDS: f64 = 5.0;
