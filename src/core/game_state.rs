use crate::buffs::{BuffStatus, PowerUpManager, PowerUpPickup};
use crate::combat::{Combatant, EntityId};
use crate::core::camera::Camera;
use crate::core::constants::*;
use crate::core::messages::MessageLog;
use crate::core::snapshot::{HudSnapshot, RenderSnapshot};
use crate::dungeon::{generate_dungeon, Dungeon};
use crate::effects::EffectOverlay;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Running totals for one session, reported by the simulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub kills: u32,
    pub chests_opened: u32,
    pub buffs_collected: u32,
    pub potions_used: u32,
    pub loot_dropped: u32,
    pub aura_damage_dealt: u64,
    pub damage_taken: u64,
    pub enemies_spawned: u32,
}

/// Everything one play session owns. The tick orchestrator is the only writer.
#[derive(Debug)]
pub struct GameState {
    pub seed: u32,
    pub dungeon: Dungeon,
    pub player: Combatant,
    pub enemies: Vec<Combatant>,
    pub pickups: Vec<PowerUpPickup>,
    pub power_ups: PowerUpManager,
    pub effects: EffectOverlay,
    pub messages: MessageLog,
    pub camera: Camera,
    pub stats: SessionStats,
    pub is_running: bool,
    pub game_over: bool,
    /// Simulated seconds since the session started
    pub elapsed: f64,
    pub ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Standard session: 100x100 map, a full enemy population and starting pickups.
    pub fn new(seed: u32) -> Self {
        Self::with_map_size(seed, MAP_WIDTH, MAP_HEIGHT)
    }

    pub fn with_map_size(seed: u32, width: usize, height: usize) -> Self {
        let mut state = Self::empty(seed, width, height);
        let level = state.player.level();
        state.spawn_enemies(INITIAL_ENEMY_COUNT, level);
        state.spawn_pickups(INITIAL_PICKUP_COUNT);
        state
    }

    /// Generated map and a player at the spawn point, with no enemies or pickups.
    pub fn empty(seed: u32, width: usize, height: usize) -> Self {
        let dungeon = generate_dungeon(seed, width, height);
        let player_id = EntityId(0);
        let player = Combatant::new_player(player_id, dungeon.spawn_point());

        let mut camera = Camera::default();
        camera.snap_to(player.position, dungeon.grid.world_size());

        Self {
            seed,
            dungeon,
            player,
            enemies: Vec::new(),
            pickups: Vec::new(),
            power_ups: PowerUpManager::with_defaults(player_id),
            effects: EffectOverlay::new(),
            messages: MessageLog::new(),
            camera,
            stats: SessionStats::default(),
            is_running: true,
            game_over: false,
            elapsed: 0.0,
            ticks: 0,
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn_enemy_at(&mut self, position: DVec2, level: u32) -> EntityId {
        let id = self.allocate_id();
        self.enemies.push(Combatant::new_enemy(id, position, level));
        self.stats.enemies_spawned += 1;
        id
    }

    /// Spawns one enemy at a random room position drawn from the map's seeded stream.
    pub fn spawn_enemy(&mut self, level: u32) -> EntityId {
        let position = self.dungeon.random_walkable_position();
        self.spawn_enemy_at(position, level)
    }

    pub fn spawn_enemies(&mut self, count: usize, level: u32) -> Vec<EntityId> {
        (0..count).map(|_| self.spawn_enemy(level)).collect()
    }

    pub fn spawn_pickups(&mut self, count: usize) {
        for _ in 0..count {
            let position = self.dungeon.random_walkable_position();
            self.pickups.push(PowerUpPickup::damage_aura(position));
        }
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Combatant> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn world_size(&self) -> DVec2 {
        self.dungeon.grid.world_size()
    }

    /// Player first, then enemies in spawn order.
    pub fn render_snapshots(&self) -> Vec<RenderSnapshot> {
        std::iter::once(&self.player)
            .chain(self.enemies.iter())
            .map(|c| RenderSnapshot::capture(c, &self.effects))
            .collect()
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::capture(&self.player)
    }

    pub fn buff_status(&self) -> Vec<BuffStatus> {
        self.power_ups.status()
    }
}
