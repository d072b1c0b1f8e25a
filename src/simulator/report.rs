//! Simulation report generation.

use crate::core::game_state::GameState;
use crate::dungeon::Tile;
use serde::Serialize;

/// Outcome of one headless session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub seed: u32,
    pub ticks_run: u64,
    pub simulated_seconds: f64,
    pub survived: bool,

    pub final_level: u32,
    pub final_gold: u32,
    pub final_health: u32,
    pub final_max_health: u32,

    pub kills: u32,
    pub chests_opened: u32,
    pub buffs_collected: u32,
    pub potions_used: u32,
    pub loot_dropped: u32,
    pub enemies_spawned: u32,
    pub aura_damage_dealt: u64,
    pub damage_taken: u64,

    pub room_count: usize,
    pub chest_tiles: usize,
}

impl SimReport {
    pub fn from_state(state: &GameState, ticks_run: u64) -> Self {
        let hud = state.hud();
        let stats = &state.stats;
        Self {
            seed: state.seed,
            ticks_run,
            simulated_seconds: state.elapsed,
            survived: !state.game_over,
            final_level: hud.level,
            final_gold: hud.gold,
            final_health: hud.health,
            final_max_health: hud.max_health,
            kills: stats.kills,
            chests_opened: stats.chests_opened,
            buffs_collected: stats.buffs_collected,
            potions_used: stats.potions_used,
            loot_dropped: stats.loot_dropped,
            enemies_spawned: stats.enemies_spawned,
            aura_damage_dealt: stats.aura_damage_dealt,
            damage_taken: stats.damage_taken,
            room_count: state.dungeon.rooms().len(),
            // Opened chests keep their tile, so this is the number placed
            chest_tiles: state.dungeon.grid.count(Tile::Chest),
        }
    }

    /// Generate a text report for console output.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Seed {}: {} ticks ({:.1}s simulated), {}\n\n",
            self.seed,
            self.ticks_run,
            self.simulated_seconds,
            if self.survived { "survived" } else { "died" }
        ));

        report.push_str("── MAP ──────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Rooms:               {}\n", self.room_count));
        report.push_str(&format!("  Chest Tiles:         {}\n\n", self.chest_tiles));

        report.push_str("── PLAYER ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Final Level:         {}\n", self.final_level));
        report.push_str(&format!("  Final Gold:          {}\n", self.final_gold));
        report.push_str(&format!(
            "  Final Health:        {}/{}\n\n",
            self.final_health, self.final_max_health
        ));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Kills:               {}\n", self.kills));
        report.push_str(&format!("  Enemies Spawned:     {}\n", self.enemies_spawned));
        report.push_str(&format!("  Aura Damage Dealt:   {}\n", self.aura_damage_dealt));
        report.push_str(&format!("  Damage Taken:        {}\n\n", self.damage_taken));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Chests Opened:       {}\n", self.chests_opened));
        report.push_str(&format!("  Buffs Collected:     {}\n", self.buffs_collected));
        report.push_str(&format!("  Loot Drops:          {}\n", self.loot_dropped));
        report.push_str(&format!("  Potions Used:        {}\n", self.potions_used));

        report
    }

    /// Generate JSON output.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
