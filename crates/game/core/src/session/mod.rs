//! The session aggregate: one player's complete progression state and the
//! action dispatcher that drives it.
//!
//! Hosts construct a [`GameSession`], feed it [`PlayerAction`]s plus a
//! frame-time `advance`, and render the [`SessionEvent`]s that come back.
//! All mutation goes through here, so mode gating and death handling live
//! in exactly one place.

mod actions;
mod camp;
mod events;

pub use actions::{InteractTarget, PlayerAction, StationKind};
pub use camp::{CampSetup, camp_window_open, has_camp_materials};
pub use events::{CarryState, EffectKind, SessionEvent};

use crate::clock::GameClock;
use crate::combat::battle::{BattleAction, BattleOutcome, BattleState, BattleStats, Enemy};
use crate::combat::skirmish::{
    self, CRATE_REACH, Direction, LootCrate, Monster, Position, cone_contains,
};
use crate::config::GameConfig;
use crate::economy::{LiquidityPool, MerchantQuarter, TradingPost, crafting, royal};
use crate::env::{Env, NarrativePrompt, compute_seed, random_loot_for_zone};
use crate::error::SessionError;
use crate::leveling::check_level_up;
use crate::mode::Mode;
use crate::outcome::resolve_outcome;
use crate::state::{Equipment, Inventory, PlayerStats, StatKind};
use crate::zone;

/// World pixels moved per dispatched Move action.
const MOVE_STEP: f32 = 4.0;

/// Zone where night monsters spawn.
const SPAWN_ZONE: &str = "Outer Grasslands";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    Outcome(usize),
    ReturnToPrevious,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PickKind {
    Use,
    Equip,
}

/// Transient state of an in-progress narrative exchange.
#[derive(Clone, Debug)]
struct NarrativeFlow {
    prompt: NarrativePrompt,
    choices: Vec<(String, Choice)>,
    pick: Option<(PickKind, Vec<String>)>,
}

/// One player's session.
pub struct GameSession {
    pub config: GameConfig,
    pub stats: PlayerStats,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub pool: LiquidityPool,
    pub merchant: MerchantQuarter,
    pub trading: TradingPost,
    pub battle: Option<BattleState>,
    pub monsters: Vec<Monster>,
    pub crates: Vec<LootCrate>,
    pub clock: GameClock,
    pub player_pos: Position,
    pub facing: Direction,
    mode: Mode,
    prompt_count: u32,
    flow: Option<NarrativeFlow>,
    pending_camp: Option<CampSetup>,
    camp_prompted: bool,
    game_seed: u64,
    nonce: u64,
}

impl GameSession {
    /// A fresh character in the given zone, carrying the starter kit.
    pub fn new(zone: &str, config: GameConfig, game_seed: u64) -> Self {
        Self {
            stats: PlayerStats::new(zone, config.starting_oromozi),
            inventory: Inventory::starter_kit(),
            equipment: Equipment::new(),
            pool: LiquidityPool::new(),
            merchant: MerchantQuarter::new(),
            trading: TradingPost::new(),
            battle: None,
            monsters: Vec::new(),
            crates: Vec::new(),
            clock: GameClock::new(&config),
            player_pos: Position::default(),
            facing: Direction::Down,
            mode: Mode::None,
            prompt_count: 0,
            flow: None,
            pending_camp: None,
            camp_prompted: false,
            game_seed,
            nonce: 0,
            config,
        }
    }

    /// Rebuild a session after a zone transition from the carried state.
    pub fn from_carry(zone: &str, carry: CarryState, config: GameConfig, game_seed: u64) -> Self {
        let mut session = Self::new(zone, config, game_seed);
        session.stats = carry.stats;
        session.stats.current_zone = zone.to_string();
        session.inventory = carry.inventory;
        session.prompt_count = carry.prompt_count;
        session
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prompt_count(&self) -> u32 {
        self.prompt_count
    }

    pub fn camp_in_progress(&self) -> Option<&CampSetup> {
        self.pending_camp.as_ref()
    }

    fn next_seed(&mut self, context: u32) -> u64 {
        self.nonce += 1;
        compute_seed(self.game_seed, self.nonce, context)
    }

    fn carry(&self) -> CarryState {
        CarryState {
            stats: self.stats.clone(),
            inventory: self.inventory.clone(),
            prompt_count: self.prompt_count,
        }
    }

    fn in_village(&self) -> bool {
        zone::is_safe(&self.stats.current_zone)
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Apply one player action. Errors leave the session unchanged.
    pub fn dispatch(
        &mut self,
        action: PlayerAction,
        env: &Env,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        match action {
            PlayerAction::Move(dir) => {
                self.facing = dir;
                if self.mode.blocks_movement() {
                    return Ok(Vec::new());
                }
                match dir {
                    Direction::Up => self.player_pos.y -= MOVE_STEP,
                    Direction::Down => self.player_pos.y += MOVE_STEP,
                    Direction::Left => self.player_pos.x -= MOVE_STEP,
                    Direction::Right => self.player_pos.x += MOVE_STEP,
                }
                Ok(Vec::new())
            }
            PlayerAction::Attack => match self.mode {
                Mode::Battle => self.battle_action(BattleAction::Attack, env),
                Mode::None => self.swing(env),
                other => Err(SessionError::WrongMode(other)),
            },
            PlayerAction::Interact(InteractTarget::EventMarker) => self.start_narrative(env),
            PlayerAction::Interact(InteractTarget::Station(kind)) => {
                self.enter_station(kind, env)
            }
            PlayerAction::Confirm => self.confirm(env),
            PlayerAction::Cancel => self.cancel(),
            PlayerAction::SelectOption(index) => self.select_option(index, env),
            PlayerAction::UseItem(name) => match self.mode {
                Mode::Battle => self.battle_action(BattleAction::UseItem(name), env),
                _ => self.use_item(&name, env),
            },
            PlayerAction::EquipItem(name) => self.equip_item(&name, env),
        }
    }

    // ------------------------------------------------------------------
    // Narrative flow
    // ------------------------------------------------------------------

    fn start_narrative(&mut self, env: &Env) -> Result<Vec<SessionEvent>, SessionError> {
        if self.mode != Mode::None {
            return Err(SessionError::WrongMode(self.mode));
        }
        let prologues = env.narrative.prologues(&self.stats.current_zone);
        if prologues.is_empty() {
            // No scene-setting text for this zone; go straight to a prompt.
            return self.show_prompt(env);
        }
        let seed = self.next_seed(0);
        let text = prologues[env.rng.index(seed, prologues.len())].clone();
        self.mode = Mode::Prologue;
        Ok(vec![SessionEvent::DialogRequested {
            text,
            options: Vec::new(),
        }])
    }

    fn show_prompt(&mut self, env: &Env) -> Result<Vec<SessionEvent>, SessionError> {
        let eligible = env
            .narrative
            .eligible_prompts(&self.stats.current_zone, self.clock.time_of_day());
        if eligible.is_empty() {
            self.mode = Mode::None;
            self.flow = None;
            return Ok(vec![SessionEvent::LogAppended(
                "The wilds are quiet for now.".to_string(),
            )]);
        }
        let seed = self.next_seed(1);
        let prompt = eligible[env.rng.index(seed, eligible.len())].clone();
        self.flow = Some(NarrativeFlow {
            prompt: prompt.clone(),
            choices: Vec::new(),
            pick: None,
        });
        self.mode = Mode::Prompt;
        Ok(vec![SessionEvent::DialogRequested {
            text: prompt.prompt,
            options: Vec::new(),
        }])
    }

    fn show_choices(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        let previous = zone::previous(&self.stats.current_zone).map(|z| z.name);
        let offer_return = self.prompt_count >= GameConfig::RETURN_OPTION_PROMPTS;
        let text;
        let choices;
        {
            let flow = self.flow.as_mut().ok_or(SessionError::WrongMode(self.mode))?;
            let mut built: Vec<(String, Choice)> = flow
                .prompt
                .options
                .iter()
                .enumerate()
                .map(|(i, opt)| (opt.clone(), Choice::Outcome(i)))
                .collect();
            if offer_return && let Some(prev) = previous {
                built.push((format!("Return to {prev}"), Choice::ReturnToPrevious));
            }
            built.push(("Back".to_string(), Choice::Back));
            flow.choices = built.clone();
            text = flow.prompt.prompt.clone();
            choices = built;
        }

        self.mode = Mode::Choices;
        Ok(vec![SessionEvent::DialogRequested {
            text,
            options: choices.into_iter().map(|(label, _)| label).collect(),
        }])
    }

    fn confirm(&mut self, env: &Env) -> Result<Vec<SessionEvent>, SessionError> {
        match self.mode {
            Mode::Prologue => self.show_prompt(env),
            Mode::Prompt => self.show_choices(),
            Mode::Outcome => Ok(self.show_item_menu()),
            Mode::ItemMenu => Ok(self.end_flow()),
            Mode::CampingPrompt => self.begin_camp(),
            Mode::Battle => self.battle_action(BattleAction::Attack, env),
            _ => Ok(Vec::new()),
        }
    }

    fn cancel(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        if self.pending_camp.is_some() {
            return Ok(self.cancel_camp());
        }
        match self.mode {
            Mode::Prologue | Mode::Prompt => {
                // Backing out before choosing costs nothing.
                self.flow = None;
                self.mode = Mode::None;
                Ok(Vec::new())
            }
            Mode::Choices => {
                self.mode = Mode::Prompt;
                let text = self
                    .flow
                    .as_ref()
                    .map(|f| f.prompt.prompt.clone())
                    .unwrap_or_default();
                Ok(vec![SessionEvent::DialogRequested {
                    text,
                    options: Vec::new(),
                }])
            }
            Mode::ItemPick => {
                if let Some(flow) = self.flow.as_mut() {
                    flow.pick = None;
                }
                self.mode = Mode::ItemMenu;
                Ok(Vec::new())
            }
            // The outcome screen has no back path; it always proceeds to
            // the item menu.
            Mode::Outcome => Ok(self.show_item_menu()),
            Mode::ItemMenu => Ok(self.end_flow()),
            Mode::CampingPrompt => {
                self.mode = Mode::None;
                Ok(Vec::new())
            }
            m if m.is_economy() => {
                self.mode = Mode::None;
                Ok(Vec::new())
            }
            _ => Ok(Vec::new()),
        }
    }

    fn select_option(
        &mut self,
        index: usize,
        env: &Env,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        match self.mode {
            Mode::Choices => {
                let flow = self.flow.as_ref().ok_or(SessionError::WrongMode(self.mode))?;
                let choice = flow
                    .choices
                    .get(index)
                    .map(|(_, c)| *c)
                    .ok_or(SessionError::InvalidIndex(index))?;
                match choice {
                    Choice::Outcome(i) => self.resolve_choice(i, env),
                    Choice::ReturnToPrevious => {
                        let mut events = self.end_flow();
                        let dest = zone::previous(&self.stats.current_zone)
                            .map(|z| z.name.to_string())
                            .ok_or_else(|| {
                                SessionError::UnknownZone(self.stats.current_zone.clone())
                            })?;
                        events.extend(self.transition(&dest, true));
                        Ok(events)
                    }
                    Choice::Back => {
                        self.mode = Mode::Prompt;
                        let text = self
                            .flow
                            .as_ref()
                            .map(|f| f.prompt.prompt.clone())
                            .unwrap_or_default();
                        Ok(vec![SessionEvent::DialogRequested {
                            text,
                            options: Vec::new(),
                        }])
                    }
                }
            }
            Mode::ItemMenu => self.item_menu_select(index, env),
            Mode::ItemPick => self.item_pick_select(index, env),
            Mode::CampingPrompt => match index {
                0 => self.begin_camp(),
                1 => {
                    self.mode = Mode::None;
                    Ok(Vec::new())
                }
                other => Err(SessionError::InvalidIndex(other)),
            },
            other => Err(SessionError::WrongMode(other)),
        }
    }

    fn resolve_choice(
        &mut self,
        outcome_index: usize,
        env: &Env,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        let flow = self.flow.as_ref().ok_or(SessionError::WrongMode(self.mode))?;
        let text = flow
            .prompt
            .outcomes
            .get(outcome_index)
            .cloned()
            .ok_or(SessionError::InvalidIndex(outcome_index))?;

        let seed = self.next_seed(2);
        let res = resolve_outcome(
            &text,
            &mut self.stats,
            &mut self.inventory,
            &self.equipment,
            env,
            seed,
        );

        let mut events = vec![SessionEvent::StatsChanged];
        for line in &res.log {
            events.push(SessionEvent::LogAppended(line.clone()));
        }
        if res.loot.is_some() {
            events.push(SessionEvent::InventoryChanged);
        }
        if res.levels_gained > 0 {
            events.push(SessionEvent::EffectRequested(EffectKind::LevelUp));
        }

        if res.died && !self.in_village() {
            events.extend(self.death());
            return Ok(events);
        }
        if let Some(dest) = res.travel_to {
            events.extend(self.end_flow());
            events.extend(self.transition(&dest, false));
            return Ok(events);
        }

        self.mode = Mode::Outcome;
        events.push(SessionEvent::DialogRequested {
            text,
            options: Vec::new(),
        });
        Ok(events)
    }

    fn show_item_menu(&mut self) -> Vec<SessionEvent> {
        self.mode = Mode::ItemMenu;
        vec![SessionEvent::DialogRequested {
            text: "What now?".to_string(),
            options: vec![
                "Use an item".to_string(),
                "Equip an item".to_string(),
                "Continue".to_string(),
            ],
        }]
    }

    fn item_menu_select(
        &mut self,
        index: usize,
        env: &Env,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        let kind = match index {
            0 => PickKind::Use,
            1 => PickKind::Equip,
            2 => return Ok(self.end_flow()),
            other => return Err(SessionError::InvalidIndex(other)),
        };
        let list: Vec<String> = self
            .inventory
            .stacks()
            .iter()
            .filter(|s| {
                env.catalog.definition(&s.name).is_some_and(|def| match kind {
                    PickKind::Use => def.is_usable(),
                    PickKind::Equip => def.is_equippable(),
                })
            })
            .map(|s| s.name.clone())
            .collect();
        if list.is_empty() {
            return Ok(vec![SessionEvent::LogAppended(
                "Nothing suitable in your pack.".to_string(),
            )]);
        }
        let options = list.clone();
        if let Some(flow) = self.flow.as_mut() {
            flow.pick = Some((kind, list));
        }
        self.mode = Mode::ItemPick;
        Ok(vec![SessionEvent::DialogRequested {
            text: match kind {
                PickKind::Use => "Use which item?".to_string(),
                PickKind::Equip => "Equip which item?".to_string(),
            },
            options,
        }])
    }

    fn item_pick_select(
        &mut self,
        index: usize,
        env: &Env,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        let (kind, name) = {
            let flow = self.flow.as_ref().ok_or(SessionError::WrongMode(self.mode))?;
            let (kind, list) = flow.pick.as_ref().ok_or(SessionError::WrongMode(self.mode))?;
            let name = list
                .get(index)
                .cloned()
                .ok_or(SessionError::InvalidIndex(index))?;
            (*kind, name)
        };
        let mut events = match kind {
            PickKind::Use => self.use_item(&name, env)?,
            PickKind::Equip => self.equip_item(&name, env)?,
        };
        events.extend(self.end_flow());
        Ok(events)
    }

    /// Close the narrative flow. Each completed exchange counts toward the
    /// threshold that unlocks the return-travel option.
    fn end_flow(&mut self) -> Vec<SessionEvent> {
        self.flow = None;
        self.mode = Mode::None;
        self.prompt_count += 1;
        Vec::new()
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    fn use_item(&mut self, name: &str, env: &Env) -> Result<Vec<SessionEvent>, SessionError> {
        if !self.inventory.has(name) {
            return Err(SessionError::MissingItem(name.to_string()));
        }
        let def = env
            .catalog
            .definition(name)
            .ok_or_else(|| SessionError::UnknownItem(name.to_string()))?;
        if !def.is_usable() {
            return Err(SessionError::UnknownItem(name.to_string()));
        }
        let effects: Vec<(StatKind, i64)> =
            def.stat_effects.iter().map(|(&k, &v)| (k, v)).collect();
        for (stat, delta) in effects {
            self.stats.apply_delta(stat, delta);
        }
        self.inventory.remove(name, 1);
        Ok(vec![
            SessionEvent::StatsChanged,
            SessionEvent::InventoryChanged,
            SessionEvent::EffectRequested(EffectKind::Heal),
            SessionEvent::LogAppended(format!("You use {name}.")),
        ])
    }

    fn equip_item(&mut self, name: &str, env: &Env) -> Result<Vec<SessionEvent>, SessionError> {
        if !self.inventory.has(name) {
            return Err(SessionError::MissingItem(name.to_string()));
        }
        let def = env
            .catalog
            .definition(name)
            .ok_or_else(|| SessionError::UnknownItem(name.to_string()))?;
        if !def.is_equippable() {
            return Err(SessionError::UnknownItem(name.to_string()));
        }
        self.equipment.equip(name, env.catalog);
        Ok(vec![SessionEvent::LogAppended(format!("You equip {name}."))])
    }

    // ------------------------------------------------------------------
    // Skirmish
    // ------------------------------------------------------------------

    fn swing(&mut self, env: &Env) -> Result<Vec<SessionEvent>, SessionError> {
        let mut events = vec![SessionEvent::EffectRequested(EffectKind::Slash)];
        let seed = self.next_seed(3);
        let damage = skirmish::player_strike_damage(self.stats.level, env, seed);

        // Only the first monster in the cone takes the hit.
        let target = self
            .monsters
            .iter()
            .position(|m| cone_contains(self.player_pos, self.facing, m.position));
        if let Some(idx) = target {
            if self.monsters[idx].take_damage(damage) {
                let dead = self.monsters.remove(idx);
                let (exp, loot) = skirmish::monster_death_rewards(
                    env,
                    &self.stats.current_zone,
                    self.stats.level,
                    compute_seed(seed, 0, 20),
                );
                self.stats.apply_delta(StatKind::Experience, exp as i64);
                events.push(SessionEvent::LogAppended(format!(
                    "The level {} monster falls. +{exp} experience.",
                    dead.level
                )));
                if let Some(item) = loot {
                    self.inventory.add(&item, 1);
                    events.push(SessionEvent::LogAppended(format!("It drops: {item}")));
                    events.push(SessionEvent::InventoryChanged);
                }
                if check_level_up(&mut self.stats) > 0 {
                    events.push(SessionEvent::EffectRequested(EffectKind::LevelUp));
                    events.push(SessionEvent::LogAppended(format!(
                        "Level up! Now level {}.",
                        self.stats.level
                    )));
                }
                events.push(SessionEvent::StatsChanged);
            }
            return Ok(events);
        }

        // No monster in reach; maybe a crate.
        let crate_idx = self
            .crates
            .iter()
            .position(|c| c.position.distance(self.player_pos) <= CRATE_REACH);
        if let Some(idx) = crate_idx
            && self.crates[idx].hit(1)
        {
            self.crates.remove(idx);
            events.push(SessionEvent::EffectRequested(EffectKind::CrateBreak));
            match random_loot_for_zone(
                env,
                &self.stats.current_zone,
                self.stats.level,
                compute_seed(seed, 0, 21),
            ) {
                Some(item) => {
                    self.inventory.add(&item, 1);
                    events.push(SessionEvent::LogAppended(format!(
                        "The crate splinters open: {item}"
                    )));
                    events.push(SessionEvent::InventoryChanged);
                }
                None => events.push(SessionEvent::LogAppended("No loot found.".to_string())),
            }
        }
        Ok(events)
    }

    /// Try to place a monster. Spawning is gated to night in the spawn
    /// zone, capped by player level, and suspended while menus are open.
    pub fn try_spawn_monster(&mut self, position: Position) -> bool {
        if self.mode.suspends_skirmish()
            || !self.clock.is_night()
            || !self.stats.current_zone.eq_ignore_ascii_case(SPAWN_ZONE)
            || self.monsters.len() >= skirmish::max_monsters(self.stats.level)
        {
            return false;
        }
        self.monsters.push(Monster::spawn(self.stats.level, position));
        true
    }

    /// Place a breakable loot crate.
    pub fn spawn_crate(&mut self, position: Position, env: &Env) {
        let seed = self.next_seed(4);
        self.crates
            .push(LootCrate::spawn(self.stats.level, position, env, seed));
    }

    // ------------------------------------------------------------------
    // Stations and battle
    // ------------------------------------------------------------------

    fn enter_station(
        &mut self,
        kind: StationKind,
        env: &Env,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        if self.mode != Mode::None {
            return Err(SessionError::WrongMode(self.mode));
        }
        let mode = match kind {
            StationKind::LiquidityBank => Mode::Liquidity,
            StationKind::MerchantQuarter => Mode::Merchant,
            StationKind::RoyalMarket => Mode::Royal,
            StationKind::TinkerersLab => Mode::Tinker,
            StationKind::CraftingWorkshop => Mode::Craft,
            StationKind::TradingPost => Mode::Trading,
            StationKind::BattleArena => {
                let seed = self.next_seed(5);
                let enemy = Enemy::generate(self.stats.level, env, seed);
                let name = enemy.name.clone();
                self.battle = Some(BattleState::new(enemy));
                self.mode = Mode::Battle;
                return Ok(vec![
                    SessionEvent::BattleStateChanged,
                    SessionEvent::LogAppended(format!("{name} steps into the arena.")),
                ]);
            }
            StationKind::ScavengerGate => {
                return Ok(self.transition(SPAWN_ZONE, true));
            }
        };
        self.mode = mode;
        Ok(Vec::new())
    }

    /// Resolve one battle turn. Terminal outcomes close the battle and
    /// return the session to free roam.
    pub fn battle_action(
        &mut self,
        action: BattleAction,
        env: &Env,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        if self.mode != Mode::Battle {
            return Err(SessionError::WrongMode(self.mode));
        }
        let seed = self.next_seed(6);
        let battle = self.battle.as_mut().ok_or(SessionError::NoBattle)?;
        let report = battle.resolve_turn(
            action,
            &mut self.stats,
            &mut self.inventory,
            &self.equipment,
            env,
            seed,
        )?;

        let mut events = vec![SessionEvent::BattleStateChanged, SessionEvent::StatsChanged];
        if report.dodged {
            events.push(SessionEvent::EffectRequested(EffectKind::Dodge));
        }
        for line in report.log {
            events.push(SessionEvent::LogAppended(line));
        }
        match &report.outcome {
            BattleOutcome::Continue => {}
            BattleOutcome::Victory {
                loot, levels_gained, ..
            } => {
                if loot.is_some() {
                    events.push(SessionEvent::InventoryChanged);
                }
                if *levels_gained > 0 {
                    events.push(SessionEvent::EffectRequested(EffectKind::LevelUp));
                }
                self.close_battle();
            }
            BattleOutcome::Defeat { .. } | BattleOutcome::Fled => self.close_battle(),
        }
        Ok(events)
    }

    fn close_battle(&mut self) {
        self.battle = None;
        self.mode = Mode::None;
    }

    /// Derived battle stats for display.
    pub fn battle_stats(&self, env: &Env) -> BattleStats {
        BattleStats::derive(&self.stats, &self.equipment, env.catalog)
    }

    // ------------------------------------------------------------------
    // Camping
    // ------------------------------------------------------------------

    /// Offer the camping dialog, as the night-time auto-prompt does.
    pub fn request_camp(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        if self.mode != Mode::None {
            return Err(SessionError::WrongMode(self.mode));
        }
        if !camp_window_open(&self.clock) {
            return Err(SessionError::CampNotAvailable);
        }
        self.mode = Mode::CampingPrompt;
        Ok(vec![Self::camp_dialog()])
    }

    fn camp_dialog() -> SessionEvent {
        SessionEvent::DialogRequested {
            text: "Night is closing in. Set up camp?".to_string(),
            options: vec!["Set up camp".to_string(), "Keep moving".to_string()],
        }
    }

    fn begin_camp(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        if !camp_window_open(&self.clock) {
            self.mode = Mode::None;
            return Err(SessionError::CampNotAvailable);
        }
        if !has_camp_materials(&self.inventory) {
            self.mode = Mode::None;
            return Err(SessionError::CampMaterialsMissing);
        }
        camp::take_camp_materials(&mut self.inventory);
        self.pending_camp = Some(CampSetup::new());
        self.mode = Mode::None;
        Ok(vec![
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended("You begin pitching camp.".to_string()),
        ])
    }

    fn cancel_camp(&mut self) -> Vec<SessionEvent> {
        if self.pending_camp.take().is_some() {
            camp::refund_camp_materials(&mut self.inventory);
            return vec![
                SessionEvent::InventoryChanged,
                SessionEvent::LogAppended("You pack the camp materials back up.".to_string()),
            ];
        }
        Vec::new()
    }

    fn complete_camp(&mut self) -> Vec<SessionEvent> {
        self.stats
            .apply_delta(StatKind::Health, GameConfig::CAMP_RESTORE_HEALTH as i64);
        self.stats
            .apply_delta(StatKind::Stamina, GameConfig::CAMP_RESTORE_STAMINA as i64);
        self.stats
            .apply_delta(StatKind::Hunger, GameConfig::CAMP_RESTORE_HUNGER as i64);
        self.stats
            .apply_delta(StatKind::Thirst, GameConfig::CAMP_RESTORE_THIRST as i64);
        vec![
            SessionEvent::EffectRequested(EffectKind::CampFire),
            SessionEvent::StatsChanged,
            SessionEvent::LogAppended("You wake rested by the embers.".to_string()),
        ]
    }

    // ------------------------------------------------------------------
    // Time and the real-time loop
    // ------------------------------------------------------------------

    /// Advance the session by one frame of real time.
    pub fn advance(&mut self, dt_secs: f64, env: &Env) -> Vec<SessionEvent> {
        self.clock.advance(dt_secs);
        let mut events = Vec::new();

        // The camping offer fires once per evening, outside the Village.
        if self.clock.hour() == 18 {
            if !self.camp_prompted && self.mode == Mode::None && !self.in_village() {
                self.camp_prompted = true;
                self.mode = Mode::CampingPrompt;
                events.push(Self::camp_dialog());
            }
        } else {
            self.camp_prompted = false;
        }

        if let Some(setup) = self.pending_camp.as_mut()
            && setup.tick(dt_secs)
        {
            self.pending_camp = None;
            events.extend(self.complete_camp());
        }

        if !self.mode.suspends_skirmish() && !self.in_village() {
            events.extend(self.advance_skirmish(dt_secs, env));
        }

        if self.stats.is_dead() && !self.in_village() {
            events.extend(self.death());
        }
        events
    }

    fn advance_skirmish(&mut self, dt_secs: f64, env: &Env) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !self.clock.is_night() {
            if !self.monsters.is_empty() {
                self.monsters.clear();
                events.push(SessionEvent::LogAppended(
                    "The monsters slink away with the dawn.".to_string(),
                ));
            }
            return events;
        }

        let defense = BattleStats::derive(&self.stats, &self.equipment, env.catalog).defense;
        let now_ms = (self.clock.elapsed_secs() * 1000.0) as u64;
        let player = self.player_pos;
        let mut total_damage = 0u32;
        for monster in &mut self.monsters {
            if let Some(raw) = monster.update(player, now_ms, dt_secs as f32) {
                total_damage += skirmish::monster_strike_damage(raw, defense);
            }
        }
        if total_damage > 0 {
            self.stats.health = self.stats.health.saturating_sub(total_damage);
            events.push(SessionEvent::StatsChanged);
            events.push(SessionEvent::LogAppended(format!(
                "A monster tears at you for {total_damage}."
            )));
        }
        events
    }

    // ------------------------------------------------------------------
    // Death and travel
    // ------------------------------------------------------------------

    fn death(&mut self) -> Vec<SessionEvent> {
        tracing::info!(zone = %self.stats.current_zone, "player death");
        self.inventory.clear();
        self.equipment = Equipment::new();
        self.stats.refill_gauges();
        self.stats.current_zone = zone::VILLAGE.to_string();
        self.monsters.clear();
        self.crates.clear();
        self.battle = None;
        self.flow = None;
        self.pending_camp = None;
        self.mode = Mode::None;
        vec![
            SessionEvent::PlayerDeath,
            SessionEvent::LogAppended("Everything goes dark. You wake in the Village.".to_string()),
            SessionEvent::StatsChanged,
            SessionEvent::InventoryChanged,
            SessionEvent::ZoneTransitionRequested {
                zone: zone::VILLAGE.to_string(),
                carry: self.carry(),
            },
        ]
    }

    /// Move to another zone. `refill` restores the survival gauges, as the
    /// scavenger gate and the return option do; directive travel keeps
    /// them as they are.
    fn transition(&mut self, dest: &str, refill: bool) -> Vec<SessionEvent> {
        if refill {
            self.stats.refill_gauges();
        }
        self.stats.current_zone = dest.to_string();
        self.monsters.clear();
        self.crates.clear();
        self.flow = None;
        self.mode = Mode::None;
        vec![
            SessionEvent::StatsChanged,
            SessionEvent::ZoneTransitionRequested {
                zone: dest.to_string(),
                carry: self.carry(),
            },
        ]
    }

    // ------------------------------------------------------------------
    // Economy operations (gated to their station's mode)
    // ------------------------------------------------------------------

    fn require_mode(&self, wanted: Mode) -> Result<(), SessionError> {
        if self.mode == wanted {
            Ok(())
        } else {
            Err(SessionError::WrongMode(self.mode))
        }
    }

    pub fn deposit(
        &mut self,
        env: &Env,
        item: &str,
        amount: u32,
        duration_secs: u64,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Liquidity)?;
        let now = self.clock.elapsed_secs() as u64;
        let estimate = self.pool.deposit(
            &mut self.inventory,
            env.catalog,
            item,
            amount,
            duration_secs,
            now,
        )?;
        Ok(vec![
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(format!(
                "Deposited {amount} {item}; projected yield {estimate} oromozi."
            )),
        ])
    }

    pub fn withdraw(&mut self, index: usize) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Liquidity)?;
        let now = self.clock.elapsed_secs() as u64;
        let receipt = self
            .pool
            .withdraw(&mut self.stats, &mut self.inventory, index, now)?;
        Ok(vec![
            SessionEvent::StatsChanged,
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(format!(
                "Withdrew {} {} plus {} oromozi in yield.",
                receipt.amount, receipt.item, receipt.yield_earned
            )),
        ])
    }

    pub fn list_item(&mut self, item: &str, price: u32) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Merchant)?;
        self.nonce += 1;
        let nonce = self.nonce;
        self.merchant
            .list_item(&mut self.inventory, item, price, nonce)?;
        Ok(vec![SessionEvent::InventoryChanged])
    }

    pub fn edit_listing(
        &mut self,
        index: usize,
        price: u32,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Merchant)?;
        self.merchant.edit_price(index, price)?;
        Ok(Vec::new())
    }

    pub fn cancel_listing(&mut self, index: usize) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Merchant)?;
        self.merchant.cancel(&mut self.inventory, index)?;
        Ok(vec![SessionEvent::InventoryChanged])
    }

    pub fn buy_merchant_stock(
        &mut self,
        env: &Env,
        item: &str,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Merchant)?;
        let price =
            MerchantQuarter::buy_stock(&mut self.stats, &mut self.inventory, env.tables, item)?;
        Ok(vec![
            SessionEvent::StatsChanged,
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(format!("Bought {item} for {price} oromozi.")),
        ])
    }

    pub fn buy_royal(
        &mut self,
        env: &Env,
        category: &str,
        item: &str,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Royal)?;
        let price = royal::purchase(&mut self.stats, &mut self.inventory, env.tables, category, item)?;
        Ok(vec![
            SessionEvent::StatsChanged,
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(format!("Bought {item} for {price} oromozi.")),
        ])
    }

    pub fn post_trade(
        &mut self,
        offer: &str,
        request: &str,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Trading)?;
        self.trading.post(&mut self.inventory, offer, request)?;
        Ok(vec![SessionEvent::InventoryChanged])
    }

    pub fn accept_trade(&mut self, index: usize) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Trading)?;
        let done = self.trading.accept(&mut self.inventory, index)?;
        Ok(vec![
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(format!(
                "Traded {} for {}.",
                done.request, done.offer
            )),
        ])
    }

    pub fn cancel_trade(&mut self, index: usize) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Trading)?;
        self.trading.cancel(&mut self.inventory, index)?;
        Ok(vec![SessionEvent::InventoryChanged])
    }

    pub fn craft_item(&mut self, env: &Env, result: &str) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Craft)?;
        crafting::craft(&mut self.inventory, env.tables, result)?;
        Ok(vec![
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(format!("Crafted {result}.")),
        ])
    }

    pub fn repair_item(&mut self, item: &str) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Craft)?;
        crafting::repair(&mut self.inventory, item)?;
        Ok(vec![
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(format!("Repaired {item} with a length of wood.")),
        ])
    }

    pub fn run_experiment(
        &mut self,
        env: &Env,
        ingredients: &[String; 3],
    ) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Tinker)?;
        let result = crafting::experiment(&mut self.inventory, env.tables, ingredients)?;
        let line = match &result {
            Some(item) => format!("The contraption clicks together: {item}!"),
            None => "The parts refuse to fit. The bench is littered with scrap.".to_string(),
        };
        Ok(vec![
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(line),
        ])
    }

    pub fn salvage_item(&mut self, env: &Env, item: &str) -> Result<Vec<SessionEvent>, SessionError> {
        self.require_mode(Mode::Tinker)?;
        let seed = self.next_seed(7);
        let scrap = crafting::salvage(
            &mut self.inventory,
            env,
            &self.stats.current_zone,
            self.stats.level,
            item,
            seed,
        )?;
        let line = match &scrap {
            Some(found) => format!("Salvaged {item} into {found}."),
            None => format!("{item} comes apart into worthless dust."),
        };
        Ok(vec![
            SessionEvent::InventoryChanged,
            SessionEvent::LogAppended(line),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FixedRng, ScriptedRng, TestEnv};

    fn session(zone: &str) -> GameSession {
        GameSession::new(zone, GameConfig::default(), 7)
    }

    #[test]
    fn fresh_session_carries_the_starter_kit() {
        let s = session("Village");
        assert_eq!(s.stats.oromozi, 1000);
        assert_eq!(s.stats.level, 1);
        assert!(s.inventory.has("Bread"));
        assert_eq!(s.mode(), Mode::None);
    }

    #[test]
    fn movement_is_gated_by_mode() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Village");

        s.dispatch(PlayerAction::Move(Direction::Right), &env).unwrap();
        assert_eq!(s.player_pos.x, MOVE_STEP);

        s.dispatch(
            PlayerAction::Interact(InteractTarget::Station(StationKind::LiquidityBank)),
            &env,
        )
        .unwrap();
        assert_eq!(s.mode(), Mode::Liquidity);

        // Frozen in place, but facing still updates.
        s.dispatch(PlayerAction::Move(Direction::Left), &env).unwrap();
        assert_eq!(s.player_pos.x, MOVE_STEP);
        assert_eq!(s.facing, Direction::Left);

        s.dispatch(PlayerAction::Cancel, &env).unwrap();
        assert_eq!(s.mode(), Mode::None);
    }

    #[test]
    fn narrative_flow_walks_the_mode_machine() {
        let fixture = TestEnv::new();
        let rng = FixedRng(0);
        let env = fixture.env_with_rng(&rng);
        let mut s = session("Outer Grasslands");

        s.dispatch(PlayerAction::Interact(InteractTarget::EventMarker), &env)
            .unwrap();
        assert_eq!(s.mode(), Mode::Prologue);

        s.dispatch(PlayerAction::Confirm, &env).unwrap();
        assert_eq!(s.mode(), Mode::Prompt);

        let events = s.dispatch(PlayerAction::Confirm, &env).unwrap();
        assert_eq!(s.mode(), Mode::Choices);
        let SessionEvent::DialogRequested { options, .. } = &events[0] else {
            panic!("expected choices dialog");
        };
        // Two prompt options plus Back; no return option yet.
        assert_eq!(options.len(), 3);
        assert_eq!(options.last().map(String::as_str), Some("Back"));

        // Option 0: "(-20 hunger)(+10 exp)".
        s.dispatch(PlayerAction::SelectOption(0), &env).unwrap();
        assert_eq!(s.mode(), Mode::Outcome);
        assert_eq!(s.stats.hunger, 75); // -20, then -5 decay
        assert_eq!(s.stats.experience, 15); // +10, +5 exploration

        s.dispatch(PlayerAction::Confirm, &env).unwrap();
        assert_eq!(s.mode(), Mode::ItemMenu);
        s.dispatch(PlayerAction::SelectOption(2), &env).unwrap();
        assert_eq!(s.mode(), Mode::None);
        assert_eq!(s.prompt_count(), 1);
    }

    #[test]
    fn cancelling_the_outcome_screen_still_reaches_the_item_menu() {
        let fixture = TestEnv::new();
        let rng = FixedRng(0);
        let env = fixture.env_with_rng(&rng);
        let mut s = session("Outer Grasslands");

        s.dispatch(PlayerAction::Interact(InteractTarget::EventMarker), &env)
            .unwrap();
        s.dispatch(PlayerAction::Confirm, &env).unwrap();
        s.dispatch(PlayerAction::Confirm, &env).unwrap();
        s.dispatch(PlayerAction::SelectOption(0), &env).unwrap();
        assert_eq!(s.mode(), Mode::Outcome);

        s.dispatch(PlayerAction::Cancel, &env).unwrap();
        assert_eq!(s.mode(), Mode::ItemMenu);

        s.dispatch(PlayerAction::Cancel, &env).unwrap();
        assert_eq!(s.mode(), Mode::None);
        assert_eq!(s.prompt_count(), 1);
    }

    #[test]
    fn return_option_appears_after_enough_prompts() {
        let fixture = TestEnv::new();
        let rng = FixedRng(0);
        let env = fixture.env_with_rng(&rng);
        let mut s = session("Shady Grove");
        s.prompt_count = 8;

        s.dispatch(PlayerAction::Interact(InteractTarget::EventMarker), &env)
            .unwrap();
        s.dispatch(PlayerAction::Confirm, &env).unwrap();
        let events = s.dispatch(PlayerAction::Confirm, &env).unwrap();
        let SessionEvent::DialogRequested { options, .. } = &events[0] else {
            panic!("expected choices dialog");
        };
        assert!(options.iter().any(|o| o == "Return to Outer Grasslands"));
    }

    #[test]
    fn camping_end_to_end_restores_gauges() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Outer Grasslands");
        s.inventory.add("Stick", 2);
        s.inventory.add("Cloth", 1);
        s.stats.health = 40;
        s.stats.stamina = 20;
        s.stats.hunger = 90;
        s.stats.thirst = 50;
        s.clock.set_hour(19);

        s.request_camp().unwrap();
        assert_eq!(s.mode(), Mode::CampingPrompt);
        s.dispatch(PlayerAction::SelectOption(0), &env).unwrap();
        assert!(s.camp_in_progress().is_some());
        assert_eq!(s.inventory.count("Stick"), 0);
        assert_eq!(s.inventory.count("Cloth"), 0);

        // 90 seconds later the camp completes.
        let events = s.advance(90.0, &env);
        assert!(s.camp_in_progress().is_none());
        assert!(events.contains(&SessionEvent::EffectRequested(EffectKind::CampFire)));
        assert_eq!(s.stats.health, 70); // 40 + 30
        assert_eq!(s.stats.stamina, 70); // 20 + 50
        assert_eq!(s.stats.hunger, 100); // 90 + 20, clamped
        assert_eq!(s.stats.thirst, 80); // 50 + 30
    }

    #[test]
    fn cancelling_camp_setup_refunds_materials() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Outer Grasslands");
        s.inventory.add("Stick", 2);
        s.inventory.add("Cloth", 1);
        s.clock.set_hour(19);

        s.request_camp().unwrap();
        s.dispatch(PlayerAction::SelectOption(0), &env).unwrap();
        s.advance(10.0, &env);
        s.dispatch(PlayerAction::Cancel, &env).unwrap();
        assert!(s.camp_in_progress().is_none());
        assert_eq!(s.inventory.count("Stick"), 2);
        assert_eq!(s.inventory.count("Cloth"), 1);
    }

    #[test]
    fn camping_outside_the_window_is_refused() {
        let mut s = session("Outer Grasslands");
        s.clock.set_hour(12);
        assert_eq!(s.request_camp(), Err(SessionError::CampNotAvailable));
        assert_eq!(s.mode(), Mode::None);
    }

    #[test]
    fn missing_materials_decline_the_camp() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Outer Grasslands");
        s.clock.set_hour(19);
        s.request_camp().unwrap();
        let err = s.dispatch(PlayerAction::SelectOption(0), &env).unwrap_err();
        assert_eq!(err, SessionError::CampMaterialsMissing);
        assert_eq!(s.mode(), Mode::None);
    }

    #[test]
    fn evening_auto_prompt_fires_once() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Outer Grasslands");
        s.clock.set_hour(17);

        // Cross into hour 18.
        let events = s.advance(10.0, &env);
        assert_eq!(s.mode(), Mode::CampingPrompt);
        assert!(matches!(
            events.first(),
            Some(SessionEvent::DialogRequested { .. })
        ));

        // Decline, then stay inside hour 18: no second prompt.
        s.dispatch(PlayerAction::SelectOption(1), &env).unwrap();
        let events = s.advance(1.0, &env);
        assert!(events.is_empty());
        assert_eq!(s.mode(), Mode::None);
    }

    #[test]
    fn death_wipes_the_pack_but_keeps_progression() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Outer Grasslands");
        s.stats.level = 4;
        s.stats.experience = 55;
        s.stats.oromozi = 777;
        s.stats.health = 0;

        let events = s.advance(0.1, &env);
        assert!(events.contains(&SessionEvent::PlayerDeath));
        assert!(s.inventory.is_empty());
        assert_eq!(s.stats.current_zone, "Village");
        assert_eq!(s.stats.health, 100);
        assert_eq!(s.stats.level, 4);
        assert_eq!(s.stats.experience, 55);
        assert_eq!(s.stats.oromozi, 777);
    }

    #[test]
    fn arena_battles_open_and_close_the_battle_mode() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Village");

        s.dispatch(
            PlayerAction::Interact(InteractTarget::Station(StationKind::BattleArena)),
            &env,
        )
        .unwrap();
        assert_eq!(s.mode(), Mode::Battle);
        assert!(s.battle.is_some());

        // Guarantee the escape so the test ends deterministically.
        s.stats.level = 99;
        let events = s.battle_action(BattleAction::Flee, &env).unwrap();
        assert!(events.contains(&SessionEvent::BattleStateChanged));
        assert_eq!(s.mode(), Mode::None);
        assert!(s.battle.is_none());
    }

    #[test]
    fn a_dodged_battle_turn_raises_the_effect_cue() {
        let fixture = TestEnv::new();
        // Enemy offset 0, name index 0, then dodge roll 0 beats evasion 5.
        let rng = ScriptedRng::new([0, 0, 0]);
        let env = fixture.env_with_rng(&rng);
        let mut s = session("Village");

        s.dispatch(
            PlayerAction::Interact(InteractTarget::Station(StationKind::BattleArena)),
            &env,
        )
        .unwrap();
        let events = s.battle_action(BattleAction::Defend, &env).unwrap();
        assert!(events.contains(&SessionEvent::EffectRequested(EffectKind::Dodge)));
        assert_eq!(s.stats.health, 100);
    }

    #[test]
    fn economy_operations_demand_their_station() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Village");
        s.inventory.add("Stick", 10);

        let err = s.deposit(&env, "Stick", 5, 1000).unwrap_err();
        assert_eq!(err, SessionError::WrongMode(Mode::None));

        s.dispatch(
            PlayerAction::Interact(InteractTarget::Station(StationKind::LiquidityBank)),
            &env,
        )
        .unwrap();
        s.deposit(&env, "Stick", 5, 1000).unwrap();
        assert_eq!(s.inventory.count("Stick"), 5);
        assert_eq!(s.pool.deposits().len(), 1);
    }

    #[test]
    fn monsters_spawn_only_at_night_in_the_spawn_zone() {
        let mut s = session("Outer Grasslands");
        s.clock.set_hour(12);
        assert!(!s.try_spawn_monster(Position::new(100.0, 0.0)));
        s.clock.set_hour(22);
        assert!(s.try_spawn_monster(Position::new(100.0, 0.0)));
        // Cap at 3 for level 1.
        assert!(s.try_spawn_monster(Position::new(120.0, 0.0)));
        assert!(s.try_spawn_monster(Position::new(140.0, 0.0)));
        assert!(!s.try_spawn_monster(Position::new(160.0, 0.0)));

        let mut village = session("Village");
        village.clock.set_hour(22);
        assert!(!village.try_spawn_monster(Position::default()));
    }

    #[test]
    fn swing_kills_the_first_monster_in_the_cone() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Outer Grasslands");
        s.clock.set_hour(22);
        s.facing = Direction::Right;
        assert!(s.try_spawn_monster(Position::new(50.0, 0.0)));
        assert!(s.try_spawn_monster(Position::new(100.0, 0.0)));
        s.monsters[0].health = 1;
        s.monsters[1].health = 1;

        let events = s.dispatch(PlayerAction::Attack, &env).unwrap();
        assert_eq!(s.monsters.len(), 1);
        assert!(events.iter().any(|e| matches!(e, SessionEvent::LogAppended(l) if l.contains("falls"))));
        // Kill reward landed.
        assert!(s.stats.experience >= 10);
    }

    #[test]
    fn crates_break_and_pay_out() {
        let fixture = TestEnv::new();
        let rng = FixedRng(50);
        let env = fixture.env_with_rng(&rng);
        let mut s = session("Outer Grasslands");
        s.spawn_crate(Position::new(10.0, 0.0), &env);
        let swings_needed = s.crates[0].health;

        let mut broke = false;
        for _ in 0..swings_needed {
            let events = s.dispatch(PlayerAction::Attack, &env).unwrap();
            broke = events
                .iter()
                .any(|e| matches!(e, SessionEvent::EffectRequested(EffectKind::CrateBreak)));
        }
        assert!(broke);
        assert!(s.crates.is_empty());
        assert!(!s.inventory.is_empty());
    }

    #[test]
    fn the_scavenger_gate_refills_gauges_on_the_way_out() {
        let fixture = TestEnv::new();
        let env = fixture.env();
        let mut s = session("Village");
        s.stats.stamina = 30;
        let events = s
            .dispatch(
                PlayerAction::Interact(InteractTarget::Station(StationKind::ScavengerGate)),
                &env,
            )
            .unwrap();
        assert_eq!(s.stats.current_zone, "Outer Grasslands");
        assert_eq!(s.stats.stamina, 100);
        assert!(events.iter().any(|e| matches!(
            e,
            SessionEvent::ZoneTransitionRequested { zone, .. } if zone == "Outer Grasslands"
        )));
    }
}
