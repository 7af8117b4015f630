//! Game module - owns every actor and sequences a turn
//!
//! A turn is: apply the operator's command to the player, then let every live
//! enemy take a random step and attack the player. Enemy attacks have no range
//! check. The turn stops early once the player is defeated.
//!
//! The game never exits the process. Quitting and player defeat are reported as
//! [`Phase::GameOver`] and the caller decides what to do.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::actor::Actor;
use crate::grid;
use crate::rng::GameRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Most events a single turn can produce with `MAX_ENEMY_COUNT` enemies:
/// one invalid-command notice, a hit and a defeat per enemy from the player,
/// a hit per enemy on the player, and the player's defeat.
pub const MAX_TURN_EVENTS: usize = 3 * MAX_ENEMY_COUNT + 2;

/// Events of the most recent turn, in the order they happened
pub type TurnLog = ArrayVec<TurnEvent, MAX_TURN_EVENTS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(GameOverReason),
}

#[derive(Debug, Clone)]
pub struct Game {
    player: Actor,
    enemies: Vec<Actor>,
    rng: GameRng,
    phase: Phase,
    events: TurnLog,
    /// Turns played so far (quit turns included)
    turn: u32,
}

impl Game {
    /// Create a new game with the default enemy count
    pub fn new(seed: u64) -> Self {
        Self::with_enemy_count(seed, DEFAULT_ENEMY_COUNT)
    }

    /// Create a new game with `count` enemies at random cells.
    ///
    /// `count` is capped at [`MAX_ENEMY_COUNT`]. Enemies may share a cell with
    /// each other or with the player.
    pub fn with_enemy_count(seed: u64, count: usize) -> Self {
        let mut rng = GameRng::new(seed);
        let enemies = (0..count.min(MAX_ENEMY_COUNT))
            .map(|_| Actor::enemy(rng.cell()))
            .collect();
        Self::assemble(rng, Actor::player(grid::center()), enemies)
    }

    /// Create a game from explicit actors; extra enemies past
    /// [`MAX_ENEMY_COUNT`] are dropped.
    pub fn from_parts(seed: u64, player: Actor, mut enemies: Vec<Actor>) -> Self {
        enemies.truncate(MAX_ENEMY_COUNT);
        Self::assemble(GameRng::new(seed), player, enemies)
    }

    fn assemble(rng: GameRng, player: Actor, enemies: Vec<Actor>) -> Self {
        info!(
            "new game: seed={} enemies={} player={:?}",
            rng.seed(),
            enemies.len(),
            player.pos()
        );
        Self {
            player,
            enemies,
            rng,
            phase: Phase::Running,
            events: TurnLog::new(),
            turn: 0,
        }
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    pub fn enemies(&self) -> &[Actor] {
        &self.enemies
    }

    pub fn live_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Events produced by the last call to [`Game::step`]
    pub fn events(&self) -> &[TurnEvent] {
        &self.events
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Play one turn.
    ///
    /// Does nothing once the game is over. `Quit` ends the game before any
    /// enemy acts; every other command is followed by the enemy phase.
    pub fn step(&mut self, command: Command) -> Phase {
        if self.is_over() {
            return self.phase;
        }

        self.events.clear();
        self.turn = self.turn.wrapping_add(1);
        debug!("turn {}: {}", self.turn, command.as_str());

        match command {
            Command::Move(dir) => {
                let (dx, dy) = dir.delta();
                if !self.player.try_move(dx, dy) {
                    debug!("player move {:?} blocked at {:?}", dir, self.player.pos());
                }
            }
            Command::Attack => {
                self.attack_nearby();
            }
            Command::Quit => {
                info!("player quit on turn {}", self.turn);
                self.phase = Phase::GameOver(GameOverReason::Quit);
                return self.phase;
            }
            Command::Invalid(ch) => {
                debug!("invalid command {ch:?}");
                record(&mut self.events, TurnEvent::InvalidCommand(ch));
            }
        }

        self.enemy_phase();
        self.phase
    }

    /// Player attacks every live enemy within Chebyshev distance 1.
    ///
    /// Returns the number of enemies hit.
    pub fn attack_nearby(&mut self) -> usize {
        let origin = self.player.pos();
        let mut hits = 0;

        for enemy in self.enemies.iter_mut() {
            if origin.chebyshev(enemy.pos()) > 1 {
                continue;
            }
            let Some(hit) = self.player.attack(enemy, &mut self.rng) else {
                continue;
            };
            hits += 1;
            debug!("player hits enemy at {:?} for {}", enemy.pos(), hit.damage);
            record(&mut self.events, TurnEvent::PlayerHit { damage: hit.damage });
            if hit.defeated {
                info!("enemy at {:?} defeated", enemy.pos());
                record(&mut self.events, TurnEvent::EnemyDefeated);
            }
        }

        hits
    }

    fn enemy_phase(&mut self) {
        for enemy in self.enemies.iter_mut().filter(|e| e.is_alive()) {
            enemy.move_randomly(&mut self.rng);

            let Some(hit) = enemy.attack(&mut self.player, &mut self.rng) else {
                continue;
            };
            debug!(
                "enemy at {:?} hits player for {} ({} left)",
                enemy.pos(),
                hit.damage,
                hit.remaining
            );
            record(&mut self.events, TurnEvent::EnemyHit { damage: hit.damage });

            if hit.defeated {
                info!("player defeated on turn {}", self.turn);
                record(&mut self.events, TurnEvent::PlayerDefeated);
                self.phase = Phase::GameOver(GameOverReason::PlayerDefeated);
                return;
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.player = self.player;
        out.enemies.clear();
        out.enemies.extend(self.enemies.iter().copied());
        out.events.clear();
        out.events.extend(self.events.iter().copied());
        out.phase = self.phase;
        out.turn = self.turn;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn record(events: &mut TurnLog, event: TurnEvent) {
    // Capacity covers the worst case for MAX_ENEMY_COUNT enemies.
    let _ = events.try_push(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone_enemy_game(seed: u64, player: Position, enemy: Position) -> Game {
        Game::from_parts(seed, Actor::player(player), vec![Actor::enemy(enemy)])
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(12345);
        assert_eq!(game.player().pos(), Position::new(6, 4));
        assert_eq!(game.player().health(), PLAYER_HEALTH);
        assert_eq!(game.enemies().len(), DEFAULT_ENEMY_COUNT);
        assert!(game.enemies().iter().all(|e| grid::contains(e.pos())));
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.turn(), 0);
        assert!(game.events().is_empty());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::with_enemy_count(777, 4);
        let mut b = Game::with_enemy_count(777, 4);
        let script = [
            Command::Move(Direction::Left),
            Command::Attack,
            Command::Move(Direction::Up),
            Command::Invalid('x'),
            Command::Attack,
        ];
        for cmd in script {
            a.step(cmd);
            b.step(cmd);
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn test_enemy_count_is_capped() {
        let game = Game::with_enemy_count(1, 1000);
        assert_eq!(game.enemies().len(), MAX_ENEMY_COUNT);
        let game = Game::with_enemy_count(1, 0);
        assert!(game.enemies().is_empty());
    }

    #[test]
    fn test_player_moves_with_wasd() {
        let mut game = Game::from_parts(1, Actor::player(Position::new(6, 4)), vec![]);
        game.step(Command::Move(Direction::Up));
        assert_eq!(game.player().pos(), Position::new(6, 3));
        game.step(Command::Move(Direction::Left));
        assert_eq!(game.player().pos(), Position::new(5, 3));
        game.step(Command::Move(Direction::Down));
        assert_eq!(game.player().pos(), Position::new(5, 4));
        game.step(Command::Move(Direction::Right));
        assert_eq!(game.player().pos(), Position::new(6, 4));
    }

    #[test]
    fn test_player_blocked_at_edge() {
        let mut game = Game::from_parts(1, Actor::player(Position::new(0, 0)), vec![]);
        game.step(Command::Move(Direction::Up));
        game.step(Command::Move(Direction::Left));
        assert_eq!(game.player().pos(), Position::new(0, 0));
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_coincident_enemy_always_hit() {
        for seed in 0..100 {
            let mut game = lone_enemy_game(seed, Position::new(6, 4), Position::new(6, 4));
            assert_eq!(game.attack_nearby(), 1, "seed {seed}");
            assert!(game.enemies()[0].health() < ENEMY_HEALTH);
        }
    }

    #[test]
    fn test_area_attack_uses_chebyshev_radius_one() {
        let player = Position::new(6, 4);
        let ring = |radius: i32| -> Vec<Actor> {
            let mut enemies = Vec::new();
            for dx in -radius..=radius {
                for dy in -radius..=radius {
                    if dx.abs().max(dy.abs()) == radius {
                        enemies.push(Actor::enemy(player.offset(dx, dy)));
                    }
                }
            }
            enemies
        };

        // Centre cell plus all eight neighbours.
        let mut near = ring(0);
        near.extend(ring(1));
        assert_eq!(near.len(), 9);
        let mut game = Game::from_parts(3, Actor::player(player), near);
        assert_eq!(game.attack_nearby(), 9);
        assert!(game.enemies().iter().all(|e| e.health() < ENEMY_HEALTH));

        let far = ring(2);
        assert_eq!(far.len(), 16);
        let mut game = Game::from_parts(3, Actor::player(player), far);
        assert_eq!(game.attack_nearby(), 0);
        assert!(game.enemies().iter().all(|e| e.health() == ENEMY_HEALTH));
        assert!(game.events().is_empty());
    }

    #[test]
    fn test_defeated_enemy_not_hit_again() {
        let mut game = Game::from_parts(
            4,
            Actor::player(Position::new(6, 4)),
            vec![Actor::enemy(Position::new(6, 4)).with_health(1)],
        );
        assert_eq!(game.attack_nearby(), 1);
        assert!(game.enemies()[0].is_defeated());
        assert_eq!(game.attack_nearby(), 0);
    }

    #[test]
    fn test_attack_turn_logs_hits_then_enemy_replies() {
        let mut game = Game::from_parts(
            8,
            Actor::player(Position::new(6, 4)),
            vec![Actor::enemy(Position::new(6, 4)).with_health(1)],
        );
        game.step(Command::Attack);
        assert!(matches!(game.events()[0], TurnEvent::PlayerHit { .. }));
        assert_eq!(game.events()[1], TurnEvent::EnemyDefeated);
        // Defeated enemies no longer act.
        assert_eq!(game.events().len(), 2);
        assert_eq!(game.player().health(), PLAYER_HEALTH);
        assert_eq!(game.live_enemies(), 0);
    }

    #[test]
    fn test_enemies_attack_from_any_distance() {
        let mut game = lone_enemy_game(5, Position::new(0, 0), Position::new(11, 7));
        game.step(Command::Move(Direction::Right));
        assert!(game.player().health() < PLAYER_HEALTH);
        assert!(matches!(game.events()[0], TurnEvent::EnemyHit { .. }));
    }

    #[test]
    fn test_invalid_command_still_runs_enemies() {
        let mut game = lone_enemy_game(6, Position::new(6, 4), Position::new(0, 0));
        game.step(Command::Invalid('x'));
        assert_eq!(game.events()[0], TurnEvent::InvalidCommand('x'));
        assert!(matches!(game.events()[1], TurnEvent::EnemyHit { .. }));
        assert_eq!(game.player().pos(), Position::new(6, 4));
    }

    #[test]
    fn test_quit_skips_enemy_phase() {
        let mut game = lone_enemy_game(6, Position::new(6, 4), Position::new(0, 0));
        let phase = game.step(Command::Quit);
        assert_eq!(phase, Phase::GameOver(GameOverReason::Quit));
        assert!(game.events().is_empty());
        assert_eq!(game.player().health(), PLAYER_HEALTH);
        assert_eq!(game.enemies()[0].pos(), Position::new(0, 0));
    }

    #[test]
    fn test_player_defeat_ends_turn_immediately() {
        let mut enemies = vec![Actor::enemy(Position::new(0, 0)); 3];
        enemies[0] = Actor::enemy(Position::new(1, 1));
        let mut game = Game::from_parts(
            11,
            Actor::player(Position::new(6, 4)).with_health(1),
            enemies,
        );

        let phase = game.step(Command::Move(Direction::Up));
        assert_eq!(phase, Phase::GameOver(GameOverReason::PlayerDefeated));
        assert!(game.player().is_defeated());
        // The first enemy's hit was fatal; the rest never got to act.
        assert_eq!(game.events().len(), 2);
        assert!(matches!(game.events()[0], TurnEvent::EnemyHit { .. }));
        assert_eq!(game.events()[1], TurnEvent::PlayerDefeated);
        assert_eq!(game.enemies()[1].pos(), Position::new(0, 0));
        assert_eq!(game.enemies()[2].pos(), Position::new(0, 0));
    }

    #[test]
    fn test_no_turns_after_game_over() {
        let mut game = Game::from_parts(
            2,
            Actor::player(Position::new(6, 4)).with_health(1),
            vec![Actor::enemy(Position::new(6, 4))],
        );
        game.step(Command::Attack);
        assert!(game.is_over());
        let before = game.snapshot();

        game.step(Command::Attack);
        game.step(Command::Move(Direction::Left));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_game_eventually_ends_when_idle() {
        let mut game = Game::new(31337);
        let mut turns = 0;
        while !game.is_over() {
            game.step(Command::Invalid('.'));
            turns += 1;
            assert!(turns <= 100, "two enemies hitting every turn must win by now");
        }
        assert_eq!(
            game.phase(),
            Phase::GameOver(GameOverReason::PlayerDefeated)
        );
        assert!(game.player().health() <= 0);
    }
}
