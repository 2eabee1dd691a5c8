//! Nivel: reloj compartido y condicion de victoria.
use log::info;

/// Lo que el gestor de ordenes le pide al nivel. Ninguna llamada devuelve nada.
pub trait LevelController {
    fn add_time_bonus(&mut self, seconds: u32);
    fn all_goals_finished(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    Playing,
    Won,
    Lost,
}

pub struct LevelData {
    time_remaining: f32,
    state: LevelState,
}

impl LevelData {
    pub fn new(time_budget: f32) -> LevelData {
        LevelData {
            time_remaining: time_budget,
            state: LevelState::Playing,
        }
    }

    pub fn tick(&mut self, delta: f32) {
        if self.state != LevelState::Playing {
            return;
        }
        self.time_remaining = (self.time_remaining - delta).max(0.0);
        if self.time_remaining <= 0.0 {
            info!("[LEVEL] Time is up");
            self.state = LevelState::Lost;
        }
    }

    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    pub fn state(&self) -> LevelState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != LevelState::Playing
    }
}

impl LevelController for LevelData {
    fn add_time_bonus(&mut self, seconds: u32) {
        if self.state != LevelState::Playing {
            return;
        }
        self.time_remaining += seconds as f32;
        info!(
            "[LEVEL] Added {} seconds, {:.1} remaining",
            seconds, self.time_remaining
        );
    }

    fn all_goals_finished(&mut self) {
        if self.state == LevelState::Playing {
            info!("[LEVEL] All goals finished");
            self.state = LevelState::Won;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_down_while_playing() {
        let mut level = LevelData::new(10.0);
        level.tick(4.0);
        assert_eq!(6.0, level.time_remaining());
        assert_eq!(LevelState::Playing, level.state());
    }

    #[test]
    fn should_lose_when_time_runs_out() {
        let mut level = LevelData::new(1.0);
        level.tick(2.0);
        assert_eq!(0.0, level.time_remaining());
        assert_eq!(LevelState::Lost, level.state());
        assert_eq!(true, level.is_over());
    }

    #[test]
    fn should_add_bonus_time() {
        let mut level = LevelData::new(10.0);
        level.add_time_bonus(8);
        assert_eq!(18.0, level.time_remaining());
    }

    #[test]
    fn should_win_and_stop_the_clock() {
        let mut level = LevelData::new(10.0);
        level.all_goals_finished();
        level.tick(20.0);
        level.add_time_bonus(5);
        assert_eq!(LevelState::Won, level.state());
        assert_eq!(10.0, level.time_remaining());
    }

    #[test]
    fn should_not_win_after_losing() {
        let mut level = LevelData::new(1.0);
        level.tick(1.0);
        level.all_goals_finished();
        assert_eq!(LevelState::Lost, level.state());
    }
}
