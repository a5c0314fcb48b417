//! The global animation speed, cycled by user command.

use std::fmt;

use tracing::info;

/// The four selectable speed multipliers, in cycling order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpeedSetting {
    Half,
    #[default]
    Normal,
    Double,
    Fast,
}

impl SpeedSetting {
    pub const ALL: [SpeedSetting; 4] = [
        SpeedSetting::Half,
        SpeedSetting::Normal,
        SpeedSetting::Double,
        SpeedSetting::Fast,
    ];

    /// The following setting, wrapping from `Fast` back to `Half`.
    pub fn next(self) -> Self {
        match self {
            SpeedSetting::Half => SpeedSetting::Normal,
            SpeedSetting::Normal => SpeedSetting::Double,
            SpeedSetting::Double => SpeedSetting::Fast,
            SpeedSetting::Fast => SpeedSetting::Half,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            SpeedSetting::Half => 0.5,
            SpeedSetting::Normal => 1.0,
            SpeedSetting::Double => 2.0,
            SpeedSetting::Fast => 5.0,
        }
    }

    /// The setting with exactly this multiplier, if any.
    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.multiplier() == multiplier)
    }
}

impl fmt::Display for SpeedSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Speed: {}x", self.multiplier())
    }
}

/// Process-wide speed state. Written only by user commands between ticks,
/// read once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    setting: SpeedSetting,
    paused: bool,
}

impl AnimationClock {
    pub fn new(setting: SpeedSetting) -> Self {
        Self {
            setting,
            paused: false,
        }
    }

    pub fn setting(&self) -> SpeedSetting {
        self.setting
    }

    /// Move to the next speed setting. Does not affect the pause state.
    pub fn cycle_speed(&mut self) -> SpeedSetting {
        self.setting = self.setting.next();
        info!(speed = self.setting.multiplier(), "animation speed changed");
        self.setting
    }

    /// Effective multiplier for this tick: 0 while paused.
    pub fn multiplier(&self) -> f64 {
        if self.paused {
            0.0
        } else {
            self.setting.multiplier()
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!(paused, "animation pause toggled");
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_cycle_has_order_four() {
        for start in SpeedSetting::ALL {
            let mut s = start;
            for _ in 0..4 {
                s = s.next();
            }
            assert_eq!(s, start);
        }
        // Five cycles from 1x lands one step further on.
        let mut clock = AnimationClock::default();
        for _ in 0..5 {
            clock.cycle_speed();
        }
        assert_eq!(clock.multiplier(), 2.0);
    }

    #[test]
    fn test_cycle_visits_every_multiplier_in_order() {
        let mut clock = AnimationClock::new(SpeedSetting::Half);
        let seen: Vec<f64> = (0..4).map(|_| clock.cycle_speed().multiplier()).collect();
        assert_eq!(seen, vec![1.0, 2.0, 5.0, 0.5]);
    }

    #[test]
    fn test_pause_zeroes_multiplier_and_keeps_setting() {
        let mut clock = AnimationClock::new(SpeedSetting::Fast);
        assert!(clock.toggle_pause());
        assert_eq!(clock.multiplier(), 0.0);
        clock.cycle_speed();
        assert_eq!(clock.multiplier(), 0.0);
        clock.set_paused(false);
        assert_eq!(clock.multiplier(), 0.5);
    }

    #[test]
    fn test_from_multiplier_and_label() {
        assert_eq!(SpeedSetting::from_multiplier(5.0), Some(SpeedSetting::Fast));
        assert_eq!(SpeedSetting::from_multiplier(3.0), None);
        assert_eq!(SpeedSetting::Half.to_string(), "Speed: 0.5x");
        assert_eq!(SpeedSetting::Normal.to_string(), "Speed: 1x");
    }
}
