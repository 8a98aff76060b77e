use physics::Transition;
use std::time::Instant;

/// Summary of one finished episode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpisodeSummary {
    pub index: u64,
    pub score: u32,
    pub length: u64,
    pub reward: f32,
}

/// Running aggregates over a rollout.
#[derive(Clone, Debug)]
pub struct RolloutStats {
    pub episodes_finished: u64,
    pub steps_done: u64,
    pub ep_len: u64,
    pub ep_reward: f32,
    pub episode_len_max: u64,
    pub score_sum: u64,
    pub best_score: u32,
    pub total_reward: f64,
    t0: Instant,
}

impl Default for RolloutStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RolloutStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            episodes_finished: 0,
            steps_done: 0,
            ep_len: 0,
            ep_reward: 0.0,
            episode_len_max: 0,
            score_sum: 0,
            best_score: 0,
            total_reward: 0.0,
            t0: Instant::now(),
        }
    }

    /// Call once per `step`; returns the episode summary on terminal frames.
    pub fn on_step(&mut self, t: &Transition) -> Option<EpisodeSummary> {
        self.steps_done += 1;
        self.ep_len += 1;
        self.ep_reward += t.reward;
        self.total_reward += f64::from(t.reward);

        if !t.terminal {
            return None;
        }

        let summary = EpisodeSummary {
            index: self.episodes_finished,
            score: t.score,
            length: self.ep_len,
            reward: self.ep_reward,
        };
        self.episodes_finished += 1;
        self.episode_len_max = self.episode_len_max.max(self.ep_len);
        self.score_sum += u64::from(t.score);
        self.best_score = self.best_score.max(t.score);
        self.ep_len = 0;
        self.ep_reward = 0.0;
        Some(summary)
    }

    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.episodes_finished == 0 {
            0.0
        } else {
            self.score_sum as f64 / self.episodes_finished as f64
        }
    }

    #[must_use]
    pub fn steps_per_sec(&self) -> f64 {
        let secs = self.t0.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.steps_done as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::{REWARD_ALIVE, REWARD_DEATH, REWARD_PASS};

    fn t(reward: f32, terminal: bool, score: u32) -> Transition {
        Transition { reward, terminal, score, collision: None }
    }

    #[test]
    fn episode_boundaries_are_tracked() {
        let mut s = RolloutStats::new();
        assert!(s.on_step(&t(REWARD_ALIVE, false, 0)).is_none());
        assert!(s.on_step(&t(REWARD_PASS, false, 1)).is_none());
        let ep = s.on_step(&t(REWARD_DEATH, true, 1)).unwrap();
        assert_eq!(ep.index, 0);
        assert_eq!(ep.length, 3);
        assert_eq!(ep.score, 1);
        assert!((ep.reward - 0.1).abs() < 1e-6);

        let ep = s.on_step(&t(REWARD_DEATH, true, 0)).unwrap();
        assert_eq!(ep.index, 1);
        assert_eq!(ep.length, 1);

        assert_eq!(s.episodes_finished, 2);
        assert_eq!(s.steps_done, 4);
        assert_eq!(s.episode_len_max, 3);
        assert_eq!(s.best_score, 1);
        assert!((s.mean_score() - 0.5).abs() < 1e-9);
    }
}
