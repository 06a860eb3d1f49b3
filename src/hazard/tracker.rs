//! Hazard domain: contact timer and respawn sequencer state machines.

use bevy::prelude::*;

use crate::content::HazardConfig;

/// Accumulates time spent touching hazardous geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactTimer {
    /// Hazard colliders currently touching the body
    contacts: u32,
    duration: f32,
    max_contact_time: f32,
}

impl ContactTimer {
    pub fn new(max_contact_time: f32) -> Self {
        Self {
            contacts: 0,
            duration: 0.0,
            max_contact_time,
        }
    }

    pub fn on_hazard_enter(&mut self) {
        self.contacts += 1;
    }

    /// Tolerates exits with no matching enter, e.g. the end event of a
    /// contact that a teleport already cleared.
    pub fn on_hazard_exit(&mut self) {
        self.contacts = self.contacts.saturating_sub(1);
    }

    pub fn in_contact(&self) -> bool {
        self.contacts > 0
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn accumulate(&mut self, dt: f32) {
        if self.in_contact() {
            self.duration += dt;
        }
    }

    pub fn timed_out(&self) -> bool {
        self.duration >= self.max_contact_time
    }

    pub fn reset(&mut self) {
        self.contacts = 0;
        self.duration = 0.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum RespawnPhase {
    #[default]
    Idle,
    FadingIn,
    /// Screen fully dark; the body must be moved before fading out
    Teleporting,
    FadingOut,
}

/// What a tick of the respawn flow did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnStep {
    /// Contact timed out; fade-in began
    Started,
    /// Fade-in reached full opacity; the body must be teleported now
    Teleport,
    /// Fade-out finished; control returns to the player
    Completed,
}

/// Fade-out, reposition, fade-in, advanced once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RespawnSequencer {
    phase: RespawnPhase,
    fade_alpha: f32,
    fade_duration: f32,
}

impl RespawnSequencer {
    pub fn new(fade_duration: f32) -> Self {
        Self {
            phase: RespawnPhase::Idle,
            fade_alpha: 0.0,
            fade_duration,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> RespawnPhase {
        self.phase
    }

    pub fn fade_alpha(&self) -> f32 {
        self.fade_alpha
    }

    pub fn is_idle(&self) -> bool {
        self.phase == RespawnPhase::Idle
    }

    /// Starts a sequence. Refused unless idle, so a respawn in progress
    /// cannot be restarted.
    pub fn trigger(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = RespawnPhase::FadingIn;
        self.fade_alpha = 0.0;
        true
    }

    /// Moves the fade by one tick.
    ///
    /// Returns `Teleport` on the tick the alpha first reaches 1; the
    /// sequencer then waits in `Teleporting` until [`Self::finish_teleport`].
    pub fn advance(&mut self, dt: f32) -> Option<RespawnStep> {
        let rate = dt / self.fade_duration;

        match self.phase {
            RespawnPhase::Idle | RespawnPhase::Teleporting => None,
            RespawnPhase::FadingIn => {
                self.fade_alpha += rate;
                if self.fade_alpha >= 1.0 {
                    self.fade_alpha = 1.0;
                    self.phase = RespawnPhase::Teleporting;
                    return Some(RespawnStep::Teleport);
                }
                None
            }
            RespawnPhase::FadingOut => {
                self.fade_alpha -= rate;
                if self.fade_alpha <= 0.0 {
                    self.fade_alpha = 0.0;
                    self.phase = RespawnPhase::Idle;
                    return Some(RespawnStep::Completed);
                }
                None
            }
        }
    }

    /// Leaves `Teleporting` for `FadingOut`. Ignored in any other phase.
    pub fn finish_teleport(&mut self) {
        if self.phase == RespawnPhase::Teleporting {
            self.phase = RespawnPhase::FadingOut;
        }
    }
}

/// Hazard contact tracking and the respawn it drives, for one body.
#[derive(Component, Debug, Clone)]
pub struct HazardTracker {
    contact: ContactTimer,
    sequencer: RespawnSequencer,
}

impl HazardTracker {
    pub fn new(config: &HazardConfig) -> Self {
        Self {
            contact: ContactTimer::new(config.max_contact_time),
            sequencer: RespawnSequencer::new(config.fade_duration),
        }
    }

    #[cfg(test)]
    pub fn contact(&self) -> &ContactTimer {
        &self.contact
    }

    #[cfg(test)]
    pub fn sequencer(&self) -> &RespawnSequencer {
        &self.sequencer
    }

    pub fn contact_duration(&self) -> f32 {
        self.contact.duration()
    }

    pub fn fade_alpha(&self) -> f32 {
        self.sequencer.fade_alpha()
    }

    /// True while a respawn is running. Player-directed input must be
    /// dropped while this holds.
    pub fn game_over(&self) -> bool {
        !self.sequencer.is_idle()
    }

    pub fn on_hazard_enter(&mut self) {
        self.contact.on_hazard_enter();
    }

    pub fn on_hazard_exit(&mut self) {
        self.contact.on_hazard_exit();
    }

    /// One frame tick.
    ///
    /// On `Teleport` the contact state is already cleared and the sequencer
    /// has moved on to fading out; the caller only has to move the body.
    pub fn tick(&mut self, dt: f32) -> Option<RespawnStep> {
        let mut step = self.sequencer.advance(dt);

        if step == Some(RespawnStep::Teleport) {
            self.contact.reset();
            self.sequencer.finish_teleport();
        }

        self.contact.accumulate(dt);

        if self.contact.timed_out() && self.sequencer.trigger() {
            step = Some(RespawnStep::Started);
        }

        step
    }
}
