//! Debug domain: tests for the readout text.

use super::ui::debug_readout;
use crate::movement::JumpState;

#[test]
fn test_readout_lists_jump_state_and_speed() {
    let text = debug_readout(JumpState::AirborneFirstJumpAvailable, false, 0.0);

    assert!(text.contains("AirborneFirstJumpAvailable"));
    assert!(text.contains("Grounded: false"));
    assert!(text.contains("Ground speed: 0.00"));
}

#[test]
fn test_readout_rounds_speed() {
    let text = debug_readout(JumpState::Grounded, true, 4.996);
    assert!(text.contains("Ground speed: 5.00"));
}
