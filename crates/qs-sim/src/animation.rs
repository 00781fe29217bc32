//! Per-frame interpolation.

use qs_client::Client;
use qs_core::QueueConfig;

/// Horizontal distance to cover this frame when `dx` remains.
///
/// A `1 / divisor` share of the remaining distance, rounded half away from
/// zero, and never less than one pixel so a client can't stall just short of
/// its target.  `divisor` must be at least 1.
#[inline]
pub fn horizontal_step(dx: i32, divisor: i32) -> i32 {
    if dx == 0 {
        return 0;
    }
    let magnitude = (2 * dx.abs() + divisor) / (2 * divisor);
    magnitude.max(1) * dx.signum()
}

/// Move one client by one frame.  Returns `true` if its position changed.
///
/// Horizontal and vertical motion are independent: an exiting client keeps
/// drifting up or down even after it reaches its exit target.
pub fn animate(client: &mut Client, config: &QueueConfig) -> bool {
    let dx = horizontal_step(client.target_x() - client.position().x, config.interpolation_divisor);
    let dy = client
        .exit_direction()
        .map_or(0, |dir| dir.vertical_sign() * config.exit_vertical_speed);

    if dx == 0 && dy == 0 {
        return false;
    }
    client.move_by(dx, dy);
    true
}
