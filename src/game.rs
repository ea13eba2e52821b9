use log::{debug, info, warn};

use crate::bodies::{BodyLabel, Velocity};
use crate::world::PhysicsWorld;

/// Downward gravity switched on once the ball reaches the goal.
pub const WIN_GRAVITY_Y: f64 = 1.0;

/// Velocity change of one key press.
pub const STEER_SPEED_DELTA: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum WinEffect {
    ShowWinMessage,
    SetGravity { y: f64 },
    /// Make every `wall` body dynamic so the maze collapses.
    ReleaseWalls,
}

pub fn is_ball_at_goal(pair: (BodyLabel, BodyLabel)) -> bool {
    match pair {
        (BodyLabel::Ball, BodyLabel::Goal) | (BodyLabel::Goal, BodyLabel::Ball) => true,
        _ => false,
    }
}

/// The win transition for one collision start notification.
///
/// The first time any pair is the ball touching the goal the game is won and the win effects are
/// returned. Before that, and forever after, the result is the unchanged flag and no effects.
pub fn collision_start(won: bool, pairs: &[(BodyLabel, BodyLabel)]) -> (bool, Vec<WinEffect>) {
    if !pairs.iter().any(|pair| is_ball_at_goal(*pair)) {
        return (won, vec![]);
    }
    if won {
        warn!("ball touched the goal after the game was already won, ignoring");
        return (true, vec![]);
    }

    info!("ball reached the goal");
    (true,
     vec![WinEffect::ShowWinMessage,
          WinEffect::SetGravity { y: WIN_GRAVITY_Y },
          WinEffect::ReleaseWalls])
}

/// Holds the won flag between collision notifications.
#[derive(Debug, Default, Clone)]
pub struct WinDetector {
    won: bool,
}

impl WinDetector {
    pub fn new() -> WinDetector {
        WinDetector::default()
    }

    #[inline]
    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn on_collision_start(&mut self, pairs: &[(BodyLabel, BodyLabel)]) -> Vec<WinEffect> {
        let (won, effects) = collision_start(self.won, pairs);
        self.won = won;
        effects
    }
}

pub fn apply_effects<W: PhysicsWorld>(world: &mut W, effects: &[WinEffect]) {
    for effect in effects {
        match *effect {
            WinEffect::ShowWinMessage => world.show_win_message(),
            WinEffect::SetGravity { y } => world.set_gravity(y),
            WinEffect::ReleaseWalls => {
                let walls = world.bodies_labelled(BodyLabel::Wall);
                debug!("releasing {} walls", walls.len());
                for wall in walls {
                    world.set_static(wall, false);
                }
            }
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
}

impl Key {
    /// Arrow keys by their browser key codes.
    pub fn from_key_code(code: u32) -> Option<Key> {
        match code {
            37 => Some(Key::Left),
            38 => Some(Key::Up),
            39 => Some(Key::Right),
            40 => Some(Key::Down),
            _ => None,
        }
    }
}

/// Nudge one component of the velocity, leaving the other alone. Up is towards negative y.
pub fn steer(velocity: Velocity, key: Key) -> Velocity {
    let Velocity { x, y } = velocity;
    match key {
        Key::Left => Velocity { x: x - STEER_SPEED_DELTA, y },
        Key::Right => Velocity { x: x + STEER_SPEED_DELTA, y },
        Key::Up => Velocity { x, y: y - STEER_SPEED_DELTA },
        Key::Down => Velocity { x, y: y + STEER_SPEED_DELTA },
    }
}

pub fn steer_ball<W: PhysicsWorld>(world: &mut W, ball: W::BodyHandle, key: Key) {
    let velocity = steer(world.velocity(ball), key);
    world.set_velocity(ball, velocity);
}
