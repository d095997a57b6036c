use crate::config::{GameConfig, Physics};
use crate::entities::{Entity, Player, TickInput};

impl Player {
    /// A resting player centred on the screen.
    pub fn spawn(config: &GameConfig) -> Self {
        let w = config.physics.player_width;
        let h = config.physics.player_height;
        Player {
            body: Entity::new((config.width - w) / 2.0, (config.height - h) / 2.0, w, h),
            vel_y: 0.0,
            score: 0,
        }
    }

    /// Gravity, vertical integration, horizontal steering and screen wrap.
    pub fn tick(&mut self, input: TickInput, config: &GameConfig) {
        let physics = &config.physics;
        self.vel_y += physics.gravity;
        self.body.y += self.vel_y;

        match input {
            TickInput::Left => self.body.x -= physics.move_speed,
            TickInput::Right => self.body.x += physics.move_speed,
            TickInput::None => {}
        }

        if self.body.right() > config.width {
            self.body.set_left(0.0);
        } else if self.body.left() < 0.0 {
            self.body.set_right(config.width);
        }
    }

    /// Replace the vertical velocity with the jump impulse.
    pub fn jump(&mut self, physics: &Physics) {
        self.vel_y = physics.jump_impulse;
    }

    pub fn is_falling(&self) -> bool {
        self.vel_y > 0.0
    }
}
