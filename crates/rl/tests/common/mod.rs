use rl::Env;

/// A sphere on a line, pushed by the action. The episode ends once it
/// leaves `[-5, 5]`.
pub struct RollingSphereEnv {
    pub pos_x: f32,
}

impl RollingSphereEnv {
    pub fn new() -> Self {
        Self { pos_x: 0.0 }
    }
}

impl Env for RollingSphereEnv {
    fn step(&mut self, action: f32) -> (Vec<f32>, f32, bool) {
        let force = action.clamp(-10.0, 10.0);
        let old_pos_x = self.pos_x;
        self.pos_x += force * 0.02;
        let reward = self.pos_x - old_pos_x;
        let done = self.pos_x.abs() > 5.0;
        (vec![self.pos_x], reward, done)
    }

    fn reset(&mut self) -> Vec<f32> {
        self.pos_x = 0.0;
        vec![self.pos_x]
    }

    fn obs_size(&self) -> usize {
        1
    }

    fn action_size(&self) -> usize {
        1
    }
}
