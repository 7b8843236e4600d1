/// An environment that emits continuous observations.
///
/// Tabular agents cannot consume these observations directly; wrap the
/// environment in a [`crate::DiscretizedEnv`] to receive state keys instead.
pub trait Env {
    /// Applies `action` and returns `(observation, reward, done)`.
    fn step(&mut self, action: f32) -> (Vec<f32>, f32, bool);

    /// Starts a new episode and returns its first observation.
    fn reset(&mut self) -> Vec<f32>;

    /// Length of every observation vector this environment emits.
    fn obs_size(&self) -> usize;

    fn action_size(&self) -> usize;
}
