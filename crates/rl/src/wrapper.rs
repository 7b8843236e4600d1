use crate::{Env, StateError, StateSpace};
use tracing::{debug, trace};

/// Outcome of one discretized step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: usize,
    pub reward: f32,
    pub done: bool,
}

/// Presents a continuous [`Env`] to a tabular agent.
///
/// Every observation is binned and packed into a state key of the wrapped
/// [`StateSpace`].
pub struct DiscretizedEnv<E: Env> {
    env: E,
    space: StateSpace,
}

impl<E: Env> DiscretizedEnv<E> {
    /// # Errors
    ///
    /// [`StateError::ObservationSize`] if the environment's observation length
    /// differs from the number of binned dimensions.
    pub fn new(env: E, space: StateSpace) -> Result<Self, StateError> {
        let expected = space.binner().dims();
        let actual = env.obs_size();
        if expected != actual {
            return Err(StateError::ObservationSize { expected, actual });
        }
        debug!(states = space.len(), dims = expected, "discretizing environment");
        Ok(Self { env, space })
    }

    /// Starts a new episode and returns its initial state key.
    ///
    /// # Errors
    ///
    /// [`StateError::Bin`] if the initial observation is out of range.
    pub fn reset(&mut self) -> Result<usize, StateError> {
        let obs = self.env.reset();
        self.space.state_of(&obs)
    }

    /// Steps the wrapped environment and discretizes the new observation.
    ///
    /// # Errors
    ///
    /// [`StateError::Bin`] if the observation falls outside the binned range.
    pub fn step(&mut self, action: f32) -> Result<Transition, StateError> {
        let (obs, reward, done) = self.env.step(action);
        let state = self.space.state_of(&obs)?;
        trace!(action, state, reward, done, "discretized step");
        Ok(Transition { state, reward, done })
    }

    /// Number of distinct state keys.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.space.len()
    }

    #[must_use]
    pub fn action_size(&self) -> usize {
        self.env.action_size()
    }

    #[must_use]
    pub fn space(&self) -> &StateSpace {
        &self.space
    }

    #[must_use]
    pub fn env(&self) -> &E {
        &self.env
    }
}
