//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use todo_client_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// use todo_client_testing::ReducerTest;
///
/// ReducerTest::new(HomeReducer::new())
///     .with_env(test_environment())
///     .given_state(HomeState::default())
///     .when_action(HomeAction::TitleChanged("buy milk".into()))
///     .then_state(|state| {
///         assert_eq!(state.form.title, "buy milk");
///     })
///     .then_effects(|effects| {
///         assert!(effects.is_empty());
///     })
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
    A: Clone,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            action: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        // Execute reducer
        let effects = self.reducer.reduce(&mut state, action, &env);

        // Run state assertions
        for assertion in self.state_assertions {
            assertion(&state);
        }

        // Run effect assertions
        for assertion in self.effect_assertions {
            assertion(&effects);
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use todo_client_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if effects is not empty.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.is_empty() || matches!(effects, [Effect::None]),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects contain at least one Future effect
    ///
    /// # Panics
    ///
    /// Panics if no Future effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Future(_))),
            "Expected at least one Future effect, but none found"
        );
    }

    /// Assert that the effects are exactly one Future effect
    ///
    /// The common shape for a reducer branch that issues a single
    /// gateway call.
    ///
    /// # Panics
    ///
    /// Panics unless effects is exactly `[Effect::Future(_)]`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_single_future_effect<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            matches!(effects, [Effect::Future(_)]),
            "Expected exactly one Future effect, but found {}: {:?}",
            effects.len(),
            effects
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_client_core::effect::Effect;
    use todo_client_core::reducer::Reducer;

    #[derive(Clone, Debug)]
    struct PagerState {
        page: u32,
    }

    #[derive(Clone, Debug)]
    enum PagerAction {
        Next,
        Jump(u32),
        Refresh,
    }

    struct PagerReducer;

    struct PagerEnv;

    impl Reducer for PagerReducer {
        type State = PagerState;
        type Action = PagerAction;
        type Environment = PagerEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> smallvec::SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                PagerAction::Next => {
                    state.page += 1;
                    smallvec::smallvec![Effect::None]
                },
                PagerAction::Jump(page) => {
                    state.page = page;
                    smallvec::smallvec![]
                },
                PagerAction::Refresh => {
                    let page = state.page;
                    smallvec::smallvec![Effect::future(async move {
                        Some(PagerAction::Jump(page))
                    })]
                },
            }
        }
    }

    #[test]
    fn harness_runs_state_and_effect_assertions() {
        ReducerTest::new(PagerReducer)
            .with_env(PagerEnv)
            .given_state(PagerState { page: 1 })
            .when_action(PagerAction::Next)
            .then_state(|state| {
                assert_eq!(state.page, 2);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn harness_observes_effectful_branches() {
        ReducerTest::new(PagerReducer)
            .with_env(PagerEnv)
            .given_state(PagerState { page: 4 })
            .when_action(PagerAction::Refresh)
            .then_effects(|effects| {
                assertions::assert_single_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn empty_effect_list_counts_as_no_effects() {
        assertions::assert_no_effects::<PagerAction>(&[Effect::None]);
        assertions::assert_no_effects::<PagerAction>(&[]);
        assertions::assert_effects_count::<PagerAction>(&[], 0);
    }
}
