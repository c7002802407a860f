//! Widget interaction state machines
//!
//! Statechart-style machines drive a widget's visual state. The state and
//! event vocabularies are fixed enums rather than opaque ids: the same
//! `WidgetState` values key the theme's per-state style tables.
//!
//! Supports:
//! - Flat transition tables
//! - Guards (conditional transitions)
//! - Entry/exit actions
//! - Transition actions

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Visual state of a widget. Theme tables are keyed by these values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidgetState {
    #[default]
    Normal,
    Hover,
    Active,
    Disabled,
}

/// Events a widget's state machine consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    PointerEnter,
    PointerLeave,
    PointerDown,
    PointerUp,
    Disable,
    Enable,
}

/// A guard function that determines if a transition should occur.
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// An action function executed during transitions.
pub type Action = Box<dyn FnMut() + Send>;

/// A transition in the state machine.
pub struct Transition {
    pub from_state: WidgetState,
    pub event: Interaction,
    pub to_state: WidgetState,
    pub guard: Option<Guard>,
    pub actions: SmallVec<[Action; 2]>,
}

impl Transition {
    /// Create a simple transition without guard or actions.
    pub fn new(from: WidgetState, event: Interaction, to: WidgetState) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Add a guard condition.
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Add an action to execute during the transition.
    pub fn with_action<F: FnMut() + Send + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }
}

/// Builder for interaction machines.
pub struct InteractionFsmBuilder {
    initial_state: WidgetState,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<WidgetState, Vec<Action>>,
    exit_callbacks: FxHashMap<WidgetState, Vec<Action>>,
}

impl InteractionFsmBuilder {
    pub fn new(initial_state: WidgetState) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
        }
    }

    /// Add a transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to).
    pub fn on(mut self, from: WidgetState, event: Interaction, to: WidgetState) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add an entry action for a state.
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: WidgetState, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state.
    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: WidgetState, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Build the machine.
    pub fn build(self) -> InteractionFsm {
        InteractionFsm {
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
            history: Vec::new(),
        }
    }
}

/// An interaction state machine instance.
pub struct InteractionFsm {
    current_state: WidgetState,
    transitions: Vec<Transition>,
    entry_callbacks: FxHashMap<WidgetState, Vec<Action>>,
    exit_callbacks: FxHashMap<WidgetState, Vec<Action>>,
    /// History of state transitions (for debugging).
    history: Vec<(WidgetState, Interaction, WidgetState)>,
}

impl InteractionFsm {
    /// Create a machine with an initial state and transitions.
    pub fn new(initial_state: WidgetState, transitions: Vec<Transition>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    /// Create a builder.
    pub fn builder(initial_state: WidgetState) -> InteractionFsmBuilder {
        InteractionFsmBuilder::new(initial_state)
    }

    /// Get the current state.
    pub fn current_state(&self) -> WidgetState {
        self.current_state
    }

    /// Check if the machine is in a specific state.
    pub fn is_in(&self, state: WidgetState) -> bool {
        self.current_state == state
    }

    /// Get transition history.
    pub fn history(&self) -> &[(WidgetState, Interaction, WidgetState)] {
        &self.history
    }

    /// Clear transition history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from the current state.
    pub fn can_send(&self, event: Interaction) -> bool {
        let current = self.current_state;
        self.transitions.iter().any(|t| {
            t.from_state == current && t.event == event && {
                match &t.guard {
                    Some(guard) => guard(),
                    None => true,
                }
            }
        })
    }

    /// Send an event, potentially triggering a transition. Returns the
    /// (possibly unchanged) current state.
    pub fn send(&mut self, event: Interaction) -> WidgetState {
        let current = self.current_state;

        let transition_idx = self.transitions.iter().position(|t| {
            t.from_state == current && t.event == event && {
                match &t.guard {
                    Some(guard) => guard(),
                    None => true,
                }
            }
        });

        let Some(idx) = transition_idx else {
            return current;
        };

        let to_state = self.transitions[idx].to_state;

        // Execute exit callbacks
        if let Some(callbacks) = self.exit_callbacks.get_mut(&current) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        // Execute transition actions
        for action in self.transitions[idx].actions.iter_mut() {
            action();
        }

        self.current_state = to_state;
        self.history.push((current, event, to_state));

        // Execute entry callbacks
        if let Some(callbacks) = self.entry_callbacks.get_mut(&to_state) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        to_state
    }
}

/// The standard pointer machine shared by clickable widgets.
///
/// `Disable` is accepted from every interactive state; `Enable` returns to
/// `Normal`.
pub fn pointer_fsm() -> InteractionFsm {
    InteractionFsm::builder(WidgetState::Normal)
        .on(WidgetState::Normal, Interaction::PointerEnter, WidgetState::Hover)
        .on(WidgetState::Hover, Interaction::PointerLeave, WidgetState::Normal)
        .on(WidgetState::Hover, Interaction::PointerDown, WidgetState::Active)
        .on(WidgetState::Active, Interaction::PointerUp, WidgetState::Hover)
        .on(WidgetState::Active, Interaction::PointerLeave, WidgetState::Normal)
        .on(WidgetState::Normal, Interaction::Disable, WidgetState::Disabled)
        .on(WidgetState::Hover, Interaction::Disable, WidgetState::Disabled)
        .on(WidgetState::Active, Interaction::Disable, WidgetState::Disabled)
        .on(WidgetState::Disabled, Interaction::Enable, WidgetState::Normal)
        .build()
}

/// A machine pinned to `Disabled` with no transitions out except `Enable`.
pub fn disabled_fsm() -> InteractionFsm {
    InteractionFsm::builder(WidgetState::Disabled)
        .on(WidgetState::Disabled, Interaction::Enable, WidgetState::Normal)
        .build()
}
