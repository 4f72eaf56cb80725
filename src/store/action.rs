//! Action creation and reducer composition.
//!
//! An action is a tagged value produced by a UI event handler and consumed
//! once by the reducer layer. A reducer maps an action to an optional state
//! computation; absence means "not mine", not failure. Reducers compose into
//! an ordered list scanned front to back, and the first reducer recognizing
//! an action wins; later reducers registering the same kind are never
//! consulted.

use std::rc::Rc;

use crate::effect::State;

/// A tagged, ephemeral message from the UI layer.
///
/// # Examples
///
/// ```rust
/// use dirsync_console::store::{Action, create_action};
///
/// let open = create_action::<String>("OPEN_PANE");
/// let action = open("proxySettings".to_string());
/// assert_eq!(action.kind, "OPEN_PANE");
/// assert_eq!(action.payload, "proxySettings");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action<P> {
    /// The action tag reducers match on.
    pub kind: &'static str,
    /// The data carried to the matched handler.
    pub payload: P,
}

/// Returns an action creator for the given kind.
///
/// # Examples
///
/// ```rust
/// use dirsync_console::store::create_action;
///
/// let select = create_action::<String>("SELECT_MENU_ITEM");
/// assert_eq!(select("groups".to_string()).kind, "SELECT_MENU_ITEM");
/// ```
pub fn create_action<P>(kind: &'static str) -> impl Fn(P) -> Action<P> {
    move |payload| Action { kind, payload }
}

/// Maps actions to optional state computations.
///
/// `None` signals the action is not recognized; the dispatcher then leaves
/// the state unchanged.
pub trait Reduce<S, P>
where
    S: 'static,
{
    /// Looks the action up; `None` when this reducer does not handle it.
    fn reduce(&self, action: &Action<P>) -> Option<State<S, ()>>;
}

/// A reducer built from an ordered kind-to-handler mapping.
///
/// # Examples
///
/// ```rust
/// use dirsync_console::effect::State;
/// use dirsync_console::store::{Action, Reduce, Reducer};
///
/// let reducer: Reducer<i32, i32> =
///     Reducer::new().on("ADD", |amount: &i32| {
///         let amount = *amount;
///         State::modify(move |total| total + amount)
///     });
///
/// let action = Action { kind: "ADD", payload: 5 };
/// let next = reducer.reduce(&action).map(|computation| computation.exec(10));
/// assert_eq!(next, Some(15));
/// ```
pub struct Reducer<S, P>
where
    S: 'static,
{
    handlers: Vec<(&'static str, Rc<dyn Fn(&P) -> State<S, ()>>)>,
}

impl<S, P> Reducer<S, P>
where
    S: 'static,
{
    /// Creates an empty reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers a handler for an action kind.
    ///
    /// Handlers are consulted in registration order; the first matching
    /// kind wins.
    #[must_use]
    pub fn on<F>(mut self, kind: &'static str, handler: F) -> Self
    where
        F: Fn(&P) -> State<S, ()> + 'static,
    {
        self.handlers.push((kind, Rc::new(handler)));
        self
    }
}

impl<S, P> Default for Reducer<S, P>
where
    S: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, P> Reduce<S, P> for Reducer<S, P>
where
    S: 'static,
{
    fn reduce(&self, action: &Action<P>) -> Option<State<S, ()>> {
        self.handlers
            .iter()
            .find(|(kind, _)| *kind == action.kind)
            .map(|(_, handler)| handler(&action.payload))
    }
}

/// An ordered list of reducers tried front to back.
///
/// The first reducer producing a computation wins; when none recognizes
/// the action the combined reducer yields nothing.
pub struct CombinedReducer<S, P>
where
    S: 'static,
{
    reducers: Vec<Box<dyn Reduce<S, P>>>,
}

impl<S, P> Reduce<S, P> for CombinedReducer<S, P>
where
    S: 'static,
{
    fn reduce(&self, action: &Action<P>) -> Option<State<S, ()>> {
        self.reducers
            .iter()
            .find_map(|reducer| reducer.reduce(action))
    }
}

/// Combines reducers into one, preserving registration order.
///
/// Order is significant: a reducer earlier in the list shadows any later
/// reducer recognizing the same action kind.
#[must_use]
pub fn combine_reducers<S, P>(reducers: Vec<Box<dyn Reduce<S, P>>>) -> CombinedReducer<S, P>
where
    S: 'static,
{
    CombinedReducer { reducers }
}

/// Applies an action to the state through a reducer.
///
/// Returns the state produced by the matched computation, or the previous
/// state untouched when the action is not recognized.
///
/// # Examples
///
/// ```rust
/// use dirsync_console::effect::State;
/// use dirsync_console::store::{Action, Reducer, dispatch};
///
/// let reducer: Reducer<i32, ()> =
///     Reducer::new().on("RESET", |(): &()| State::put(0));
///
/// let unknown = Action { kind: "NOT_REGISTERED", payload: () };
/// assert_eq!(dispatch(&reducer, 41, &unknown), 41);
///
/// let reset = Action { kind: "RESET", payload: () };
/// assert_eq!(dispatch(&reducer, 41, &reset), 0);
/// ```
pub fn dispatch<S, P, R>(reducer: &R, previous: S, action: &Action<P>) -> S
where
    R: Reduce<S, P> + ?Sized,
    S: 'static,
{
    match reducer.reduce(action) {
        Some(computation) => computation.exec(previous),
        None => previous,
    }
}
