//! The reducer seam shared by both controllers.

use super::effect::Effect;
use crate::domain::Result;

/// A selection controller that processes intents one at a time.
///
/// Implementors mutate their own state and return the effects the driver
/// should execute. Once the controller has confirmed or dismissed, every
/// further intent fails with [`ZselectError::Terminated`](crate::ZselectError::Terminated).
pub trait Reducer {
    /// User intents accepted by this controller.
    type Intent;

    /// Shape of the published selection.
    type Output;

    /// Applies one intent in place.
    ///
    /// # Errors
    ///
    /// Returns [`ZselectError::Terminated`](crate::ZselectError::Terminated) if
    /// the screen has already terminated. The state is left untouched.
    fn reduce(&mut self, intent: Self::Intent) -> Result<Vec<Effect<Self::Output>>>;

    /// Returns `true` once the screen has confirmed or dismissed.
    fn is_terminated(&self) -> bool;
}

/// Pure form of [`Reducer::reduce`]: computes the next state without touching
/// the current one.
///
/// # Errors
///
/// Propagates errors from [`Reducer::reduce`].
///
/// # Example
///
/// ```
/// use zselect::domain::Choice;
/// use zselect::selection::{transition, Effect, SingleIntent, SingleSelection};
///
/// let apple = Choice::new("1", "Apple");
/// let state = SingleSelection::new(vec![apple.clone()], None)?;
///
/// let (state, effects) = transition(&state, SingleIntent::ToggleItem(apple.clone()))?;
/// assert!(effects.is_empty());
///
/// let (_, effects) = transition(&state, SingleIntent::Confirm)?;
/// assert_eq!(effects, vec![Effect::Publish(Some(apple)), Effect::Dismiss]);
/// # Ok::<(), zselect::ZselectError>(())
/// ```
pub fn transition<R>(state: &R, intent: R::Intent) -> Result<(R, Vec<Effect<R::Output>>)>
where
    R: Reducer + Clone,
{
    let mut next = state.clone();
    let effects = next.reduce(intent)?;
    Ok((next, effects))
}
