//! The capability contract a game must satisfy to be searchable.

/// An immutable snapshot of the state of a two-player, zero-sum,
/// perfect-information game.
///
/// Applying a move must produce a *new* position rather than mutating the
/// receiver; the search explores many branches from the same ancestor and
/// relies on never observing cross-branch mutation.
pub trait Position: Sized {
    /// Returns true if no further moves are legal from this state, whether by
    /// win, loss, or draw. Must return true whenever [`Position::moves`]
    /// would be empty.
    fn is_terminal(&self) -> bool;

    /// Enumerates every position reachable in one ply, each legal successor
    /// exactly once. The order is up to the game; the search treats the
    /// result as an unordered finite sequence.
    fn moves(&self) -> Vec<Self>;

    /// Statically scores this position. Positive favors the maximizing side,
    /// negative the minimizing side, zero is neutral or drawn. Only required
    /// to be meaningful at search leaves.
    fn evaluate(&self) -> f64;

    /// Returns true if this position is from player one's perspective.
    /// Informational; the search itself never consults it, but game loops
    /// use it to decide whose move to request.
    fn is_player_one(&self) -> bool;
}
