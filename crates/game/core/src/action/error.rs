//! Action failure channel.
//!
//! Failures split into two kinds. A [`Rejection`] is an ordinary "no": the
//! action was legal to attempt but cannot happen, the world is left
//! untouched, and callers recover (the player sees the reason, NPC
//! rejections are swallowed). An invariant error is fatal and aborts the
//! tick.

use crate::error::InvariantError;

/// Reasons an action can legally refuse to happen.
///
/// The display strings are the exact player-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    #[error("That way is blocked")]
    WayBlocked,

    #[error("Nothing to attack.")]
    NothingToAttack,

    #[error("You do not have a ranged weapon equipped!")]
    NoRangedWeapon,

    #[error("Out of range!")]
    OutOfRange,

    #[error("Nothing to shoot there.")]
    NothingToShoot,

    #[error("Nothing to mine.")]
    NothingToMine,

    #[error("No spawner to deposit.")]
    NoSpawnerToDeposit,

    #[error("Your inventory is full")]
    InventoryFull,

    #[error("There is nothing here to pick up.")]
    NothingToPickUp,

    #[error("There are no stairs here.")]
    NoStairsHere,

    #[error("You do not have that item.")]
    ItemNotHeld,

    #[error("You cannot equip that.")]
    NotEquippable,

    #[error("You cannot use that.")]
    NotUsable,

    #[error("Your health is already full.")]
    HealthAlreadyFull,

    #[error("You cannot target an area that you cannot see.")]
    TargetNotVisible,

    #[error("There is no one to confuse there.")]
    NothingToConfuse,

    #[error("You cannot confuse yourself!")]
    CannotConfuseSelf,
}

impl Rejection {
    /// Player-facing reason text.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Outcome channel of every action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Recoverable refusal; the world state is unchanged.
    #[error(transparent)]
    Impossible(#[from] Rejection),

    /// Fatal rule violation; propagate and abort the tick.
    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

impl From<crate::env::OracleError> for ActionError {
    fn from(error: crate::env::OracleError) -> Self {
        ActionError::Invariant(error.into())
    }
}
