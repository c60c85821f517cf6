pub mod combat;
pub mod harvest;
pub mod interact;
pub mod inventory;
pub mod movement;
pub mod wait;

pub use combat::{MeleeAction, RangedAction};
pub use harvest::{DepositAction, MineAction};
pub use interact::TakeStairsAction;
pub use inventory::{DropAction, EquipAction, PickupAction, UseItemAction};
pub use movement::{BumpAction, MoveAction};
pub use wait::WaitAction;
