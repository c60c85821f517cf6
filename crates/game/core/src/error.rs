//! Fatal rule-violation errors.
//!
//! These are distinct from action rejections: a rejection is a legal "no"
//! that leaves the world untouched, while an [`InvariantError`] means the
//! state or environment broke a structural promise and the tick must abort.

use crate::env::OracleError;
use crate::state::EntityId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("entity {0} does not exist")]
    MissingEntity(EntityId),

    #[error("entity {0} is not an actor")]
    NotAnActor(EntityId),

    #[error("actor {entity} is missing its {component} component")]
    MissingComponent {
        entity: EntityId,
        component: &'static str,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl InvariantError {
    pub fn missing_component(entity: EntityId, component: &'static str) -> Self {
        Self::MissingComponent { entity, component }
    }
}
