//! Entity trait implementation for the Boat domain type.
//!
//! Enables [`Boat`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor).

use super::actions::BoatAction;
use super::error::BoatError;
use crate::framework::ActorEntity;
use crate::model::{Boat, BoatCreate, BoatUpdate};
use crate::validation::ResourceKey;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Boat {
    type Id = ResourceKey;
    type CreateParams = BoatCreate;
    type UpdateParams = BoatUpdate;
    type Action = BoatAction;
    type ActionResult = ();
    type Context = ();
    type Error = BoatError;

    /// Creates a new Boat. `at_sea` is forced to `true` regardless of the
    /// caller's payload: a boat starts unmoored.
    fn from_create_params(id: ResourceKey, params: BoatCreate) -> Result<Self, BoatError> {
        let mut boat = Boat::new(id, params.name);
        boat.boat_type = params.boat_type;
        boat.length = params.length;
        Ok(boat)
    }

    /// Applies a partial update. Each present field overwrites the stored
    /// value only when it differs; `at_sea` is not reachable from here.
    async fn on_update(&mut self, update: BoatUpdate, _ctx: &()) -> Result<(), BoatError> {
        if let Some(name) = update.name {
            if name != self.name {
                self.name = name;
            }
        }
        if let Some(boat_type) = update.boat_type {
            if self.boat_type.as_ref() != Some(&boat_type) {
                self.boat_type = Some(boat_type);
            }
        }
        if let Some(length) = update.length {
            if self.length != Some(length) {
                self.length = Some(length);
            }
        }
        Ok(())
    }

    /// Deletion policy: a docked boat cannot be deleted. This replaces the
    /// dangling `current_boat` reference the original service allowed.
    async fn on_delete(&self, _ctx: &()) -> Result<(), BoatError> {
        if !self.at_sea {
            return Err(BoatError::Docked(self.id));
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BoatAction, _ctx: &()) -> Result<(), BoatError> {
        match action {
            BoatAction::Moor => {
                if !self.at_sea {
                    return Err(BoatError::AlreadyDocked(self.id));
                }
                self.at_sea = false;
                Ok(())
            }
            BoatAction::Release => {
                self.at_sea = true;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ResourceKind;

    fn boat() -> Boat {
        Boat::new(ResourceKey::new(ResourceKind::Boat, 1), "Gem")
    }

    #[tokio::test]
    async fn update_skips_unchanged_fields_and_never_touches_at_sea() {
        let mut boat = boat();
        boat.handle_action(BoatAction::Moor, &()).await.unwrap();

        boat.on_update(
            BoatUpdate {
                name: Some("Gem".into()),
                boat_type: Some("sloop".into()),
                length: Some(32),
            },
            &(),
        )
        .await
        .unwrap();

        assert_eq!(boat.name, "Gem");
        assert_eq!(boat.boat_type.as_deref(), Some("sloop"));
        assert_eq!(boat.length, Some(32));
        assert!(!boat.at_sea, "update path must not change at_sea");
    }

    #[tokio::test]
    async fn moor_rejects_a_docked_boat_and_release_is_idempotent() {
        let mut boat = boat();
        boat.handle_action(BoatAction::Moor, &()).await.unwrap();
        let err = boat.handle_action(BoatAction::Moor, &()).await.unwrap_err();
        assert_eq!(err, BoatError::AlreadyDocked(boat.id));

        boat.handle_action(BoatAction::Release, &()).await.unwrap();
        boat.handle_action(BoatAction::Release, &()).await.unwrap();
        assert!(boat.at_sea);
    }

    #[tokio::test]
    async fn delete_is_blocked_while_docked() {
        let mut boat = boat();
        boat.handle_action(BoatAction::Moor, &()).await.unwrap();
        assert_eq!(boat.on_delete(&()).await.unwrap_err(), BoatError::Docked(boat.id));

        boat.handle_action(BoatAction::Release, &()).await.unwrap();
        assert!(boat.on_delete(&()).await.is_ok());
    }
}
