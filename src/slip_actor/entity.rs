//! Entity trait implementation for the Slip domain type.
//!
//! Enables [`Slip`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). The context is a
//! [`BoatClient`]: arrivals and departures need to flip the boat's `at_sea`
//! flag through the Boat actor.

use super::actions::{SlipAction, SlipActionResult};
use super::error::SlipError;
use crate::clients::BoatClient;
use crate::framework::{ActorEntity, ActorError};
use crate::model::{DepartureRecord, Slip, SlipCreate, SlipUpdate};
use crate::validation::ResourceKey;
use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Ordering;

/// Wall-clock timestamp in UTC, `YYYY-MM-DD HH:MM:SS`.
fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn map_boat_error(boat: ResourceKey, err: ActorError<crate::boat_actor::BoatError>) -> SlipError {
    use crate::boat_actor::BoatError;
    match err {
        ActorError::NotFound(_) => SlipError::BoatNotFound(boat),
        ActorError::Entity(BoatError::AlreadyDocked(_)) => SlipError::BoatAlreadyDocked(boat),
        other => SlipError::BoatUnavailable(other.to_string()),
    }
}

#[async_trait]
impl ActorEntity for Slip {
    type Id = ResourceKey;
    type CreateParams = SlipCreate;
    type UpdateParams = SlipUpdate;
    type Action = SlipAction;
    type ActionResult = SlipActionResult;
    type Context = BoatClient;
    type Error = SlipError;

    /// Creates a new, empty slip. Any occupancy fields in the caller's
    /// payload are ignored.
    fn from_create_params(id: ResourceKey, params: SlipCreate) -> Result<Self, SlipError> {
        Ok(Slip::new(id, params.number))
    }

    /// Slip numbers are unique across all slips; the actor runs this against
    /// every stored peer before committing a create or update.
    fn conflicts_with(&self, other: &Self) -> Result<(), SlipError> {
        if self.number == other.number {
            return Err(SlipError::DuplicateNumber(self.number));
        }
        Ok(())
    }

    /// Slips list in ascending `number` order.
    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.number.cmp(&b.number)
    }

    /// Applies a partial update; only `number` is writable here.
    async fn on_update(&mut self, update: SlipUpdate, _ctx: &BoatClient) -> Result<(), SlipError> {
        if let Some(number) = update.number {
            if number != self.number {
                self.number = number;
            }
        }
        Ok(())
    }

    /// Deleting an occupied slip releases the docked boat first, so the
    /// docked-boat delete block can never wedge a boat.
    async fn on_delete(&self, ctx: &BoatClient) -> Result<(), SlipError> {
        if let Some(boat) = self.current_boat {
            match ctx.release(boat).await {
                Ok(()) | Err(ActorError::NotFound(_)) => {}
                Err(e) => return Err(SlipError::BoatUnavailable(e.to_string())),
            }
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SlipAction,
        ctx: &BoatClient,
    ) -> Result<SlipActionResult, SlipError> {
        match action {
            SlipAction::Arrive { boat } => {
                if self.is_occupied() {
                    return Err(SlipError::Occupied(self.id));
                }
                // Moor first: it carries the existence and already-docked
                // checks. Once it succeeds the slip mutation cannot fail.
                ctx.moor(boat).await.map_err(|e| map_boat_error(boat, e))?;
                self.current_boat = Some(boat);
                self.arrival_date = Some(utc_timestamp());
                Ok(SlipActionResult::Arrive(self.clone()))
            }
            SlipAction::Depart => {
                let Some(boat) = self.current_boat else {
                    return Err(SlipError::Empty(self.id));
                };
                ctx.release(boat).await.map_err(|e| map_boat_error(boat, e))?;
                self.departure_history.push(DepartureRecord {
                    departure_date: utc_timestamp(),
                    departed_boat: boat,
                });
                self.current_boat = None;
                self.arrival_date = None;
                Ok(SlipActionResult::Depart)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::Boat;
    use crate::validation::ResourceKind;

    fn slip() -> Slip {
        Slip::new(ResourceKey::new(ResourceKind::Slip, 1), 7)
    }

    fn boat_key() -> ResourceKey {
        ResourceKey::new(ResourceKind::Boat, 1)
    }

    #[tokio::test]
    async fn arrive_sets_occupancy_and_rejects_second_boat() {
        let mut mock = MockClient::<Boat>::new();
        mock.expect_action().return_ok(()); // Moor
        let ctx = BoatClient::new(mock.client());

        let mut slip = slip();
        let result = slip
            .handle_action(SlipAction::Arrive { boat: boat_key() }, &ctx)
            .await
            .unwrap();
        assert!(matches!(result, SlipActionResult::Arrive(_)));
        assert_eq!(slip.current_boat, Some(boat_key()));
        assert!(slip.arrival_date.is_some());

        let other = ResourceKey::new(ResourceKind::Boat, 2);
        let err = slip
            .handle_action(SlipAction::Arrive { boat: other }, &ctx)
            .await
            .unwrap_err();
        assert_eq!(err, SlipError::Occupied(slip.id));
        assert_eq!(slip.current_boat, Some(boat_key()), "failed arrival must not change state");

        mock.verify();
    }

    #[tokio::test]
    async fn arrive_with_unknown_boat_leaves_slip_empty() {
        let mut mock = MockClient::<Boat>::new();
        mock.expect_action()
            .return_err(ActorError::NotFound(boat_key().to_string()));
        let ctx = BoatClient::new(mock.client());

        let mut slip = slip();
        let err = slip
            .handle_action(SlipAction::Arrive { boat: boat_key() }, &ctx)
            .await
            .unwrap_err();
        assert_eq!(err, SlipError::BoatNotFound(boat_key()));
        assert!(slip.current_boat.is_none());
        assert!(slip.arrival_date.is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn depart_appends_history_and_clears_occupancy() {
        let mut mock = MockClient::<Boat>::new();
        mock.expect_action().return_ok(()); // Moor
        mock.expect_action().return_ok(()); // Release
        let ctx = BoatClient::new(mock.client());

        let mut slip = slip();
        slip.handle_action(SlipAction::Arrive { boat: boat_key() }, &ctx)
            .await
            .unwrap();
        slip.handle_action(SlipAction::Depart, &ctx).await.unwrap();

        assert!(slip.current_boat.is_none());
        assert!(slip.arrival_date.is_none());
        assert_eq!(slip.departure_history.len(), 1);
        assert_eq!(slip.departure_history[0].departed_boat, boat_key());

        mock.verify();
    }

    #[tokio::test]
    async fn depart_on_empty_slip_fails_unchanged() {
        let ctx = BoatClient::new(MockClient::<Boat>::new().client());

        let mut slip = slip();
        let err = slip.handle_action(SlipAction::Depart, &ctx).await.unwrap_err();
        assert_eq!(err, SlipError::Empty(slip.id));
        assert!(slip.departure_history.is_empty());
    }

    #[tokio::test]
    async fn number_conflicts_are_detected() {
        let a = slip();
        let mut b = Slip::new(ResourceKey::new(ResourceKind::Slip, 2), 7);
        assert_eq!(a.conflicts_with(&b), Err(SlipError::DuplicateNumber(7)));
        b.number = 8;
        assert!(a.conflicts_with(&b).is_ok());
    }
}
