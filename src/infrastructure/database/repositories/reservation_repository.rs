//! SeaORM implementation of ReservationRepository

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use super::db_err;
use super::room_repository::room_model_to_domain;
use super::user_repository::user_model_to_domain;
use crate::domain::reservation::{
    NewReservation, Reservation, ReservationChanges, ReservationDetails, ReservationFilter,
    ReservationRepository, TimeRange,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{reservation, reservation_attendee, room, user};
use crate::shared::{PaginatedResult, PaginationParams};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> Reservation {
    Reservation {
        id: m.id,
        room_id: m.room_id,
        reserver_id: m.reserver_id,
        start_time: m.start_time,
        end_time: m.end_time,
        created_at: m.created_at,
    }
}

/// Resolve rooms, reservers and attendees for a batch of reservations
/// with one query per table.
async fn load_details<C: ConnectionTrait>(
    db: &C,
    models: Vec<reservation::Model>,
) -> DomainResult<Vec<ReservationDetails>> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let reservation_ids: Vec<i32> = models.iter().map(|m| m.id).collect();
    let room_ids: HashSet<i32> = models.iter().map(|m| m.room_id).collect();

    let links = reservation_attendee::Entity::find()
        .filter(reservation_attendee::Column::ReservationId.is_in(reservation_ids))
        .order_by_asc(reservation_attendee::Column::UserId)
        .all(db)
        .await?;

    let mut user_ids: HashSet<i32> = models.iter().map(|m| m.reserver_id).collect();
    user_ids.extend(links.iter().map(|l| l.user_id));

    let rooms: HashMap<i32, room::Model> = room::Entity::find()
        .filter(room::Column::Id.is_in(room_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    let users: HashMap<i32, user::Model> = user::Entity::find()
        .filter(user::Column::Id.is_in(user_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let mut attendees_by_reservation: HashMap<i32, Vec<i32>> = HashMap::new();
    for link in links {
        attendees_by_reservation
            .entry(link.reservation_id)
            .or_default()
            .push(link.user_id);
    }

    models
        .into_iter()
        .map(|m| {
            let room = rooms.get(&m.room_id).cloned().ok_or_else(|| {
                DomainError::Storage(format!("Reservation {} references missing room {}", m.id, m.room_id))
            })?;
            let reserver = users.get(&m.reserver_id).cloned().ok_or_else(|| {
                DomainError::Storage(format!(
                    "Reservation {} references missing user {}",
                    m.id, m.reserver_id
                ))
            })?;
            let attendees = attendees_by_reservation
                .remove(&m.id)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|uid| users.get(&uid).cloned().map(user_model_to_domain))
                .collect();

            Ok(ReservationDetails {
                reservation: model_to_domain(m),
                room: room_model_to_domain(room),
                reserver: user_model_to_domain(reserver),
                attendees,
            })
        })
        .collect()
}

/// Link `user_ids` to the reservation, skipping ids with no user row.
async fn insert_attendees<C: ConnectionTrait>(
    db: &C,
    reservation_id: i32,
    user_ids: &[i32],
) -> DomainResult<()> {
    if user_ids.is_empty() {
        return Ok(());
    }

    let known: Vec<i32> = user::Entity::find()
        .select_only()
        .column(user::Column::Id)
        .filter(user::Column::Id.is_in(user_ids.iter().copied()))
        .into_tuple()
        .all(db)
        .await?;

    if known.len() < user_ids.len() {
        debug!(
            "Reservation {}: ignoring {} unknown attendee id(s)",
            reservation_id,
            user_ids.len() - known.len()
        );
    }
    if known.is_empty() {
        return Ok(());
    }

    let rows = known.into_iter().map(|user_id| reservation_attendee::ActiveModel {
        reservation_id: Set(reservation_id),
        user_id: Set(user_id),
    });
    reservation_attendee::Entity::insert_many(rows)
        .exec(db)
        .await?;
    Ok(())
}

async fn details_for<C: ConnectionTrait>(
    db: &C,
    model: reservation::Model,
) -> DomainResult<ReservationDetails> {
    let id = model.id;
    load_details(db, vec![model])
        .await?
        .pop()
        .ok_or_else(|| DomainError::not_found("Reservation", id))
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn create(&self, new: NewReservation) -> DomainResult<ReservationDetails> {
        debug!(
            "Saving reservation for room {} by user {}",
            new.room_id, new.reserver_id
        );

        let txn = self.db.begin().await?;

        let model = reservation::ActiveModel {
            room_id: Set(new.room_id),
            reserver_id: Set(new.reserver_id),
            start_time: Set(new.range.start()),
            end_time: Set(new.range.end()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| db_err(e, "Reservation references a missing room or user"))?;

        insert_attendees(&txn, model.id, &new.attendee_ids).await?;
        txn.commit().await?;

        details_for(&self.db, model).await
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_details(&self, id: i32) -> DomainResult<Option<ReservationDetails>> {
        match reservation::Entity::find_by_id(id).one(&self.db).await? {
            Some(model) => Ok(Some(details_for(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        filter: ReservationFilter,
        page: PaginationParams,
    ) -> DomainResult<PaginatedResult<ReservationDetails>> {
        let mut query = reservation::Entity::find();

        if let Some(room_id) = filter.room_id {
            query = query.filter(reservation::Column::RoomId.eq(room_id));
        }
        if let Some(reserver_id) = filter.reserver_id {
            query = query.filter(reservation::Column::ReserverId.eq(reserver_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(reservation::Column::EndTime.gt(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(reservation::Column::StartTime.lt(to));
        }

        let query = query
            .order_by_asc(reservation::Column::StartTime)
            .order_by_asc(reservation::Column::Id);

        let total = query.clone().count(&self.db).await?;
        let models = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await?;

        let items = load_details(&self.db, models).await?;
        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }

    async fn find_overlapping(
        &self,
        room_id: i32,
        range: &TimeRange,
        exclude_id: Option<i32>,
    ) -> DomainResult<Option<Reservation>> {
        let mut query = reservation::Entity::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::StartTime.lt(range.end()))
            .filter(reservation::Column::EndTime.gt(range.start()));

        if let Some(id) = exclude_id {
            query = query.filter(reservation::Column::Id.ne(id));
        }

        let model = query
            .order_by_asc(reservation::Column::StartTime)
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_domain))
    }

    async fn update(
        &self,
        id: i32,
        changes: ReservationChanges,
    ) -> DomainResult<ReservationDetails> {
        debug!("Updating reservation: {}", id);

        let txn = self.db.begin().await?;

        let Some(existing) = reservation::Entity::find_by_id(id).one(&txn).await? else {
            return Err(DomainError::not_found("Reservation", id));
        };

        let mut active: reservation::ActiveModel = existing.into();
        active.room_id = Set(changes.room_id);
        active.start_time = Set(changes.range.start());
        active.end_time = Set(changes.range.end());
        let model = active
            .update(&txn)
            .await
            .map_err(|e| db_err(e, "Reservation references a missing room"))?;

        if let Some(attendee_ids) = changes.attendee_ids {
            reservation_attendee::Entity::delete_many()
                .filter(reservation_attendee::Column::ReservationId.eq(id))
                .exec(&txn)
                .await?;
            insert_attendees(&txn, id, &attendee_ids).await?;
        }

        txn.commit().await?;

        details_for(&self.db, model).await
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await?;

        reservation_attendee::Entity::delete_many()
            .filter(reservation_attendee::Column::ReservationId.eq(id))
            .exec(&txn)
            .await?;

        let result = reservation::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Reservation", id));
        }

        txn.commit().await?;
        Ok(())
    }
}
