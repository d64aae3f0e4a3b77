use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryOrder,
    QuerySelect, Select, Set,
};
use models::client::{self, Entity as ClientEntity};

use crate::client::domain::{ClientFields, SortDirection};
use crate::errors::ServiceError;
use crate::pagination::{Pagination, MAX_OFFSET};

/// Stand-in for "no limit" when only an offset was requested; SQLite needs a LIMIT before OFFSET.
const UNBOUNDED: u64 = MAX_OFFSET;

fn paginate(finder: Select<ClientEntity>, page: Pagination) -> Select<ClientEntity> {
    match page.normalize() {
        (0, None) => finder,
        (offset, limit) => finder.offset(offset).limit(limit.unwrap_or(UNBOUNDED)),
    }
}

/// Insert a client whose state has already been canonicalized.
pub async fn create_client(db: &DatabaseConnection, fields: ClientFields) -> Result<client::Model, ServiceError> {
    let am = client::ActiveModel {
        id: ActiveValue::NotSet,
        name: Set(fields.name),
        email: Set(fields.email),
        event_type: Set(fields.event_type),
        address: Set(fields.address),
        city: Set(fields.city),
        state: Set(fields.state),
        date: Set(fields.date),
    };
    am.insert(db).await.map_err(ServiceError::from_db)
}

pub async fn get_client(db: &DatabaseConnection, id: i32) -> Result<Option<client::Model>, ServiceError> {
    ClientEntity::find_by_id(id).one(db).await.map_err(ServiceError::from_db)
}

/// All clients in id order.
pub async fn list_clients(db: &DatabaseConnection, page: Pagination) -> Result<Vec<client::Model>, ServiceError> {
    let finder = ClientEntity::find().order_by_asc(client::Column::Id);
    paginate(finder, page).all(db).await.map_err(ServiceError::from_db)
}

/// All clients ordered by event date; equal dates keep id order.
pub async fn list_clients_by_date(
    db: &DatabaseConnection,
    direction: SortDirection,
    page: Pagination,
) -> Result<Vec<client::Model>, ServiceError> {
    let order = match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };
    let finder = ClientEntity::find()
        .order_by(client::Column::Date, order)
        .order_by_asc(client::Column::Id);
    paginate(finder, page).all(db).await.map_err(ServiceError::from_db)
}

/// Replace every field of an existing client.
pub async fn update_client(db: &DatabaseConnection, id: i32, fields: ClientFields) -> Result<client::Model, ServiceError> {
    let current = ClientEntity::find_by_id(id).one(db).await.map_err(ServiceError::from_db)?;
    let Some(existing) = current else { return Err(ServiceError::not_found("client")); };
    let mut am: client::ActiveModel = existing.into();
    am.name = Set(fields.name);
    am.email = Set(fields.email);
    am.event_type = Set(fields.event_type);
    am.address = Set(fields.address);
    am.city = Set(fields.city);
    am.state = Set(fields.state);
    am.date = Set(fields.date);
    am.update(db).await.map_err(ServiceError::from_db)
}

/// Delete a client; returns true if a row was removed.
pub async fn delete_client(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = ClientEntity::delete_by_id(id).exec(db).await.map_err(ServiceError::from_db)?;
    Ok(res.rows_affected > 0)
}

pub async fn count_clients(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    ClientEntity::find().count(db).await.map_err(ServiceError::from_db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveDate;

    fn fields(email: &str, state: &str, date: (i32, u32, u32)) -> ClientFields {
        ClientFields {
            name: "Morgan Lee".into(),
            email: email.into(),
            event_type: "birthday".into(),
            address: "5 Pine Rd".into(),
            city: "Wilmington".into(),
            state: state.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[tokio::test]
    async fn client_crud_store() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_client(&db, fields("m@example.com", "DE", (2025, 4, 1))).await?;
        let found = get_client(&db, a.id).await?.unwrap();
        assert_eq!(found.email, "m@example.com");

        let updated = update_client(&db, a.id, fields("m2@example.com", "PA", (2025, 4, 2))).await?;
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.email, "m2@example.com");
        assert_eq!(updated.state, "PA");

        assert!(delete_client(&db, a.id).await?);
        assert!(!delete_client(&db, a.id).await?);
        assert!(get_client(&db, a.id).await?.is_none());
        assert!(matches!(
            update_client(&db, a.id, fields("x@example.com", "PA", (2025, 1, 1))).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_client(&db, fields("dup@example.com", "NY", (2025, 1, 1))).await?;
        let other = create_client(&db, fields("other@example.com", "NY", (2025, 1, 1))).await?;

        let err = create_client(&db, fields("dup@example.com", "NJ", (2025, 2, 2))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let err = update_client(&db, other.id, fields("dup@example.com", "NJ", (2025, 2, 2))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(get_client(&db, other.id).await?.unwrap().email, "other@example.com");
        assert_eq!(count_clients(&db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn sorted_listing_and_pagination() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let late = create_client(&db, fields("late@example.com", "MD", (2025, 12, 1))).await?;
        let early = create_client(&db, fields("early@example.com", "MD", (2025, 3, 1))).await?;
        let mid = create_client(&db, fields("mid@example.com", "MD", (2025, 7, 1))).await?;

        let asc: Vec<i32> = list_clients_by_date(&db, SortDirection::Asc, Pagination::default())
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(asc, vec![early.id, mid.id, late.id]);

        let desc: Vec<i32> = list_clients_by_date(&db, SortDirection::Desc, Pagination::default())
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(desc, vec![late.id, mid.id, early.id]);

        let page = list_clients(&db, Pagination::new(1, 1)).await?;
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, early.id);

        let tail = list_clients(&db, Pagination { offset: Some(2), limit: None }).await?;
        assert_eq!(tail.iter().map(|c| c.id).collect::<Vec<_>>(), vec![mid.id]);
        Ok(())
    }

    #[tokio::test]
    async fn offset_beyond_i64_returns_empty_page() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_client(&db, fields("only@example.com", "PA", (2025, 5, 5))).await?;

        let past_end = Pagination { offset: Some(u64::MAX), limit: None };
        assert!(list_clients(&db, past_end).await?.is_empty());
        assert!(list_clients_by_date(&db, SortDirection::Desc, Pagination::new(u64::MAX, 10)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn equal_dates_fall_back_to_id_order() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let first = create_client(&db, fields("first@example.com", "NJ", (2025, 6, 1))).await?;
        let other = create_client(&db, fields("other@example.com", "NJ", (2025, 2, 1))).await?;
        let second = create_client(&db, fields("second@example.com", "NJ", (2025, 6, 1))).await?;

        let ids = |rows: Vec<client::Model>| rows.into_iter().map(|c| c.id).collect::<Vec<_>>();

        let asc = ids(list_clients_by_date(&db, SortDirection::Asc, Pagination::default()).await?);
        assert_eq!(asc, vec![other.id, first.id, second.id]);

        let desc = ids(list_clients_by_date(&db, SortDirection::Desc, Pagination::default()).await?);
        assert_eq!(desc, vec![first.id, second.id, other.id]);
        Ok(())
    }

    #[tokio::test]
    async fn long_email_is_stored_in_full() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let email = format!("{}@example.com", "a".repeat(300));
        let c = create_client(&db, fields(&email, "DE", (2025, 8, 8))).await?;
        assert_eq!(get_client(&db, c.id).await?.unwrap().email, email);
        Ok(())
    }
}
