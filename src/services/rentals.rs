//! Rental records service

use bson::{doc, oid::ObjectId};

use crate::{
    error::AppResult,
    models::{ListQuery, Rental, RentalDocument, RentalFields},
    repository::{documents::not_found, Repository},
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, fields: RentalFields) -> AppResult<Rental> {
        let rental = self.repository.rentals.create(fields).await?;
        tracing::info!(
            "Created rental id={} book={} user={}",
            rental.id,
            rental.book_id,
            rental.user_id
        );
        Ok(rental.into())
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<Rental> {
        self.repository.rentals.get(id).await.map(Rental::from)
    }

    pub async fn update(&self, id: ObjectId, fields: &RentalFields) -> AppResult<Rental> {
        self.repository.rentals.update(id, fields).await.map(Rental::from)
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        if !self.repository.rentals.delete(id).await? {
            return Err(not_found::<RentalDocument>(id));
        }
        tracing::info!("Deleted rental id={}", id);
        Ok(())
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Rental>> {
        let rentals = self
            .repository
            .rentals
            .list(doc! {}, query.skip(), query.limit())
            .await?;
        Ok(rentals.into_iter().map(Rental::from).collect())
    }
}
