//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use super::SeaOrmRepositories;
use crate::domain::{DomainResult, Product, ProductRepository};
use crate::infrastructure::database::entities::product;

pub(super) fn entity_to_domain(model: product::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        distillery: model.distillery,
        description: model.description,
        price: model.price,
        volume_ml: model.volume_ml,
        alcohol: model.alcohol,
        available: model.available,
    }
}

#[async_trait]
impl<C> ProductRepository for SeaOrmRepositories<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}
