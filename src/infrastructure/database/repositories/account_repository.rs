//! SeaORM implementation of AccountRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use super::SeaOrmRepositories;
use crate::domain::{Account, AccountRepository, DomainResult};
use crate::infrastructure::database::entities::account;

fn entity_to_domain(model: account::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        name: model.name,
        active: model.active,
        created_at: model.created_at,
    }
}

#[async_trait]
impl<C> AccountRepository for SeaOrmRepositories<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Account>> {
        let model = account::Entity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.conn)
            .await?;
        Ok(model.map(entity_to_domain))
    }
}
