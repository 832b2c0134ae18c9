//! SeaORM implementation of CartRepository
//!
//! A cart is stored as one `carts` row plus its `cart_items` rows. Saving
//! rewrites the item rows wholesale.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::debug;

use super::product_repository::entity_to_domain as product_to_domain;
use super::SeaOrmRepositories;
use crate::domain::{Cart, CartItem, CartRepository, DomainResult};
use crate::infrastructure::database::entities::{cart, cart_item, product};

#[async_trait]
impl<C> CartRepository for SeaOrmRepositories<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_account_id(&self, account_id: i64) -> DomainResult<Option<Cart>> {
        let Some(row) = cart::Entity::find_by_id(account_id).one(&self.conn).await? else {
            return Ok(None);
        };

        let lines = cart_item::Entity::find()
            .filter(cart_item::Column::AccountId.eq(account_id))
            .order_by_asc(cart_item::Column::ProductId)
            .find_also_related(product::Entity)
            .all(&self.conn)
            .await?;

        let items = lines.into_iter().filter_map(|(line, product)| {
            product.map(|p| CartItem::new(product_to_domain(p), line.quantity))
        });

        Ok(Some(Cart::with_items(
            row.account_id,
            row.delivery_included,
            items,
        )))
    }

    async fn save(&self, cart: Cart) -> DomainResult<Cart> {
        let row = cart::ActiveModel {
            account_id: Set(cart.account_id),
            delivery_included: Set(cart.delivery_included),
            updated_at: Set(Utc::now()),
        };
        cart::Entity::insert(row)
            .on_conflict(
                OnConflict::column(cart::Column::AccountId)
                    .update_columns([cart::Column::DeliveryIncluded, cart::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;

        cart_item::Entity::delete_many()
            .filter(cart_item::Column::AccountId.eq(cart.account_id))
            .exec(&self.conn)
            .await?;

        if !cart.is_empty() {
            let lines = cart.items().map(|item| cart_item::ActiveModel {
                account_id: Set(cart.account_id),
                product_id: Set(item.product_id()),
                quantity: Set(item.quantity),
                ..Default::default()
            });
            cart_item::Entity::insert_many(lines)
                .exec_without_returning(&self.conn)
                .await?;
        }

        debug!(
            account_id = cart.account_id,
            lines = cart.line_count(),
            "Cart saved"
        );
        Ok(cart)
    }
}
