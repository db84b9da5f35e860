use crate::models::order::{Order, OrderItem, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub menu_item_id: i32,
    pub quantity: i32,
}

#[derive(Deserialize, ToSchema)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// An order with its line items embedded, as served by `GET /orders/{id}`.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems {
    pub id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub order_items: Vec<OrderItem>,
}

impl OrderWithItems {
    pub fn new(order: Order, order_items: Vec<OrderItem>) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            restaurant_id: order.restaurant_id,
            total_price: order.total_price,
            status: order.status,
            created_at: order.created_at,
            order_items,
        }
    }
}
