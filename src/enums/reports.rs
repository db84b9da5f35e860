use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    pub total_revenue: f64,
}

/// One row of `GET /menu/top-items`. The nested `_sum` object mirrors the
/// platform's published aggregate shape.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopMenuItem {
    pub menu_item_id: i32,
    #[serde(rename = "_sum")]
    pub sum: QuantitySum,
}

#[derive(Serialize, ToSchema)]
pub struct QuantitySum {
    pub quantity: i64,
}

/// One row of `GET /customers/top`. Customer fields are null when the
/// grouped id no longer resolves to a customer record.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub total_orders: i64,
}
