use super::cake::{CakeType, LayerCount};
use super::money::Price;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Order log timestamp format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A form submission exactly as received.
///
/// Every field is free text. Fields absent from the request or the CSV
/// row are empty strings; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    pub name: String,
    pub order_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    pub cake_type: String,
    pub layers: String,
    pub flavor: String,
    pub frosting_color: String,
    pub trim_color: String,
    pub text_color: String,
    pub cake_message: String,
    pub details: String,
}

/// A validated, priced order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub name: String,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
    pub cake_type: CakeType,
    pub layers: LayerCount,
    pub flavor: String,
    pub frosting_color: String,
    pub trim_color: String,
    pub text_color: String,
    pub cake_message: String,
    pub details: String,
    pub base_price: Price,
    pub total_price: Price,
}

/// An order as written to the log: the order plus when it was accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub timestamp: NaiveDateTime,
    pub order: Order,
}

impl OrderRecord {
    pub fn new(order: Order, timestamp: NaiveDateTime) -> Self {
        Self { timestamp, order }
    }

    /// Flattens the record into the log's column layout.
    pub fn to_row(&self) -> OrderRow<'_> {
        let order = &self.order;
        OrderRow {
            timestamp: self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            name: &order.name,
            order_date: order.order_date,
            delivery_date: order.delivery_date,
            address: &order.address,
            city: &order.city,
            state: &order.state,
            zip: &order.zip,
            phone: &order.phone,
            email: &order.email,
            cake_type: order.cake_type,
            layers: order.layers,
            flavor: &order.flavor,
            frosting_color: &order.frosting_color,
            trim_color: &order.trim_color,
            text_color: &order.text_color,
            cake_message: &order.cake_message,
            details: &order.details,
            base_price: order.base_price,
            total_price: order.total_price,
        }
    }
}

/// One row of the order log. Field order is the column order.
#[derive(Debug, Serialize)]
pub struct OrderRow<'a> {
    pub timestamp: String,
    pub name: &'a str,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub cake_type: CakeType,
    pub layers: LayerCount,
    pub flavor: &'a str,
    pub frosting_color: &'a str,
    pub trim_color: &'a str,
    pub text_color: &'a str,
    pub cake_message: &'a str,
    pub details: &'a str,
    pub base_price: Price,
    pub total_price: Price,
}

/// Column names of the order log, in order.
pub const ORDER_LOG_COLUMNS: [&str; 20] = [
    "timestamp",
    "name",
    "order_date",
    "delivery_date",
    "address",
    "city",
    "state",
    "zip",
    "phone",
    "email",
    "cake_type",
    "layers",
    "flavor",
    "frosting_color",
    "trim_color",
    "text_color",
    "cake_message",
    "details",
    "base_price",
    "total_price",
];

/// Read-only view of an accepted order, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub customer: String,
    pub email: String,
    pub phone: String,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub address_line: String,
    pub cake_type: CakeType,
    pub cake_label: String,
    /// Only present for round cakes.
    pub layers: Option<LayerCount>,
    pub flavor: String,
    pub frosting_color: String,
    pub trim_color: String,
    pub text_color: String,
    pub cake_message: String,
    pub details: String,
    pub base_price: Price,
    pub total_price: Price,
}

impl Receipt {
    /// Cake description line, e.g. `12" Round · 2 layer(s)`.
    pub fn cake_summary(&self) -> String {
        match self.layers {
            Some(layers) => format!("{} · {} layer(s)", self.cake_label, layers),
            None => self.cake_label.clone(),
        }
    }
}

impl From<&Order> for Receipt {
    fn from(order: &Order) -> Self {
        Self {
            customer: order.name.clone(),
            email: order.email.clone(),
            phone: order.phone.clone(),
            order_date: order.order_date,
            delivery_date: order.delivery_date,
            address_line: format!(
                "{}, {}, {} {}",
                order.address, order.city, order.state, order.zip
            ),
            cake_type: order.cake_type,
            cake_label: order.cake_type.label().to_string(),
            layers: order.cake_type.is_round().then_some(order.layers),
            flavor: order.flavor.clone(),
            frosting_color: order.frosting_color.clone(),
            trim_color: order.trim_color.clone(),
            text_color: order.text_color.clone(),
            cake_message: order.cake_message.clone(),
            details: order.details.clone(),
            base_price: order.base_price,
            total_price: order.total_price,
        }
    }
}
