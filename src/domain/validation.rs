use super::cake::{CakeType, LayerCount};
use super::delivery::DateCalculator;
use super::order::{Order, RawSubmission};
use super::pricing::{PricingEngine, Quote};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const ORDER_DATE_REQUIRED: &str = "Order date is required.";
pub const CAKE_TYPE_REQUIRED: &str = "Please choose a cake type.";
pub const CAKE_TYPE_INVALID: &str = "Invalid cake type.";
pub const LAYERS_INVALID: &str = "Invalid number of layers for round cake.";
pub const EMAIL_INVALID: &str = "Invalid email format.";
pub const PRICE_UNRESOLVED: &str = "Could not resolve cake price. Check selection.";
pub const ORDER_DATE_INVALID: &str = "Invalid order date.";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9_%+-]+(\.[a-zA-Z0-9_%+-]+)*@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,}$",
    )
    .expect("email pattern is valid")
});

// Numeric prefix of the layers field: sign, digits, optional fraction and exponent.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?")
        .expect("number pattern is valid")
});

/// Every reason a submission was rejected, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|m| m == message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Layer field as an integer.
///
/// The numeric prefix is truncated toward zero (`"2.0"` is 2) and saturates
/// on overflow, so huge values stay out of range. Text with no numeric
/// prefix, including an empty field, counts as one layer.
pub fn parse_layers(raw: &str) -> i64 {
    LEADING_NUMBER
        .find(raw.trim())
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .map(|number| number.trunc() as i64)
        .unwrap_or(1)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Turns a `RawSubmission` into a priced `Order`, collecting every rule
/// violation instead of stopping at the first.
#[derive(Debug, Clone, Default)]
pub struct OrderValidator {
    pricing: PricingEngine,
    dates: DateCalculator,
}

impl OrderValidator {
    pub fn new(pricing: PricingEngine, dates: DateCalculator) -> Self {
        Self { pricing, dates }
    }

    pub fn validate(&self, raw: &RawSubmission) -> Result<Order, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = raw.name.trim();
        if name.is_empty() {
            errors.push(NAME_REQUIRED);
        }

        let order_date_text = raw.order_date.trim();
        if order_date_text.is_empty() {
            errors.push(ORDER_DATE_REQUIRED);
        }

        let cake_type_text = raw.cake_type.trim();
        if cake_type_text.is_empty() {
            errors.push(CAKE_TYPE_REQUIRED);
        }
        let cake_type = cake_type_text.parse::<CakeType>().ok();
        if cake_type.is_none() {
            errors.push(CAKE_TYPE_INVALID);
        }

        let mut layers = parse_layers(&raw.layers);
        match cake_type {
            Some(cake) if cake.is_round() && LayerCount::new(layers).is_none() => {
                errors.push(LAYERS_INVALID);
            }
            Some(cake) if cake.is_square() => layers = 1,
            _ => {}
        }

        let email = raw.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(EMAIL_INVALID);
        }

        let state = raw.state.trim();
        let quote = cake_type.and_then(|cake| self.pricing.price(cake, layers, state).ok());
        if quote.is_none() {
            errors.push(PRICE_UNRESOLVED);
        }

        let schedule = self.dates.schedule(order_date_text).ok();
        if !order_date_text.is_empty() && schedule.is_none() {
            errors.push(ORDER_DATE_INVALID);
        }

        match (cake_type, LayerCount::new(layers), quote, schedule) {
            (
                Some(cake_type),
                Some(layers),
                Some(Quote { base, total }),
                Some((order_date, delivery_date)),
            ) if errors.is_empty() => Ok(Order {
                name: name.to_string(),
                order_date,
                delivery_date,
                address: raw.address.trim().to_string(),
                city: raw.city.trim().to_string(),
                state: state.to_string(),
                zip: raw.zip.trim().to_string(),
                phone: raw.phone.trim().to_string(),
                email: email.to_string(),
                cake_type,
                layers,
                flavor: raw.flavor.trim().to_string(),
                frosting_color: raw.frosting_color.trim().to_string(),
                trim_color: raw.trim_color.trim().to_string(),
                text_color: raw.text_color.trim().to_string(),
                cake_message: raw.cake_message.trim().to_string(),
                details: raw.details.trim().to_string(),
                base_price: base,
                total_price: total,
            }),
            _ => Err(errors),
        }
    }
}
