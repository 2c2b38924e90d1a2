use crate::domain::cake::{CakeType, LayerCount};
use crate::domain::order::{RawSubmission, Receipt};
use crate::error::Result;
use chrono::{Datelike, Local};
use serde::Serialize;
use tera::{Context, Tera};

pub const SHOP_NAME: &str = "Pumpkin Patch Pastries";

pub const FLAVORS: [&str; 3] = ["Vanilla", "Chocolate", "Strawberry"];
pub const COLORS: [&str; 5] = ["White", "Yellow", "Red", "Purple", "Blue-Green"];

const BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{% block title %}Cake Order Form{% endblock title %}</title>
  <link rel="stylesheet" href="style.css" />
</head>
<body>
  <div class="wrap">
    <header>
      <h1>{{ shop_name }} · Online Cake Order Form</h1>
    </header>
{% block content %}{% endblock content %}
    <footer>
      <p>&copy; {{ year }} {{ shop_name }}</p>
    </footer>
  </div>
</body>
</html>
"#;

const FORM: &str = r#"{% extends "base.html" %}
{% block content %}
{% if errors %}
    <section class="card"><div class="content"><div class="errors">
      <strong>Fix the following:</strong>
      <ul>
{% for error in errors %}        <li>{{ error }}</li>
{% endfor %}      </ul>
    </div></div></section>
{% endif %}
    <section class="card">
      <div class="content">
        <h2>Order Form</h2>
        <form method="post" action="/" novalidate>
{% for field in inputs %}
          <label for="{{ field.name }}">{{ field.label }}:</label>
          <input type="{{ field.kind }}" id="{{ field.name }}" name="{{ field.name }}" value="{{ field.value }}"{% if field.required %} required{% endif %}>
{% endfor %}
{% for select in selects %}
          <label for="{{ select.name }}">{{ select.label }}:</label>
          <select id="{{ select.name }}" name="{{ select.name }}">
{% if select.placeholder %}            <option value="">{{ select.placeholder }}</option>
{% endif %}{% for option in select.options %}            <option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
{% endfor %}          </select>
{% endfor %}
          <label for="cake_message">Cake Message:</label>
          <textarea id="cake_message" name="cake_message">{{ values.cake_message }}</textarea>

          <label for="details">Details:</label>
          <textarea id="details" name="details">{{ values.details }}</textarea>

          <input type="submit" value="Submit Order">
        </form>
      </div>
    </section>
    <script>
      // Square cakes come in a single layer.
      const squareCakes = {{ square_cakes | json_encode | safe }};
      function syncLayers() {
        const cakeType = document.getElementById("cake_type");
        const layers = document.getElementById("layers");
        const square = squareCakes.includes(cakeType.value);
        if (square) {
          layers.value = "1";
        }
        layers.disabled = square;
      }
      document.getElementById("cake_type").addEventListener("change", syncLayers);
      syncLayers();
    </script>
{% endblock content %}
"#;

const RECEIPT: &str = r#"{% extends "base.html" %}
{% block title %}Invoice{% endblock title %}
{% block content %}
    <section class="card">
      <div class="content">
        <h2>Invoice</h2>
        <div class="invoice">
          <div>
            <div class="kv">
              <div>Customer</div><div>{{ receipt.customer }}</div>
              <div>Email</div><div>{{ receipt.email }}</div>
              <div>Phone</div><div>{{ receipt.phone }}</div>
              <div>Order Date</div><div>{{ receipt.order_date }}</div>
              <div>Delivery Date</div><div><strong>{{ receipt.delivery_date }}</strong></div>
              <div>Address</div><div>{{ receipt.address_line }}</div>
              <div>Cake</div><div>{{ cake_summary }}</div>
              <div>Flavor</div><div>{{ receipt.flavor }}</div>
              <div>Frosting</div><div>{{ receipt.frosting_color }}</div>
              <div>Trim</div><div>{{ receipt.trim_color }}</div>
              <div>Text Color</div><div>{{ receipt.text_color }}</div>
            </div>
            <div class="divider"></div>
            <div>
              <div class="muted">Cake Message</div>
              <p>{{ receipt.cake_message | escape | linebreaksbr | safe }}</p>
            </div>
            <div class="divider"></div>
            <div>
              <div class="muted">Details</div>
              <p>{{ receipt.details | escape | linebreaksbr | safe }}</p>
            </div>
          </div>
          <div>
            <div class="total">
              Total Due<br>
              ${{ receipt.total_price }}
            </div>
            <div class="thankyou"><span>Thank you!</span></div>
            <div class="actions"><a class="btn-ghost" href="/">Place another order</a></div>
          </div>
        </div>
      </div>
    </section>
{% endblock content %}
"#;

const FAILURE: &str = r#"{% extends "base.html" %}
{% block title %}Order not saved{% endblock title %}
{% block content %}
    <section class="card">
      <div class="content">
        <div class="errors"><strong>{{ message }}</strong></div>
        <div class="actions"><a class="btn-ghost" href="/">Back to the order form</a></div>
      </div>
    </section>
{% endblock content %}
"#;

#[derive(Serialize)]
struct InputField<'a> {
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    value: &'a str,
    required: bool,
}

#[derive(Serialize)]
struct SelectField {
    name: &'static str,
    label: &'static str,
    placeholder: Option<&'static str>,
    options: Vec<SelectOption>,
}

#[derive(Serialize)]
struct SelectOption {
    value: String,
    label: String,
    selected: bool,
}

impl SelectField {
    fn of_values(name: &'static str, label: &'static str, values: &[&str], current: &str) -> Self {
        let current = current.trim();
        Self {
            name,
            label,
            placeholder: None,
            options: values
                .iter()
                .map(|value| SelectOption {
                    value: value.to_string(),
                    label: value.to_string(),
                    selected: *value == current,
                })
                .collect(),
        }
    }
}

/// HTML pages of the order site, rendered with auto-escaping.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE),
            ("form.html", FORM),
            ("receipt.html", RECEIPT),
            ("failure.html", FAILURE),
        ])?;
        Ok(Self { tera })
    }

    /// The order form, filled with `values` and listing `errors` above it.
    pub fn form(&self, values: &RawSubmission, errors: &[String]) -> Result<String> {
        let inputs = [
            ("name", "Name", "text", values.name.as_str(), true),
            ("order_date", "Order Date", "date", values.order_date.as_str(), true),
            ("address", "Address", "text", values.address.as_str(), false),
            ("city", "City", "text", values.city.as_str(), false),
            ("state", "State", "text", values.state.as_str(), false),
            ("zip", "Zip", "text", values.zip.as_str(), false),
            ("phone", "Phone", "text", values.phone.as_str(), false),
            ("email", "Email", "email", values.email.as_str(), false),
        ]
        .map(|(name, label, kind, value, required)| InputField {
            name,
            label,
            kind,
            value,
            required,
        });

        let cake_type = values.cake_type.trim();
        let cake_types = SelectField {
            name: "cake_type",
            label: "Type of Cake",
            placeholder: Some("-- Select --"),
            options: CakeType::ALL
                .into_iter()
                .map(|cake| SelectOption {
                    value: cake.code().to_string(),
                    label: cake.label().to_string(),
                    selected: cake.code() == cake_type,
                })
                .collect(),
        };
        let layer_values: Vec<String> = (1..=LayerCount::MAX).map(|n| n.to_string()).collect();
        let layer_values: Vec<&str> = layer_values.iter().map(String::as_str).collect();
        let selects = [
            cake_types,
            SelectField::of_values("layers", "Number of Layers", &layer_values, &values.layers),
            SelectField::of_values("flavor", "Flavor", &FLAVORS, &values.flavor),
            SelectField::of_values("frosting_color", "Frosting Color", &COLORS, &values.frosting_color),
            SelectField::of_values("trim_color", "Trim Color", &COLORS, &values.trim_color),
            SelectField::of_values("text_color", "Text Color", &COLORS, &values.text_color),
        ];

        let mut context = base_context();
        context.insert("values", values);
        context.insert("errors", errors);
        context.insert("inputs", &inputs);
        context.insert("selects", &selects);
        let square_cakes: Vec<&str> = CakeType::ALL
            .into_iter()
            .filter(|cake| cake.is_square())
            .map(CakeType::code)
            .collect();
        context.insert("square_cakes", &square_cakes);
        Ok(self.tera.render("form.html", &context)?)
    }

    pub fn receipt(&self, receipt: &Receipt) -> Result<String> {
        let mut context = base_context();
        context.insert("receipt", receipt);
        context.insert("cake_summary", &receipt.cake_summary());
        Ok(self.tera.render("receipt.html", &context)?)
    }

    pub fn failure(&self, message: &str) -> Result<String> {
        let mut context = base_context();
        context.insert("message", message);
        Ok(self.tera.render("failure.html", &context)?)
    }
}

fn base_context() -> Context {
    let mut context = Context::new();
    context.insert("shop_name", SHOP_NAME);
    context.insert("year", &Local::now().year());
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::fixtures::sample_order;

    #[test]
    fn test_empty_form() {
        let html = Views::new()
            .unwrap()
            .form(&RawSubmission::default(), &[])
            .unwrap();
        assert!(html.contains("<h2>Order Form</h2>"));
        assert!(html.contains(r#"<option value="24-square">24×24&quot; Square</option>"#));
        assert!(!html.contains("Fix the following"));
    }

    #[test]
    fn test_form_locks_layers_for_square_cakes() {
        let html = Views::new()
            .unwrap()
            .form(&RawSubmission::default(), &[])
            .unwrap();
        assert!(html.contains("function syncLayers()"));
        assert!(html.contains(r#"const squareCakes = ["18-square","24-square"];"#));
        assert!(html.contains(r#"addEventListener("change", syncLayers)"#));
    }

    #[test]
    fn test_form_keeps_values_and_lists_errors() {
        let values = RawSubmission {
            name: "<Jane>".to_string(),
            cake_type: "9-round".to_string(),
            layers: "3".to_string(),
            ..Default::default()
        };
        let errors = vec!["Order date is required.".to_string()];
        let html = Views::new().unwrap().form(&values, &errors).unwrap();

        assert!(html.contains("<li>Order date is required.</li>"));
        assert!(html.contains(r#"value="&lt;Jane&gt;""#));
        assert!(html.contains(r#"<option value="9-round" selected>"#));
        assert!(html.contains(r#"<option value="3" selected>3</option>"#));
    }

    #[test]
    fn test_receipt_escapes_and_breaks_lines() {
        let mut order = sample_order();
        order.cake_message = "Happy\n<b>Birthday</b>".to_string();
        let html = Views::new()
            .unwrap()
            .receipt(&Receipt::from(&order))
            .unwrap();

        assert!(html.contains("$23.80"));
        assert!(html.contains("<strong>2024-03-08</strong>"));
        assert!(html.contains("Happy<br>&lt;b&gt;Birthday&lt;&#x2F;b&gt;"));
        assert!(html.contains("12&quot; Round · 2 layer(s)"));
    }
}
