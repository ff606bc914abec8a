//! Canned upstream bodies.

use serde_json::{json, Value};

pub fn product(id: i64, description: &str, price: f64) -> Value {
    json!({
        "id": id,
        "description": description,
        "salesPrice": price,
        "category": "Fruit",
        "image": format!("{}.png", description.to_ascii_lowercase()),
    })
}

pub fn sale(sale_id: i64, product_id: i64, price: f64, qty: u32, date: &str) -> Value {
    json!({
        "saleId": sale_id,
        "productId": product_id,
        "salePrice": price,
        "saleQty": qty,
        "saleDate": date,
    })
}

pub fn success(data: Vec<Value>) -> String {
    json!({ "message": "Success", "data": data }).to_string()
}

pub fn failure(message: &str) -> String {
    json!({ "message": message, "data": [] }).to_string()
}

pub fn bare(data: Vec<Value>) -> String {
    Value::Array(data).to_string()
}
