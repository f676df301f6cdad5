use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Topping {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
}

/// A named recipe from the catalog. Orders only ever reference one by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Special {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub base_price: BigDecimal,
    pub image_url: String,
    pub default_topping_ids: Vec<i32>,
}
