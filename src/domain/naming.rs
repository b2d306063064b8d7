//! Case transforms shared by generators and template filters.

use convert_case::{Case, Casing};

/// `my api` / `my-api` / `myApi` → `MyApi`.
pub fn pascal_case(value: &str) -> String {
    value.trim().to_case(Case::Pascal)
}

/// `My Api` → `myApi`.
pub fn camel_case(value: &str) -> String {
    value.trim().to_case(Case::Camel)
}

/// `MyApi` → `my-api`.
pub fn kebab_case(value: &str) -> String {
    value.trim().to_case(Case::Kebab)
}

/// `MyApi` → `my_api`.
pub fn snake_case(value: &str) -> String {
    value.trim().to_case(Case::Snake)
}
