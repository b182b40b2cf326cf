//! 음료 API 응답 DTO

use serde::{Deserialize, Serialize};

/// `{"success": true, "drinks": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: Vec<T>,
}

impl<T> DrinksResponse<T> {
    pub fn ok(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

/// `{"success": true, "delete": id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    pub delete: i64,
}

impl DeleteDrinkResponse {
    pub fn ok(id: i64) -> Self {
        Self {
            success: true,
            delete: id,
        }
    }
}
