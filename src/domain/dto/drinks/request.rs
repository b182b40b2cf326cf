//! 음료 생성/수정 요청 DTO
//!
//! 프론트엔드는 레시피를 재료 배열로 보내지만, 재료 하나짜리 객체도 허용합니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::drinks::Ingredient;

/// 재료 배열 또는 단일 재료 객체
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(ingredients) => ingredients,
            RecipeInput::One(ingredient) => vec![ingredient],
        }
    }
}

/// `POST /drinks` 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDrinkRequest {
    pub title: String,
    pub recipe: RecipeInput,
}

/// `PATCH /drinks/{id}` 요청 본문
///
/// 존재하고 비어 있지 않은 필드만 반영됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDrinkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub recipe: Option<RecipeInput>,
}
