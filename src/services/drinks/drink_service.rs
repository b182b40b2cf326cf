//! 음료 카탈로그 비즈니스 로직
//!
//! 요청 DTO를 검증하고 리포지토리를 통해 음료를 조회/생성/수정/삭제합니다.
//!
//! ## 검증 규칙
//!
//! - 제목은 앞뒤 공백을 제거한 뒤 비어 있지 않아야 합니다.
//! - 레시피는 최소 한 개의 재료가 있어야 하며, 모든 재료가 유효해야 합니다.
//! - 제목은 음료 사이에서 유일해야 합니다.

use std::sync::Arc;

use log::info;
use validator::Validate;

use crate::domain::dto::drinks::{CreateDrinkRequest, RecipeInput, UpdateDrinkRequest};
use crate::domain::entities::drinks::{Drink, Ingredient, LongDrink, NewDrink, ShortDrink};
use crate::errors::{AppError, AppResult};
use crate::repositories::drinks::DrinkRepository;

/// 음료 서비스
#[derive(Clone)]
pub struct DrinkService {
    repository: Arc<dyn DrinkRepository>,
}

impl DrinkService {
    pub fn new(repository: Arc<dyn DrinkRepository>) -> Self {
        Self { repository }
    }

    /// 공개 메뉴 (재료 이름 제외)
    pub async fn list_short(&self) -> AppResult<Vec<ShortDrink>> {
        let drinks = self.repository.list().await?;
        Ok(drinks.iter().map(Drink::short).collect())
    }

    /// 바리스타/매니저용 상세 메뉴
    pub async fn list_long(&self) -> AppResult<Vec<LongDrink>> {
        let drinks = self.repository.list().await?;
        Ok(drinks.iter().map(Drink::long).collect())
    }

    /// 새 음료를 생성하고 상세 표현을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 제목/레시피 검증 실패 또는 제목 중복
    pub async fn create(&self, request: CreateDrinkRequest) -> AppResult<LongDrink> {
        let new_drink = NewDrink {
            title: normalize_title(&request.title)?,
            recipe: validate_recipe(request.recipe)?,
        };

        let created = self.repository.insert(new_drink).await?;
        info!("☕ 음료 생성: id={} title={}", created.id, created.title);

        Ok(created.long())
    }

    /// 기존 음료를 수정하고 상세 표현을 반환합니다.
    ///
    /// 요청에 존재하고 비어 있지 않은 필드만 반영됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 음료가 없는 경우
    /// * `AppError::BadRequest` - 레시피 검증 실패 또는 다른 음료와 제목 중복
    pub async fn update(&self, id: i64, request: UpdateDrinkRequest) -> AppResult<LongDrink> {
        let mut drink = self.find_existing(id).await?;

        if let Some(title) = request.title.as_deref().filter(|t| !t.trim().is_empty()) {
            drink.title = normalize_title(title)?;
        }

        if let Some(recipe) = request.recipe.filter(|r| !is_empty_recipe(r)) {
            drink.recipe = validate_recipe(recipe)?;
        }

        let updated = self.repository.update(drink).await?;
        info!("☕ 음료 수정: id={} title={}", updated.id, updated.title);

        Ok(updated.long())
    }

    /// 음료를 삭제하고 삭제된 ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 음료가 없는 경우
    pub async fn delete(&self, id: i64) -> AppResult<i64> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("drink {}", id)));
        }

        info!("🗑️ 음료 삭제: id={}", id);
        Ok(id)
    }

    async fn find_existing(&self, id: i64) -> AppResult<Drink> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("drink {}", id)))
    }
}

fn normalize_title(title: &str) -> AppResult<String> {
    let title = title.trim();

    if title.is_empty() {
        return Err(AppError::BadRequest("drink title is required".to_string()));
    }

    Ok(title.to_string())
}

fn is_empty_recipe(recipe: &RecipeInput) -> bool {
    matches!(recipe, RecipeInput::Many(ingredients) if ingredients.is_empty())
}

fn validate_recipe(recipe: RecipeInput) -> AppResult<Vec<Ingredient>> {
    let ingredients = recipe.into_ingredients();

    if ingredients.is_empty() {
        return Err(AppError::BadRequest("recipe must not be empty".to_string()));
    }

    for ingredient in &ingredients {
        ingredient
            .validate()
            .map_err(|e| AppError::BadRequest(format!("invalid ingredient: {}", e)))?;
    }

    Ok(ingredients)
}
