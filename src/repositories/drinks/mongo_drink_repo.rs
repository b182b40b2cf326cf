//! MongoDB 음료 리포지토리
//!
//! - **컬렉션**: `drinks` (`_id`는 정수 ID), `counters` (ID 시퀀스)
//! - **인덱스**: title(unique)

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::domain::entities::drinks::{Drink, Ingredient, NewDrink};
use crate::errors::{AppError, AppResult};
use crate::repositories::drinks::DrinkRepository;

const DRINKS_COLLECTION: &str = "drinks";
const COUNTERS_COLLECTION: &str = "counters";
const DRINK_SEQUENCE: &str = "drinks";
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DrinkDocument {
    #[serde(rename = "_id")]
    id: i64,
    title: String,
    recipe: Vec<Ingredient>,
}

impl From<Drink> for DrinkDocument {
    fn from(drink: Drink) -> Self {
        Self {
            id: drink.id,
            title: drink.title,
            recipe: drink.recipe,
        }
    }
}

impl From<DrinkDocument> for Drink {
    fn from(document: DrinkDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            recipe: document.recipe,
        }
    }
}

fn database_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

fn write_error(e: mongodb::error::Error, title: &str) -> AppError {
    if is_duplicate_key(&e) {
        AppError::BadRequest(format!("drink title already exists: {}", title))
    } else {
        database_error(e)
    }
}

/// MongoDB 기반 음료 리포지토리
pub struct MongoDrinkRepository {
    drinks: Collection<DrinkDocument>,
    counters: Collection<Document>,
}

impl MongoDrinkRepository {
    /// 컬렉션 핸들을 얻고 인덱스를 생성합니다.
    pub async fn new(database: &Database) -> AppResult<Self> {
        let db = database.get_database();
        let repository = Self {
            drinks: db.collection::<DrinkDocument>(DRINKS_COLLECTION),
            counters: db.collection::<Document>(COUNTERS_COLLECTION),
        };

        repository.create_indexes().await?;
        Ok(repository)
    }

    async fn create_indexes(&self) -> AppResult<()> {
        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("title_unique".to_string())
                    .build(),
            )
            .build();

        self.drinks
            .create_index(title_index)
            .await
            .map_err(database_error)?;

        info!("drinks 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    /// `counters` 컬렉션에서 다음 음료 ID를 원자적으로 발급합니다.
    async fn next_id(&self) -> AppResult<i64> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": DRINK_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(database_error)?
            .ok_or_else(|| AppError::DatabaseError("drink id sequence missing".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("invalid drink id sequence: {}", e)))
    }
}

#[async_trait]
impl DrinkRepository for MongoDrinkRepository {
    async fn list(&self) -> AppResult<Vec<Drink>> {
        let documents: Vec<DrinkDocument> = self
            .drinks
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(database_error)?
            .try_collect()
            .await
            .map_err(database_error)?;

        Ok(documents.into_iter().map(Drink::from).collect())
    }

    async fn find(&self, id: i64) -> AppResult<Option<Drink>> {
        let document = self
            .drinks
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)?;

        Ok(document.map(Drink::from))
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Drink>> {
        let document = self
            .drinks
            .find_one(doc! { "title": title })
            .await
            .map_err(database_error)?;

        Ok(document.map(Drink::from))
    }

    async fn insert(&self, drink: NewDrink) -> AppResult<Drink> {
        if self.find_by_title(&drink.title).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "drink title already exists: {}",
                drink.title
            )));
        }

        let created = Drink::from_new(self.next_id().await?, drink);
        let document = DrinkDocument::from(created.clone());

        self.drinks
            .insert_one(&document)
            .await
            .map_err(|e| write_error(e, &created.title))?;

        debug!("음료 생성: id={} title={}", created.id, created.title);
        Ok(created)
    }

    async fn update(&self, drink: Drink) -> AppResult<Drink> {
        if let Some(existing) = self.find_by_title(&drink.title).await? {
            if existing.id != drink.id {
                return Err(AppError::BadRequest(format!(
                    "drink title already exists: {}",
                    drink.title
                )));
            }
        }

        let document = DrinkDocument::from(drink.clone());
        let result = self
            .drinks
            .replace_one(doc! { "_id": drink.id }, &document)
            .await
            .map_err(|e| write_error(e, &drink.title))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("drink {}", drink.id)));
        }

        Ok(drink)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = self
            .drinks
            .delete_one(doc! { "_id": id })
            .await
            .map_err(database_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn reset(&self) -> AppResult<Drink> {
        self.drinks
            .delete_many(doc! {})
            .await
            .map_err(database_error)?;
        self.counters
            .delete_one(doc! { "_id": DRINK_SEQUENCE })
            .await
            .map_err(database_error)?;

        info!("⚠️ drinks 컬렉션 초기화");
        self.insert(NewDrink::water()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_document_uses_integer_object_id() {
        let drink = Drink::from_new(7, NewDrink::water());
        let document = bson::to_document(&DrinkDocument::from(drink.clone())).unwrap();

        assert_eq!(document.get_i64("_id").unwrap(), 7);
        assert_eq!(document.get_str("title").unwrap(), "water");
        assert!(document.get("id").is_none());

        let restored: DrinkDocument = bson::from_document(document).unwrap();
        assert_eq!(Drink::from(restored), drink);
    }
}
